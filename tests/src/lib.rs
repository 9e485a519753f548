//! Fixtures shared by the integration tests.

use std::env;
use std::fs::{self, File};
use std::io::{self, Read};
use std::path::{Path, PathBuf};

/// Changelog with three numbered releases, oldest first
pub const CHANGELOG: &str = r#"# Changelog

## v.1.0.0
- Initial release

## v.1.1.0

- Added "dry run" mode
- Fixed packaging of empty directories

## v.2.0.0
- Dropped legacy config
"#;

/// Write `CHANGELOG` into `dir` and return its path
pub fn write_changelog(dir: &Path) -> io::Result<PathBuf> {
    let path = dir.join("CHANGELOG.md");
    fs::write(&path, CHANGELOG)?;
    Ok(path)
}

/// Create `<root>/dist` holding `a.txt` and `sub/b.txt`
pub fn create_dist(root: &Path) -> io::Result<PathBuf> {
    let dist = root.join("dist");
    fs::create_dir_all(dist.join("sub"))?;
    fs::write(dist.join("a.txt"), "alpha\n")?;
    fs::write(dist.join("sub").join("b.txt"), [0u8, 159, 146, 150])?;
    Ok(dist)
}

/// Entry names and raw contents of a zip archive, sorted by name
pub fn read_archive(path: &Path) -> Vec<(String, Vec<u8>)> {
    let mut zip = zip::ZipArchive::new(File::open(path).expect("open archive"))
        .expect("read archive");
    let mut names: Vec<String> = zip.file_names().map(str::to_string).collect();
    names.sort();

    names
        .into_iter()
        .map(|name| {
            let mut content = Vec::new();
            zip.by_name(&name)
                .expect("archive entry")
                .read_to_end(&mut content)
                .expect("read entry");
            (name, content)
        })
        .collect()
}

/// Switches the process working directory and restores it on drop.
///
/// Tests holding one must be `#[serial]`.
pub struct CurrentDir {
    previous: PathBuf,
}

impl CurrentDir {
    pub fn enter(dir: &Path) -> io::Result<Self> {
        let previous = env::current_dir()?;
        env::set_current_dir(dir)?;
        Ok(Self { previous })
    }
}

impl Drop for CurrentDir {
    fn drop(&mut self) {
        let _ = env::set_current_dir(&self.previous);
    }
}
