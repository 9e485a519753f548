use crate::error::{ArchiveError, Result};
use std::fs::File;
use std::io;
use std::path::{MAIN_SEPARATOR, Path, PathBuf};
use support::{list_files, remove_file_if_exists, resolve_path};
use tracing::debug;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Archive name used when the caller gives none: `<basename(source)>.zip`
pub fn default_output(source: &Path) -> Result<PathBuf> {
    let name = match source.file_name() {
        Some(name) => name.to_os_string(),
        // `.` and friends have no file name of their own
        None => std::path::absolute(source)?
            .file_name()
            .map(|name| name.to_os_string())
            .ok_or_else(|| {
                ArchiveError::InvalidPath(format!("cannot name an archive after '{}'", source.display()))
            })?,
    };

    let mut output = name;
    output.push(".zip");
    Ok(PathBuf::from(output))
}

/// Pack every file under `source` into a ZIP archive and return the
/// archive's absolute path.
///
/// Entries are stored as `<basedir>/<path relative to source>`, where
/// `basedir` is the archive's file name without extension. Any existing
/// archive at `output` is replaced. Without `output`, the archive is written
/// to `<basename(source)>.zip` in the current directory.
pub fn pack_directory(source: &Path, output: Option<&Path>) -> Result<PathBuf> {
    resolve_path(source)?;

    let output = match output {
        Some(path) => path.to_path_buf(),
        None => default_output(source)?,
    };
    // `./dist`, `dist/.` and `dist/` all name the same tree
    let source = std::path::absolute(strip_trailing_separator(source))?;

    remove_file_if_exists(&output)?;

    let basedir = output
        .file_stem()
        .and_then(|stem| stem.to_str())
        .ok_or_else(|| {
            ArchiveError::InvalidPath(format!("'{}' has no usable file name", output.display()))
        })?
        .to_string();

    // Collected before the archive exists so an output inside `source` is never packed
    let files = list_files(&source)?;
    debug!(source = %source.display(), output = %output.display(), files = files.len(), "packing");

    let mut zip = ZipWriter::new(File::create(&output)?);
    for file in &files {
        let name = entry_name(&basedir, &source, file)?;
        debug!(entry = %name, "adding");

        zip.start_file(name, file_options(file)?)?;
        let mut reader = File::open(file)?;
        io::copy(&mut reader, &mut zip)?;
    }
    zip.finish()?;

    Ok(std::path::absolute(&output)?)
}

fn strip_trailing_separator(path: &Path) -> PathBuf {
    let stripped = path.to_str().and_then(|text| {
        text.strip_suffix(MAIN_SEPARATOR)
            .or_else(|| text.strip_suffix('/'))
            .filter(|rest| !rest.is_empty())
    });

    stripped.map_or_else(|| path.to_path_buf(), PathBuf::from)
}

fn entry_name(basedir: &str, source: &Path, file: &Path) -> Result<String> {
    let relative = file.strip_prefix(source).map_err(|_| {
        ArchiveError::InvalidPath(format!(
            "'{}' is not inside '{}'",
            file.display(),
            source.display()
        ))
    })?;

    // Packing a single file: the file itself is the only entry
    let relative = if relative.as_os_str().is_empty() {
        Path::new(file.file_name().unwrap_or_default())
    } else {
        relative
    };

    let parts: Vec<String> = relative
        .components()
        .map(|part| part.as_os_str().to_string_lossy().into_owned())
        .collect();

    Ok(format!("{}/{}", basedir, parts.join("/")))
}

fn file_options(file: &Path) -> Result<SimpleFileOptions> {
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mode = file.metadata()?.permissions().mode();
        Ok(options.unix_permissions(mode))
    }

    #[cfg(not(unix))]
    {
        let _ = file;
        Ok(options)
    }
}
