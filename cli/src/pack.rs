use crate::error::Result;
use crate::progress::ProgressTracker;
use crate::ui;
use std::path::PathBuf;

/// Pack `source` into a zip archive and print the archive's absolute path
pub fn execute(source: PathBuf, output: Option<PathBuf>) -> Result<()> {
    let mut progress = ProgressTracker::new("Pack").with_steps(vec![
        format!("Checking {}", source.display()),
        "Writing archive".to_string(),
    ]);

    progress.start_step();
    support::resolve_path(&source)?;
    progress.complete_step();

    progress.start_step();
    let archive = archive::pack_directory(&source, output.as_deref())?;
    progress.complete_step();

    progress.complete();
    ui::info_message(&format!("Archive written to {}", archive.display()));
    println!("{}", archive.display());

    Ok(())
}
