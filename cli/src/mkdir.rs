use crate::error::Result;
use crate::ui;
use std::path::PathBuf;

pub fn execute(path: PathBuf, overwrite: bool) -> Result<()> {
    if overwrite && support::path_exists(&path) {
        ui::warning_message(&format!("Replacing existing {}", path.display()));
    }

    support::make_dir(&path, overwrite)?;
    ui::success_message(&format!("Created {}", path.display()));
    Ok(())
}
