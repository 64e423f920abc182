use std::path::PathBuf;

use dirs::preference_dir;

/// Directory holding the settings file, `None` when the platform has no preference dir.
pub fn base_path() -> Option<PathBuf> {
    preference_dir().map(|dir| dir.join("mazerace"))
}
