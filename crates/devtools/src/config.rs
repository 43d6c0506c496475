use anyhow::{anyhow, Result};
use std::path::{Path, PathBuf};

/// Directory name used under the platform data directory
const APP_DIR: &str = "devtools";

/// Resolve where tool states are persisted
///
/// An explicit directory (flag or `DEVTOOLS_STATE_DIR`) wins; otherwise the
/// platform data directory is used.
pub fn state_dir(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(dir) = explicit {
        return Ok(dir.to_path_buf());
    }

    dirs::data_dir()
        .map(|dir| dir.join(APP_DIR))
        .ok_or_else(|| anyhow!("No data directory on this platform, pass --state-dir"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_dir_wins() {
        let dir = state_dir(Some(Path::new("/tmp/devtools-state"))).unwrap();
        assert_eq!(dir, PathBuf::from("/tmp/devtools-state"));
    }
}
