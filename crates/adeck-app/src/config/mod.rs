//! Configuration loading
//!
//! Settings live in a single TOML file under the platform config dir
//! (`~/.config/arena-deck/config.toml` on Linux). A missing file yields
//! defaults; a malformed file is logged and also yields defaults, so a bad
//! edit never blocks startup.

mod types;

use std::path::{Path, PathBuf};

use adeck_core::prelude::*;

pub use types::{AuthSettings, BehaviorSettings, Settings};

const CONFIG_FILENAME: &str = "config.toml";

/// Default config file location
pub fn config_path() -> PathBuf {
    let base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("arena-deck").join(CONFIG_FILENAME)
}

/// Load settings from the given file, falling back to defaults.
pub fn load_settings(path: &Path) -> Settings {
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!("No config file at {}, using defaults", path.display());
            return Settings::default();
        }
        Err(e) => {
            warn!("Failed to read {}: {}", path.display(), e);
            return Settings::default();
        }
    };

    match toml::from_str(&text) {
        Ok(settings) => {
            info!("Loaded settings from {}", path.display());
            settings
        }
        Err(e) => {
            warn!("Invalid config at {}: {}", path.display(), e);
            Settings::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = load_settings(&dir.path().join("nope.toml"));
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_valid_file_is_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(
            file,
            "[auth]\nadmin_email = \"root@arena.gg\"\nadmin_secret = \"hunter2\"\n\n\
             [behavior]\nconfirm_quit = false"
        )
        .unwrap();

        let settings = load_settings(&path);
        assert_eq!(settings.auth.admin_email, "root@arena.gg");
        assert_eq!(settings.auth.admin_secret, "hunter2");
        assert!(!settings.behavior.confirm_quit);
    }

    #[test]
    fn test_malformed_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "this is { not toml").unwrap();

        let settings = load_settings(&path);
        assert_eq!(settings, Settings::default());
    }
}
