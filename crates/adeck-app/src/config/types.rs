//! Configuration types for Arena Deck
//!
//! Defines:
//! - `Settings` - Global application settings
//! - `AuthSettings` - Static credential pair feeding the auth stub
//! - `BehaviorSettings` - UI behavior toggles

use serde::{Deserialize, Serialize};

/// Application settings (`config.toml` under the platform config dir)
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    /// Authentication stub configuration
    #[serde(default)]
    pub auth: AuthSettings,

    /// Behavior settings
    #[serde(default)]
    pub behavior: BehaviorSettings,
}

/// Static credential pair for the stub authenticator.
///
/// Stands in for an external identity service; defaults reproduce the
/// seeded admin account.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct AuthSettings {
    #[serde(default = "default_admin_email")]
    pub admin_email: String,

    #[serde(default = "default_admin_secret")]
    pub admin_secret: String,
}

impl Default for AuthSettings {
    fn default() -> Self {
        Self {
            admin_email: default_admin_email(),
            admin_secret: default_admin_secret(),
        }
    }
}

fn default_admin_email() -> String {
    "teascblg@gmail.com".to_string()
}

fn default_admin_secret() -> String {
    "alex123".to_string()
}

/// Behavior settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct BehaviorSettings {
    /// Ask before quitting
    #[serde(default = "default_confirm_quit")]
    pub confirm_quit: bool,
}

impl Default for BehaviorSettings {
    fn default() -> Self {
        Self {
            confirm_quit: default_confirm_quit(),
        }
    }
}

fn default_confirm_quit() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_reproduce_seeded_admin() {
        let settings = Settings::default();
        assert_eq!(settings.auth.admin_email, "teascblg@gmail.com");
        assert_eq!(settings.auth.admin_secret, "alex123");
        assert!(settings.behavior.confirm_quit);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let settings: Settings = toml::from_str(
            r#"
            [auth]
            admin_email = "ops@example.net"
            "#,
        )
        .unwrap();
        assert_eq!(settings.auth.admin_email, "ops@example.net");
        assert_eq!(settings.auth.admin_secret, "alex123");
        assert!(settings.behavior.confirm_quit);
    }

    #[test]
    fn test_roundtrip() {
        let settings = Settings::default();
        let text = toml::to_string(&settings).unwrap();
        let parsed: Settings = toml::from_str(&text).unwrap();
        assert_eq!(parsed, settings);
    }
}
