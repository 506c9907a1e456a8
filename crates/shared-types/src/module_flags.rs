use serde::{Deserialize, Serialize};

/// Optional school modules that can be switched off per deployment.
///
/// Parsed from the embedded `config.toml` at startup. Every field defaults
/// to `false` so that a missing or incomplete config file disables all
/// optional modules; the core roster and attendance views are always on.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq)]
pub struct ModuleFlags {
    #[serde(default)]
    pub fees: bool,
    #[serde(default)]
    pub examinations: bool,
    #[serde(default)]
    pub notices: bool,
}

/// Top-level config file structure matching `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub modules: ModuleFlags,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_flags_all_false() {
        let flags = ModuleFlags::default();
        assert!(!flags.fees);
        assert!(!flags.examinations);
        assert!(!flags.notices);
    }

    #[test]
    fn deserialize_empty_toml_defaults_all_false() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.modules, ModuleFlags::default());
    }

    #[test]
    fn deserialize_partial_toml_defaults_missing_fields() {
        let config: AppConfig = toml::from_str(
            r#"
            [modules]
            fees = true
            "#,
        )
        .unwrap();
        assert!(config.modules.fees);
        assert!(!config.modules.examinations);
        assert!(!config.modules.notices);
    }

    #[test]
    fn deserialize_full_toml() {
        let config: AppConfig = toml::from_str(
            r#"
            [modules]
            fees = true
            examinations = true
            notices = true
            "#,
        )
        .unwrap();
        assert!(config.modules.fees);
        assert!(config.modules.examinations);
        assert!(config.modules.notices);
    }

    #[test]
    fn serialize_roundtrip() {
        let flags = ModuleFlags {
            fees: true,
            examinations: false,
            notices: true,
        };
        let json = serde_json::to_string(&flags).unwrap();
        let deserialized: ModuleFlags = serde_json::from_str(&json).unwrap();
        assert_eq!(flags, deserialized);
    }

    #[test]
    fn deserialize_json_with_missing_fields_defaults() {
        let flags: ModuleFlags = serde_json::from_str("{}").unwrap();
        assert_eq!(flags, ModuleFlags::default());
    }
}
