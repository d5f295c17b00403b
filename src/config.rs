use std::path::Path;
use std::time::Duration;

use crate::ai::MIN_DEPTH;
use crate::error::ConfigError;

/// Search tuning for the computer opponent.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Depth of the first iterative-deepening pass.
    pub min_depth: u32,
    /// Milliseconds of search budget per difficulty level.
    pub ms_per_level: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            min_depth: MIN_DEPTH,
            ms_per_level: 400,
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub search: SearchConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            eprintln!("Warning: config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.search.min_depth == 0 {
            return Err(ConfigError::Validation(
                "search.min_depth must be >= 1".into(),
            ));
        }
        if self.search.ms_per_level == 0 {
            return Err(ConfigError::Validation(
                "search.ms_per_level must be > 0".into(),
            ));
        }
        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}

/// AI strength offered by the menu. Each level buys one more multiple of
/// the configured per-level time budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Easy = 1,
    Medium = 2,
    Hard = 3,
}

impl Difficulty {
    /// All levels, in menu order.
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Parse a level number as entered by the user.
    pub fn from_level(level: u8) -> Option<Difficulty> {
        match level {
            1 => Some(Difficulty::Easy),
            2 => Some(Difficulty::Medium),
            3 => Some(Difficulty::Hard),
            _ => None,
        }
    }

    pub fn level(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    /// Wall-clock search budget for one AI move: level times ms_per_level.
    pub fn time_budget(self, config: &SearchConfig) -> Duration {
        Duration::from_millis(u64::from(self.level()) * config.ms_per_level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        config.validate().expect("default config should be valid");
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let toml_str = r#"
[search]
ms_per_level = 250
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.search.ms_per_level, 250);
        // Other fields should be defaults
        assert_eq!(config.search.min_depth, MIN_DEPTH);
    }

    #[test]
    fn test_empty_toml_uses_all_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.search.min_depth, MIN_DEPTH);
        assert_eq!(config.search.ms_per_level, 400);
    }

    #[test]
    fn test_validation_rejects_zero_min_depth() {
        let mut config = AppConfig::default();
        config.search.min_depth = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_zero_budget() {
        let mut config = AppConfig::default();
        config.search.ms_per_level = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = AppConfig::load_or_default(Path::new("nonexistent_config.toml")).unwrap();
        assert_eq!(config.search.ms_per_level, 400);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test_config.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(
            f,
            r#"
[search]
min_depth = 6
"#
        )
        .unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.search.min_depth, 6);
        // Others are defaults
        assert_eq!(config.search.ms_per_level, 400);
    }

    #[test]
    fn test_load_rejects_invalid_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test_config.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(
            f,
            r#"
[search]
min_depth = 0
"#
        )
        .unwrap();

        assert!(AppConfig::load(&path).is_err());
    }

    #[test]
    fn test_default_toml_roundtrips() {
        let toml_str = AppConfig::default_toml();
        let config: AppConfig = toml::from_str(&toml_str).unwrap();
        config.validate().expect("roundtripped config should be valid");
    }

    #[test]
    fn test_difficulty_from_level() {
        assert_eq!(Difficulty::from_level(1), Some(Difficulty::Easy));
        assert_eq!(Difficulty::from_level(2), Some(Difficulty::Medium));
        assert_eq!(Difficulty::from_level(3), Some(Difficulty::Hard));
        assert_eq!(Difficulty::from_level(0), None);
        assert_eq!(Difficulty::from_level(4), None);
    }

    #[test]
    fn test_difficulty_scales_the_budget() {
        let config = SearchConfig::default();
        assert_eq!(
            Difficulty::Easy.time_budget(&config),
            Duration::from_millis(400)
        );
        assert_eq!(
            Difficulty::Medium.time_budget(&config),
            Duration::from_millis(800)
        );
        assert_eq!(
            Difficulty::Hard.time_budget(&config),
            Duration::from_millis(1200)
        );
    }
}
