//! Configuration file handling.
//!
//! This module handles loading and merging configuration from
//! `.gradebook.toml` files.

use crate::analysis::DEFAULT_TOP_COUNT;
use crate::report::DEFAULT_NAME_WIDTH;
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Name of the config file looked up in the current directory.
pub const DEFAULT_CONFIG_FILE: &str = ".gradebook.toml";

/// Root configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// General settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Report settings.
    #[serde(default)]
    pub report: ReportConfig,
}

/// General application settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Enable verbose logging by default.
    #[serde(default)]
    pub verbose: bool,

    /// Run the demo at startup: `true` always, `false` never,
    /// unset to ask.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub demo: Option<bool>,
}

/// Report rendering settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Number of students shown by the top performers view.
    #[serde(default = "default_top_count")]
    pub top_count: usize,

    /// Width of the name column in the all-students table.
    #[serde(default = "default_name_width")]
    pub name_width: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            top_count: default_top_count(),
            name_width: default_name_width(),
        }
    }
}

fn default_top_count() -> usize {
    DEFAULT_TOP_COUNT
}

fn default_name_width() -> usize {
    DEFAULT_NAME_WIDTH
}

impl Config {
    /// Load configuration from a file path.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Try to load configuration from the default location.
    ///
    /// Returns `Ok(None)` if the file doesn't exist, `Err` if it exists but can't be parsed.
    pub fn load_default() -> Result<Option<Self>> {
        Self::load_from_dir(Path::new("."))
    }

    /// Try to load `.gradebook.toml` from a directory.
    pub fn load_from_dir(dir: &Path) -> Result<Option<Self>> {
        let config_path = dir.join(DEFAULT_CONFIG_FILE);

        if config_path.exists() {
            Ok(Some(Self::load(&config_path)?))
        } else {
            Ok(None)
        }
    }

    /// Merge this configuration with CLI arguments.
    ///
    /// CLI arguments take precedence over config file settings, but only
    /// when they were given explicitly.
    pub fn merge_with_args(&mut self, args: &crate::cli::Args) {
        if let Some(top) = args.top {
            self.report.top_count = top;
        }

        if args.demo {
            self.general.demo = Some(true);
        } else if args.no_demo {
            self.general.demo = Some(false);
        }

        if args.verbose {
            self.general.verbose = true;
        }
    }

    /// Check settings that would make a view misleading.
    ///
    /// Run after `merge_with_args` so file values and flags are both covered.
    pub fn validate(&self) -> Result<()> {
        if self.report.top_count == 0 {
            bail!("report.top_count must be at least 1");
        }
        if self.report.name_width == 0 {
            bail!("report.name_width must be at least 1");
        }
        Ok(())
    }

    /// Generate a default configuration file content.
    pub fn default_toml() -> String {
        let config = Config::default();
        toml::to_string_pretty(&config).unwrap_or_else(|_| String::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::tests::make_args;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.report.top_count, 5);
        assert_eq!(config.report.name_width, 15);
        assert!(!config.general.verbose);
        assert_eq!(config.general.demo, None);
    }

    #[test]
    fn test_parse_config() {
        let toml_content = r#"
[general]
verbose = true
demo = false

[report]
top_count = 3
"#;

        let config: Config = toml::from_str(toml_content).unwrap();
        assert!(config.general.verbose);
        assert_eq!(config.general.demo, Some(false));
        assert_eq!(config.report.top_count, 3);
        assert_eq!(config.report.name_width, 15);
    }

    #[test]
    fn test_default_toml_generation() {
        let toml_str = Config::default_toml();
        assert!(toml_str.contains("[general]"));
        assert!(toml_str.contains("[report]"));
        assert!(toml_str.contains("top_count = 5"));
    }

    #[test]
    fn test_load_from_dir() {
        let dir = tempfile::tempdir().unwrap();
        assert!(Config::load_from_dir(dir.path()).unwrap().is_none());

        std::fs::write(
            dir.path().join(DEFAULT_CONFIG_FILE),
            "[report]\nname_width = 20\n",
        )
        .unwrap();

        let config = Config::load_from_dir(dir.path()).unwrap().unwrap();
        assert_eq!(config.report.name_width, 20);
        assert_eq!(config.report.top_count, 5);
    }

    #[test]
    fn test_load_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        std::fs::write(&path, "[report\ntop_count = ").unwrap();

        assert!(Config::load(&path).is_err());
    }

    #[test]
    fn test_merge_with_args() {
        let mut config = Config::default();
        let mut args = make_args();
        args.top = Some(3);
        args.no_demo = true;
        args.verbose = true;

        config.merge_with_args(&args);
        assert_eq!(config.report.top_count, 3);
        assert_eq!(config.general.demo, Some(false));
        assert!(config.general.verbose);
    }

    #[test]
    fn test_merge_keeps_config_without_flags() {
        let mut config = Config::default();
        config.report.top_count = 8;
        config.general.demo = Some(true);

        config.merge_with_args(&make_args());
        assert_eq!(config.report.top_count, 8);
        assert_eq!(config.general.demo, Some(true));
    }

    #[test]
    fn test_validate_rejects_zero_counts() {
        assert!(Config::default().validate().is_ok());

        let mut config: Config = toml::from_str("[report]\ntop_count = 0\n").unwrap();
        assert!(config.validate().is_err());

        let mut args = make_args();
        args.top = Some(2);
        config.merge_with_args(&args);
        assert!(config.validate().is_ok());

        let config: Config = toml::from_str("[report]\nname_width = 0\n").unwrap();
        assert!(config.validate().is_err());
    }
}
