//! Configuration file handling.
//!
//! This module handles loading and merging configuration from
//! `.confbundle.toml` files.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Root configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// General settings.
    #[serde(default)]
    pub general: GeneralConfig,
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Default root directory to scan.
    #[serde(default = "default_root")]
    pub root: String,

    /// Default output file path.
    #[serde(default = "default_output")]
    pub output: String,

    /// Visit files in lexicographic name order.
    #[serde(default)]
    pub sorted: bool,

    /// Enable verbose logging by default.
    #[serde(default)]
    pub verbose: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            output: default_output(),
            sorted: false,
            verbose: false,
        }
    }
}

fn default_root() -> String {
    "config".to_string()
}

fn default_output() -> String {
    "backend_config.txt".to_string()
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
        let default_path = Path::new(".confbundle.toml");

        if default_path.exists() {
            Ok(Some(Self::load(default_path)?))
        } else {
            Ok(None)
        }
    }

    /// Merge this configuration with CLI arguments.
    ///
    /// CLI arguments take precedence over config file settings.
    /// This method only overrides config when CLI provides explicit values.
    pub fn merge_with_args(&mut self, args: &crate::cli::Args) {
        if let Some(ref root) = args.root {
            self.general.root = root.display().to_string();
        }
        if let Some(ref output) = args.output {
            self.general.output = output.display().to_string();
        }

        // Flags always override
        if args.sorted {
            self.general.sorted = true;
        }
        if args.verbose {
            self.general.verbose = true;
        }
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

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.general.root, "config");
        assert_eq!(config.general.output, "backend_config.txt");
        assert!(!config.general.sorted);
    }

    #[test]
    fn test_parse_config() {
        let toml_content = r#"
[general]
root = "deploy/config"
output = "bundle.txt"
sorted = true
"#;

        let config: Config = toml::from_str(toml_content).unwrap();
        assert_eq!(config.general.root, "deploy/config");
        assert_eq!(config.general.output, "bundle.txt");
        assert!(config.general.sorted);
        assert!(!config.general.verbose);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: Config = toml::from_str("[general]\nsorted = true\n").unwrap();
        assert_eq!(config.general.root, "config");
        assert_eq!(config.general.output, "backend_config.txt");
        assert!(config.general.sorted);
    }

    #[test]
    fn test_merge_cli_overrides_config() {
        let mut config: Config = toml::from_str("[general]\nroot = \"from_file\"\n").unwrap();

        let args = crate::cli::Args {
            root: Some(std::path::PathBuf::from("from_cli")),
            output: None,
            config: None,
            sorted: true,
            dry_run: false,
            init_config: false,
            verbose: false,
            quiet: false,
        };

        config.merge_with_args(&args);
        assert_eq!(config.general.root, "from_cli");
        // Output untouched: CLI did not provide one
        assert_eq!(config.general.output, "backend_config.txt");
        assert!(config.general.sorted);
    }

    #[test]
    fn test_default_toml_generation() {
        let toml_str = Config::default_toml();
        assert!(!toml_str.is_empty());
        assert!(toml_str.contains("[general]"));
        assert!(toml_str.contains("backend_config.txt"));
    }

    #[test]
    fn test_load_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(Config::load(&missing).is_err());
    }
}
