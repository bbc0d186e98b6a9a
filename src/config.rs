// file: src/config.rs
// description: application configuration management with toml support
// reference: https://docs.rs/config

use crate::aggregate::{AggregationPolicy, LabelTransition};
use crate::error::{AnalysisError, Result};
use crate::utils::Validator;
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub hottest: HottestConfig,
    pub gather: GatherConfig,
}

/// Settings for ranking methods by a metric column.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HottestConfig {
    pub suffix: String,
    pub delimiter: String,
    pub metric_column: usize,
    pub output: PathBuf,
}

/// Settings for folding runs into the max/sum summary.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GatherConfig {
    pub suffix: String,
    pub delimiter: String,
    pub output: PathBuf,
    #[serde(default = "default_true")]
    pub skip_header_row: bool,
    #[serde(default = "default_true")]
    pub blank_corner: bool,
    #[serde(default)]
    pub label_transition: LabelTransition,
}

fn default_true() -> bool {
    true
}

impl HottestConfig {
    pub fn delimiter_byte(&self) -> Result<u8> {
        Validator::validate_delimiter(&self.delimiter)
    }
}

impl GatherConfig {
    pub fn delimiter_byte(&self) -> Result<u8> {
        Validator::validate_delimiter(&self.delimiter)
    }

    pub fn policy(&self) -> AggregationPolicy {
        AggregationPolicy {
            skip_header_row: self.skip_header_row,
            blank_corner: self.blank_corner,
            label_transition: self.label_transition,
        }
    }
}

pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

impl Config {
    /// Layers, lowest first: built-in defaults, the TOML file, then
    /// `PERF_ANALYSIS__<SECTION>__<KEY>` variables. An explicit `path` must
    /// exist; [`DEFAULT_CONFIG_PATH`] may be missing.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_layers(path, true),
            None => Self::load_layers(Path::new(DEFAULT_CONFIG_PATH), false),
        }
    }

    fn load_layers(path: &Path, required: bool) -> Result<Self> {
        dotenv().ok();

        let defaults = config::Config::try_from(&Self::default_config())
            .map_err(|e| AnalysisError::Config(e.to_string()))?;

        let settings = config::Config::builder()
            .add_source(defaults)
            .add_source(config::File::from(path).required(required))
            .add_source(
                config::Environment::with_prefix("PERF_ANALYSIS")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AnalysisError::Config(e.to_string()))?;

        let config: Config = settings
            .try_deserialize()
            .map_err(|e| AnalysisError::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    pub fn default_config() -> Self {
        let gathering = AggregationPolicy::gathering();
        Self {
            hottest: HottestConfig {
                suffix: ".csv".to_string(),
                delimiter: ";".to_string(),
                metric_column: 1,
                output: PathBuf::from("hottest_methods.csv"),
            },
            gather: GatherConfig {
                suffix: ".hash.csv".to_string(),
                delimiter: ",".to_string(),
                output: PathBuf::from("summary.csv"),
                skip_header_row: gathering.skip_header_row,
                blank_corner: gathering.blank_corner,
                label_transition: gathering.label_transition,
            },
        }
    }

    pub fn validate(&self) -> Result<()> {
        Validator::validate_suffix(&self.hottest.suffix)?;
        Validator::validate_suffix(&self.gather.suffix)?;

        self.hottest
            .delimiter_byte()
            .map_err(|e| AnalysisError::Config(format!("hottest.delimiter: {}", e)))?;
        self.gather
            .delimiter_byte()
            .map_err(|e| AnalysisError::Config(format!("gather.delimiter: {}", e)))?;

        if self.hottest.output.as_os_str().is_empty() || self.gather.output.as_os_str().is_empty()
        {
            return Err(AnalysisError::Config(
                "output path must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default_config();
        assert!(config.validate().is_ok());
        assert_eq!(config.hottest.delimiter_byte().unwrap(), b';');
        assert_eq!(config.gather.delimiter_byte().unwrap(), b',');
        assert_eq!(config.gather.policy(), AggregationPolicy::gathering());
    }

    #[test]
    fn test_rejects_multi_byte_delimiter() {
        let mut config = Config::default_config();
        config.gather.delimiter = ";;".to_string();
        assert!(matches!(config.validate(), Err(AnalysisError::Config(_))));
    }

    #[test]
    fn test_rejects_empty_suffix() {
        let mut config = Config::default_config();
        config.hottest.suffix = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_from_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("settings.toml");
        fs::write(
            &path,
            r#"
[hottest]
suffix = ".csv"
delimiter = ";"
metric_column = 3
output = "top.csv"

[gather]
suffix = ".hash.csv"
delimiter = ","
output = "summary.csv"
skip_header_row = false
label_transition = "reset"
"#,
        )
        .unwrap();

        let config = Config::load(Some(path.as_path())).unwrap();
        assert_eq!(config.hottest.metric_column, 3);
        assert_eq!(config.hottest.output, PathBuf::from("top.csv"));
        assert!(!config.gather.skip_header_row);
        assert!(config.gather.blank_corner);
        assert_eq!(config.gather.label_transition, LabelTransition::Reset);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("partial.toml");
        fs::write(&path, "[hottest]\nmetric_column = 2\n").unwrap();

        let config = Config::load(Some(path.as_path())).unwrap();
        let defaults = Config::default_config();

        assert_eq!(config.hottest.metric_column, 2);
        assert_eq!(config.hottest.suffix, defaults.hottest.suffix);
        assert_eq!(config.hottest.delimiter, defaults.hottest.delimiter);
        assert_eq!(config.gather.suffix, defaults.gather.suffix);
        assert_eq!(config.gather.policy(), AggregationPolicy::gathering());
    }

    #[test]
    fn test_explicit_missing_file_is_error() {
        let result = Config::load(Some(Path::new("/nonexistent/settings.toml")));
        assert!(matches!(result, Err(AnalysisError::Config(_))));
    }

    #[test]
    fn test_environment_overrides_defaults_without_file() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("default.toml");

        // SAFETY: no other test reads this variable.
        unsafe { std::env::set_var("PERF_ANALYSIS__GATHER__DELIMITER", ";") };
        let result = Config::load_layers(&missing, false);
        unsafe { std::env::remove_var("PERF_ANALYSIS__GATHER__DELIMITER") };

        let config = result.unwrap();
        assert_eq!(config.gather.delimiter_byte().unwrap(), b';');
        assert_eq!(config.gather.suffix, ".hash.csv");
        assert_eq!(config.hottest.metric_column, 1);
    }
}
