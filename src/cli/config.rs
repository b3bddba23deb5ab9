//! Run configuration
//!
//! Resolution order for every setting: command-line flag, then the JSON
//! config file, then the built-in default.

use std::fs;
use std::path::{Path, PathBuf};

use encoding_rs::Encoding;
use serde::Deserialize;

use super::args::Cli;
use super::errors::{CliError, CliResult};
use crate::report::SummaryFormat;
use crate::schema::WorldviewSuffixes;

/// Configuration file structure
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Input file (optional, default "19.txt")
    #[serde(default = "default_input_file")]
    pub input_file: PathBuf,

    /// Summary file (optional, default "result.txt")
    #[serde(default = "default_output_file")]
    pub output_file: PathBuf,

    /// Print the summary to stdout instead of `output_file`
    #[serde(default)]
    pub console: bool,

    /// Valid-records file (optional, default "correct_data.txt")
    #[serde(default = "default_valid_records_file")]
    pub valid_records_file: PathBuf,

    /// Rejection diagnostics file (optional, disabled by default)
    #[serde(default)]
    pub invalid_records_file: Option<PathBuf>,

    /// Input encoding label (optional, default "utf-8")
    #[serde(default = "default_encoding")]
    pub encoding: String,

    /// Encoding retried when the input is malformed in `encoding`
    #[serde(default)]
    pub fallback_encoding: Option<String>,

    /// Worldview suffix set (optional, default "strict")
    #[serde(default)]
    pub worldview_suffixes: WorldviewSuffixes,

    /// Summary format (optional, default "text")
    #[serde(default)]
    pub summary_format: SummaryFormat,
}

fn default_input_file() -> PathBuf {
    PathBuf::from("19.txt")
}
fn default_output_file() -> PathBuf {
    PathBuf::from("result.txt")
}
fn default_valid_records_file() -> PathBuf {
    PathBuf::from("correct_data.txt")
}
fn default_encoding() -> String {
    "utf-8".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_file: default_input_file(),
            output_file: default_output_file(),
            console: false,
            valid_records_file: default_valid_records_file(),
            invalid_records_file: None,
            encoding: default_encoding(),
            fallback_encoding: None,
            worldview_suffixes: WorldviewSuffixes::default(),
            summary_format: SummaryFormat::default(),
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

        let config: Config = serde_json::from_str(&content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        Ok(config)
    }

    /// Loads the file named by `--config`, or the defaults
    pub fn from_cli(cli: &Cli) -> CliResult<Self> {
        let mut config = match &cli.config {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        config.apply_overrides(cli);
        Ok(config)
    }

    /// Overwrites settings given explicitly on the command line
    pub fn apply_overrides(&mut self, cli: &Cli) {
        if let Some(path) = &cli.input_file {
            self.input_file = path.clone();
        }
        if let Some(path) = &cli.output_file {
            self.output_file = path.clone();
        }
        if cli.console {
            self.console = true;
        }
        if let Some(path) = &cli.invalid_file {
            self.invalid_records_file = Some(path.clone());
        }
        if let Some(label) = &cli.encoding {
            self.encoding = label.clone();
        }
        if let Some(label) = &cli.fallback_encoding {
            self.fallback_encoding = Some(label.clone());
        }
        if let Some(worldview) = cli.worldview {
            self.worldview_suffixes = worldview;
        }
        if let Some(format) = cli.summary_format {
            self.summary_format = format;
        }
    }

    /// Validates the configuration and resolves encoding labels
    pub fn resolve(self) -> CliResult<Settings> {
        let encoding = lookup_encoding(&self.encoding)?;
        let fallback_encoding = self
            .fallback_encoding
            .as_deref()
            .map(lookup_encoding)
            .transpose()?;

        if !self.console && self.output_file == self.valid_records_file {
            return Err(CliError::config_error(format!(
                "output_file and valid_records_file must differ (both are {})",
                self.output_file.display()
            )));
        }

        let summary_target = if self.console {
            SummaryTarget::Console
        } else {
            SummaryTarget::File(self.output_file)
        };

        Ok(Settings {
            input_file: self.input_file,
            summary_target,
            valid_records_file: self.valid_records_file,
            invalid_records_file: self.invalid_records_file,
            encoding,
            fallback_encoding,
            worldview: self.worldview_suffixes,
            summary_format: self.summary_format,
        })
    }
}

fn lookup_encoding(label: &str) -> CliResult<&'static Encoding> {
    Encoding::for_label(label.trim().as_bytes())
        .ok_or_else(|| CliError::config_error(format!("Unknown encoding: '{}'", label)))
}

/// Where the summary goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SummaryTarget {
    Console,
    File(PathBuf),
}

/// Fully resolved settings for one run
#[derive(Debug, Clone)]
pub struct Settings {
    pub input_file: PathBuf,
    pub summary_target: SummaryTarget,
    pub valid_records_file: PathBuf,
    pub invalid_records_file: Option<PathBuf>,
    pub encoding: &'static Encoding,
    pub fallback_encoding: Option<&'static Encoding>,
    pub worldview: WorldviewSuffixes,
    pub summary_format: SummaryFormat,
}

impl Settings {
    /// Resolves the defaults with the given input and output locations
    pub fn new(input_file: impl Into<PathBuf>, output_dir: &Path) -> CliResult<Self> {
        Config {
            input_file: input_file.into(),
            output_file: output_dir.join(default_output_file()),
            valid_records_file: output_dir.join(default_valid_records_file()),
            ..Config::default()
        }
        .resolve()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let settings = Config::default().resolve().unwrap();
        assert_eq!(settings.input_file, PathBuf::from("19.txt"));
        assert_eq!(
            settings.summary_target,
            SummaryTarget::File(PathBuf::from("result.txt"))
        );
        assert_eq!(settings.valid_records_file, PathBuf::from("correct_data.txt"));
        assert_eq!(settings.encoding, encoding_rs::UTF_8);
        assert!(settings.fallback_encoding.is_none());
        assert_eq!(settings.worldview, WorldviewSuffixes::Strict);
    }

    #[test]
    fn test_load_partial_config_uses_defaults() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("recval.json");
        fs::write(
            &path,
            r#"{"input_file": "batch.json", "fallback_encoding": "windows-1251", "worldview_suffixes": "extended"}"#,
        )
        .unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.input_file, PathBuf::from("batch.json"));
        assert_eq!(config.output_file, PathBuf::from("result.txt"));

        let settings = config.resolve().unwrap();
        assert_eq!(settings.fallback_encoding, Some(encoding_rs::WINDOWS_1251));
        assert_eq!(settings.worldview, WorldviewSuffixes::Extended);
    }

    #[test]
    fn test_unknown_key_rejected() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("recval.json");
        fs::write(&path, r#"{"input": "batch.json"}"#).unwrap();

        let err = Config::load(&path).unwrap_err();
        assert_eq!(err.code(), "RECVAL_CONFIG_ERROR");
    }

    #[test]
    fn test_missing_config_file() {
        let err = Config::load(Path::new("/nonexistent/recval.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config"));
    }

    #[test]
    fn test_unknown_encoding_rejected() {
        let config = Config {
            encoding: "klingon".into(),
            ..Config::default()
        };
        let err = config.resolve().unwrap_err();
        assert!(err.to_string().contains("klingon"));
    }

    #[test]
    fn test_cli_overrides_config() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("recval.json");
        fs::write(&path, r#"{"input_file": "from_config.json", "summary_format": "json"}"#).unwrap();

        let cli = Cli::try_parse_from([
            "recval",
            "--config",
            path.to_str().unwrap(),
            "--input-file",
            "from_cli.json",
            "--console",
        ])
        .unwrap();

        let settings = Config::from_cli(&cli).unwrap().resolve().unwrap();
        assert_eq!(settings.input_file, PathBuf::from("from_cli.json"));
        assert_eq!(settings.summary_target, SummaryTarget::Console);
        assert_eq!(settings.summary_format, SummaryFormat::Json);
    }

    #[test]
    fn test_summary_and_valid_records_must_differ() {
        let config = Config {
            output_file: PathBuf::from("same.txt"),
            valid_records_file: PathBuf::from("same.txt"),
            ..Config::default()
        };
        assert!(config.resolve().is_err());
    }
}
