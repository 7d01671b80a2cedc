use crate::core::ConfigProvider;
use crate::utils::error::{KeymapError, Result};
use crate::utils::validation::{validate_path, Validate};
use clap::builder::{OsStringValueParser, TypedValueParser};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

pub const PROGRAM_NAME: &str = "csv-keymap";

/// Always written to the current working directory.
pub const DEFAULT_OUTPUT_FILE: &str = "us_em.json";

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = PROGRAM_NAME)]
#[command(about = "Convert a two-column CSV file into a JSON key mapping")]
#[command(disable_help_flag = true)]
pub struct CliConfig {
    #[arg(
        value_name = "csv_file_path",
        value_parser = OsStringValueParser::new().map(PathBuf::from)
    )]
    pub csv_file_path: PathBuf,
}

impl CliConfig {
    /// Exactly one raw argument after the program name, taken literally:
    /// `--` and `-x` are paths, not options.
    pub fn from_args<I, T>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
        if args.len() != 2 {
            tracing::debug!("Expected 1 argument, got {}", args.len().saturating_sub(1));
            return Err(KeymapError::usage(PROGRAM_NAME));
        }

        // 插入 `--`，讓 clap 不再解析選項
        let escaped = [args[0].clone(), OsString::from("--"), args[1].clone()];
        Self::try_parse_from(escaped).map_err(|e| {
            tracing::debug!("Argument parsing failed: {:?}", e.kind());
            KeymapError::usage(PROGRAM_NAME)
        })
    }
}

impl ConfigProvider for CliConfig {
    fn csv_file_path(&self) -> &Path {
        &self.csv_file_path
    }

    fn output_file(&self) -> &Path {
        Path::new(DEFAULT_OUTPUT_FILE)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("csv_file_path", &self.csv_file_path.to_string_lossy())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_argument_is_accepted() {
        let config = CliConfig::from_args([PROGRAM_NAME, "data/us_em.csv"]).unwrap();
        assert_eq!(config.csv_file_path(), Path::new("data/us_em.csv"));
        assert_eq!(config.output_file(), Path::new("us_em.json"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_wrong_argument_count_is_usage_error() {
        for args in [vec![PROGRAM_NAME], vec![PROGRAM_NAME, "a.csv", "b.csv"]] {
            let err = CliConfig::from_args(args).unwrap_err();
            assert!(matches!(err, KeymapError::UsageError { .. }));
        }
    }

    #[test]
    fn test_separator_counts_as_an_argument() {
        let err = CliConfig::from_args([PROGRAM_NAME, "--", "a.csv"]).unwrap_err();
        assert!(matches!(err, KeymapError::UsageError { .. }));

        let err = CliConfig::from_args([PROGRAM_NAME, "--help", "a.csv"]).unwrap_err();
        assert!(matches!(err, KeymapError::UsageError { .. }));
    }

    #[test]
    fn test_hyphenated_argument_is_a_path() {
        for arg in ["--", "--help", "-x.csv"] {
            let config = CliConfig::from_args([PROGRAM_NAME, arg]).unwrap();
            assert_eq!(config.csv_file_path(), Path::new(arg));
        }
    }

    #[test]
    fn test_empty_path_fails_validation() {
        let config = CliConfig::from_args([PROGRAM_NAME, ""]).unwrap();
        assert_eq!(config.csv_file_path, PathBuf::new());
        assert!(config.validate().is_err());
    }
}
