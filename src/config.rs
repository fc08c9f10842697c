use std::ffi::OsString;
use std::path::PathBuf;

use thiserror::Error;

pub const DEFAULT_OUTPUT_FILE: &str = "SalesResults.txt";
const BIN_NAME: &str = "computesales";

#[derive(Debug, PartialEq, Error)]
pub enum ConfigError {
    #[error("Incorrect usage. The correct format is:\n{0} priceCatalogue.json salesRecord1.json [salesRecord2.json ...]")]
    Usage(&'static str),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub catalogue_path: PathBuf,
    pub sales_paths: Vec<PathBuf>,
    pub output_path: PathBuf,
}

impl Config {
    pub fn new(catalogue_path: impl Into<PathBuf>, sales_paths: Vec<PathBuf>) -> Config {
        Config {
            catalogue_path: catalogue_path.into(),
            sales_paths,
            output_path: PathBuf::from(DEFAULT_OUTPUT_FILE),
        }
    }

    /// Builds the configuration from the full argument list, program name first.
    pub fn from_args<I, S>(args: I) -> Result<Config, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        let mut paths = args.into_iter().skip(1).map(|arg| PathBuf::from(arg.into()));

        let catalogue_path = paths.next().ok_or(ConfigError::Usage(BIN_NAME))?;
        let sales_paths: Vec<PathBuf> = paths.collect();
        if sales_paths.is_empty() {
            return Err(ConfigError::Usage(BIN_NAME));
        }

        Ok(Config::new(catalogue_path, sales_paths))
    }

    pub fn with_output_path(mut self, output_path: impl Into<PathBuf>) -> Config {
        self.output_path = output_path.into();
        self
    }
}
