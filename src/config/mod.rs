pub mod cli;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_directory, validate_extensions, Validate};
use clap::{CommandFactory, Parser};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "strip-comments", version)]
#[command(about = "Strip inline // comment lines from source files, keeping /** doc openers")]
pub struct CliConfig {
    /// Root directory, walked recursively
    pub directory: PathBuf,

    /// Comma-separated file extensions to process
    #[arg(long = "ext", value_delimiter = ',', default_values = ["ts", "js"])]
    pub extensions: Vec<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            extensions: vec!["ts".to_string(), "js".to_string()],
            verbose: false,
        }
    }

    /// Drops leading dots so `.ts` and `ts` are the same extension.
    pub fn normalized(mut self) -> Self {
        self.extensions = self
            .extensions
            .iter()
            .map(|ext| ext.trim().trim_start_matches('.').to_string())
            .collect();
        self
    }

    /// A missing root is not fatal: the run simply has nothing to visit.
    pub fn check_root(&self) -> Result<()> {
        validate_directory("directory", &self.directory)
    }

    pub fn usage() -> String {
        Self::command().render_usage().to_string()
    }
}

impl ConfigProvider for CliConfig {
    fn root(&self) -> &Path {
        &self.directory
    }

    fn extensions(&self) -> &[String] {
        &self.extensions
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_extensions("extensions", &self.extensions)
    }
}
