pub mod cli;
pub mod wrapper_config;

pub use wrapper_config::{ConfigFormat, WrapperConfig};

#[cfg(feature = "cli")]
use crate::domain::ports::ConfigProvider;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_path, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "scrapper")]
#[command(about = "Generates C convenience wrappers for C++ function templates")]
pub struct CliConfig {
    /// Path to the JSON (or .toml) file describing the C++ functions to wrap
    pub input: String,

    /// Path of the generated export header
    #[arg(short = 'H', long)]
    pub output_header: String,

    /// Path of the generated implementation file
    #[arg(short = 'I', long)]
    pub output_impl: String,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[arg(long, help = "Validate and render without writing any file")]
    pub dry_run: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn input_path(&self) -> &str {
        &self.input
    }

    fn header_path(&self) -> &str {
        &self.output_header
    }

    fn implementation_path(&self) -> &str {
        &self.output_impl
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("input", &self.input)?;
        validate_path("output-header", &self.output_header)?;
        validate_path("output-impl", &self.output_impl)?;
        Ok(())
    }
}
