pub mod arith;
pub mod codegen;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{cli::LocalStorage, WrapperConfig};
pub use core::{engine::GeneratorEngine, pipeline::WrapperPipeline};
pub use utils::error::{Result, ScrapperError};
