pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::{cli::LocalStorage, file::FileConfig};
pub use core::{engine::ExchangeEngine, pipeline::ExchangePipeline};
pub use utils::error::{Result, SantaError};
