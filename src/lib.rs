pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::storage::LocalStorage;
pub use config::SplitConfig;
pub use core::{etl::EtlEngine, splitter::SplitPipeline};
pub use utils::error::{Result, SplitError};
