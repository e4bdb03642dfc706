pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::{CliConfig, Command};
pub use crate::config::{cli::LocalStorage, ExtractorConfig};

pub use crate::core::{etl::EtlEngine, pipeline::PricebookPipeline};
pub use crate::domain::model::PricebookDocument;
pub use crate::utils::error::{EtlError, Result};
