pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub mod config;

#[cfg(feature = "cli")]
pub use config::{CliConfig, DEFAULT_OUTPUT_FILE};

pub use core::{
    convert::{convert, write_json},
    etl::ConvertEngine,
    pipeline::KeymapPipeline,
};
pub use domain::model::KeyMapping;
pub use utils::error::{KeymapError, Result};
