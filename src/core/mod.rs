pub mod convert;
pub mod etl;
pub mod pipeline;

pub use crate::domain::model::{ConversionStats, KeyMapping};
pub use crate::domain::ports::{ConfigProvider, Pipeline};
pub use crate::utils::error::Result;
