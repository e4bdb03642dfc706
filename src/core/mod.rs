pub mod etl;
pub mod output;
pub mod pipeline;
pub mod query;
pub mod source;
pub mod transform;

pub use crate::domain::model::{SourceRow, TransformResult};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
