pub mod clean;
pub mod etl;
pub mod export;
pub mod extract;
pub mod parser;
pub mod pipeline;
pub mod project;
pub mod render;
pub mod sort;

pub use crate::domain::model::{EtlSummary, ParseFormat, ParseOutcome, Record, SortOptions};
pub use crate::domain::ports::{ConfigProvider, CourseSource, Pipeline, Storage};
pub use crate::utils::error::Result;
