pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::adapters::crawler::NckuCrawler;
pub use crate::adapters::storage::LocalStorage;
pub use crate::config::query::CourseQuery;
pub use crate::config::CliConfig;
pub use crate::core::etl::EtlEngine;
pub use crate::core::parser::CourseParser;
pub use crate::core::pipeline::CoursePipeline;
pub use crate::domain::model::{EtlSummary, ParseFormat, ParseOutcome, Record, SortOptions};
pub use crate::utils::error::{EtlError, Result};
