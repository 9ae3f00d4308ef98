pub mod engine;
pub mod extractor;
pub mod pipeline;
pub mod render;

pub use crate::domain::model::{OutputFormat, Record, Role, RosterOutput, TeamRecord};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Producer, Step, Storage};
pub use crate::utils::error::Result;
