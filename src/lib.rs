pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{cli::LocalStorage, toml_config::RosterConfig, RunConfig};
pub use core::{
    engine::RosterEngine,
    extractor::{drain_into, extract_names, FieldExtractor, ProducerIter},
    pipeline::RosterPipeline,
};
pub use domain::model::{OutputFormat, Record, Role, RosterOutput, TeamRecord};
pub use domain::ports::{Producer, Step};
pub use utils::error::{Result, RosterError};
