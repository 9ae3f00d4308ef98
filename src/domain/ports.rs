use crate::domain::model::{OutputFormat, Record, RosterOutput, TeamRecord};
use crate::utils::error::Result;

/// Result of asking a producer for its next value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step<T> {
    Yield(T),
    Done,
}

impl<T> Step<T> {
    pub fn into_option(self) -> Option<T> {
        match self {
            Step::Yield(value) => Some(value),
            Step::Done => None,
        }
    }
}

/// Anything that hands out a sequence one value at a time.
///
/// After the first `Step::Done` every further call must also return
/// `Step::Done`.
pub trait Producer {
    type Item;

    fn produce_next(&mut self) -> Step<Self::Item>;
}

pub trait Storage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}

pub trait ConfigProvider {
    /// A team given directly in configuration; takes precedence over `input_path`.
    fn inline_team(&self) -> Option<&Record> {
        None
    }
    fn input_path(&self) -> Option<&str>;
    fn output_path(&self) -> Option<&str>;
    fn output_format(&self) -> OutputFormat;
}

pub trait Pipeline {
    fn extract(&self) -> Result<TeamRecord>;
    fn transform(&self, team: &TeamRecord) -> Result<Vec<String>>;
    fn load(&self, names: Vec<String>) -> Result<RosterOutput>;
}
