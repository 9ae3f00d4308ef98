use crate::core::{Pipeline, RosterOutput};
use crate::utils::error::Result;

pub struct RosterEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> RosterEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub fn run(&self) -> Result<RosterOutput> {
        tracing::info!("Starting roster extraction");

        let team = self.pipeline.extract()?;
        tracing::debug!("Team: {:?}", team);

        let names = self.pipeline.transform(&team)?;
        tracing::debug!("Names: {:?}", names);

        let output = self.pipeline.load(names)?;
        if let Some(path) = &output.written_to {
            tracing::info!("Output saved to: {}", path);
        }

        Ok(output)
    }
}
