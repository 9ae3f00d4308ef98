use crate::core::extractor::extract_names;
use crate::core::render::render;
use crate::core::{ConfigProvider, Pipeline, Record, RosterOutput, Storage, TeamRecord};
use crate::utils::error::Result;
use std::path::Path;

pub struct RosterPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> RosterPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    /// `.toml` 檔以 TOML 解析，其餘一律視為 JSON
    fn parse_record(path: &str, bytes: &[u8]) -> Result<Record> {
        let is_toml = Path::new(path)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("toml"))
            .unwrap_or(false);

        if is_toml {
            let content = std::str::from_utf8(bytes)?;
            Ok(toml::from_str(content)?)
        } else {
            Ok(serde_json::from_slice(bytes)?)
        }
    }
}

impl<S: Storage, C: ConfigProvider> Pipeline for RosterPipeline<S, C> {
    fn extract(&self) -> Result<TeamRecord> {
        if let Some(record) = self.config.inline_team() {
            tracing::info!("📥 Using team record from configuration");
            return TeamRecord::try_from(record);
        }

        let Some(path) = self.config.input_path() else {
            tracing::info!("No input given, using the built-in sample team");
            return Ok(TeamRecord::sample());
        };

        tracing::info!("📥 Reading team record from {}", path);
        let bytes = self.storage.read_file(path)?;
        let record = Self::parse_record(path, &bytes)?;
        tracing::debug!("Input record has {} fields", record.data.len());

        let team = TeamRecord::try_from(&record)?;
        Ok(team)
    }

    fn transform(&self, team: &TeamRecord) -> Result<Vec<String>> {
        let names = extract_names(team);
        tracing::info!("🔄 Extracted {} names from the {} team", names.len(), team.department);
        Ok(names)
    }

    fn load(&self, names: Vec<String>) -> Result<RosterOutput> {
        let format = self.config.output_format();
        let rendered = render(&names, format)?;

        let written_to = match self.config.output_path() {
            Some(path) => {
                self.storage.write_file(path, rendered.as_bytes())?;
                tracing::info!("💾 Wrote {} output to {}", format, path);
                Some(path.to_string())
            }
            None => None,
        };

        Ok(RosterOutput {
            names,
            rendered,
            written_to,
        })
    }
}
