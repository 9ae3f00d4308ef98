pub mod cli;
pub mod toml_config;

use crate::core::{ConfigProvider, OutputFormat, Record};
use crate::utils::error::{Result, RosterError};
use crate::utils::validation::{validate_path, Validate};
use toml_config::RosterConfig;

#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "team-roster")]
#[command(about = "Extract the lead, manager and engineer of a team record")]
pub struct CliConfig {
    #[arg(long, help = "Team record file (.json or .toml); defaults to the built-in sample team")]
    pub input: Option<String>,

    #[arg(long, help = "TOML configuration file")]
    pub config: Option<String>,

    #[arg(long, help = "Output format: lines, json, csv or tsv")]
    pub format: Option<String>,

    #[arg(long, help = "Write the rendered names to this path")]
    pub output: Option<String>,

    #[arg(long, default_value = ".", help = "Directory input and output paths are resolved against")]
    pub base_dir: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// 合併設定檔與命令列參數，命令列優先
    pub fn resolve(&self) -> Result<RunConfig> {
        let file_config = match &self.config {
            Some(path) => RosterConfig::from_file(path)?,
            None => RosterConfig::default(),
        };
        file_config.validate()?;

        let mut run = RunConfig::try_from(file_config)?;
        if let Some(input) = &self.input {
            run.input = Some(input.clone());
            run.team = None;
        }
        if let Some(format) = &self.format {
            run.format = format.parse()?;
        }
        if let Some(output) = &self.output {
            run.output = Some(output.clone());
        }
        Ok(run)
    }
}

/// The settings one run actually uses, after merging every source.
#[derive(Debug, Clone, Default)]
pub struct RunConfig {
    pub team: Option<Record>,
    pub input: Option<String>,
    pub output: Option<String>,
    pub format: OutputFormat,
}

/// Fails when the file names an output format that does not exist.
impl TryFrom<RosterConfig> for RunConfig {
    type Error = RosterError;

    fn try_from(config: RosterConfig) -> Result<Self> {
        let format = config.output_format()?;
        let input = config.input_path().map(str::to_string);
        Ok(Self {
            team: config.team,
            input,
            output: config.output.path,
            format,
        })
    }
}

impl ConfigProvider for RunConfig {
    fn inline_team(&self) -> Option<&Record> {
        self.team.as_ref()
    }

    fn input_path(&self) -> Option<&str> {
        self.input.as_deref()
    }

    fn output_path(&self) -> Option<&str> {
        self.output.as_deref()
    }

    fn output_format(&self) -> OutputFormat {
        self.format
    }
}

impl Validate for RunConfig {
    fn validate(&self) -> Result<()> {
        if let Some(input) = &self.input {
            validate_path("input", input)?;
        }
        if let Some(output) = &self.output {
            validate_path("output", output)?;
        }
        Ok(())
    }
}
