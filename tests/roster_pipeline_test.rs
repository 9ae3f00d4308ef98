use anyhow::Result;
use team_roster::utils::validation::Validate;
use team_roster::{
    LocalStorage, OutputFormat, RosterConfig, RosterEngine, RosterError, RosterPipeline,
    RunConfig,
};
use tempfile::TempDir;

fn run_config(input: Option<&str>, output: Option<&str>, format: OutputFormat) -> RunConfig {
    RunConfig {
        team: None,
        input: input.map(str::to_string),
        output: output.map(str::to_string),
        format,
    }
}

#[test]
fn test_default_run_prints_sample_names() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let engine = RosterEngine::new(RosterPipeline::new(
        LocalStorage::new(temp_dir.path()),
        RunConfig::default(),
    ));

    let output = engine.run()?;
    assert_eq!(output.names, vec!["Jill", "Alex", "Dave"]);
    assert_eq!(output.rendered, "Jill\nAlex\nDave\n");
    assert!(output.written_to.is_none());
    Ok(())
}

#[test]
fn test_json_input_to_tsv_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    std::fs::write(
        temp_dir.path().join("team.json"),
        r#"{"size": 3, "department": "Engineering", "lead": "Jill", "manager": "Alex", "engineer": "Dave"}"#,
    )?;

    let config = run_config(Some("team.json"), Some("out/names.tsv"), OutputFormat::Tsv);
    config.validate()?;
    let engine = RosterEngine::new(RosterPipeline::new(
        LocalStorage::new(temp_dir.path()),
        config,
    ));

    let output = engine.run()?;
    assert_eq!(output.written_to.as_deref(), Some("out/names.tsv"));

    let written = std::fs::read_to_string(temp_dir.path().join("out/names.tsv"))?;
    assert_eq!(written, "lead\tmanager\tengineer\nJill\tAlex\tDave\n");
    Ok(())
}

#[test]
fn test_toml_config_with_inline_team() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("roster.toml");
    std::fs::write(
        &config_path,
        r#"
[team]
size = 2
department = "Research"
lead = "Ada"
manager = "Grace"
engineer = "Linus"

[output]
format = "json"
path = "names.json"
"#,
    )?;

    let config = RosterConfig::from_file(&config_path)?;
    config.validate()?;
    let engine = RosterEngine::new(RosterPipeline::new(
        LocalStorage::new(temp_dir.path()),
        RunConfig::try_from(config)?,
    ));

    engine.run()?;

    let written = std::fs::read_to_string(temp_dir.path().join("names.json"))?;
    let names: Vec<String> = serde_json::from_str(&written)?;
    assert_eq!(names, vec!["Ada", "Grace", "Linus"]);
    Ok(())
}

#[test]
fn test_missing_field_stops_the_run_before_writing() -> Result<()> {
    let temp_dir = TempDir::new()?;
    std::fs::write(
        temp_dir.path().join("team.json"),
        r#"{"size": 3, "department": "Engineering", "manager": "Alex", "engineer": "Dave"}"#,
    )?;

    let engine = RosterEngine::new(RosterPipeline::new(
        LocalStorage::new(temp_dir.path()),
        run_config(Some("team.json"), Some("names.txt"), OutputFormat::Lines),
    ));

    match engine.run() {
        Err(RosterError::MissingField { field }) => assert_eq!(field, "lead"),
        other => panic!("expected MissingField, got {:?}", other),
    }
    assert!(!temp_dir.path().join("names.txt").exists());
    Ok(())
}

#[test]
fn test_invalid_json_input_is_serialization_error() -> Result<()> {
    let temp_dir = TempDir::new()?;
    std::fs::write(temp_dir.path().join("team.json"), "{ not json")?;

    let engine = RosterEngine::new(RosterPipeline::new(
        LocalStorage::new(temp_dir.path()),
        run_config(Some("team.json"), None, OutputFormat::Lines),
    ));

    assert!(matches!(
        engine.run(),
        Err(RosterError::SerializationError(_))
    ));
    Ok(())
}

#[test]
fn test_config_file_with_unknown_format_never_runs() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("roster.toml");
    std::fs::write(&config_path, "[output]\nformat = \"xml\"\npath = \"names.xml\"\n")?;

    let config = RosterConfig::from_file(&config_path)?;
    assert!(matches!(
        RunConfig::try_from(config),
        Err(RosterError::InvalidConfigValueError { .. })
    ));
    assert!(!temp_dir.path().join("names.xml").exists());
    Ok(())
}
