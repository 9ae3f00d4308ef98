use crate::domain::model::{OutputFormat, Role};
use crate::utils::error::{Result, RosterError};

pub fn render(names: &[String], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Lines => Ok(render_lines(names)),
        OutputFormat::Json => render_json(names),
        OutputFormat::Csv => render_delimited(names, b','),
        OutputFormat::Tsv => render_delimited(names, b'\t'),
    }
}

fn render_lines(names: &[String]) -> String {
    let mut out = String::new();
    for name in names {
        out.push_str(name);
        out.push('\n');
    }
    out
}

fn render_json(names: &[String]) -> Result<String> {
    Ok(serde_json::to_string_pretty(names)?)
}

/// 一列標題 (lead, manager, engineer) 加一列資料
fn render_delimited(names: &[String], delimiter: u8) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(Vec::new());

    writer.write_record(Role::ORDER.iter().map(|role| role.field_name()))?;
    writer.write_record(names)?;

    let bytes = writer.into_inner().map_err(|e| RosterError::IoError(e.into_error()))?;
    String::from_utf8(bytes).map_err(|e| RosterError::ConfigError {
        message: format!("Rendered output is not valid UTF-8: {}", e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_names() -> Vec<String> {
        vec!["Jill".to_string(), "Alex".to_string(), "Dave".to_string()]
    }

    #[test]
    fn test_render_lines() {
        assert_eq!(
            render(&sample_names(), OutputFormat::Lines).unwrap(),
            "Jill\nAlex\nDave\n"
        );
    }

    #[test]
    fn test_render_json_is_an_array() {
        let rendered = render(&sample_names(), OutputFormat::Json).unwrap();
        let parsed: Vec<String> = serde_json::from_str(&rendered).unwrap();
        assert_eq!(parsed, sample_names());
    }

    #[test]
    fn test_render_csv_and_tsv() {
        assert_eq!(
            render(&sample_names(), OutputFormat::Csv).unwrap(),
            "lead,manager,engineer\nJill,Alex,Dave\n"
        );
        assert_eq!(
            render(&sample_names(), OutputFormat::Tsv).unwrap(),
            "lead\tmanager\tengineer\nJill\tAlex\tDave\n"
        );
    }

    #[test]
    fn test_render_csv_quotes_commas() {
        let names = vec![
            "Hill, Jill".to_string(),
            "Alex".to_string(),
            "Dave".to_string(),
        ];
        let rendered = render(&names, OutputFormat::Csv).unwrap();
        assert!(rendered.ends_with("\"Hill, Jill\",Alex,Dave\n"));
    }
}
