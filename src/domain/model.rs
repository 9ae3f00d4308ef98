use crate::utils::error::{Result, RosterError};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Field names every team record has to carry.
pub const REQUIRED_FIELDS: [&str; 5] = ["size", "department", "lead", "manager", "engineer"];

/// A loosely-typed record as it comes out of a JSON or TOML document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    pub data: HashMap<String, serde_json::Value>,
}

impl Record {
    fn require(&self, field: &str) -> Result<&serde_json::Value> {
        self.data.get(field).ok_or_else(|| RosterError::MissingField {
            field: field.to_string(),
        })
    }

    fn require_str(&self, field: &str) -> Result<String> {
        self.require(field)?
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| RosterError::InvalidFieldType {
                field: field.to_string(),
                expected: "a string".to_string(),
            })
    }
}

/// A team's composition. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamRecord {
    pub size: u32,
    pub department: String,
    pub lead: String,
    pub manager: String,
    pub engineer: String,
}

impl TeamRecord {
    pub fn new(
        size: u32,
        department: impl Into<String>,
        lead: impl Into<String>,
        manager: impl Into<String>,
        engineer: impl Into<String>,
    ) -> Self {
        Self {
            size,
            department: department.into(),
            lead: lead.into(),
            manager: manager.into(),
            engineer: engineer.into(),
        }
    }

    /// 預設的工程團隊
    pub fn sample() -> Self {
        Self::new(3, "Engineering", "Jill", "Alex", "Dave")
    }

    pub fn name_for(&self, role: Role) -> &str {
        match role {
            Role::Lead => &self.lead,
            Role::Manager => &self.manager,
            Role::Engineer => &self.engineer,
        }
    }
}

/// Fails on the first required field that is absent, checked in
/// `REQUIRED_FIELDS` order. Unknown fields are ignored.
impl TryFrom<&Record> for TeamRecord {
    type Error = RosterError;

    fn try_from(record: &Record) -> Result<Self> {
        for field in REQUIRED_FIELDS {
            record.require(field)?;
        }

        let size = record
            .require("size")?
            .as_u64()
            .and_then(|n| u32::try_from(n).ok())
            .ok_or_else(|| RosterError::InvalidFieldType {
                field: "size".to_string(),
                expected: "a non-negative integer".to_string(),
            })?;

        Ok(Self {
            size,
            department: record.require_str("department")?,
            lead: record.require_str("lead")?,
            manager: record.require_str("manager")?,
            engineer: record.require_str("engineer")?,
        })
    }
}

impl TryFrom<Record> for TeamRecord {
    type Error = RosterError;

    fn try_from(record: Record) -> Result<Self> {
        TeamRecord::try_from(&record)
    }
}

/// The roles pulled out of a team, in extraction order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Lead,
    Manager,
    Engineer,
}

impl Role {
    pub const ORDER: [Role; 3] = [Role::Lead, Role::Manager, Role::Engineer];

    pub fn field_name(self) -> &'static str {
        match self {
            Role::Lead => "lead",
            Role::Manager => "manager",
            Role::Engineer => "engineer",
        }
    }
}

/// How a name sequence is written out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Lines,
    Json,
    Csv,
    Tsv,
}

impl OutputFormat {
    pub const NAMES: [&'static str; 4] = ["lines", "json", "csv", "tsv"];

    pub fn as_str(self) -> &'static str {
        match self {
            OutputFormat::Lines => "lines",
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
            OutputFormat::Tsv => "tsv",
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lines" => Ok(OutputFormat::Lines),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            "tsv" => Ok(OutputFormat::Tsv),
            _ => Err(RosterError::InvalidConfigValueError {
                field: "output.format".to_string(),
                value: s.to_string(),
                reason: format!("Unsupported format. Valid formats: {}", Self::NAMES.join(", ")),
            }),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone)]
pub struct RosterOutput {
    pub names: Vec<String>,
    pub rendered: String,
    pub written_to: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record_from(value: serde_json::Value) -> Record {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_record_converts_to_team() {
        let record = record_from(json!({
            "size": 3,
            "department": "Engineering",
            "lead": "Jill",
            "manager": "Alex",
            "engineer": "Dave",
            "location": "Remote"
        }));

        let team = TeamRecord::try_from(&record).unwrap();
        assert_eq!(team, TeamRecord::sample());
    }

    #[test]
    fn test_missing_field_fails_fast_in_declared_order() {
        let record = record_from(json!({
            "size": 3,
            "department": "Engineering",
            "engineer": "Dave"
        }));

        match TeamRecord::try_from(&record) {
            Err(RosterError::MissingField { field }) => assert_eq!(field, "lead"),
            other => panic!("expected MissingField, got {:?}", other),
        }
    }

    #[test]
    fn test_wrong_types_are_rejected() {
        let record = record_from(json!({
            "size": 3,
            "department": "Engineering",
            "lead": "Jill",
            "manager": 42,
            "engineer": "Dave"
        }));
        assert!(matches!(
            TeamRecord::try_from(&record),
            Err(RosterError::InvalidFieldType { ref field, .. }) if field == "manager"
        ));

        let record = record_from(json!({
            "size": -1,
            "department": "Engineering",
            "lead": "Jill",
            "manager": "Alex",
            "engineer": "Dave"
        }));
        assert!(matches!(
            TeamRecord::try_from(record),
            Err(RosterError::InvalidFieldType { ref field, .. }) if field == "size"
        ));
    }

    #[test]
    fn test_role_order_and_names() {
        let team = TeamRecord::sample();
        let names: Vec<&str> = Role::ORDER.iter().map(|r| team.name_for(*r)).collect();
        assert_eq!(names, vec!["Jill", "Alex", "Dave"]);
        assert_eq!(Role::Manager.field_name(), "manager");
    }

    #[test]
    fn test_output_format_parsing() {
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!(" tsv ".parse::<OutputFormat>().unwrap(), OutputFormat::Tsv);
        assert!("xml".parse::<OutputFormat>().is_err());
        assert_eq!(OutputFormat::default(), OutputFormat::Lines);
    }
}
