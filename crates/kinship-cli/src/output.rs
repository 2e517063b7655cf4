//! Output formatting for person records

use kinship_core::Person;

/// Placeholder line for an empty query result
pub const NO_ONE: &str = "(no one)";

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
}

impl From<&str> for OutputFormat {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            _ => Self::Table,
        }
    }
}

/// Render a person as a single output line
pub fn format_person(person: &Person, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => {
            serde_json::to_string(person).unwrap_or_else(|_| "{}".to_string())
        }
        OutputFormat::Table => format!(
            "#{} {} (b. {}, {})",
            person.id, person.full_name, person.birth_year, person.sex
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kinship_core::{PersonId, Sex};

    fn anna() -> Person {
        Person {
            id: PersonId(0),
            full_name: "Anna Petrova".to_string(),
            birth_year: 1950,
            sex: Sex::Female,
        }
    }

    #[test]
    fn test_table_line() {
        assert_eq!(
            format_person(&anna(), OutputFormat::Table),
            "#0 Anna Petrova (b. 1950, female)"
        );
    }

    #[test]
    fn test_json_line() {
        let line = format_person(&anna(), OutputFormat::Json);
        assert!(line.contains("\"full_name\":\"Anna Petrova\""));
        assert!(line.contains("\"sex\":\"female\""));
    }

    #[test]
    fn test_format_from_str() {
        assert_eq!(OutputFormat::from("json"), OutputFormat::Json);
        assert_eq!(OutputFormat::from("JSON"), OutputFormat::Json);
        assert_eq!(OutputFormat::from("table"), OutputFormat::Table);
        assert_eq!(OutputFormat::from("anything"), OutputFormat::Table);
    }
}
