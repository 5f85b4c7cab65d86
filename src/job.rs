//! YAML job files describing a generation run.
//!
//! ```yaml
//! count: 1000
//! seed: 42
//! options:
//!   delimiter: ";"
//! columns:
//!   - name: id
//!     kind: sequence
//!   - name: email
//!     kind: email
//!   - name: status
//!     kind: constant
//!     value: active
//! ```

use crate::config::OptionOverrides;
use crate::error::{record_count, GenerateError, Result};
use crate::fields::FieldKind;
use crate::schema::Schema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// One generated column
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnConfig {
    pub name: String,
    #[serde(flatten)]
    pub kind: FieldKind,
}

/// Complete YAML configuration for a generation run
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct JobConfig {
    /// Number of records; signed so that a negative value is reported
    /// instead of failing to parse
    pub count: Option<i64>,
    /// Base seed for the field generators
    pub seed: Option<u64>,
    /// Output option overrides
    pub options: OptionOverrides,
    /// Columns in output order
    pub columns: Vec<ColumnConfig>,
}

impl JobConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: JobConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Validated record count, if the file sets one
    pub fn record_count(&self) -> Result<Option<usize>> {
        self.count.map(record_count).transpose()
    }

    /// Build a schema from the columns. Column `i` is seeded with `seed + i`.
    pub fn build_schema(&self, seed: u64) -> Result<Schema> {
        build_schema(&self.columns, seed)
    }
}

/// Build a schema from column definitions, rejecting duplicate names
pub fn build_schema(columns: &[ColumnConfig], seed: u64) -> Result<Schema> {
    let mut schema = Schema::new();
    for (i, column) in columns.iter().enumerate() {
        if schema.contains(&column.name) {
            return Err(GenerateError::InvalidArgument(format!(
                "duplicate column name: {}",
                column.name
            )));
        }
        let generator = column.kind.build(seed.wrapping_add(i as u64));
        schema.insert_boxed(column.name.clone(), generator);
    }
    Ok(schema)
}

/// Parse a `name:kind` column argument, e.g. `id:sequence` or
/// `score:integer=1..10`
pub fn parse_column(spec: &str) -> Result<ColumnConfig> {
    let (name, kind) = spec.split_once(':').ok_or_else(|| {
        GenerateError::InvalidArgument(format!(
            "invalid column '{}': expected NAME:KIND",
            spec
        ))
    })?;
    let name = name.trim();
    if name.is_empty() {
        return Err(GenerateError::InvalidArgument(format!(
            "invalid column '{}': empty name",
            spec
        )));
    }
    let kind = kind.parse().map_err(GenerateError::InvalidArgument)?;
    Ok(ColumnConfig {
        name: name.to_string(),
        kind,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_job_yaml() {
        let yaml = r#"
count: 3
seed: 7
options:
  delimiter: ";"
  header: false
columns:
  - name: id
    kind: sequence
    start: 10
  - name: status
    kind: constant
    value: active
"#;

        let config: JobConfig = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(config.record_count().unwrap(), Some(3));
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.options.delimiter.as_deref(), Some(";"));
        assert_eq!(config.options.header, Some(false));
        assert_eq!(config.columns.len(), 2);
        assert_eq!(config.columns[0].kind, FieldKind::Sequence { start: 10 });

        let mut schema = config.build_schema(0).unwrap();
        let names: Vec<&str> = schema.names().collect();
        assert_eq!(names, vec!["id", "status"]);
        assert_eq!(schema.generate_values(), vec!["10", "active"]);
        assert_eq!(schema.generate_values(), vec!["11", "active"]);
    }

    #[test]
    fn test_negative_count_rejected() {
        let config: JobConfig = serde_yaml::from_str("count: -5").unwrap();
        assert!(matches!(
            config.record_count(),
            Err(GenerateError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_duplicate_columns_rejected() {
        let columns = vec![
            parse_column("id:sequence").unwrap(),
            parse_column("id:uuid").unwrap(),
        ];
        assert!(matches!(
            build_schema(&columns, 0),
            Err(GenerateError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_parse_column() {
        let column = parse_column("score:integer=1..10").unwrap();
        assert_eq!(column.name, "score");
        assert_eq!(column.kind, FieldKind::Integer { min: 1, max: 10 });

        assert!(parse_column("nocolon").is_err());
        assert!(parse_column(":email").is_err());
        assert!(parse_column("x:nonsense").is_err());
    }
}
