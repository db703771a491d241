//! Universal data types for the dialect adapter
//!
//! Normalized representations of connection options, catalog metadata, and
//! query results exchanged with the host. Nothing here is persisted by this
//! layer; descriptors are rebuilt on every introspection call.

use serde::{Deserialize, Serialize};

/// Engine-independent column type used by the host for type-aware display
/// and analytics behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogicalType {
    Decimal,
    Integer,
    BigInteger,
    Float,
    Text,
    Boolean,
    Date,
    DateTime,
    Dictionary,
    Array,
    Struct,
    Binary,
    /// Anything outside the closed mapping table. Treated as opaque/JSON-like
    /// by the host; never an error, since engines add types over time.
    Unknown,
}

impl LogicalType {
    /// True for types whose values carry a calendar component and are subject
    /// to UTC coercion after execution.
    pub fn is_temporal(&self) -> bool {
        matches!(self, LogicalType::Date | LogicalType::DateTime)
    }
}

/// First day of the week used for week truncation and day-of-week numbering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StartOfWeek {
    Sunday,
    Monday,
}

impl StartOfWeek {
    /// Day offset from the engine-native week start (Monday). The input is
    /// shifted forward by this many days before `DATE_TRUNC('WEEK', ..)` and
    /// back afterwards.
    pub fn days_from_monday(&self) -> i64 {
        match self {
            StartOfWeek::Monday => 0,
            StartOfWeek::Sunday => 1,
        }
    }

    /// Day offset from Sunday, the base of the engine's 1-indexed
    /// `DAYOFWEEK` numbering.
    pub fn days_from_sunday(&self) -> i64 {
        match self {
            StartOfWeek::Sunday => 0,
            StartOfWeek::Monday => 1,
        }
    }
}

/// One column of an introspected table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDescriptor {
    pub name: String,
    /// Raw dialect type name, lowercased, with parenthetical precision/scale
    /// and trailing generic parameters stripped (`decimal(10,2)` -> `decimal`,
    /// `array<int>` -> `array`).
    pub native_type: String,
    pub logical_type: LogicalType,
    /// 0-based position among the real (non-pseudo) columns.
    pub position: usize,
}

/// A table or view, optionally qualified by schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableDescriptor {
    pub name: String,
    pub schema: Option<String>,
    pub columns: Vec<ColumnDescriptor>,
}

impl TableDescriptor {
    pub fn new(name: impl Into<String>, schema: Option<String>) -> Self {
        Self {
            name: name.into(),
            schema,
            columns: Vec::new(),
        }
    }

    pub fn with_columns(mut self, columns: Vec<ColumnDescriptor>) -> Self {
        self.columns = columns;
        self
    }
}

/// Foreign key definition. The engine does not expose foreign keys, so
/// introspection always reports an empty set, but the shape is part of the
/// host contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForeignKey {
    pub column: String,
    pub referenced_table: String,
    pub referenced_column: String,
    pub referenced_schema: Option<String>,
}

/// Structured connection options supplied by the host.
///
/// Validated by presence only; no field-level schema beyond required-field
/// checks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionOptions {
    pub instance: String,
    pub service: String,
    pub workspace: String,
    pub user: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub virtual_cluster: String,
    pub schema: Option<String>,
    /// Free-form extra parameters appended verbatim and unescaped to the
    /// property string. Duplicate keys resolve however the target driver
    /// parses them (observed: last occurrence wins) -- an inherited
    /// ambiguity this layer does not resolve.
    pub additional: Option<String>,
}

/// Assembled connection URL and property string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionDescriptor {
    pub url: String,
    pub properties: String,
}

/// Universal value representation for result rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    Bytes(#[serde(with = "base64_bytes")] Vec<u8>),
    Json(serde_json::Value),
}

impl Value {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }
}

mod base64_bytes {
    use base64::{engine::general_purpose::STANDARD, Engine};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(bytes: &Vec<u8>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&STANDARD.encode(bytes))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<u8>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        STANDARD.decode(&s).map_err(serde::de::Error::custom)
    }
}

/// Column metadata attached to a result set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnInfo {
    pub name: String,
    /// Raw type name as reported by the engine.
    pub native_type: String,
}

/// A single row of data (indexed by column order)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Row {
    pub values: Vec<Value>,
}

/// Result of one executed statement, as handed back by the host's execution
/// primitive.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryResult {
    pub columns: Vec<ColumnInfo>,
    pub rows: Vec<Row>,
    pub affected_rows: Option<u64>,
}

impl QueryResult {
    pub fn empty() -> Self {
        Self {
            columns: Vec::new(),
            rows: Vec::new(),
            affected_rows: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_is_not_serialized() {
        let options = ConnectionOptions {
            instance: "acme".into(),
            service: "api.clickzetta.com".into(),
            workspace: "analytics".into(),
            user: "bi".into(),
            password: "s3cret".into(),
            virtual_cluster: "default".into(),
            schema: None,
            additional: None,
        };

        let json = serde_json::to_string(&options).expect("should serialize");
        assert!(!json.contains("s3cret"));
        assert!(json.contains("acme"));
    }

    #[test]
    fn start_of_week_offsets() {
        assert_eq!(StartOfWeek::Monday.days_from_monday(), 0);
        assert_eq!(StartOfWeek::Sunday.days_from_monday(), 1);
        assert_eq!(StartOfWeek::Sunday.days_from_sunday(), 0);
        assert_eq!(StartOfWeek::Monday.days_from_sunday(), 1);
    }

    #[test]
    fn temporal_logical_types() {
        assert!(LogicalType::Date.is_temporal());
        assert!(LogicalType::DateTime.is_temporal());
        assert!(!LogicalType::Text.is_temporal());
    }
}
