//! Schema, table, and column enumeration
//!
//! Issues `SHOW SCHEMAS` / `SHOW TABLES IN` / `DESCRIBE` statements over the
//! host-supplied executor and parses the tabular results into descriptors.
//! Identifier interpolation is string concatenation with backtick escaping;
//! schema and table names come from trusted internal enumeration, not end
//! user input.

use std::collections::HashSet;
use std::sync::Arc;

use tracing::debug;

use crate::clickzetta::translate::quote_identifier;
use crate::clickzetta::type_map;
use crate::error::DialectResult;
use crate::executor::SqlExecutor;
use crate::types::{ColumnDescriptor, ForeignKey, QueryResult, TableDescriptor};

/// Introspection configuration.
#[derive(Debug, Clone)]
pub struct IntrospectionConfig {
    /// When set, only this schema is introspected and full-catalog
    /// enumeration is skipped entirely.
    pub schema: Option<String>,
    /// Internal/system schemas removed from full-catalog enumeration.
    pub excluded_schemas: HashSet<String>,
}

impl Default for IntrospectionConfig {
    fn default() -> Self {
        Self {
            schema: None,
            excluded_schemas: ["information_schema", "sys"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

/// Enumerates schemas, tables, and columns over a supplied connection.
pub struct SchemaIntrospector {
    executor: Arc<dyn SqlExecutor>,
    config: IntrospectionConfig,
}

/// `DESCRIBE` output interleaves partition and metadata pseudo-rows with the
/// real columns; anything blank or `#`-prefixed is filtered, not surfaced.
fn is_pseudo_row(name: &str, native_type: &str) -> bool {
    let name = name.trim();
    let native_type = native_type.trim();
    name.is_empty()
        || native_type.is_empty()
        || name.starts_with('#')
        || native_type.starts_with('#')
}

/// Finds a column by name, falling back to a positional default when the
/// engine revision labels metadata columns differently.
fn column_index(result: &QueryResult, name: &str, fallback: usize) -> usize {
    result
        .columns
        .iter()
        .position(|c| c.name.eq_ignore_ascii_case(name))
        .unwrap_or(fallback)
}

fn string_at(result: &QueryResult, row: usize, idx: usize) -> Option<String> {
    result
        .rows
        .get(row)
        .and_then(|r| r.values.get(idx))
        .and_then(|v| v.as_str())
        .map(str::to_string)
}

impl SchemaIntrospector {
    pub fn new(executor: Arc<dyn SqlExecutor>, config: IntrospectionConfig) -> Self {
        Self { executor, config }
    }

    /// Lists visible schemas, minus the configured exclusion set. With a
    /// pinned schema the catalog query is skipped entirely.
    pub async fn list_schemas(&self) -> DialectResult<Vec<String>> {
        if let Some(schema) = &self.config.schema {
            return Ok(vec![schema.clone()]);
        }

        let result = self.executor.query("SHOW SCHEMAS", None).await?;
        let name_idx = column_index(&result, "schema_name", 0);

        let mut schemas = Vec::new();
        for row in 0..result.rows.len() {
            let Some(name) = string_at(&result, row, name_idx) else {
                continue;
            };
            let name = name.trim().to_string();
            if name.is_empty() || self.config.excluded_schemas.contains(&name) {
                continue;
            }
            schemas.push(name);
        }
        debug!(count = schemas.len(), "enumerated schemas");
        Ok(schemas)
    }

    /// Lists tables in one schema as name+schema descriptors (no columns).
    pub async fn list_tables(&self, schema: &str) -> DialectResult<Vec<TableDescriptor>> {
        let sql = format!("SHOW TABLES IN {}", quote_identifier(schema));
        let result = self.executor.query(&sql, None).await?;
        // SHOW TABLES emits (schema_name, table_name, ..) on current
        // revisions; older ones emit the bare name first.
        let fallback = usize::from(result.columns.len() > 1);
        let name_idx = column_index(&result, "table_name", fallback);

        let mut tables = Vec::new();
        for row in 0..result.rows.len() {
            let Some(name) = string_at(&result, row, name_idx) else {
                continue;
            };
            let name = name.trim();
            if name.is_empty() || name.starts_with('#') {
                continue;
            }
            tables.push(TableDescriptor::new(name, Some(schema.to_string())));
        }
        debug!(schema, count = tables.len(), "enumerated tables");
        Ok(tables)
    }

    /// Describes one table, returning a fully populated descriptor.
    pub async fn describe_table(
        &self,
        schema: &str,
        table: &str,
    ) -> DialectResult<TableDescriptor> {
        let sql = format!(
            "DESCRIBE {}.{}",
            quote_identifier(schema),
            quote_identifier(table)
        );
        let result = self.executor.query(&sql, None).await?;
        let name_idx = column_index(&result, "column_name", 0);
        let type_idx = column_index(&result, "data_type", 1);

        let mut columns = Vec::new();
        for row in 0..result.rows.len() {
            let name = string_at(&result, row, name_idx).unwrap_or_default();
            let raw_type = string_at(&result, row, type_idx).unwrap_or_default();
            if is_pseudo_row(&name, &raw_type) {
                continue;
            }
            let native_type = type_map::normalize_type_name(&raw_type);
            let logical_type = type_map::map_type(&raw_type);
            columns.push(ColumnDescriptor {
                name: name.trim().to_string(),
                native_type,
                logical_type,
                position: columns.len(),
            });
        }
        debug!(schema, table, count = columns.len(), "described table");
        Ok(TableDescriptor::new(table, Some(schema.to_string())).with_columns(columns))
    }

    /// The engine does not expose foreign keys; the contract is an empty
    /// set, never an attempt that fails.
    pub async fn list_foreign_keys(
        &self,
        _schema: &str,
        _table: &str,
    ) -> DialectResult<Vec<ForeignKey>> {
        Ok(Vec::new())
    }
}
