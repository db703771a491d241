//! Query execution adapter
//!
//! Wraps the host's execution primitive with pre-execution text rewriting
//! (schema-qualifier stripping, session-tag injection, remark comment) and
//! post-execution UTC coercion of temporal columns. Execution itself, row
//! limiting, retries, and cancellation all belong to the host.

use std::sync::Arc;

use chrono::{NaiveDate, NaiveDateTime, SecondsFormat, TimeZone, Utc};
use regex::Regex;
use tracing::{debug, warn};

use crate::clickzetta::type_map;
use crate::error::DialectResult;
use crate::executor::SqlExecutor;
use crate::types::{QueryResult, Value};

/// Execution adapter for one configured database.
pub struct QueryExecutionAdapter {
    executor: Arc<dyn SqlExecutor>,
    /// Compiled matcher for the backtick-quoted default-schema qualifier.
    schema_qualifier: Option<Regex>,
}

impl QueryExecutionAdapter {
    /// `default_schema` is the logical schema name queries may be written
    /// against even though the physical layer does not expose it; matching
    /// qualifiers are stripped before execution.
    pub fn new(executor: Arc<dyn SqlExecutor>, default_schema: Option<&str>) -> Self {
        let schema_qualifier = default_schema
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .and_then(|schema| {
                let pattern = format!("`{}`\\s*\\.", regex::escape(schema));
                match Regex::new(&pattern) {
                    Ok(re) => Some(re),
                    Err(e) => {
                        warn!(schema, error = %e, "schema qualifier pattern rejected");
                        None
                    }
                }
            });
        Self {
            executor,
            schema_qualifier,
        }
    }

    /// Connection-validity checks are deliberately lenient: setup always
    /// reports success and real validation is deferred to the first query.
    /// Making this strict is a behavior change requiring its own decision.
    pub fn can_connect(&self) -> DialectResult<()> {
        Ok(())
    }

    /// Reports the engine's session timezone. Informational only: temporal
    /// results are coerced to UTC regardless of what the session reports.
    pub async fn session_timezone(&self) -> DialectResult<Option<String>> {
        let result = self
            .executor
            .query("SELECT current_timezone()", None)
            .await?;
        Ok(result
            .rows
            .first()
            .and_then(|row| row.values.first())
            .and_then(|value| value.as_str())
            .map(str::to_string))
    }

    /// Applies the pre-execution rewrites and returns the SQL actually sent.
    pub fn rewrite(
        &self,
        sql: &str,
        caller_identity: Option<&str>,
        remark: Option<&str>,
    ) -> String {
        let body = match &self.schema_qualifier {
            Some(re) => re.replace_all(sql, "").into_owned(),
            None => sql.to_string(),
        };

        let mut out = String::new();
        if let Some(remark) = remark.map(str::trim).filter(|r| !r.is_empty()) {
            // Keep the remark to one comment line regardless of input.
            out.push_str("-- ");
            out.push_str(&remark.replace(['\r', '\n'], " "));
            out.push('\n');
        }
        if let Some(identity) = caller_identity.map(str::trim).filter(|i| !i.is_empty()) {
            out.push_str("set query_tag='");
            out.push_str(&identity.replace('\'', "''"));
            out.push_str("';\n");
        }
        out.push_str(&body);
        out
    }

    /// Rewrites, executes through the host primitive, and coerces temporal
    /// columns to UTC.
    pub async fn execute(
        &self,
        sql: &str,
        row_limit: Option<u64>,
        caller_identity: Option<&str>,
        remark: Option<&str>,
    ) -> DialectResult<QueryResult> {
        let rewritten = self.rewrite(sql, caller_identity, remark);
        if rewritten != sql {
            debug!("statement rewritten before execution");
        }
        let mut result = self.executor.query(&rewritten, row_limit).await?;
        coerce_temporal_columns(&mut result);
        Ok(result)
    }
}

/// The engine hands back DATE/TIMESTAMP values in a timezone-naive textual
/// form that is ambiguous about its zone. Fix the interpretation to UTC so
/// the host always sees a zoned value.
fn coerce_temporal_columns(result: &mut QueryResult) {
    let temporal: Vec<usize> = result
        .columns
        .iter()
        .enumerate()
        .filter(|(_, c)| type_map::map_type(&c.native_type).is_temporal())
        .map(|(i, _)| i)
        .collect();
    if temporal.is_empty() {
        return;
    }

    for row in &mut result.rows {
        for &idx in &temporal {
            let coerced = match row.values.get(idx) {
                Some(Value::Text(text)) => to_utc_text(text),
                _ => None,
            };
            if let Some(utc) = coerced {
                row.values[idx] = Value::Text(utc);
            }
        }
    }
}

/// Reinterprets one temporal string as UTC, returning RFC 3339 with a `Z`
/// suffix. Already-zoned values are converted; unparseable text is left
/// untouched rather than dropped.
fn to_utc_text(text: &str) -> Option<String> {
    let trimmed = text.trim();
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(trimmed) {
        return Some(
            dt.with_timezone(&Utc)
                .to_rfc3339_opts(SecondsFormat::AutoSi, true),
        );
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M:%S%.f") {
        return Some(
            Utc.from_utc_datetime(&naive)
                .to_rfc3339_opts(SecondsFormat::AutoSi, true),
        );
    }
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        let naive = date.and_hms_opt(0, 0, 0)?;
        return Some(
            Utc.from_utc_datetime(&naive)
                .to_rfc3339_opts(SecondsFormat::AutoSi, true),
        );
    }
    None
}
