//! SqlDialectAdapter trait definition
//!
//! One explicit interface with a method per dialect operation, implemented
//! once per supported engine and selected through [`crate::DialectRegistry`]
//! at construction time. This replaces the host's ambient
//! dispatch-on-driver-keyword pattern with a fixed seam.

use serde::{Deserialize, Serialize};

use crate::error::DialectResult;
use crate::expr::{Expr, Pagination, SqlFragment};
use crate::types::{ConnectionDescriptor, ConnectionOptions, LogicalType, StartOfWeek};

/// Capabilities the host probes per feature flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DialectFeature {
    DatetimeDiff,
    Now,
    Percentile,
    Regex,
    WindowFunctions,
    SetTimezone,
    ForeignKeys,
    SchemaQualifiedNames,
}

/// Core trait every dialect adapter implements.
///
/// All methods are pure and synchronous; they hold no shared mutable state
/// and are safe to call from arbitrarily many concurrent callers. Blocking
/// I/O lives in the introspector and execution adapter, never here.
pub trait SqlDialectAdapter: Send + Sync {
    /// Unique identifier for this dialect (e.g. "clickzetta").
    fn dialect_id(&self) -> &'static str;

    /// Human-readable name for this dialect.
    fn dialect_name(&self) -> &'static str;

    /// Answers a host feature probe.
    fn supports(&self, feature: DialectFeature) -> bool;

    /// First day of the week this adapter numbers and truncates against.
    fn default_start_of_week(&self) -> StartOfWeek;

    /// Quotes an identifier per the dialect's quoting convention.
    fn quote_identifier(&self, name: &str) -> String;

    /// Maps a native type name to the host's logical type taxonomy.
    ///
    /// Total over all inputs: unrecognized names map to
    /// [`LogicalType::Unknown`] rather than failing.
    fn map_type(&self, native_type: &str) -> LogicalType;

    /// Assembles the connection URL and property string. Pure string
    /// construction, no network I/O.
    fn build_connection(&self, options: &ConnectionOptions) -> DialectResult<ConnectionDescriptor>;

    /// Renders one IR node as a dialect SQL fragment.
    ///
    /// Total over the supported node set; an unsupported tag is a programmer
    /// error on the host side and yields `DialectError::Unsupported`.
    fn translate(&self, expr: &Expr) -> DialectResult<SqlFragment>;

    /// Applies pagination to an already-rendered query.
    ///
    /// `order_by` must mirror the query's original ORDER BY so the window
    /// function numbers rows identically. Without one, page membership is
    /// implementation-defined.
    fn paginate(&self, sql: &str, order_by: Option<&str>, page: Pagination)
        -> DialectResult<String>;

    /// Light message-pattern classification of driver-level failures,
    /// e.g. recognizing an "object does not exist" response as a wrong
    /// database name. Returns `None` when no pattern matches.
    fn classify_connection_message(&self, message: &str) -> Option<&'static str>;
}
