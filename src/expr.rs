//! Canonical expression IR accepted by the dialect translator
//!
//! This enum stands in for the host's engine-independent query
//! representation. Sub-expressions the host has already compiled arrive as
//! [`Expr::Raw`] fragments; the translator never inspects their contents.

use serde::{Deserialize, Serialize};

/// Rendered dialect SQL fragment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SqlFragment(pub String);

impl SqlFragment {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SqlFragment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for SqlFragment {
    fn from(s: String) -> Self {
        SqlFragment(s)
    }
}

/// Unit for date truncation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TruncUnit {
    Minute,
    Hour,
    Day,
    Week,
    Month,
    Quarter,
    Year,
}

/// Unit for date-part extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtractUnit {
    Second,
    Minute,
    Hour,
    Day,
    DayOfWeek,
    WeekOfYear,
    Month,
    Quarter,
    Year,
    /// Not representable in this dialect; translation fails with an
    /// unsupported-operation error.
    Millisecond,
}

/// Unit for interval addition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntervalUnit {
    Second,
    Minute,
    Hour,
    Day,
    Week,
    Month,
    Quarter,
    Year,
}

/// Unit for datetime difference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiffUnit {
    Second,
    Minute,
    Hour,
    Day,
    Week,
    Month,
    Quarter,
    Year,
}

/// One node of the canonical query IR.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Expr {
    /// Already-compiled SQL fragment from the host (column reference,
    /// nested expression, subquery).
    Raw(String),
    Int(i64),
    Float(f64),
    Str(String),
    Bool(bool),
    Now,
    DateTrunc {
        unit: TruncUnit,
        expr: Box<Expr>,
    },
    DateExtract {
        unit: ExtractUnit,
        expr: Box<Expr>,
    },
    IntervalAdd {
        unit: IntervalUnit,
        amount: Box<Expr>,
        expr: Box<Expr>,
    },
    DatetimeDiff {
        unit: DiffUnit,
        start: Box<Expr>,
        end: Box<Expr>,
    },
    RegexExtract {
        expr: Box<Expr>,
        pattern: String,
    },
    RegexMatch {
        expr: Box<Expr>,
        pattern: String,
    },
    Replace {
        expr: Box<Expr>,
        find: String,
        replace: String,
    },
    Percentile {
        expr: Box<Expr>,
        fraction: f64,
    },
    Median {
        expr: Box<Expr>,
    },
}

impl Expr {
    pub fn raw(sql: impl Into<String>) -> Self {
        Expr::Raw(sql.into())
    }
}

/// Page request for result pagination. Pages are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub page: u64,
    pub page_size: u64,
}

impl Pagination {
    pub fn new(page: u64, page_size: u64) -> Self {
        Self { page, page_size }
    }

    /// Rows to skip before the requested page. Page 0 is tolerated and
    /// treated as page 1.
    pub fn offset(&self) -> u64 {
        self.page.saturating_sub(1) * self.page_size
    }
}
