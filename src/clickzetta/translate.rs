//! Dialect expression translation
//!
//! Renders canonical IR nodes as ClickZetta SQL fragments. Stateless apart
//! from the configured start of week; safe to share across callers.
//!
//! Datetime differences above MONTH/DAY are derived by integer division of a
//! smaller-unit diff (year = months / 12, quarter = months / 3,
//! week = days / 7). The derivation chain is part of the contract: changing
//! it silently changes reported values.

use crate::error::{DialectError, DialectResult};
use crate::expr::{DiffUnit, Expr, ExtractUnit, IntervalUnit, Pagination, SqlFragment, TruncUnit};
use crate::types::StartOfWeek;

/// Quotes an identifier with backticks, doubling embedded backticks.
pub fn quote_identifier(name: &str) -> String {
    format!("`{}`", name.replace('`', "``"))
}

/// Renders a string literal, doubling embedded single quotes.
pub fn quote_string(s: &str) -> String {
    format!("'{}'", s.replace('\'', "''"))
}

fn trunc_keyword(unit: TruncUnit) -> &'static str {
    match unit {
        TruncUnit::Minute => "MINUTE",
        TruncUnit::Hour => "HOUR",
        TruncUnit::Day => "DAY",
        TruncUnit::Week => "WEEK",
        TruncUnit::Month => "MONTH",
        TruncUnit::Quarter => "QUARTER",
        TruncUnit::Year => "YEAR",
    }
}

fn interval_keyword(unit: IntervalUnit) -> &'static str {
    match unit {
        IntervalUnit::Second => "SECOND",
        IntervalUnit::Minute => "MINUTE",
        IntervalUnit::Hour => "HOUR",
        IntervalUnit::Day => "DAY",
        IntervalUnit::Week => "WEEK",
        IntervalUnit::Month => "MONTH",
        IntervalUnit::Quarter => "QUARTER",
        IntervalUnit::Year => "YEAR",
    }
}

/// Translator for the ClickZetta dialect.
#[derive(Debug, Clone, Copy)]
pub struct Translator {
    start_of_week: StartOfWeek,
}

impl Translator {
    pub fn new(start_of_week: StartOfWeek) -> Self {
        Self { start_of_week }
    }

    pub fn start_of_week(&self) -> StartOfWeek {
        self.start_of_week
    }

    /// Renders one IR node. Total over the supported node set; unsupported
    /// tags return `DialectError::Unsupported`.
    pub fn translate(&self, expr: &Expr) -> DialectResult<SqlFragment> {
        self.render(expr).map(SqlFragment)
    }

    fn render(&self, expr: &Expr) -> DialectResult<String> {
        Ok(match expr {
            Expr::Raw(sql) => sql.clone(),
            Expr::Int(i) => i.to_string(),
            Expr::Float(f) => f.to_string(),
            Expr::Str(s) => quote_string(s),
            Expr::Bool(b) => if *b { "TRUE" } else { "FALSE" }.to_string(),
            Expr::Now => "CURRENT_TIMESTAMP()".to_string(),
            Expr::DateTrunc { unit, expr } => self.date_trunc(*unit, &self.render(expr)?),
            Expr::DateExtract { unit, expr } => {
                let inner = self.render(expr)?;
                self.date_extract(*unit, &inner)?
            }
            Expr::IntervalAdd { unit, amount, expr } => format!(
                "TIMESTAMPADD({}, {}, {})",
                interval_keyword(*unit),
                self.render(amount)?,
                self.render(expr)?
            ),
            Expr::DatetimeDiff { unit, start, end } => {
                datetime_diff(*unit, &self.render(start)?, &self.render(end)?)
            }
            Expr::RegexExtract { expr, pattern } => format!(
                "REGEXP_EXTRACT({}, {})",
                self.render(expr)?,
                quote_string(pattern)
            ),
            Expr::RegexMatch { expr, pattern } => {
                format!("({} RLIKE {})", self.render(expr)?, quote_string(pattern))
            }
            Expr::Replace { expr, find, replace } => format!(
                "REPLACE({}, {}, {})",
                self.render(expr)?,
                quote_string(find),
                quote_string(replace)
            ),
            Expr::Percentile { expr, fraction } => {
                format!("PERCENTILE({}, {})", self.render(expr)?, fraction)
            }
            Expr::Median { expr } => format!("PERCENTILE({}, 0.5)", self.render(expr)?),
        })
    }

    /// Week truncation honors the configured start of week by shifting the
    /// input forward onto the engine-native Monday grid before truncating
    /// and back afterwards. Other units truncate directly.
    fn date_trunc(&self, unit: TruncUnit, inner: &str) -> String {
        if unit == TruncUnit::Week {
            let offset = self.start_of_week.days_from_monday();
            if offset != 0 {
                return format!(
                    "TIMESTAMPADD(DAY, -{offset}, DATE_TRUNC('WEEK', TIMESTAMPADD(DAY, {offset}, {inner})))"
                );
            }
        }
        format!("DATE_TRUNC('{}', {})", trunc_keyword(unit), inner)
    }

    fn date_extract(&self, unit: ExtractUnit, inner: &str) -> DialectResult<String> {
        let keyword = match unit {
            ExtractUnit::Second => "SECOND",
            ExtractUnit::Minute => "MINUTE",
            ExtractUnit::Hour => "HOUR",
            ExtractUnit::Day => "DAY",
            ExtractUnit::Month => "MONTH",
            ExtractUnit::Quarter => "QUARTER",
            ExtractUnit::Year => "YEAR",
            ExtractUnit::WeekOfYear => return Ok(format!("WEEKOFYEAR({inner})")),
            ExtractUnit::DayOfWeek => {
                // DAYOFWEEK is 1-indexed from Sunday. Renumber so the
                // configured start of week is day 1.
                let shift = self.start_of_week.days_from_sunday();
                return Ok(if shift == 0 {
                    format!("DAYOFWEEK({inner})")
                } else {
                    format!("(PMOD(DAYOFWEEK({inner}) - 1 - {shift}, 7) + 1)")
                });
            }
            ExtractUnit::Millisecond => {
                return Err(DialectError::unsupported(
                    "millisecond extraction is not available in this dialect",
                ))
            }
        };
        Ok(format!("EXTRACT({keyword} FROM {inner})"))
    }

    /// Applies pagination to an already-rendered query.
    ///
    /// Offset zero needs only a row limit. Otherwise the query is wrapped in
    /// a subquery that numbers rows with a window function mirroring the
    /// original ORDER BY, filters past the offset, and re-applies the limit.
    /// Without an ordering the window falls back to `ORDER BY 1` and page
    /// membership is implementation-defined.
    pub fn paginate(
        &self,
        sql: &str,
        order_by: Option<&str>,
        page: Pagination,
    ) -> DialectResult<String> {
        if page.page_size == 0 {
            return Err(DialectError::unsupported("page size must be positive"));
        }
        let limit = page.page_size;
        let offset = page.offset();
        if offset == 0 {
            return Ok(format!("{sql} LIMIT {limit}"));
        }
        let order = order_by.map(str::trim).filter(|o| !o.is_empty()).unwrap_or("1");
        Ok(format!(
            "SELECT * FROM (SELECT __page.*, ROW_NUMBER() OVER (ORDER BY {order}) AS __rownum \
             FROM ({sql}) AS __page) AS __paged WHERE __rownum > {offset} LIMIT {limit}"
        ))
    }
}

impl Default for Translator {
    fn default() -> Self {
        Self::new(StartOfWeek::Monday)
    }
}

/// YEAR, QUARTER, and WEEK diffs divide a smaller-unit integer diff rather
/// than calling `TIMESTAMPDIFF` directly, matching how the host expects
/// boundary months and days to round.
fn datetime_diff(unit: DiffUnit, start: &str, end: &str) -> String {
    match unit {
        DiffUnit::Second => format!("TIMESTAMPDIFF(SECOND, {start}, {end})"),
        DiffUnit::Minute => format!("TIMESTAMPDIFF(MINUTE, {start}, {end})"),
        DiffUnit::Hour => format!("TIMESTAMPDIFF(HOUR, {start}, {end})"),
        DiffUnit::Day => format!("TIMESTAMPDIFF(DAY, {start}, {end})"),
        DiffUnit::Month => format!("TIMESTAMPDIFF(MONTH, {start}, {end})"),
        DiffUnit::Year => format!("FLOOR(TIMESTAMPDIFF(MONTH, {start}, {end}) / 12)"),
        DiffUnit::Quarter => format!("FLOOR(TIMESTAMPDIFF(MONTH, {start}, {end}) / 3)"),
        DiffUnit::Week => format!("FLOOR(TIMESTAMPDIFF(DAY, {start}, {end}) / 7)"),
    }
}
