// SPDX-License-Identifier: Apache-2.0

//! ClickZetta dialect adapter
//!
//! The one engine shipped with this crate. Pure dialect operations live on
//! [`ClickZettaDialect`]; blocking I/O over a host-supplied executor lives
//! in [`SchemaIntrospector`] and [`QueryExecutionAdapter`].

pub mod connection;
pub mod execute;
pub mod introspect;
pub mod translate;
pub mod type_map;

pub use execute::QueryExecutionAdapter;
pub use introspect::{IntrospectionConfig, SchemaIntrospector};
pub use translate::Translator;

use crate::adapter::{DialectFeature, SqlDialectAdapter};
use crate::error::DialectResult;
use crate::expr::{Expr, Pagination, SqlFragment};
use crate::types::{ConnectionDescriptor, ConnectionOptions, LogicalType, StartOfWeek};

/// Dialect adapter for the ClickZetta lakehouse engine.
pub struct ClickZettaDialect {
    translator: Translator,
}

impl ClickZettaDialect {
    /// Engine-native week start is Monday; pass a different start to shift
    /// week truncation and day-of-week numbering.
    pub fn new(start_of_week: StartOfWeek) -> Self {
        Self {
            translator: Translator::new(start_of_week),
        }
    }
}

impl Default for ClickZettaDialect {
    fn default() -> Self {
        Self::new(StartOfWeek::Monday)
    }
}

impl SqlDialectAdapter for ClickZettaDialect {
    fn dialect_id(&self) -> &'static str {
        "clickzetta"
    }

    fn dialect_name(&self) -> &'static str {
        "ClickZetta"
    }

    fn supports(&self, feature: DialectFeature) -> bool {
        match feature {
            DialectFeature::DatetimeDiff
            | DialectFeature::Now
            | DialectFeature::Percentile
            | DialectFeature::Regex
            | DialectFeature::WindowFunctions
            | DialectFeature::SchemaQualifiedNames => true,
            // The engine neither exposes foreign keys nor honors per-session
            // timezone overrides; results are coerced to UTC instead.
            DialectFeature::ForeignKeys | DialectFeature::SetTimezone => false,
        }
    }

    fn default_start_of_week(&self) -> StartOfWeek {
        self.translator.start_of_week()
    }

    fn quote_identifier(&self, name: &str) -> String {
        translate::quote_identifier(name)
    }

    fn map_type(&self, native_type: &str) -> LogicalType {
        type_map::map_type(native_type)
    }

    fn build_connection(&self, options: &ConnectionOptions) -> DialectResult<ConnectionDescriptor> {
        connection::build_connection(options)
    }

    fn translate(&self, expr: &Expr) -> DialectResult<SqlFragment> {
        self.translator.translate(expr)
    }

    fn paginate(
        &self,
        sql: &str,
        order_by: Option<&str>,
        page: Pagination,
    ) -> DialectResult<String> {
        self.translator.paginate(sql, order_by, page)
    }

    fn classify_connection_message(&self, message: &str) -> Option<&'static str> {
        let lowered = message.to_ascii_lowercase();
        if lowered.contains("object does not exist") || lowered.contains("does not exist") {
            Some("the workspace or schema name looks incorrect")
        } else if lowered.contains("invalid user") || lowered.contains("authentication failed") {
            Some("the user name or password looks incorrect")
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feature_flags() {
        let dialect = ClickZettaDialect::default();
        assert!(dialect.supports(DialectFeature::DatetimeDiff));
        assert!(dialect.supports(DialectFeature::Now));
        assert!(dialect.supports(DialectFeature::Percentile));
        assert!(!dialect.supports(DialectFeature::ForeignKeys));
        assert!(!dialect.supports(DialectFeature::SetTimezone));
    }

    #[test]
    fn default_week_start_is_monday() {
        assert_eq!(
            ClickZettaDialect::default().default_start_of_week(),
            StartOfWeek::Monday
        );
    }

    #[test]
    fn classifies_driver_messages() {
        let dialect = ClickZettaDialect::default();
        assert!(dialect
            .classify_connection_message("CZLH-42000: Object does not exist: ws_x")
            .is_some());
        assert!(dialect
            .classify_connection_message("authentication failed for bi_reader")
            .is_some());
        assert!(dialect.classify_connection_message("network unreachable").is_none());
    }
}
