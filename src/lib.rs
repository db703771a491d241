//! clickzetta-dialect - standalone SQL dialect adapter for the ClickZetta
//! lakehouse engine
//!
//! Adapts a host BI platform's canonical query IR, type taxonomy, and
//! catalog model to ClickZetta SQL. The host owns connections, pooling, and
//! execution; this crate owns the mapping table, the SQL fragment templates,
//! connection-descriptor assembly, metadata-statement parsing, and the
//! pre/post-execution rewrites. All translation entry points are pure and
//! callable from any number of concurrent callers.

pub mod adapter;
pub mod clickzetta;
pub mod error;
pub mod executor;
pub mod expr;
pub mod registry;
pub mod types;

pub use adapter::{DialectFeature, SqlDialectAdapter};
pub use clickzetta::{
    ClickZettaDialect, IntrospectionConfig, QueryExecutionAdapter, SchemaIntrospector,
};
pub use error::{DialectError, DialectResult};
pub use executor::SqlExecutor;
pub use expr::{DiffUnit, Expr, ExtractUnit, IntervalUnit, Pagination, SqlFragment, TruncUnit};
pub use registry::DialectRegistry;
pub use types::*;
