//! Host execution primitive
//!
//! The host owns connections, pooling, retries, timeouts, and cancellation.
//! This crate only sees an object-safe "execute SQL, return rows" seam and
//! never initiates background work of its own.

use async_trait::async_trait;

use crate::error::DialectResult;
use crate::types::QueryResult;

/// Host-supplied primitive that executes one SQL statement over an already
/// established connection and returns its tabular result.
#[async_trait]
pub trait SqlExecutor: Send + Sync {
    /// Executes `sql`, truncating the result to `row_limit` rows when set.
    ///
    /// The limit is passed through to the host's generic execution wrapper;
    /// this layer never re-implements limiting by rewriting the query.
    async fn query(&self, sql: &str, row_limit: Option<u64>) -> DialectResult<QueryResult>;
}
