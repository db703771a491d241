// SPDX-License-Identifier: Apache-2.0

//! Normalized error types for the dialect adapter
//!
//! Everything surfaced by this crate maps to one of these variants so the
//! host can handle failures uniformly. No retries happen here; errors
//! propagate to the caller's context unchanged.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for all dialect-adapter operations
#[derive(Debug, Error, Serialize, Deserialize)]
pub enum DialectError {
    #[error("Invalid connection configuration: {message}")]
    Configuration { message: String },

    #[error("Operation not supported: {message}")]
    Unsupported { message: String },

    #[error("Connection failed: {message}")]
    Connection {
        message: String,
        /// Light message-pattern classification, e.g. an "object does not
        /// exist" response hinting at a wrong workspace or schema name.
        hint: Option<String>,
    },

    #[error("Query execution failed: {message}")]
    Execution { message: String },
}

impl DialectError {
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration { message: msg.into() }
    }

    pub fn unsupported(msg: impl Into<String>) -> Self {
        Self::Unsupported { message: msg.into() }
    }

    pub fn connection(msg: impl Into<String>) -> Self {
        Self::Connection {
            message: msg.into(),
            hint: None,
        }
    }

    pub fn connection_with_hint(msg: impl Into<String>, hint: impl Into<String>) -> Self {
        Self::Connection {
            message: msg.into(),
            hint: Some(hint.into()),
        }
    }

    pub fn execution(msg: impl Into<String>) -> Self {
        Self::Execution { message: msg.into() }
    }
}

/// Result type alias for dialect operations
pub type DialectResult<T> = Result<T, DialectError>;
