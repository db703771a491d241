//! Connection descriptor assembly
//!
//! Builds the `clickzetta://<instance>.<service>/<workspace>[/<schema>]` URL
//! and the property string handed to the underlying JDBC-style driver. Pure
//! string construction; no network I/O happens here.

use url::Url;

use crate::error::{DialectError, DialectResult};
use crate::types::{ConnectionDescriptor, ConnectionOptions};

fn required<'a>(value: &'a str, field: &str) -> DialectResult<&'a str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(DialectError::configuration(format!(
            "missing required connection field: {field}"
        )));
    }
    Ok(trimmed)
}

/// Assembles the connection URL and property string from structured options.
///
/// Deterministic: identical options produce byte-identical output. Omitted
/// optional fields are absent from the property string rather than appearing
/// as empty parameters. The `additional` string is appended verbatim and
/// unescaped; if it repeats a key set explicitly (e.g. `schema=`), the
/// target driver's duplicate-key handling decides (last occurrence wins).
pub fn build_connection(options: &ConnectionOptions) -> DialectResult<ConnectionDescriptor> {
    let instance = required(&options.instance, "instance")?;
    let service = required(&options.service, "service")?;
    let workspace = required(&options.workspace, "workspace")?;

    let mut url = format!("clickzetta://{instance}.{service}/{workspace}");
    if let Some(schema) = options.schema.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
        url.push('/');
        url.push_str(schema);
    }

    // A malformed instance or service (spaces, embedded slashes) produces a
    // URL the driver cannot parse; catch it here as a configuration error.
    Url::parse(&url)
        .map_err(|e| DialectError::configuration(format!("invalid connection url {url:?}: {e}")))?;

    let mut properties = format!(
        "user={}&password={}&virtualCluster={}",
        options.user, options.password, options.virtual_cluster
    );
    if let Some(schema) = options.schema.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
        properties.push_str("&schema=");
        properties.push_str(schema);
    }
    if let Some(additional) = options.additional.as_deref().map(str::trim).filter(|s| !s.is_empty())
    {
        properties.push('&');
        properties.push_str(additional);
    }

    Ok(ConnectionDescriptor { url, properties })
}
