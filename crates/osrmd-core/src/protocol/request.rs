//! Parsed query request.

use serde::Deserialize;

/// A request that has already been split into its addressing parts by the
/// transport layer. Immutable once handed to the dispatcher.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ParsedRequest {
    /// Service name (e.g., "route").
    pub service: String,
    /// Protocol version requested by the client.
    pub version: u32,
    /// Length of the URL prefix preceding `query`; used by services when
    /// reporting error positions.
    #[serde(default)]
    pub prefix_length: usize,
    /// Service-specific query string (coordinates and options).
    pub query: String,
}

impl ParsedRequest {
    pub fn new(service: impl Into<String>, version: u32, query: impl Into<String>) -> Self {
        Self {
            service: service.into(),
            version,
            prefix_length: 0,
            query: query.into(),
        }
    }

    pub fn with_prefix_length(mut self, prefix_length: usize) -> Self {
        self.prefix_length = prefix_length;
        self
    }
}
