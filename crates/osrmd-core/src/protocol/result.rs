//! Dispatch outcome types.

use bytes::Bytes;
use serde::Serialize;

use crate::error::OsrmdError;

/// Coarse outcome of a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Ok,
    Error,
}

/// Structured error body: `{"code": ..., "message": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorObject {
    pub code: String,
    pub message: String,
}

impl ErrorObject {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

impl From<&OsrmdError> for ErrorObject {
    fn from(err: &OsrmdError) -> Self {
        Self::new(err.code().as_str(), err.to_string())
    }
}

/// Successful query payload. Opaque to the dispatch layer.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Json(serde_json::Value),
    /// Raw bytes, e.g. vector tiles.
    Binary(Bytes),
}

/// Either a success payload or an error object.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryResult {
    Payload(Payload),
    Error(ErrorObject),
}

impl QueryResult {
    pub fn error(&self) -> Option<&ErrorObject> {
        match self {
            QueryResult::Error(e) => Some(e),
            QueryResult::Payload(_) => None,
        }
    }
}

impl From<OsrmdError> for QueryResult {
    fn from(err: OsrmdError) -> Self {
        QueryResult::Error(ErrorObject::from(&err))
    }
}

/// What a dispatch (or a delegated service call) hands back to its caller.
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub status: Status,
    pub result: QueryResult,
}

impl Reply {
    pub fn ok(payload: Payload) -> Self {
        Self {
            status: Status::Ok,
            result: QueryResult::Payload(payload),
        }
    }

    pub fn error(err: ErrorObject) -> Self {
        Self {
            status: Status::Error,
            result: QueryResult::Error(err),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == Status::Ok
    }
}

impl From<OsrmdError> for Reply {
    fn from(err: OsrmdError) -> Self {
        Self {
            status: Status::Error,
            result: err.into(),
        }
    }
}
