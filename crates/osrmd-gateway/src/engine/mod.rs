//! Engine facade consumed by the built-in services.
//!
//! The routing engine itself lives outside this crate; services only need a
//! blocking `run` entry point and a static description of the build.

pub mod echo;

use std::collections::BTreeMap;

use thiserror::Error;

use osrmd_core::protocol::{ErrorObject, Payload};

use crate::services::ServiceKind;

pub use echo::EchoEngine;

/// Descriptive key/value pairs about the engine build and configuration.
pub type EngineInfo = BTreeMap<String, String>;

/// Failure reported by the engine for a single query.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{code}: {message}")]
pub struct EngineFailure {
    pub code: String,
    pub message: String,
}

impl EngineFailure {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

impl From<EngineFailure> for ErrorObject {
    fn from(f: EngineFailure) -> Self {
        ErrorObject::new(f.code, f.message)
    }
}

/// Query engine capability. `run` may block for the duration of the
/// computation; callers move it off the async runtime.
pub trait Engine: Send + Sync + 'static {
    fn info(&self) -> &EngineInfo;

    fn run(
        &self,
        kind: ServiceKind,
        prefix_length: usize,
        query: &str,
    ) -> std::result::Result<Payload, EngineFailure>;
}
