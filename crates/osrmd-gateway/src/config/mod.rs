//! Daemon config loader (strict parsing).

pub mod schema;

use std::fs;

use osrmd_core::error::{OsrmdError, Result};

pub use schema::{Algorithm, DaemonConfig, EngineConfig, ServerSection};

pub fn load_from_file(path: &str) -> Result<DaemonConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| OsrmdError::Internal(format!("read config failed: {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<DaemonConfig> {
    let cfg: DaemonConfig = serde_yaml::from_str(s)
        .map_err(|e| OsrmdError::InvalidOptions(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}
