use std::net::SocketAddr;

use serde::Deserialize;
use osrmd_core::error::{OsrmdError, Result};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DaemonConfig {
    pub version: u32,

    #[serde(default)]
    pub server: ServerSection,

    #[serde(default)]
    pub engine: EngineConfig,
}

impl DaemonConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(OsrmdError::InvalidOptions(format!(
                "unsupported config version {}",
                self.version
            )));
        }

        self.server.validate()?;
        self.engine.validate()?;

        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    #[serde(default = "default_listen")]
    pub listen: String,

    #[serde(default = "default_working_threads")]
    pub working_threads: usize,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            working_threads: default_working_threads(),
        }
    }
}

impl ServerSection {
    pub fn validate(&self) -> Result<()> {
        self.listen_addr()?;
        if !(1..=1024).contains(&self.working_threads) {
            return Err(OsrmdError::InvalidOptions(
                "server.working_threads must be between 1 and 1024".into(),
            ));
        }
        Ok(())
    }

    pub fn listen_addr(&self) -> Result<SocketAddr> {
        self.listen.parse().map_err(|e| {
            OsrmdError::InvalidOptions(format!("server.listen must be a valid SocketAddr: {e}"))
        })
    }
}

fn default_listen() -> String {
    "0.0.0.0:5000".into()
}
fn default_working_threads() -> usize {
    8
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// Contraction hierarchies.
    #[default]
    Ch,
    /// Multi-level Dijkstra.
    Mld,
}

impl Algorithm {
    pub fn as_str(self) -> &'static str {
        match self {
            Algorithm::Ch => "CH",
            Algorithm::Mld => "MLD",
        }
    }
}

/// Engine settings handed to the service registry at startup.
///
/// Limits use `-1` for "unlimited"; any other value must be positive.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EngineConfig {
    #[serde(default)]
    pub algorithm: Algorithm,

    #[serde(default)]
    pub dataset: Option<String>,

    #[serde(default)]
    pub dataset_name: Option<String>,

    #[serde(default)]
    pub use_shared_memory: bool,

    #[serde(default = "unlimited")]
    pub max_locations_trip: i64,
    #[serde(default = "unlimited")]
    pub max_locations_viaroute: i64,
    #[serde(default = "unlimited")]
    pub max_locations_distance_table: i64,
    #[serde(default = "unlimited")]
    pub max_locations_map_matching: i64,
    #[serde(default = "unlimited")]
    pub max_results_nearest: i64,
    #[serde(default = "default_max_alternatives")]
    pub max_alternatives: i64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::default(),
            dataset: None,
            dataset_name: None,
            use_shared_memory: false,
            max_locations_trip: unlimited(),
            max_locations_viaroute: unlimited(),
            max_locations_distance_table: unlimited(),
            max_locations_map_matching: unlimited(),
            max_results_nearest: unlimited(),
            max_alternatives: default_max_alternatives(),
        }
    }
}

impl EngineConfig {
    pub fn validate(&self) -> Result<()> {
        let has_dataset = self.dataset.as_deref().is_some_and(|d| !d.trim().is_empty());
        if !self.use_shared_memory && !has_dataset {
            return Err(OsrmdError::InvalidOptions(
                "engine.dataset is required unless engine.use_shared_memory is set".into(),
            ));
        }

        let limits = [
            ("max_locations_trip", self.max_locations_trip),
            ("max_locations_viaroute", self.max_locations_viaroute),
            ("max_locations_distance_table", self.max_locations_distance_table),
            ("max_locations_map_matching", self.max_locations_map_matching),
            ("max_results_nearest", self.max_results_nearest),
            ("max_alternatives", self.max_alternatives),
        ];
        for (name, v) in limits {
            if v != -1 && v <= 0 {
                return Err(OsrmdError::InvalidOptions(format!(
                    "engine.{name} must be -1 (unlimited) or positive, got {v}"
                )));
            }
        }
        Ok(())
    }
}

fn unlimited() -> i64 {
    -1
}
fn default_max_alternatives() -> i64 {
    3
}
