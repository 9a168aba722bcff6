//! Immutable name -> service mapping, built once at startup.

use std::collections::HashMap;
use std::sync::Arc;

use osrmd_core::error::{OsrmdError, Result};

use super::QueryService;
use crate::config::EngineConfig;
use crate::engine::Engine;
use crate::services::{EngineService, ServiceKind};

/// Usage bucket that aggregates dispatch-level errors. Never a service name.
pub const BAD_SERVICE_NAME: &str = "invalid";

pub struct ServiceRegistry {
    services: HashMap<&'static str, Arc<dyn QueryService>>,
}

impl ServiceRegistry {
    /// Validate the engine config and register one service per [`ServiceKind`].
    pub fn from_config(cfg: &EngineConfig, engine: Arc<dyn Engine>) -> Result<Self> {
        cfg.validate()?;

        let services = ServiceKind::ALL.into_iter().map(|kind| {
            Arc::new(EngineService::new(kind, Arc::clone(&engine))) as Arc<dyn QueryService>
        });
        Self::new(services)
    }

    pub fn new(services: impl IntoIterator<Item = Arc<dyn QueryService>>) -> Result<Self> {
        let mut map: HashMap<&'static str, Arc<dyn QueryService>> = HashMap::new();

        for svc in services {
            let name = svc.name();
            if name == BAD_SERVICE_NAME {
                return Err(OsrmdError::InvalidOptions(format!(
                    "service name {name:?} is reserved for the error bucket"
                )));
            }
            if map.contains_key(name) {
                return Err(OsrmdError::InvalidOptions(format!(
                    "service {name:?} registered twice"
                )));
            }
            tracing::debug!(service = name, version = svc.version(), "service registered");
            map.insert(name, svc);
        }

        if map.is_empty() {
            return Err(OsrmdError::InvalidOptions("no services registered".into()));
        }
        tracing::info!(services = map.len(), "service registry ready");

        Ok(Self { services: map })
    }

    pub fn get(&self, name: &str) -> Option<&Arc<dyn QueryService>> {
        self.services.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &Arc<dyn QueryService>)> {
        self.services.iter().map(|(k, v)| (*k, v))
    }

    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.services.keys().copied().collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.services.len()
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }
}
