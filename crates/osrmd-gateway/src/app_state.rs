//! Shared application state for the osrmd HTTP surface.
//!
//! Startup errors are explicit (Result instead of panic): an invalid engine
//! config aborts construction before any request can be served.

use std::sync::Arc;

use osrmd_core::error::Result;

use crate::config::DaemonConfig;
use crate::dispatch::{Dispatcher, ServiceRegistry};
use crate::engine::{EchoEngine, Engine};
use crate::obs::MonitoringFormatter;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
    dispatcher: Arc<Dispatcher>,
    monitoring: MonitoringFormatter,
}

struct AppStateInner {
    cfg: DaemonConfig,
}

impl AppState {
    /// Build state backed by the bundled echo engine.
    pub fn new(cfg: DaemonConfig) -> Result<Self> {
        let engine = Arc::new(EchoEngine::new(&cfg.engine));
        Self::with_engine(cfg, engine)
    }

    pub fn with_engine(cfg: DaemonConfig, engine: Arc<dyn Engine>) -> Result<Self> {
        let registry = ServiceRegistry::from_config(&cfg.engine, Arc::clone(&engine))?;
        let dispatcher = Arc::new(Dispatcher::new(registry, engine));
        let monitoring =
            MonitoringFormatter::new(Arc::clone(&dispatcher), cfg.server.working_threads);

        Ok(Self {
            inner: Arc::new(AppStateInner { cfg }),
            dispatcher,
            monitoring,
        })
    }

    pub fn cfg(&self) -> &DaemonConfig {
        &self.inner.cfg
    }

    pub fn dispatcher(&self) -> Arc<Dispatcher> {
        Arc::clone(&self.dispatcher)
    }

    pub fn monitoring(&self) -> &MonitoringFormatter {
        &self.monitoring
    }
}
