//! Shared fixtures for gateway integration tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]
#![allow(dead_code)]

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;

use osrmd_core::protocol::Reply;
use osrmd_gateway::config::EngineConfig;
use osrmd_gateway::dispatch::{Dispatcher, QueryService, ServiceRegistry};
use osrmd_gateway::engine::{EchoEngine, Engine};

pub fn engine_config() -> EngineConfig {
    EngineConfig {
        dataset: Some("berlin.osrm".into()),
        dataset_name: Some("berlin".into()),
        ..EngineConfig::default()
    }
}

pub fn echo_engine() -> Arc<dyn Engine> {
    Arc::new(EchoEngine::new(&engine_config()))
}

/// Dispatcher over the six built-in services backed by the echo engine.
pub fn builtin_dispatcher() -> Arc<Dispatcher> {
    let engine = echo_engine();
    let registry = ServiceRegistry::from_config(&engine_config(), Arc::clone(&engine)).unwrap();
    Arc::new(Dispatcher::new(registry, engine))
}

pub fn dispatcher_with(services: Vec<Arc<dyn QueryService>>) -> Arc<Dispatcher> {
    let registry = ServiceRegistry::new(services).unwrap();
    Arc::new(Dispatcher::new(registry, echo_engine()))
}

/// Returns a canned reply and counts calls.
pub struct FixedService {
    name: &'static str,
    version: u32,
    reply: Reply,
    usage: AtomicU64,
}

impl FixedService {
    pub fn new(name: &'static str, version: u32, reply: Reply) -> Arc<dyn QueryService> {
        Arc::new(Self {
            name,
            version,
            reply,
            usage: AtomicU64::new(0),
        })
    }
}

#[async_trait]
impl QueryService for FixedService {
    fn name(&self) -> &'static str {
        self.name
    }

    fn version(&self) -> u32 {
        self.version
    }

    async fn execute(&self, _prefix_length: usize, _query: &str) -> Reply {
        self.usage.fetch_add(1, Ordering::Relaxed);
        self.reply.clone()
    }

    fn usage(&self) -> u64 {
        self.usage.load(Ordering::Relaxed)
    }
}
