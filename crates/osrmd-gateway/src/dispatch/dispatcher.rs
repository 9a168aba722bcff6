use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;

use osrmd_core::error::{OsrmdError, Result};
use osrmd_core::protocol::{ParsedRequest, Reply};

use super::registry::{ServiceRegistry, BAD_SERVICE_NAME};
use crate::engine::{Engine, EngineInfo};

/// A named query handler. Implementations own their usage counter and must
/// update it without losing concurrent increments.
#[async_trait]
pub trait QueryService: Send + Sync {
    fn name(&self) -> &'static str;
    fn version(&self) -> u32;
    /// Run one query. The returned reply is handed to the caller untouched.
    async fn execute(&self, prefix_length: usize, query: &str) -> Reply;
    /// Cumulative number of `execute` calls since startup.
    fn usage(&self) -> u64;
}

/// Per-service invocation totals plus the [`BAD_SERVICE_NAME`] error bucket.
pub type UsageSnapshot = BTreeMap<String, u64>;

/// Holds one unit of in-flight load; released on drop, so every exit path of
/// `dispatch` (early return, unwind, cancelled future) gives it back.
struct LoadGuard<'a> {
    load: &'a AtomicUsize,
}

impl<'a> LoadGuard<'a> {
    fn acquire(load: &'a AtomicUsize) -> Self {
        load.fetch_add(1, Ordering::Relaxed);
        Self { load }
    }
}

impl Drop for LoadGuard<'_> {
    fn drop(&mut self) {
        self.load.fetch_sub(1, Ordering::Relaxed);
    }
}

/// Routes parsed requests to registered services and tracks load and
/// dispatch-level errors.
pub struct Dispatcher {
    registry: ServiceRegistry,
    engine: Arc<dyn Engine>,
    load: AtomicUsize,
    errors: AtomicU64,
}

impl Dispatcher {
    pub fn new(registry: ServiceRegistry, engine: Arc<dyn Engine>) -> Self {
        Self {
            registry,
            engine,
            load: AtomicUsize::new(0),
            errors: AtomicU64::new(0),
        }
    }

    pub fn registry(&self) -> &ServiceRegistry {
        &self.registry
    }

    pub async fn dispatch(&self, req: ParsedRequest) -> Reply {
        let _load = LoadGuard::acquire(&self.load);

        let service = match self.resolve(&req) {
            Ok(service) => service,
            Err(e) => {
                self.errors.fetch_add(1, Ordering::Relaxed);
                tracing::debug!(service = %req.service, version = req.version, error = %e, "dispatch rejected");
                return e.into();
            }
        };

        service.execute(req.prefix_length, &req.query).await
    }

    fn resolve(&self, req: &ParsedRequest) -> Result<&Arc<dyn QueryService>> {
        let service = self
            .registry
            .get(&req.service)
            .ok_or_else(|| OsrmdError::InvalidService(req.service.clone()))?;

        let supported = service.version();
        if supported != req.version {
            return Err(OsrmdError::InvalidVersion {
                service: req.service.clone(),
                requested: req.version,
                supported,
            });
        }
        Ok(service)
    }

    pub fn engine_info(&self) -> &EngineInfo {
        self.engine.info()
    }

    /// In-flight dispatches. May be stale as soon as it is read.
    pub fn current_load(&self) -> usize {
        self.load.load(Ordering::Relaxed)
    }

    pub fn error_count(&self) -> u64 {
        self.errors.load(Ordering::Relaxed)
    }

    pub fn usage_snapshot(&self) -> UsageSnapshot {
        let mut usage: UsageSnapshot = self
            .registry
            .iter()
            .map(|(name, svc)| (name.to_string(), svc.usage()))
            .collect();
        usage.insert(BAD_SERVICE_NAME.to_string(), self.error_count());
        usage
    }
}
