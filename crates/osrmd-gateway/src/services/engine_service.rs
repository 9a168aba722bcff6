use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;

use osrmd_core::error::OsrmdError;
use osrmd_core::protocol::Reply;

use super::ServiceKind;
use crate::dispatch::QueryService;
use crate::engine::Engine;

/// Forwards one kind of query to the engine and counts its invocations.
pub struct EngineService {
    kind: ServiceKind,
    engine: Arc<dyn Engine>,
    usage: AtomicU64,
}

impl EngineService {
    pub fn new(kind: ServiceKind, engine: Arc<dyn Engine>) -> Self {
        Self {
            kind,
            engine,
            usage: AtomicU64::new(0),
        }
    }
}

#[async_trait]
impl QueryService for EngineService {
    fn name(&self) -> &'static str {
        self.kind.name()
    }

    fn version(&self) -> u32 {
        self.kind.version()
    }

    async fn execute(&self, prefix_length: usize, query: &str) -> Reply {
        self.usage.fetch_add(1, Ordering::Relaxed);

        let engine = Arc::clone(&self.engine);
        let kind = self.kind;
        let query = query.to_owned();
        let joined =
            tokio::task::spawn_blocking(move || engine.run(kind, prefix_length, &query)).await;

        match joined {
            Ok(Ok(payload)) => Reply::ok(payload),
            Ok(Err(failure)) => Reply::error(failure.into()),
            Err(e) if e.is_panic() => {
                tracing::error!(service = kind.name(), "engine panicked during query");
                std::panic::resume_unwind(e.into_panic())
            }
            Err(e) => Reply::from(OsrmdError::Internal(format!("engine task aborted: {e}"))),
        }
    }

    fn usage(&self) -> u64 {
        self.usage.load(Ordering::Relaxed)
    }
}
