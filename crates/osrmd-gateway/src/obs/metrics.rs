use std::fmt::Write;
use std::sync::Arc;

use crate::dispatch::Dispatcher;

pub const INSTANCE_INFO: &str = "osrm_routed_instance_info";
pub const REQUESTS_COUNT: &str = "osrm_http_requests_count";
pub const WORKERS_BUSY: &str = "osrm_workers_busy";

/// Helper to escape label values.
fn escape_label(v: &str) -> String {
    v.replace('\\', "\\\\").replace('"', "\\\"").replace('\n', "\\n")
}

/// Read-only view over a [`Dispatcher`] producing exposition text.
///
/// Each counter is read atomically, but the output as a whole is not a
/// consistent snapshot across counters.
#[derive(Clone)]
pub struct MonitoringFormatter {
    dispatcher: Arc<Dispatcher>,
    working_threads: usize,
}

impl MonitoringFormatter {
    pub fn new(dispatcher: Arc<Dispatcher>, working_threads: usize) -> Self {
        Self {
            dispatcher,
            working_threads,
        }
    }

    pub fn format(&self) -> Vec<u8> {
        self.render().into_bytes()
    }

    pub fn render(&self) -> String {
        let mut out = String::new();

        let mut labels: Vec<String> = self
            .dispatcher
            .engine_info()
            .iter()
            .map(|(k, v)| format!("{}=\"{}\"", k, escape_label(v)))
            .collect();
        labels.push(format!("working_threads=\"{}\"", self.working_threads));
        let _ = writeln!(out, "# TYPE {INSTANCE_INFO} gauge");
        let _ = writeln!(out, "{}{{{}}} 1", INSTANCE_INFO, labels.join(","));

        let _ = writeln!(out, "# TYPE {REQUESTS_COUNT} counter");
        for (plugin, count) in self.dispatcher.usage_snapshot() {
            let _ = writeln!(
                out,
                "{}{{plugin=\"{}\"}} {}",
                REQUESTS_COUNT,
                escape_label(&plugin),
                count
            );
        }

        let _ = writeln!(out, "# TYPE {WORKERS_BUSY} gauge");
        let _ = writeln!(out, "{} {}", WORKERS_BUSY, self.dispatcher.current_load());
        out
    }
}
