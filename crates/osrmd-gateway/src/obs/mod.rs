//! Monitoring exposition.
//!
//! Renders dispatcher counters and engine info as Prometheus-compatible text
//! for the `/metrics` handler. Holds no state of its own.

pub mod metrics;

pub use metrics::MonitoringFormatter;
