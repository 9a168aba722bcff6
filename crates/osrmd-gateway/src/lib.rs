//! osrmd gateway library entry.
//!
//! Wires the engine facade, the service registry, the dispatcher and the
//! monitoring formatter into a small HTTP stack. Consumed by the binary
//! (`main.rs`) and by integration tests.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod app_state;
pub mod config;
pub mod dispatch;
pub mod engine;
pub mod obs;
pub mod ops;
pub mod router;
pub mod services;
