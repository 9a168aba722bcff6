//! Dispatcher module exports.
//!
//! Re-exports the dispatcher, the service registry and the service trait so
//! downstream consumers can depend on this module directly.

pub mod dispatcher;
pub mod registry;

pub use dispatcher::{Dispatcher, QueryService, UsageSnapshot};
pub use registry::{ServiceRegistry, BAD_SERVICE_NAME};
