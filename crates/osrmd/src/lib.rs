//! Top-level facade crate for osrmd.
//!
//! Re-exports core types and the gateway library so users can depend on a single crate.

pub mod core {
    pub use osrmd_core::*;
}

pub mod gateway {
    pub use osrmd_gateway::*;
}
