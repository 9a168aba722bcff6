//! osrmd core: transport-agnostic request/result primitives and the error
//! surface shared by the dispatch gateway and its services.
//!
//! This crate carries no runtime or transport dependencies so the same
//! contracts can be reused by the HTTP adapter, tests and embedding hosts.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here. Every fallible
//! path surfaces as `OsrmdError`/`Result`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod protocol;

/// Shared result type.
pub use error::{ErrorCode, OsrmdError, Result};
