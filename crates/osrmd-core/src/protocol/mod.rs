//! Protocol primitives shared by the dispatcher and its services.
//!
//! - [`request::ParsedRequest`]: an already-parsed query addressed to a named
//!   service and protocol version.
//! - [`result`]: the `(Status, QueryResult)` pair every dispatch produces.

pub mod request;
pub mod result;

pub use request::ParsedRequest;
pub use result::{ErrorObject, Payload, QueryResult, Reply, Status};
