//! EduLink Core — transport-agnostic client domain for the EduLink One
//! school-portal API.
//!
//! This crate contains the request/response envelope codec, the endpoint
//! registry, the typed endpoint handlers, and the transport adapters. It
//! has **no terminal or UI dependency**, making it suitable for use in:
//!
//! - CLI tools (via `edulink-cli`)
//! - Desktop shells (direct embedding)
//! - HTTP bridges or bindgen layers
//!
//! The remote API is JSON-RPC 2.0 shaped: every call is a `POST` of a
//! [`RequestEnvelope`](envelope::RequestEnvelope) to `<url>?method=<Name>`,
//! and every reply carries a `result` object whose `success` flag
//! distinguishes application-level failure from transport failure.

pub mod client;
pub mod endpoints;
pub mod envelope;
pub mod error;
pub mod registry;
pub mod transport;

// Convenience re-exports
pub use client::{PortalClient, PortalState, PortalStateInner};
pub use envelope::{RequestEnvelope, ResponseEnvelope, RpcResult};
pub use error::PortalError;
pub use registry::{EndpointDef, EndpointRegistry};
pub use transport::{
    DemoRole, DemoTransport, HttpTransport, Transport, TransportRequest, TransportResponse,
};
