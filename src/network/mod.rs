//! Network layer - contact submission over HTTP
//!
//! `client` owns the transport and the submission call, `response` turns
//! raw replies into a `SubmissionResult`.

pub mod client;
pub mod response;

pub use client::{HttpTransport, RawResponse, SubmissionClient, Transport, TransportError};
