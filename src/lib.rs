//! # FENJI Contact
//!
//! Contact form client for the FENJI Slovakia road-freight site.
//!
//! ## Features
//! - Form state holder with change subscription
//! - Required-field and e-mail validation before dispatch
//! - Single-attempt JSON submission with server error normalization
//! - Toast notifications for the outcome
//! - Terminal front end and a local log of sent inquiries
//!
//! ## Architecture
//! - Form layer (`app::form`) - state and the in-flight flag
//! - Network layer (`network`) - transport and response interpretation
//! - Orchestration (`app::controller`) - Idle -> Submitting -> Idle
//! - UI Layer (Ratatui) - App actor plus synchronous drawing

pub mod config;
pub mod constants;
pub mod models;
pub mod validation;
pub mod notify;
pub mod storage;
pub mod ui;
pub mod messages;
pub mod app;
pub mod network;

// Re-export commonly used types
pub use config::{Config, ConfigError};
pub use models::{ContactField, ContactRequest, FormState, NotificationKind, SubmissionResult};
pub use validation::ValidationError;
pub use notify::{Notification, NotificationSink, ToastQueue};
pub use app::{ContactController, FormStore, SubmitOutcome, SubmitRejection};
pub use network::{HttpTransport, RawResponse, SubmissionClient, Transport, TransportError};
