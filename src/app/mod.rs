//! App layer - form state, submit orchestration and the App actor
//!
//! `form` and `controller` are the reusable core; `state`, `commands` and
//! `actor` drive them from terminal events.

pub mod form;
pub mod controller;
pub mod state;
pub mod actor;
pub mod commands;

pub use form::{FormStore, SubmitRejection};
pub use controller::{ContactController, PendingSubmission, SubmitOutcome};
pub use state::AppState;
pub use actor::AppActor;
