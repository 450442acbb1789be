//! Form state holder - the single source of truth for the contact form
//!
//! Wraps a `tokio::sync::watch` channel so any number of observers can
//! `subscribe` and re-render on change. The `submitting` flag is flipped
//! with a check-and-set inside `send_if_modified`, which makes it the only
//! exclusion mechanism needed.

use std::sync::Arc;

use tokio::sync::watch;

use crate::models::{ContactField, ContactRequest, FormState, SubmissionResult};
use crate::validation::{self, ValidationError};

/// Why a submit trigger was not dispatched
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitRejection {
    /// A submission is already running
    InFlight,
    /// A required field is missing or malformed
    Invalid(ValidationError),
}

#[derive(Clone)]
pub struct FormStore {
    tx: Arc<watch::Sender<FormState>>,
}

impl Default for FormStore {
    fn default() -> Self {
        Self::new()
    }
}

impl FormStore {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(FormState::default());
        FormStore { tx: Arc::new(tx) }
    }

    /// Snapshot of the current state
    pub fn get(&self) -> FormState {
        self.tx.borrow().clone()
    }

    /// Replace the four inputs. `submitting` is owned by the submission
    /// lifecycle and keeps its current value.
    pub fn set(&self, state: FormState) {
        self.tx.send_if_modified(|current| {
            let next = FormState {
                submitting: current.submitting,
                ..state
            };
            if *current == next {
                return false;
            }
            *current = next;
            true
        });
    }

    pub fn subscribe(&self) -> watch::Receiver<FormState> {
        self.tx.subscribe()
    }

    pub fn is_submitting(&self) -> bool {
        self.tx.borrow().submitting
    }

    pub fn field(&self, field: ContactField) -> String {
        self.tx.borrow().field(field).to_string()
    }

    pub fn update_field(&self, field: ContactField, value: impl Into<String>) {
        let value = value.into();
        self.tx.send_if_modified(|state| {
            let slot = state.field_mut(field);
            if *slot == value {
                return false;
            }
            *slot = value;
            true
        });
    }

    /// Clear the four inputs; `submitting` is untouched
    pub fn reset(&self) {
        self.tx.send_if_modified(|state| {
            let dirty = ContactField::ALL.iter().any(|f| !state.field(*f).is_empty());
            state.clear_fields();
            dirty
        });
    }

    /// Idle -> Submitting. Validates and snapshots the request atomically.
    pub fn begin_submission(&self) -> Result<ContactRequest, SubmitRejection> {
        let mut outcome = Err(SubmitRejection::InFlight);
        self.tx.send_if_modified(|state| {
            if state.submitting {
                return false;
            }
            match validation::validate(state) {
                Ok(()) => {
                    state.submitting = true;
                    outcome = Ok(state.to_request());
                    true
                }
                Err(e) => {
                    outcome = Err(SubmitRejection::Invalid(e));
                    false
                }
            }
        });
        outcome
    }

    /// Submitting -> Idle. Clears the form on success only.
    pub fn finish_submission(&self, result: Option<&SubmissionResult>) {
        self.tx.send_modify(|state| {
            if result.is_some_and(SubmissionResult::is_success) {
                state.clear_fields();
            }
            state.submitting = false;
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_store() -> FormStore {
        let store = FormStore::new();
        store.update_field(ContactField::Name, "Ján");
        store.update_field(ContactField::Email, "jan@example.com");
        store.update_field(ContactField::Message, "Dobrý deň");
        store
    }

    #[test]
    fn test_update_field_is_immediate() {
        let store = FormStore::new();
        store.update_field(ContactField::Phone, "0901234567");
        assert_eq!(store.field(ContactField::Phone), "0901234567");
        assert_eq!(store.get().phone, "0901234567");
    }

    #[test]
    fn test_reset_is_idempotent() {
        let store = filled_store();
        store.reset();
        let once = store.get();
        store.reset();
        assert_eq!(store.get(), once);
        assert_eq!(once, FormState::default());
    }

    #[test]
    fn test_reset_keeps_submitting_flag() {
        let store = filled_store();
        store.begin_submission().unwrap();
        store.reset();
        assert!(store.is_submitting());
    }

    #[test]
    fn test_begin_rejects_while_in_flight() {
        let store = filled_store();
        let request = store.begin_submission().unwrap();
        assert_eq!(request.name, "Ján");
        assert_eq!(store.begin_submission(), Err(SubmitRejection::InFlight));
    }

    #[test]
    fn test_request_email_is_trimmed() {
        let store = filled_store();
        store.update_field(ContactField::Email, " jan@example.com ");
        let request = store.begin_submission().unwrap();
        assert_eq!(request.email, "jan@example.com");
    }

    #[tokio::test]
    async fn test_set_keeps_in_flight_flag() {
        let store = filled_store();
        store.begin_submission().unwrap();
        let mut rx = store.subscribe();

        store.set(FormState {
            name: "Mária".into(),
            email: "maria@example.com".into(),
            phone: "0901234567".into(),
            message: "Zdravím".into(),
            submitting: false,
        });

        rx.changed().await.unwrap();
        let seen = rx.borrow_and_update().clone();
        assert_eq!(seen.name, "Mária");
        assert!(seen.submitting);
        assert_eq!(store.begin_submission(), Err(SubmitRejection::InFlight));
    }

    #[test]
    fn test_begin_rejects_invalid_form() {
        let store = FormStore::new();
        store.update_field(ContactField::Name, "Ján");
        assert_eq!(
            store.begin_submission(),
            Err(SubmitRejection::Invalid(ValidationError::MissingEmail))
        );
        assert!(!store.is_submitting());
    }

    #[test]
    fn test_finish_failure_preserves_input() {
        let store = filled_store();
        store.begin_submission().unwrap();
        store.finish_submission(Some(&SubmissionResult::failure("Invalid email")));
        let state = store.get();
        assert!(!state.submitting);
        assert_eq!(state.name, "Ján");
    }

    #[test]
    fn test_finish_success_clears_input() {
        let store = filled_store();
        store.begin_submission().unwrap();
        store.finish_submission(Some(&SubmissionResult::success("OK")));
        assert_eq!(store.get(), FormState::default());
    }

    #[tokio::test]
    async fn test_subscribers_see_changes() {
        let store = FormStore::new();
        let mut rx = store.subscribe();
        store.update_field(ContactField::Name, "Mária");
        rx.changed().await.unwrap();
        assert_eq!(rx.borrow_and_update().name, "Mária");

        // no-op update does not wake subscribers
        store.update_field(ContactField::Name, "Mária");
        assert!(!rx.has_changed().unwrap());
    }
}
