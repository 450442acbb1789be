//! Submit orchestration - Idle -> Submitting -> Idle
//!
//! `begin` runs synchronously so the request body is frozen at the moment
//! the user submits. The returned `PendingSubmission` can then be awaited
//! in place or moved onto a task.

use std::sync::Arc;

use crate::app::form::{FormStore, SubmitRejection};
use crate::models::{ContactRequest, SubmissionResult};
use crate::network::SubmissionClient;
use crate::notify::NotificationSink;

/// What happened to a submit trigger
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The request ran and produced a result
    Completed(SubmissionResult),
    /// The trigger was not dispatched
    Rejected(SubmitRejection),
}

#[derive(Clone)]
pub struct ContactController {
    form: FormStore,
    client: SubmissionClient,
    sink: Arc<dyn NotificationSink>,
}

impl ContactController {
    pub fn new(form: FormStore, client: SubmissionClient, sink: Arc<dyn NotificationSink>) -> Self {
        ContactController { form, client, sink }
    }

    pub fn form(&self) -> &FormStore {
        &self.form
    }

    /// Validate, mark in flight and snapshot the request
    pub fn begin(&self) -> Result<PendingSubmission, SubmitRejection> {
        match self.form.begin_submission() {
            Ok(request) => Ok(PendingSubmission {
                request,
                guard: InFlightGuard {
                    form: self.form.clone(),
                    armed: true,
                },
                client: self.client.clone(),
                sink: self.sink.clone(),
            }),
            Err(SubmitRejection::InFlight) => {
                tracing::debug!("Submit ignored, request already in flight");
                Err(SubmitRejection::InFlight)
            }
            Err(SubmitRejection::Invalid(e)) => {
                tracing::debug!(field = ?e.field(), "Submit blocked by validation");
                Err(SubmitRejection::Invalid(e))
            }
        }
    }

    /// Full submit: `begin` followed by `run`
    pub async fn submit(&self) -> SubmitOutcome {
        match self.begin() {
            Ok(pending) => SubmitOutcome::Completed(pending.run().await),
            Err(rejection) => SubmitOutcome::Rejected(rejection),
        }
    }
}

/// A submission that has left Idle but not yet hit the network
pub struct PendingSubmission {
    request: ContactRequest,
    guard: InFlightGuard,
    client: SubmissionClient,
    sink: Arc<dyn NotificationSink>,
}

impl PendingSubmission {
    pub fn request(&self) -> &ContactRequest {
        &self.request
    }

    /// Send, notify, and return to Idle
    pub async fn run(mut self) -> SubmissionResult {
        tracing::info!(endpoint = self.client.endpoint(), "Submitting contact form");
        let result = self.client.submit(&self.request).await;

        self.guard.release(&result);
        self.sink.notify(result.kind(), result.message());
        result
    }
}

/// Clears `submitting` on every exit, including when the task is dropped
struct InFlightGuard {
    form: FormStore,
    armed: bool,
}

impl InFlightGuard {
    fn release(&mut self, result: &SubmissionResult) {
        self.armed = false;
        self.form.finish_submission(Some(result));
    }
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        if self.armed {
            tracing::warn!("Submission dropped before completion");
            self.form.finish_submission(None);
        }
    }
}
