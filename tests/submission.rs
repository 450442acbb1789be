//! Submit flow scenarios against an in-process transport

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::{json, Value};
use tokio::sync::Notify;

use fenji_contact::constants::FALLBACK_ERROR_MESSAGE;
use fenji_contact::{
    Config, ContactController, ContactField, FormState, FormStore, Notification, NotificationKind,
    NotificationSink, RawResponse, SubmissionClient, SubmissionResult, SubmitOutcome,
    SubmitRejection, Transport, TransportError, ValidationError,
};

#[derive(Default)]
struct MockTransport {
    replies: Mutex<VecDeque<Result<RawResponse, TransportError>>>,
    bodies: Mutex<Vec<Value>>,
    calls: AtomicUsize,
    gate: Option<Arc<Notify>>,
}

impl MockTransport {
    fn replying(reply: Result<RawResponse, TransportError>) -> Self {
        MockTransport {
            replies: Mutex::new(VecDeque::from([reply])),
            ..Default::default()
        }
    }

    fn gated(mut self, gate: Arc<Notify>) -> Self {
        self.gate = Some(gate);
        self
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn post_json(&self, _url: &str, body: &Value) -> Result<RawResponse, TransportError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.bodies.lock().unwrap().push(body.clone());
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Err(TransportError::Other("no scripted reply".into())))
    }
}

#[derive(Default)]
struct RecordingSink {
    seen: Mutex<Vec<Notification>>,
}

impl RecordingSink {
    fn seen(&self) -> Vec<Notification> {
        self.seen.lock().unwrap().clone()
    }
}

impl NotificationSink for RecordingSink {
    fn notify(&self, kind: NotificationKind, message: &str) {
        self.seen.lock().unwrap().push(Notification {
            kind,
            message: message.to_string(),
        });
    }
}

fn reply(status: u16, body: Value) -> Result<RawResponse, TransportError> {
    Ok(RawResponse {
        status,
        body: body.to_string(),
    })
}

fn setup(transport: Arc<MockTransport>) -> (ContactController, Arc<RecordingSink>) {
    let config = Config::new("http://backend.test").unwrap();
    let sink = Arc::new(RecordingSink::default());
    let controller = ContactController::new(
        FormStore::new(),
        SubmissionClient::with_transport(&config, transport),
        sink.clone(),
    );
    (controller, sink)
}

fn fill(form: &FormStore) -> FormState {
    form.update_field(ContactField::Name, "Ján");
    form.update_field(ContactField::Email, "jan@example.com");
    form.update_field(ContactField::Phone, "");
    form.update_field(ContactField::Message, "Dobrý deň");
    form.get()
}

#[tokio::test]
async fn test_success_resets_form_and_notifies_once() {
    let transport = Arc::new(MockTransport::replying(reply(
        200,
        json!({"success": true, "message": "Vaša správa bola úspešne odoslaná."}),
    )));
    let (controller, sink) = setup(transport.clone());
    fill(controller.form());

    let outcome = controller.submit().await;

    assert_eq!(
        outcome,
        SubmitOutcome::Completed(SubmissionResult::success("Vaša správa bola úspešne odoslaná."))
    );
    assert_eq!(controller.form().get(), FormState::default());
    assert_eq!(
        sink.seen(),
        vec![Notification {
            kind: NotificationKind::Success,
            message: "Vaša správa bola úspešne odoslaná.".into(),
        }]
    );
    assert_eq!(
        transport.bodies.lock().unwrap()[0],
        json!({"name": "Ján", "email": "jan@example.com", "phone": "", "message": "Dobrý deň"})
    );
}

#[tokio::test]
async fn test_logical_failure_keeps_input() {
    let transport = Arc::new(MockTransport::replying(reply(
        400,
        json!({"detail": {"message": "Invalid email"}}),
    )));
    let (controller, sink) = setup(transport);
    let before = fill(controller.form());

    let outcome = controller.submit().await;

    assert_eq!(outcome, SubmitOutcome::Completed(SubmissionResult::failure("Invalid email")));
    assert_eq!(controller.form().get(), before);
    assert_eq!(sink.seen().len(), 1);
    assert_eq!(sink.seen()[0].kind, NotificationKind::Failure);
}

#[tokio::test]
async fn test_transport_failure_uses_fallback() {
    let transport = Arc::new(MockTransport::replying(Err(TransportError::Timeout)));
    let (controller, sink) = setup(transport);
    let before = fill(controller.form());

    let outcome = controller.submit().await;

    assert_eq!(
        outcome,
        SubmitOutcome::Completed(SubmissionResult::failure(FALLBACK_ERROR_MESSAGE))
    );
    assert_eq!(
        FALLBACK_ERROR_MESSAGE,
        "Niečo sa pokazilo. Skúste to prosím znova."
    );
    assert_eq!(controller.form().get(), before);
    assert!(!controller.form().is_submitting());
    assert_eq!(sink.seen()[0].message, FALLBACK_ERROR_MESSAGE);
}

#[tokio::test]
async fn test_generic_message_when_detail_missing() {
    let transport = Arc::new(MockTransport::replying(reply(503, json!({"message": "Server busy"}))));
    let (controller, _sink) = setup(transport);
    fill(controller.form());

    let outcome = controller.submit().await;
    assert_eq!(outcome, SubmitOutcome::Completed(SubmissionResult::failure("Server busy")));
}

#[tokio::test]
async fn test_invalid_form_never_reaches_transport() {
    let transport = Arc::new(MockTransport::default());
    let (controller, sink) = setup(transport.clone());
    controller.form().update_field(ContactField::Name, "Ján");
    controller.form().update_field(ContactField::Email, "invalid-email");
    controller.form().update_field(ContactField::Message, "Dobrý deň");

    let outcome = controller.submit().await;

    assert_eq!(
        outcome,
        SubmitOutcome::Rejected(SubmitRejection::Invalid(ValidationError::InvalidEmail))
    );
    assert_eq!(transport.calls(), 0);
    assert!(sink.seen().is_empty());
    assert!(!controller.form().is_submitting());
}

#[tokio::test]
async fn test_second_trigger_while_in_flight_is_ignored() {
    let gate = Arc::new(Notify::new());
    let transport = Arc::new(
        MockTransport::replying(reply(200, json!({"success": true, "message": "OK"})))
            .gated(gate.clone()),
    );
    let (controller, sink) = setup(transport.clone());
    fill(controller.form());

    let (first, second, _) = tokio::join!(controller.submit(), controller.submit(), async {
        tokio::task::yield_now().await;
        gate.notify_one();
    });

    assert_eq!(first, SubmitOutcome::Completed(SubmissionResult::success("OK")));
    assert_eq!(second, SubmitOutcome::Rejected(SubmitRejection::InFlight));
    assert_eq!(transport.calls(), 1);
    assert_eq!(sink.seen().len(), 1);
    assert!(!controller.form().is_submitting());
}

#[tokio::test]
async fn test_edits_during_flight_do_not_change_body() {
    let transport = Arc::new(MockTransport::replying(reply(500, json!({"detail": "Chyba"}))));
    let (controller, _sink) = setup(transport.clone());
    fill(controller.form());

    let pending = controller.begin().unwrap();
    controller.form().update_field(ContactField::Message, "Zmenená správa");
    let result = pending.run().await;

    assert_eq!(result, SubmissionResult::failure("Chyba"));
    assert_eq!(transport.bodies.lock().unwrap()[0]["message"], "Dobrý deň");
    assert_eq!(controller.form().field(ContactField::Message), "Zmenená správa");
}

#[tokio::test]
async fn test_aborted_submission_clears_flag() {
    let gate = Arc::new(Notify::new());
    let transport = Arc::new(MockTransport::default().gated(gate));
    let (controller, sink) = setup(transport.clone());
    fill(controller.form());

    let pending = controller.begin().unwrap();
    assert!(controller.form().is_submitting());

    let handle = tokio::spawn(pending.run());
    while transport.calls() == 0 {
        tokio::task::yield_now().await;
    }
    handle.abort();
    assert!(handle.await.unwrap_err().is_cancelled());

    assert!(!controller.form().is_submitting());
    assert!(sink.seen().is_empty());
}

#[tokio::test]
async fn test_subscriber_observes_submit_lifecycle() {
    let transport = Arc::new(MockTransport::replying(reply(
        200,
        json!({"success": true, "message": "OK"}),
    )));
    let (controller, _sink) = setup(transport);
    fill(controller.form());
    let mut rx = controller.form().subscribe();

    let pending = controller.begin().unwrap();
    assert!(rx.has_changed().unwrap());
    assert!(rx.borrow_and_update().submitting);

    pending.run().await;
    rx.changed().await.unwrap();
    let state = rx.borrow_and_update().clone();
    assert!(!state.submitting);
    assert!(state.name.is_empty());
}
