//! App actor - message loop processing UI events and submission results

use std::time::{Duration, Instant};

use tokio::sync::mpsc;
use tokio::task::JoinSet;

use crate::app::state::AppState;
use crate::messages::{RenderState, UiEvent};
use crate::models::{ContactRequest, SubmissionResult};

const TICK: Duration = Duration::from_millis(250);

/// App actor that processes UI events and finished submissions
pub struct AppActor {
    state: AppState,
    render_tx: mpsc::UnboundedSender<RenderState>,
    submissions: JoinSet<(ContactRequest, SubmissionResult)>,
}

impl AppActor {
    pub fn new(state: AppState, render_tx: mpsc::UnboundedSender<RenderState>) -> Self {
        AppActor {
            state,
            render_tx,
            submissions: JoinSet::new(),
        }
    }

    /// Run the actor message loop
    pub async fn run(mut self, mut ui_rx: mpsc::UnboundedReceiver<UiEvent>) {
        let mut form_rx = self.state.form().subscribe();
        let mut tick = tokio::time::interval(TICK);

        // Send initial render state
        self.render();

        loop {
            tokio::select! {
                event = ui_rx.recv() => {
                    let Some(event) = event else { break };
                    if self.handle_ui_event(event) {
                        // Quit signal received
                        break;
                    }
                    self.render();
                }
                Ok(()) = form_rx.changed() => self.render(),
                Some(joined) = self.submissions.join_next() => {
                    match joined {
                        Ok((request, result)) => self.state.handle_submission_result(request, &result),
                        Err(e) => tracing::error!(error = %e, "Submission task failed"),
                    }
                    self.render();
                }
                _ = tick.tick() => {
                    if self.state.toasts.prune(Instant::now()) {
                        self.render();
                    }
                }
            }
        }

        // Aborted submissions clear the submitting flag on drop
        self.submissions.shutdown().await;
    }

    fn render(&self) {
        let _ = self.render_tx.send(self.state.to_render_state());
    }

    /// Handle a UI event, returns true if quit was requested
    fn handle_ui_event(&mut self, event: UiEvent) -> bool {
        match event {
            // Focus navigation
            UiEvent::NextFocus => self.state.next_focus(),
            UiEvent::PrevFocus => self.state.prev_focus(),

            // Input editing
            UiEvent::StartEditing => self.state.start_editing(),
            UiEvent::StopEditing => self.state.stop_editing(),
            UiEvent::CharInput(c) => self.state.enter_char(c),
            UiEvent::Backspace => self.state.delete_char(),
            UiEvent::CursorLeft => self.state.move_cursor_left(),
            UiEvent::CursorRight => self.state.move_cursor_right(),

            // Form actions
            UiEvent::Submit => {
                if let Some(pending) = self.state.submit() {
                    let request = pending.request().clone();
                    self.submissions.spawn(async move {
                        let result = pending.run().await;
                        (request, result)
                    });
                }
            }
            UiEvent::DismissNotifications => self.state.dismiss_notifications(),

            // Popups
            UiEvent::ToggleHelp => self.state.toggle_help(),
            UiEvent::CloseHelp => self.state.close_help(),

            // System
            UiEvent::Quit => return true,
        }

        false
    }
}
