//! App state - what the terminal form shows, minus the I/O

use std::sync::Arc;

use crate::app::controller::ContactController;
use crate::app::form::FormStore;
use crate::messages::ui_events::{Focus, InputMode};
use crate::messages::RenderState;
use crate::notify::ToastQueue;
use crate::storage::SubmissionLog;

/// Main application state
pub struct AppState {
    // Contact form
    pub controller: ContactController,
    pub toasts: Arc<ToastQueue>,

    // UI state
    pub focus: Focus,
    pub input_mode: InputMode,
    pub cursor_position: usize,
    pub validation_error: Option<String>,

    // Demo persistence
    pub log: SubmissionLog,

    // Popups
    pub show_help: bool,
}

impl AppState {
    pub fn new(controller: ContactController, toasts: Arc<ToastQueue>, log: SubmissionLog) -> Self {
        AppState {
            controller,
            toasts,
            focus: Focus::default(),
            input_mode: InputMode::Normal,
            cursor_position: 0,
            validation_error: None,
            log,
            show_help: false,
        }
    }

    pub fn form(&self) -> &FormStore {
        self.controller.form()
    }

    /// Text of the focused input, empty on the submit button
    pub fn current_input(&self) -> String {
        self.focus
            .field()
            .map(|f| self.form().field(f))
            .unwrap_or_default()
    }

    /// Convert state to RenderState for UI
    pub fn to_render_state(&self) -> RenderState {
        RenderState {
            form: self.form().get(),
            focus: self.focus,
            input_mode: self.input_mode,
            cursor_position: self.cursor_position,
            validation_error: self.validation_error.clone(),
            toasts: self.toasts.visible(),
            sent_count: self.log.len(),
            show_help: self.show_help,
        }
    }
}
