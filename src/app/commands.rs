//! Command handlers - business logic for processing UI events

use crate::app::controller::PendingSubmission;
use crate::app::form::SubmitRejection;
use crate::app::AppState;
use crate::messages::ui_events::InputMode;
use crate::models::{ContactRequest, SubmissionResult};

/// Largest char boundary in `input` not past `pos`
fn clamp_to_boundary(input: &str, pos: usize) -> usize {
    let mut pos = pos.min(input.len());
    while !input.is_char_boundary(pos) {
        pos -= 1;
    }
    pos
}

impl AppState {
    // ========================
    // Navigation
    // ========================

    pub fn next_focus(&mut self) {
        self.focus = self.focus.next();
        self.follow_focus();
    }

    pub fn prev_focus(&mut self) {
        self.focus = self.focus.prev();
        self.follow_focus();
    }

    /// Keep editing mode only while an input is focused
    fn follow_focus(&mut self) {
        if self.focus.field().is_none() {
            self.input_mode = InputMode::Normal;
        }
        self.cursor_position = self.current_input().len();
    }

    // ========================
    // Input editing
    // ========================

    pub fn start_editing(&mut self) {
        if self.focus.field().is_some() {
            self.input_mode = InputMode::Editing;
            self.cursor_position = self.current_input().len();
        }
    }

    pub fn stop_editing(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    pub fn move_cursor_left(&mut self) {
        let input = self.current_input();
        let cursor = clamp_to_boundary(&input, self.cursor_position);
        self.cursor_position = input[..cursor]
            .char_indices()
            .last()
            .map(|(i, _)| i)
            .unwrap_or(0);
    }

    pub fn move_cursor_right(&mut self) {
        let input = self.current_input();
        let cursor = clamp_to_boundary(&input, self.cursor_position);
        self.cursor_position = input[cursor..]
            .char_indices()
            .nth(1)
            .map(|(i, _)| cursor + i)
            .unwrap_or(input.len());
    }

    pub fn enter_char(&mut self, c: char) {
        let Some(field) = self.focus.field() else {
            return;
        };
        let mut input = self.form().field(field);
        let cursor = clamp_to_boundary(&input, self.cursor_position);
        input.insert(cursor, c);
        self.form().update_field(field, input);
        self.cursor_position = cursor + c.len_utf8();
        self.validation_error = None;
    }

    pub fn delete_char(&mut self) {
        let Some(field) = self.focus.field() else {
            return;
        };
        let mut input = self.form().field(field);
        let cursor = clamp_to_boundary(&input, self.cursor_position);
        if let Some((prev, _)) = input[..cursor].char_indices().last() {
            input.remove(prev);
            self.form().update_field(field, input);
            self.cursor_position = prev;
        }
    }

    // ========================
    // Submission
    // ========================

    /// Start a submission if the form allows it
    pub fn submit(&mut self) -> Option<PendingSubmission> {
        self.stop_editing();
        match self.controller.begin() {
            Ok(pending) => {
                self.validation_error = None;
                Some(pending)
            }
            Err(SubmitRejection::InFlight) => None,
            Err(SubmitRejection::Invalid(e)) => {
                self.focus = e.field().into();
                self.cursor_position = self.current_input().len();
                self.validation_error = Some(e.to_string());
                None
            }
        }
    }

    /// Bookkeeping once a submission resolved
    pub fn handle_submission_result(&mut self, request: ContactRequest, result: &SubmissionResult) {
        if let SubmissionResult::Success { message } = result {
            self.cursor_position = 0;
            if let Err(e) = self.log.record(request, message) {
                tracing::warn!(error = %e, path = %self.log.path().display(), "Could not write submission log");
            }
        }
    }

    // ========================
    // Notifications & popups
    // ========================

    pub fn dismiss_notifications(&mut self) {
        self.toasts.dismiss_all();
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn close_help(&mut self) {
        self.show_help = false;
    }
}
