//! Render state - snapshot sent from App layer to UI layer

use crate::messages::ui_events::{Focus, InputMode};
use crate::models::FormState;
use crate::notify::Notification;

/// Everything the UI needs to draw one frame
#[derive(Clone, Debug, Default)]
pub struct RenderState {
    pub form: FormState,
    pub focus: Focus,
    pub input_mode: InputMode,
    pub cursor_position: usize,
    pub validation_error: Option<String>,
    pub toasts: Vec<Notification>,
    pub sent_count: usize,
    pub show_help: bool,
}
