//! UI events - messages from UI layer to App layer

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::models::ContactField;

/// Events generated from user input in the UI layer
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    // Focus navigation
    NextFocus,
    PrevFocus,

    // Input editing
    StartEditing,
    StopEditing,
    CharInput(char),
    Backspace,
    CursorLeft,
    CursorRight,

    // Form actions
    Submit,
    DismissNotifications,

    // Popups
    ToggleHelp,
    CloseHelp,

    // System
    Quit,
}

/// Focusable element of the form (needed for context-aware event mapping)
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Focus {
    #[default]
    Name,
    Email,
    Phone,
    Message,
    SubmitButton,
}

impl Focus {
    pub fn next(&self) -> Focus {
        match self {
            Focus::Name => Focus::Email,
            Focus::Email => Focus::Phone,
            Focus::Phone => Focus::Message,
            Focus::Message => Focus::SubmitButton,
            Focus::SubmitButton => Focus::Name,
        }
    }

    pub fn prev(&self) -> Focus {
        match self {
            Focus::Name => Focus::SubmitButton,
            Focus::Email => Focus::Name,
            Focus::Phone => Focus::Email,
            Focus::Message => Focus::Phone,
            Focus::SubmitButton => Focus::Message,
        }
    }

    /// The input behind this focus, if it is one
    pub fn field(&self) -> Option<ContactField> {
        match self {
            Focus::Name => Some(ContactField::Name),
            Focus::Email => Some(ContactField::Email),
            Focus::Phone => Some(ContactField::Phone),
            Focus::Message => Some(ContactField::Message),
            Focus::SubmitButton => None,
        }
    }
}

impl From<ContactField> for Focus {
    fn from(field: ContactField) -> Self {
        match field {
            ContactField::Name => Focus::Name,
            ContactField::Email => Focus::Email,
            ContactField::Phone => Focus::Phone,
            ContactField::Message => Focus::Message,
        }
    }
}

/// Input mode
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum InputMode {
    #[default]
    Normal,
    Editing,
}

/// Convert a key event to a UI event based on current context
pub fn key_to_ui_event(
    key: KeyEvent,
    focus: Focus,
    input_mode: InputMode,
    show_help: bool,
) -> Option<UiEvent> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(UiEvent::Quit);
    }

    if show_help {
        return match key.code {
            KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => Some(UiEvent::CloseHelp),
            _ => None,
        };
    }

    match input_mode {
        InputMode::Normal => match key.code {
            KeyCode::Char('q') => Some(UiEvent::Quit),
            KeyCode::Char('?') => Some(UiEvent::ToggleHelp),
            KeyCode::Tab | KeyCode::Down | KeyCode::Char('j') => Some(UiEvent::NextFocus),
            KeyCode::BackTab | KeyCode::Up | KeyCode::Char('k') => Some(UiEvent::PrevFocus),
            KeyCode::Char('e') | KeyCode::Enter => match focus {
                Focus::SubmitButton => Some(UiEvent::Submit),
                _ => Some(UiEvent::StartEditing),
            },
            KeyCode::Char('s') => Some(UiEvent::Submit),
            KeyCode::Char('x') => Some(UiEvent::DismissNotifications),
            _ => None,
        },
        InputMode::Editing => match key.code {
            KeyCode::Esc | KeyCode::Enter => Some(UiEvent::StopEditing),
            KeyCode::Left => Some(UiEvent::CursorLeft),
            KeyCode::Right => Some(UiEvent::CursorRight),
            KeyCode::Backspace => Some(UiEvent::Backspace),
            KeyCode::Tab => Some(UiEvent::NextFocus),
            KeyCode::BackTab => Some(UiEvent::PrevFocus),
            KeyCode::Char(c) => Some(UiEvent::CharInput(c)),
            _ => None,
        },
    }
}
