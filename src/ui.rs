use ratatui::{prelude::*, widgets::*};

use crate::models::NotificationKind;

/// Border style for an input, by focus and editing state
pub fn input_border(is_focused: bool, is_editing: bool) -> Style {
    if is_focused && is_editing {
        Style::default().fg(Color::Yellow)
    } else if is_focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

/// Renders a text input field
pub fn render_input<'a>(
    content: &'a str,
    title: String,
    is_focused: bool,
    is_editing: bool,
) -> Paragraph<'a> {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(input_border(is_focused, is_editing))
        .title(title);

    Paragraph::new(content)
        .block(block)
        .wrap(Wrap { trim: false })
}

/// Renders the submit button; greyed out while a request is in flight
pub fn render_button<'a>(label: &'a str, is_focused: bool, is_disabled: bool) -> Paragraph<'a> {
    let style = if is_disabled {
        Style::default().fg(Color::DarkGray)
    } else if is_focused {
        Style::default().fg(Color::Black).bg(Color::Cyan).bold()
    } else {
        Style::default().fg(Color::White).bold()
    };

    Paragraph::new(label)
        .alignment(Alignment::Center)
        .style(style)
        .block(Block::default().borders(Borders::ALL).border_style(input_border(is_focused, false)))
}

/// Toast color
pub fn notification_color(kind: NotificationKind) -> Color {
    match kind {
        NotificationKind::Success => Color::Green,
        NotificationKind::Failure => Color::Red,
    }
}

/// Toast prefix
pub fn notification_icon(kind: NotificationKind) -> &'static str {
    match kind {
        NotificationKind::Success => "✔",
        NotificationKind::Failure => "✖",
    }
}

/// Terminal column of a byte cursor inside `text`
pub fn cursor_column(text: &str, byte_pos: usize) -> u16 {
    let Some(before) = text.get(..byte_pos.min(text.len())) else {
        return 0;
    };
    let line = before.rsplit('\n').next().unwrap_or(before);
    line.chars().count() as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_column_counts_chars() {
        assert_eq!(cursor_column("Ján", "Já".len()), 2);
        assert_eq!(cursor_column("Ján", 100), 3);
        assert_eq!(cursor_column("", 0), 0);
    }
}
