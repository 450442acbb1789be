//! FENJI contact form - terminal front end
//!
//! Architecture:
//! - UI Layer (Ratatui) - synchronous terminal rendering
//! - App Layer - form state machine processing events
//! - Submissions run as Tokio tasks owned by the App actor

use std::io;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{prelude::*, widgets::*};
use tokio::sync::mpsc;

use fenji_contact::app::{AppActor, AppState, ContactController, FormStore};
use fenji_contact::config::Config;
use fenji_contact::constants::{APP_NAME, COMPANY_LINES, SUBMITTING_LABEL, SUBMIT_LABEL};
use fenji_contact::messages::ui_events::{key_to_ui_event, Focus, InputMode};
use fenji_contact::messages::{RenderState, UiEvent};
use fenji_contact::models::ContactField;
use fenji_contact::network::SubmissionClient;
use fenji_contact::notify::ToastQueue;
use fenji_contact::storage::SubmissionLog;
use fenji_contact::ui::{cursor_column, notification_color, notification_icon, render_button, render_input};

/// Terminal cleanup guard
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging to file
    let file_appender = tracing_appender::rolling::never(".", "fenji-contact.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_ansi(false)
        .init();

    let config = Config::from_env().context("loading backend configuration")?;
    tracing::info!(
        base_url = config.base_url(),
        endpoint = %config.contact_endpoint(),
        timeout = ?config.request_timeout(),
        "Starting"
    );

    let client = SubmissionClient::new(&config).context("building HTTP client")?;
    let toasts = Arc::new(ToastQueue::default());
    let controller = ContactController::new(FormStore::new(), client, toasts.clone());
    let state = AppState::new(controller, toasts, SubmissionLog::new());

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let _terminal_guard = TerminalGuard;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create channels
    let (ui_tx, ui_rx) = mpsc::unbounded_channel::<UiEvent>();
    let (render_tx, mut render_rx) = mpsc::unbounded_channel::<RenderState>();

    // Spawn app actor
    let app_actor = AppActor::new(state, render_tx);
    let app_handle = tokio::spawn(app_actor.run(ui_rx));

    // Run UI loop (synchronous with async polling)
    run_ui_loop(&mut terminal, ui_tx, &mut render_rx).await?;

    let _ = app_handle.await;
    Ok(())
}

/// Run the synchronous UI rendering loop
async fn run_ui_loop(
    terminal: &mut Terminal<impl Backend>,
    ui_tx: mpsc::UnboundedSender<UiEvent>,
    render_rx: &mut mpsc::UnboundedReceiver<RenderState>,
) -> anyhow::Result<()> {
    let mut current_state = RenderState::default();

    loop {
        // Draw with current state
        terminal.draw(|f| draw_ui(f, &current_state))?;

        // Poll for events with timeout
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if let Some(event) = key_to_ui_event(
                    key,
                    current_state.focus,
                    current_state.input_mode,
                    current_state.show_help,
                ) {
                    let quit = matches!(event, UiEvent::Quit);
                    let _ = ui_tx.send(event);
                    if quit {
                        break;
                    }
                }
            }
        }

        // Check for state updates (non-blocking)
        while let Ok(state) = render_rx.try_recv() {
            current_state = state;
        }
    }

    Ok(())
}

// ============================================================================
// UI Drawing Functions
// ============================================================================

fn draw_ui(f: &mut Frame, state: &RenderState) {
    let area = f.area();

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let title = Line::from(vec![
        Span::styled(format!(" {} ", APP_NAME), Style::default().fg(Color::Cyan).bold()),
        Span::raw("| Kontaktujte nás"),
    ]);
    f.render_widget(Paragraph::new(title), main_chunks[0]);

    let content = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(62), Constraint::Percentage(38)])
        .split(main_chunks[1]);

    draw_form(f, state, content[0]);
    draw_company(f, state, content[1]);
    draw_status_bar(f, state, main_chunks[2]);
    draw_toasts(f, state, area);

    if state.show_help {
        draw_help_popup(f, area);
    }
}

fn draw_form(f: &mut Frame, state: &RenderState, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Name
            Constraint::Length(3), // Email
            Constraint::Length(3), // Phone
            Constraint::Min(5),    // Message
            Constraint::Length(1), // Validation error
            Constraint::Length(3), // Submit
        ])
        .split(area);

    let editing = state.input_mode == InputMode::Editing;

    for (field, chunk) in ContactField::ALL.into_iter().zip(chunks.iter()) {
        let is_focused = state.focus == Focus::from(field);
        let marker = if field.is_required() { " *" } else { "" };
        let title = format!(" {}{} ", field.label(), marker);
        let value = state.form.field(field);
        f.render_widget(render_input(value, title, is_focused, is_focused && editing), *chunk);

        if is_focused && editing {
            let max_x = chunk.x + chunk.width.saturating_sub(2);
            let cursor_x = (chunk.x + 1 + cursor_column(value, state.cursor_position)).min(max_x);
            f.set_cursor_position(Position::new(cursor_x, chunk.y + 1));
        }
    }

    if let Some(error) = &state.validation_error {
        let line = Paragraph::new(format!(" ! {}", error)).style(Style::default().fg(Color::Red));
        f.render_widget(line, chunks[4]);
    }

    let label = if state.form.submitting { SUBMITTING_LABEL } else { SUBMIT_LABEL };
    let button = render_button(label, state.focus == Focus::SubmitButton, state.form.submitting);
    f.render_widget(button, chunks[5]);
}

fn draw_company(f: &mut Frame, state: &RenderState, area: Rect) {
    let mut lines: Vec<Line> = COMPANY_LINES
        .iter()
        .map(|(label, value)| {
            Line::from(vec![
                Span::styled(format!("{:<9}", label), Style::default().fg(Color::DarkGray)),
                Span::raw(*value),
            ])
        })
        .collect();

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!("Odoslané správy: {}", state.sent_count),
        Style::default().fg(Color::DarkGray),
    )));

    let block = Block::default().borders(Borders::ALL).title(" Kontakt ");
    f.render_widget(Paragraph::new(lines).block(block).wrap(Wrap { trim: true }), area);
}

fn draw_toasts(f: &mut Frame, state: &RenderState, area: Rect) {
    let width = area.width.min(48);
    let mut y = area.y + 1;

    for toast in &state.toasts {
        if y + 3 > area.bottom() {
            break;
        }
        let rect = Rect::new(area.right().saturating_sub(width + 1), y, width, 3);
        let color = notification_color(toast.kind);
        let text = format!("{} {}", notification_icon(toast.kind), toast.message);
        let widget = Paragraph::new(text)
            .style(Style::default().fg(color))
            .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(color)));

        f.render_widget(Clear, rect);
        f.render_widget(widget, rect);
        y += 3;
    }
}

fn draw_status_bar(f: &mut Frame, state: &RenderState, area: Rect) {
    let status = if state.form.submitting {
        " Odosielanie... "
    } else if state.input_mode == InputMode::Editing {
        " ESC/Enter:stop editing | arrows:move | Tab:next field "
    } else {
        " Tab:next | e:edit | s:send | x:dismiss | ?:help | q:quit "
    };

    let bar = Paragraph::new(status).style(Style::default().fg(Color::DarkGray));
    f.render_widget(bar, area);
}

fn draw_help_popup(f: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 60, area);

    let help_text = r#"
 FENJI KONTAKT - Keyboard Shortcuts

 NAVIGATION
   Tab / Shift+Tab    Next / previous field
   ↑ / ↓              Next / previous field

 FORM
   e / Enter          Edit focused field
   Enter (button)     Send message
   s                  Send message
   x                  Dismiss notifications

 EDITING
   ← / →              Move cursor
   Backspace          Delete character
   Esc / Enter        Stop editing

 GENERAL
   ?                  Toggle this help
   q / Ctrl+C         Quit
"#;

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Help ")
        .style(Style::default().bg(Color::Black));

    let help = Paragraph::new(help_text)
        .block(block)
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, popup_area);
    f.render_widget(help, popup_area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
