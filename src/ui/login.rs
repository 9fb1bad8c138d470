//! Login / register view

use crate::app::App;
use crate::state::{Form, FormState};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::forms::draw_field;

/// Draw the login view
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let form = match &app.state.form {
        FormState::Login(form) => form,
        _ => {
            // First key press materializes the form; show an empty shell
            let block = Block::default()
                .title(" Sign in ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan));
            frame.render_widget(block, centered_card(area));
            return;
        }
    };

    let card = centered_card(area);
    let title = if form.register_mode {
        " Create account "
    } else {
        " Sign in "
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(card);
    frame.render_widget(block, card);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Email
            Constraint::Length(3), // Password
            Constraint::Length(1),
            Constraint::Min(0), // Hints
        ])
        .split(inner);

    draw_field(frame, chunks[0], &form.email, form.active_field() == 0);
    draw_field(frame, chunks[1], &form.password, form.active_field() == 1);

    let mode_hint = if form.register_mode {
        "Ctrl+R switch to sign in"
    } else {
        "Ctrl+R switch to register"
    };
    let hints = Paragraph::new(vec![
        Line::from(vec![
            Span::styled("Enter", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
            Span::styled(" submit | Tab next field", Style::default().fg(Color::DarkGray)),
        ]),
        Line::from(Span::styled(mode_hint, Style::default().fg(Color::DarkGray))),
    ]);
    frame.render_widget(hints, chunks[3]);
}

fn centered_card(area: Rect) -> Rect {
    let width = 44.min(area.width);
    let height = 12.min(area.height);
    Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    }
}
