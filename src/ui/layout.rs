//! Layout components (sidebar, status bar)

use crate::app::App;
use crate::state::View;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Sidebar items with their shortcut keys
const SIDEBAR_ITEMS: &[(&str, &str)] = &[
    ("1", "Dashboard"),
    ("2", "Departments"),
    ("3", "Employees"),
    ("4", "Types"),
    ("5", "Expenses"),
];

/// Create the main layout with sidebar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(18), // Sidebar
            Constraint::Min(0),     // Main content
        ])
        .split(area);

    // Reserve bottom line for status bar
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(chunks[1]);

    let sidebar_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Sidebar content
            Constraint::Length(1), // Status bar continuation
        ])
        .split(chunks[0]);

    (sidebar_chunks[0], main_chunks[0])
}

/// Create full-width layout without sidebar (used before sign-in)
pub fn create_layout_no_sidebar(area: Rect) -> Rect {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    chunks[0]
}

fn sidebar_index_for_view(view: &View) -> Option<usize> {
    match view {
        View::Dashboard => Some(0),
        View::Departments | View::DepartmentCreate | View::MonthlyLimit => Some(1),
        View::Employees | View::EmployeeCreate => Some(2),
        View::ExpenseTypes | View::ExpenseTypeEdit => Some(3),
        View::Expenses | View::ExpenseCreate => Some(4),
        View::Login => None,
    }
}

/// Draw the sidebar section list
pub fn draw_sidebar(frame: &mut Frame, area: Rect, app: &App) {
    let active = sidebar_index_for_view(&app.state.current_view);

    let mut content = vec![Line::from("")];
    for (idx, (shortcut, label)) in SIDEBAR_ITEMS.iter().enumerate() {
        let is_selected = active == Some(idx);
        let marker = if is_selected { "▸ " } else { "  " };
        let label_style = if is_selected {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        content.push(Line::from(vec![
            Span::styled(marker, Style::default().fg(Color::Cyan)),
            Span::styled(format!("[{shortcut}] "), Style::default().fg(Color::DarkGray)),
            Span::styled(*label, label_style),
        ]));
        content.push(Line::from(""));
    }

    let panel = Paragraph::new(content).block(
        Block::default()
            .title(" Outlay ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );

    frame.render_widget(panel, area);
}

/// Draw the status bar on the bottom line
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let status_area = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let left = if let Some(message) = &app.status_message {
        Span::styled(
            format!(" {message}"),
            Style::default().fg(Color::Green),
        )
    } else {
        Span::styled(
            " Esc back | 1-5 sections | Ctrl+C quit",
            Style::default().fg(Color::DarkGray),
        )
    };

    let right = match &app.state.session {
        Some(session) => format!("{} ", session.email),
        None => "not signed in ".to_string(),
    };
    let right_width = right.len() as u16;

    frame.render_widget(Paragraph::new(Line::from(left)), status_area);

    if status_area.width > right_width {
        let right_area = Rect {
            x: status_area.x + status_area.width - right_width,
            y: status_area.y,
            width: right_width,
            height: 1,
        };
        frame.render_widget(
            Paragraph::new(Span::styled(right, Style::default().fg(Color::DarkGray))),
            right_area,
        );
    }
}
