//! "You Submitted" card showing the last accepted values.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::model::SubmittedValues;

/// Text lines of the card. Email and message are omitted when blank.
pub fn submitted_lines(submitted: &SubmittedValues) -> Vec<String> {
    let values = &submitted.values;
    let mut lines = vec![
        format!("First Name: {}", values.first_name),
        format!("Last Name: {}", values.last_name),
    ];
    if !values.email.is_empty() {
        lines.push(format!("Email: {}", values.email));
    }
    if let Some(message) = submitted.message() {
        lines.push(format!("Message: {message}"));
    }
    lines
}

/// Renders the card; the border turns grey once the form has been edited again.
#[mutants::skip]
pub fn draw_submitted(submitted: &SubmittedValues, current: bool, frame: &mut Frame, area: Rect) {
    let color = if current { Color::Green } else { Color::DarkGray };
    let title = format!(
        " You Submitted ({}) ",
        submitted.submitted_at.format("%H:%M:%S UTC")
    );
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));

    let lines: Vec<Line> = submitted_lines(submitted)
        .into_iter()
        .map(Line::from)
        .collect();
    frame.render_widget(Paragraph::new(lines).block(block), area);
}
