//! Status bar widget — one-line form phase display.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::form::{FormState, Phase};

/// Data passed to the status bar widget; decoupled from `FormState`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StatusBarContext {
    /// The current form phase.
    pub phase: Phase,
    /// Number of fields currently failing validation.
    pub error_count: usize,
    /// Whether a snapshot has ever been accepted.
    pub has_submission: bool,
}

impl StatusBarContext {
    pub fn from_state(state: &FormState) -> Self {
        Self {
            phase: state.phase(),
            error_count: state.errors().len(),
            has_submission: state.submitted().is_some(),
        }
    }
}

/// Renders a one-line status bar.
///
/// Display format:
/// - Submitted:             `SUBMITTED`  (Green)
/// - Editing with errors:   `EDITING  2 errors`  (count in Red)
/// - Editing, clean:        `EDITING`
/// - Editing after a submit appends `  (showing last submission)`.
#[mutants::skip]
pub fn draw_status_bar(ctx: &StatusBarContext, frame: &mut Frame, area: Rect) {
    let cyan = Style::default().fg(Color::Cyan);
    let green = Style::default().fg(Color::Green);
    let red = Style::default().fg(Color::Red);

    let mut spans: Vec<Span> = Vec::new();

    match ctx.phase {
        Phase::Submitted => spans.push(Span::styled("SUBMITTED", green)),
        Phase::Editing => {
            spans.push(Span::styled("EDITING", cyan));
            match ctx.error_count {
                0 => {}
                1 => spans.push(Span::styled("  1 error", red)),
                n => spans.push(Span::styled(format!("  {n} errors"), red)),
            }
            if ctx.has_submission {
                spans.push(Span::styled("  (showing last submission)", cyan));
            }
        }
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
