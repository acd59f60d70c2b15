//! Contact form widget: focus handling and field rendering.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::form::FormState;
use crate::model::Field;

/// Height of one field row: top border, value, bottom border (error overlays it).
pub const ROW_HEIGHT: u16 = 3;

/// Number of focusable slots: every field plus the submit button.
const SLOTS: usize = 5;

/// What currently has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FormFocus {
    index: usize,
}

impl FormFocus {
    /// The focused field, or `None` when the submit button is focused.
    pub fn field(self) -> Option<Field> {
        Field::all().get(self.index).copied()
    }

    /// Returns `true` if the submit button is focused.
    pub fn on_submit(self) -> bool {
        self.index == Field::all().len()
    }

    /// Moves focus to the next slot, wrapping around.
    pub fn focus_next(&mut self) {
        self.index = (self.index + 1) % SLOTS;
    }

    /// Moves focus to the previous slot, wrapping around.
    pub fn focus_prev(&mut self) {
        self.index = (self.index + SLOTS - 1) % SLOTS;
    }

    /// Focuses `field` directly.
    pub fn set_field(&mut self, field: Field) {
        if let Some(pos) = Field::all().iter().position(|&f| f == field) {
            self.index = pos;
        }
    }
}

/// Label text for `field`, with ` *` when the field is required.
pub fn field_label(state: &FormState, field: Field) -> String {
    if state.rules().is_required(field) {
        format!("{} *", field.label())
    } else {
        field.label().to_string()
    }
}

/// Renders the four fields followed by the submit button.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_form(state: &FormState, focus: FormFocus, frame: &mut Frame, area: Rect) {
    let mut constraints: Vec<Constraint> = Field::all()
        .iter()
        .map(|_| Constraint::Length(ROW_HEIGHT))
        .collect();
    constraints.push(Constraint::Length(1));

    let rows = Layout::vertical(constraints).split(area);

    for (i, &field) in Field::all().iter().enumerate() {
        let is_focused = focus.field() == Some(field);
        let error = state.errors().get(field);

        let border_color = if error.is_some() {
            Color::Red
        } else if is_focused {
            Color::Yellow
        } else {
            Color::DarkGray
        };

        let block = Block::default()
            .title(field_label(state, field))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color));

        let mut spans = vec![Span::raw(state.values().get(field))];
        if is_focused {
            spans.push(Span::styled(
                "\u{2588}",
                Style::default().add_modifier(Modifier::SLOW_BLINK),
            ));
        }

        let paragraph = Paragraph::new(Line::from(spans)).block(block);
        frame.render_widget(paragraph, rows[i]);

        if let Some(err) = error {
            let error_line = Paragraph::new(Span::styled(
                format!("Error: {err}"),
                Style::default().fg(Color::Red),
            ));
            // overlays the bottom border of the row, clipped to what the row got
            let err_area = Rect {
                x: rows[i].x.saturating_add(2),
                y: rows[i].y.saturating_add(ROW_HEIGHT.saturating_sub(1)),
                width: rows[i].width.saturating_sub(4),
                height: 1,
            }
            .intersection(rows[i]);
            if !err_area.is_empty() {
                frame.render_widget(error_line, err_area);
            }
        }
    }

    let button_style = if focus.on_submit() {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Yellow)
    };
    let button = Paragraph::new(Line::from(Span::styled("[ Submit ]", button_style)));
    frame.render_widget(button, rows[Field::all().len()]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Rules;

    // --- Focus management ---

    #[test]
    fn focus_starts_on_first_name() {
        let focus = FormFocus::default();
        assert_eq!(focus.field(), Some(Field::FirstName));
        assert!(!focus.on_submit());
    }

    #[test]
    fn focus_next_walks_fields_then_button() {
        let mut focus = FormFocus::default();
        for &field in &Field::all()[1..] {
            focus.focus_next();
            assert_eq!(focus.field(), Some(field));
        }
        focus.focus_next();
        assert_eq!(focus.field(), None);
        assert!(focus.on_submit());
    }

    #[test]
    fn focus_next_wraps() {
        let mut focus = FormFocus::default();
        for _ in 0..SLOTS {
            focus.focus_next();
        }
        assert_eq!(focus, FormFocus::default());
    }

    #[test]
    fn focus_prev_wraps_to_button() {
        let mut focus = FormFocus::default();
        focus.focus_prev();
        assert!(focus.on_submit());
        focus.focus_prev();
        assert_eq!(focus.field(), Some(Field::Message));
    }

    #[test]
    fn set_field_jumps() {
        let mut focus = FormFocus::default();
        focus.set_field(Field::Email);
        assert_eq!(focus.field(), Some(Field::Email));
    }

    // --- Labels ---

    #[test]
    fn required_fields_get_asterisk() {
        let state = FormState::default();
        assert_eq!(field_label(&state, Field::FirstName), "First Name *");
        assert_eq!(field_label(&state, Field::LastName), "Last Name *");
        assert_eq!(field_label(&state, Field::Email), "Email *");
        assert_eq!(field_label(&state, Field::Message), "Message");
    }

    #[test]
    fn optional_email_has_no_asterisk() {
        let state = FormState::new(Rules {
            email_required: false,
            ..Rules::default()
        });
        assert_eq!(field_label(&state, Field::Email), "Email");
    }
}
