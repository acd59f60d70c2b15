//! Contact form screen — maps keys to form events and lays out the widgets.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::form::{Event, FormState, Phase};
use crate::model::Field;
use crate::tui::action::Action;
use crate::tui::widgets::form::{FormFocus, ROW_HEIGHT, draw_form};
use crate::tui::widgets::status_bar::{StatusBarContext, draw_status_bar};
use crate::tui::widgets::submitted::draw_submitted;

/// Header shown at the top of the screen.
pub const TITLE: &str = "Contact Form";

/// Screen-local state: only focus. Values live in [`FormState`].
#[derive(Debug, Clone, Default)]
pub struct ContactScreen {
    focus: FormFocus,
}

impl ContactScreen {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current focus.
    pub fn focus(&self) -> FormFocus {
        self.focus
    }

    /// Handles a key event, returning an [`Action`] for the app to apply.
    pub fn handle_key(&mut self, key: KeyEvent, form: &FormState) -> Action {
        if key.modifiers == KeyModifiers::CONTROL {
            return match key.code {
                KeyCode::Char('c') => Action::Quit,
                KeyCode::Char('r') => {
                    self.focus = FormFocus::default();
                    Action::Dispatch(Event::Reset)
                }
                _ => Action::None,
            };
        }

        match key.code {
            KeyCode::Tab => {
                self.focus.focus_next();
                Action::None
            }
            KeyCode::BackTab => {
                self.focus.focus_prev();
                Action::None
            }
            KeyCode::Enter => Action::Dispatch(Event::Submit),
            KeyCode::Esc => Action::Quit,
            KeyCode::Backspace => self.delete_char(form),
            KeyCode::Char(ch) => self.insert_char(ch, form),
            _ => Action::None,
        }
    }

    /// Moves focus to the first field still failing validation, if any.
    pub fn focus_first_error(&mut self, form: &FormState) {
        if let Some((field, _)) = form.errors().iter().next() {
            self.focus.set_field(field);
        }
    }

    /// Appends `ch` to the focused field; space on the button submits.
    fn insert_char(&self, ch: char, form: &FormState) -> Action {
        match self.focus.field() {
            Some(field) => {
                let mut value = form.values().get(field).to_string();
                value.push(ch);
                Action::Dispatch(Event::FieldChanged { field, value })
            }
            None if ch == ' ' => Action::Dispatch(Event::Submit),
            None => Action::None,
        }
    }

    /// Removes the last character of the focused field.
    fn delete_char(&self, form: &FormState) -> Action {
        let Some(field) = self.focus.field() else {
            return Action::None;
        };
        let mut value = form.values().get(field).to_string();
        if value.pop().is_none() {
            return Action::None;
        }
        Action::Dispatch(Event::FieldChanged { field, value })
    }
}

/// Renders the contact form screen.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_contact(screen: &ContactScreen, form: &FormState, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(format!(" {TITLE} "))
        .title_style(Style::default().add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let form_height = ROW_HEIGHT * Field::all().len() as u16 + 1;
    let [form_area, _gap, submitted_area, status_area, footer_area] = Layout::vertical([
        Constraint::Length(form_height),
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(inner);

    draw_form(form, screen.focus(), frame, form_area);

    if let Some(submitted) = form.submitted() {
        let [card, _] =
            Layout::vertical([Constraint::Length(6), Constraint::Min(0)]).areas(submitted_area);
        draw_submitted(submitted, form.phase() == Phase::Submitted, frame, card);
    }

    draw_status_bar(&StatusBarContext::from_state(form), frame, status_area);

    let footer = Paragraph::new(Line::from(
        "Tab/Shift+Tab: next/prev  Enter: submit  Ctrl+R: reset  Esc: quit",
    ))
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, footer_area);
}
