use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use ratatui::{Frame, Terminal};

use crate::form::{Event as FormEvent, FormState};
use crate::model::Rules;

use super::action::Action;
use super::error::AppError;
use super::screens::{ContactScreen, draw_contact};

/// Top-level application state.
pub struct App {
    form: FormState,
    screen: ContactScreen,
    should_quit: bool,
}

impl App {
    /// Creates a new `App` with an empty form validated by `rules`.
    pub fn new(rules: Rules) -> Self {
        Self {
            form: FormState::new(rules),
            screen: ContactScreen::new(),
            should_quit: false,
        }
    }

    /// Main event loop: draw → read event → dispatch → check quit.
    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    pub fn run<B: ratatui::backend::Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
    ) -> Result<(), AppError> {
        tracing::debug!(rules = ?self.form.rules(), "starting event loop");
        while !self.should_quit {
            terminal.draw(|frame| self.draw(frame))?;
            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }
        tracing::debug!("event loop finished");
        Ok(())
    }

    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    fn draw(&self, frame: &mut Frame) {
        draw_contact(&self.screen, &self.form, frame, frame.area());
    }

    /// Handles a key event by routing it through the screen and applying the
    /// resulting [`Action`].
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        let action = self.screen.handle_key(key, &self.form);
        self.apply(action);
    }

    fn apply(&mut self, action: Action) {
        match action {
            Action::None => {}
            Action::Dispatch(event) => {
                let submitting = matches!(event, FormEvent::Submit);
                self.form.dispatch(event);
                if submitting {
                    self.screen.focus_first_error(&self.form);
                }
            }
            Action::Quit => self.should_quit = true,
        }
    }

    /// Returns the form state.
    pub fn form(&self) -> &FormState {
        &self.form
    }

    /// Returns `true` if the app should quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}
