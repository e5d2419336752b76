//! # Options Overlay
//!
//! Centered overlay for the runtime controls: board size and swipe input.
//! Opened with `o`, dismissed with Esc.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `OptionsState` lives in `TuiState`
//! - `Options` is created each frame with borrowed state
//!
//! Applying a size the session rejects leaves the overlay open with the
//! validation message; the board is not touched.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph};

use crate::core::board::{MAX_SIZE, MIN_SIZE};
use crate::tui::component::EventHandler;
use crate::tui::components::centered_rect;
use crate::tui::event::TuiEvent;

/// Persistent state for the options overlay.
pub struct OptionsState {
    /// Digits typed into the board-size field.
    pub size_input: String,
    /// Message shown under the fields after a rejected apply.
    pub validation: Option<String>,
}

impl OptionsState {
    pub fn new(current_size: usize) -> Self {
        Self {
            size_input: current_size.to_string(),
            validation: None,
        }
    }
}

impl EventHandler for OptionsState {
    type Event = OptionsEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<OptionsEvent> {
        match event {
            TuiEvent::Escape => Some(OptionsEvent::Dismiss),
            TuiEvent::InputChar('s') => Some(OptionsEvent::ToggleSwipe),
            TuiEvent::InputChar(c) if c.is_ascii_digit() => {
                // Two digits are enough to express every rejectable size.
                if self.size_input.len() < 2 {
                    self.size_input.push(*c);
                }
                self.validation = None;
                None
            }
            TuiEvent::Backspace => {
                self.size_input.pop();
                self.validation = None;
                None
            }
            TuiEvent::Submit => match self.size_input.parse::<usize>() {
                Ok(size) => Some(OptionsEvent::ApplySize(size)),
                Err(_) => {
                    self.validation = Some(format!(
                        "Enter a number between {} and {}",
                        MIN_SIZE, MAX_SIZE
                    ));
                    None
                }
            },
            _ => None,
        }
    }
}

/// Events emitted by the options overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionsEvent {
    /// Enter pressed with a parseable size; range checking is the
    /// session's call.
    ApplySize(usize),
    ToggleSwipe,
    Dismiss,
}

/// Transient render wrapper for the options overlay.
pub struct Options<'a> {
    state: &'a OptionsState,
    swipe_enabled: bool,
}

impl<'a> Options<'a> {
    pub fn new(state: &'a OptionsState, swipe_enabled: bool) -> Self {
        Self {
            state,
            swipe_enabled,
        }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let overlay = centered_rect(50, 40, area);

        frame.render_widget(Clear, overlay);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Options ")
            .title_alignment(Alignment::Left)
            .title_bottom(Line::from(" Enter Apply  s Swipe  Esc Back ").centered())
            .padding(Padding::horizontal(1));

        let mut lines = vec![
            Line::from(vec![
                Span::raw(format!("Board size ({}-{}): ", MIN_SIZE, MAX_SIZE)),
                Span::styled(
                    format!("{}_", self.state.size_input),
                    Style::default().fg(Color::White),
                ),
            ]),
            Line::from(format!(
                "Swipe input:       {}",
                if self.swipe_enabled { "on" } else { "off" }
            )),
        ];
        if let Some(ref message) = self.state.validation {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                message.clone(),
                Style::default().fg(Color::Red),
            )));
        }

        frame.render_widget(Paragraph::new(lines).block(block), overlay);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits_edit_the_size_field() {
        let mut state = OptionsState::new(4);
        assert_eq!(state.size_input, "4");

        state.handle_event(&TuiEvent::Backspace);
        assert_eq!(state.size_input, "");

        state.handle_event(&TuiEvent::InputChar('1'));
        state.handle_event(&TuiEvent::InputChar('0'));
        assert_eq!(state.size_input, "10");

        // Field is capped at two digits.
        state.handle_event(&TuiEvent::InputChar('0'));
        assert_eq!(state.size_input, "10");
    }

    #[test]
    fn test_submit_emits_apply_for_parseable_input() {
        let mut state = OptionsState::new(4);
        assert_eq!(
            state.handle_event(&TuiEvent::Submit),
            Some(OptionsEvent::ApplySize(4))
        );

        // Out-of-range numbers still parse; the session rejects them.
        state.size_input = "10".to_string();
        assert_eq!(
            state.handle_event(&TuiEvent::Submit),
            Some(OptionsEvent::ApplySize(10))
        );
    }

    #[test]
    fn test_submit_on_empty_input_sets_validation() {
        let mut state = OptionsState::new(4);
        state.handle_event(&TuiEvent::Backspace);

        assert_eq!(state.handle_event(&TuiEvent::Submit), None);
        assert!(state.validation.is_some());

        // Typing again clears the message.
        state.handle_event(&TuiEvent::InputChar('5'));
        assert!(state.validation.is_none());
    }

    #[test]
    fn test_toggle_and_dismiss_events() {
        let mut state = OptionsState::new(4);
        assert_eq!(
            state.handle_event(&TuiEvent::InputChar('s')),
            Some(OptionsEvent::ToggleSwipe)
        );
        assert_eq!(
            state.handle_event(&TuiEvent::Escape),
            Some(OptionsEvent::Dismiss)
        );
    }

    #[test]
    fn test_unrelated_keys_are_ignored() {
        let mut state = OptionsState::new(4);
        assert_eq!(state.handle_event(&TuiEvent::InputChar('x')), None);
        assert_eq!(state.handle_event(&TuiEvent::CursorUp), None);
        assert_eq!(state.size_input, "4");
    }
}
