//! # Score Bar Component
//!
//! Top status line showing the board size, current score, best score and a
//! transient status message. Stateless: all fields are props from the
//! session and the TUI state, and the bar renders whatever it is given.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Span;

use crate::tui::component::Component;

pub struct ScoreBar {
    pub board_size: usize,
    pub score: u32,
    pub best_score: u32,
    /// Transient message, e.g. "Select a tile first". Empty hides the field.
    pub status: String,
}

impl ScoreBar {
    pub fn new(board_size: usize, score: u32, best_score: u32, status: String) -> Self {
        Self {
            board_size,
            score,
            best_score,
            status,
        }
    }
}

impl Component for ScoreBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let base = format!(
            "drift48 {0}x{0} | Score: {1} | Best: {2}",
            self.board_size, self.score, self.best_score
        );
        let text = if self.status.is_empty() {
            base
        } else {
            format!("{} | {}", base, self.status)
        };
        frame.render_widget(Span::raw(text), area);
    }
}
