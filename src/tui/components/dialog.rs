//! # Dialog Overlay
//!
//! Win and game-over modals. Pure props: the event loop decides when a
//! dialog opens and what dismissing it does; this component only draws.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap};

use crate::tui::component::Component;
use crate::tui::components::centered_rect;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogKind {
    /// A tile reached the win target; play may continue.
    Won { target: u32 },
    /// No empty cell and no adjacent equal pair is left.
    Lost,
}

pub struct Dialog {
    pub kind: DialogKind,
}

impl Component for Dialog {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let overlay = centered_rect(50, 30, area);

        frame.render_widget(Clear, overlay);

        let (title, message, help, color) = match self.kind {
            DialogKind::Won { target } => (
                " You win ",
                format!("Congratulations! You reached {}.", target),
                " Esc Keep playing  r Restart ",
                Color::Yellow,
            ),
            DialogKind::Lost => (
                " Game over ",
                "No more moves available. Game over!".to_string(),
                " r Restart  Esc Close ",
                Color::Red,
            ),
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color))
            .title(title)
            .title_alignment(Alignment::Left)
            .title_bottom(Line::from(help).centered())
            .padding(Padding::uniform(1));

        let body = Paragraph::new(message)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(block);
        frame.render_widget(body, overlay);
    }
}
