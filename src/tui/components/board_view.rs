//! # Board View
//!
//! Renders the grid as fixed-size bordered tiles in the classic 2048
//! palette and refreshes the cached cell geometry the event loop uses to
//! hit-test mouse positions.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Paragraph};

use crate::core::board::{Board, Coord};
use crate::tui::component::Component;

/// Tile width in terminal cells, borders included.
pub const CELL_WIDTH: u16 = 8;
/// Tile height in terminal cells, borders included.
pub const CELL_HEIGHT: u16 = 3;

/// Frame color of the original game board.
const GRID_COLOR: Color = Color::Rgb(0xbb, 0xad, 0xa0);

/// Where the board landed on screen during the last draw. Lives in
/// `TuiState` so mouse events can be mapped back to board coordinates.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BoardLayout {
    origin_x: u16,
    origin_y: u16,
    board_size: u16,
}

impl BoardLayout {
    /// Map a screen position to the board cell under it, if any.
    pub fn cell_at(&self, column: u16, row: u16) -> Option<Coord> {
        if self.board_size == 0 || column < self.origin_x || row < self.origin_y {
            return None;
        }
        let col = (column - self.origin_x) / CELL_WIDTH;
        let r = (row - self.origin_y) / CELL_HEIGHT;
        (col < self.board_size && r < self.board_size).then(|| Coord::new(r as usize, col as usize))
    }
}

/// Transient render wrapper: props borrowed from the session plus the
/// layout slot refreshed on every draw.
pub struct BoardView<'a> {
    pub board: &'a Board,
    pub selection: Option<Coord>,
    pub layout: &'a mut BoardLayout,
}

impl Component for BoardView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let size = self.board.size() as u16;
        let total_width = size * CELL_WIDTH;
        let total_height = size * CELL_HEIGHT;

        // Center the grid; on a too-small terminal the far edges clip.
        let origin_x = area.x + area.width.saturating_sub(total_width) / 2;
        let origin_y = area.y + area.height.saturating_sub(total_height) / 2;
        *self.layout = BoardLayout {
            origin_x,
            origin_y,
            board_size: size,
        };

        for row in 0..size {
            for col in 0..size {
                let coord = Coord::new(row as usize, col as usize);
                let cell_rect = Rect::new(
                    origin_x + col * CELL_WIDTH,
                    origin_y + row * CELL_HEIGHT,
                    CELL_WIDTH,
                    CELL_HEIGHT,
                )
                .intersection(area);
                if cell_rect.is_empty() {
                    continue;
                }

                let value = self.board.get(coord);
                let (bg, fg) = tile_colors(value);
                let selected = self.selection == Some(coord);

                let block = if selected {
                    Block::bordered()
                        .border_type(BorderType::Thick)
                        .border_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
                } else {
                    Block::bordered().border_style(Style::default().fg(GRID_COLOR))
                };

                let text = if value == 0 {
                    String::new()
                } else {
                    value.to_string()
                };
                let tile = Paragraph::new(text)
                    .style(Style::default().fg(fg).bg(bg).add_modifier(Modifier::BOLD))
                    .alignment(Alignment::Center)
                    .block(block);
                frame.render_widget(tile, cell_rect);
            }
        }
    }
}

/// Background/foreground pair for a tile value, the classic 2048 palette.
/// Values past 2048 share the dark fallback.
fn tile_colors(value: u32) -> (Color, Color) {
    let light_text = Color::Rgb(0x77, 0x6e, 0x65);
    let dark_text = Color::Rgb(0xf9, 0xf6, 0xf2);
    match value {
        0 => (Color::Rgb(0xcd, 0xc1, 0xb4), light_text),
        2 => (Color::Rgb(0xee, 0xe4, 0xda), light_text),
        4 => (Color::Rgb(0xed, 0xe0, 0xc8), light_text),
        8 => (Color::Rgb(0xf2, 0xb1, 0x79), dark_text),
        16 => (Color::Rgb(0xf5, 0x95, 0x63), dark_text),
        32 => (Color::Rgb(0xf6, 0x7c, 0x5f), dark_text),
        64 => (Color::Rgb(0xf6, 0x5e, 0x3b), dark_text),
        128 => (Color::Rgb(0xed, 0xcf, 0x72), dark_text),
        256 => (Color::Rgb(0xed, 0xcc, 0x61), dark_text),
        512 => (Color::Rgb(0xed, 0xc8, 0x50), dark_text),
        1024 => (Color::Rgb(0xed, 0xc5, 0x3f), dark_text),
        2048 => (Color::Rgb(0xed, 0xc2, 0x2e), dark_text),
        _ => (Color::Rgb(0x3c, 0x3a, 0x32), dark_text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::board_from_rows;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn rendered_layout(board: &Board, width: u16, height: u16) -> (BoardLayout, String) {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut layout = BoardLayout::default();
        terminal
            .draw(|f| {
                let mut view = BoardView {
                    board,
                    selection: None,
                    layout: &mut layout,
                };
                view.render(f, f.area());
            })
            .unwrap();
        let text = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>();
        (layout, text)
    }

    #[test]
    fn test_render_shows_tile_values() {
        let board = board_from_rows(&[&[2, 0], &[0, 64]]);
        let (_, text) = rendered_layout(&board, 40, 12);
        assert!(text.contains('2'));
        assert!(text.contains("64"));
    }

    #[test]
    fn test_cell_at_round_trips_through_the_rendered_layout() {
        let board = board_from_rows(&[&[2, 0], &[0, 4]]);
        let (layout, _) = rendered_layout(&board, 40, 12);

        for row in 0..2u16 {
            for col in 0..2u16 {
                // Probe the middle of each tile.
                let x = (40 - 2 * CELL_WIDTH) / 2 + col * CELL_WIDTH + CELL_WIDTH / 2;
                let y = (12 - 2 * CELL_HEIGHT) / 2 + row * CELL_HEIGHT + CELL_HEIGHT / 2;
                assert_eq!(
                    layout.cell_at(x, y),
                    Some(Coord::new(row as usize, col as usize))
                );
            }
        }
    }

    #[test]
    fn test_cell_at_misses_outside_the_grid() {
        let board = board_from_rows(&[&[2, 0], &[0, 4]]);
        let (layout, _) = rendered_layout(&board, 40, 12);

        assert_eq!(layout.cell_at(0, 0), None);
        assert_eq!(layout.cell_at(39, 11), None);
    }

    #[test]
    fn test_default_layout_never_matches() {
        let layout = BoardLayout::default();
        assert_eq!(layout.cell_at(5, 5), None);
    }
}
