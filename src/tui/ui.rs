use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Color, Style};
use ratatui::text::Span;

use crate::core::session::GameSession;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{BoardView, Dialog, Options, ScoreBar};

const HELP_LINE: &str = "click: select tile | arrows/wasd: move | r: restart | o: options | q: quit";

pub fn draw_ui(frame: &mut Frame, session: &GameSession, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Min(0), Length(1)]);
    let [score_area, board_area, help_area] = layout.areas(frame.area());

    ScoreBar::new(
        session.size(),
        session.score(),
        session.best_score(),
        tui.status_line.clone(),
    )
    .render(frame, score_area);

    BoardView {
        board: session.board(),
        selection: session.selection(),
        layout: &mut tui.board_layout,
    }
    .render(frame, board_area);

    frame.render_widget(
        Span::styled(HELP_LINE, Style::default().fg(Color::DarkGray)),
        help_area,
    );

    // Overlays draw last, over the board.
    let swipe_enabled = tui.swipe_enabled;
    if let Some(options) = tui.options.as_ref() {
        Options::new(options, swipe_enabled).render(frame, frame.area());
    }
    if let Some(kind) = tui.dialog {
        Dialog { kind }.render(frame, frame.area());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::session::DEFAULT_TARGET;
    use crate::tui::components::{DialogKind, OptionsState};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn rendered(session: &GameSession, tui: &mut TuiState) -> String {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw_ui(f, session, tui)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_draw_ui() {
        let session = GameSession::new(4, DEFAULT_TARGET, Some(1)).unwrap();
        let mut tui = TuiState::new(true);
        let text = rendered(&session, &mut tui);
        assert!(text.contains("drift48 4x4"));
        assert!(text.contains("Score: 0"));
        assert!(text.contains("o: options"));
    }

    #[test]
    fn test_draw_ui_caches_a_hittable_layout() {
        let session = GameSession::new(4, DEFAULT_TARGET, Some(1)).unwrap();
        let mut tui = TuiState::new(true);
        rendered(&session, &mut tui);

        // The board center maps to some cell after a draw.
        assert!(tui.board_layout.cell_at(40, 12).is_some());
    }

    #[test]
    fn test_draw_ui_with_options_overlay() {
        let session = GameSession::new(4, DEFAULT_TARGET, Some(1)).unwrap();
        let mut tui = TuiState::new(true);
        tui.options = Some(OptionsState::new(4));
        let text = rendered(&session, &mut tui);
        assert!(text.contains("Options"));
        assert!(text.contains("Board size"));
    }

    #[test]
    fn test_draw_ui_with_dialog() {
        let session = GameSession::new(4, DEFAULT_TARGET, Some(1)).unwrap();
        let mut tui = TuiState::new(true);
        tui.dialog = Some(DialogKind::Lost);
        let text = rendered(&session, &mut tui);
        assert!(text.contains("Game over"));
    }
}
