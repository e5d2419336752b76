//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI, and
//! translates keyboard and mouse events into core game operations.
//!
//! This is the only module that knows about ratatui and crossterm. The
//! core never calls back into it.
//!
//! ## Event handling
//!
//! Events are processed one at a time, each fully (move -> spawn ->
//! terminal check) before the next is read. Routing is modal: an open
//! win/loss dialog sees events first, then an open options overlay, then
//! the board itself.
//!
//! ## Redraw Strategy
//!
//! Nothing animates, so the loop only draws when an event arrived: it
//! sleeps in `poll` for up to 500ms and redraws after processing whatever
//! was pending.
//!
//! ## Swipe input
//!
//! With swipe enabled, a left-button press is held until release; the
//! press-to-release delta either resolves into a tap (select the cell
//! under the pointer) or a swipe (move in the dominant direction), the
//! same thresholding scheme the mouse-drag handling of the desktop 2048
//! clones uses. With swipe disabled the press selects immediately.

mod component;
mod components;
mod event;
mod ui;

use log::info;
use std::io::stdout;
use std::time::Duration;

use crossterm::cursor::{Hide, Show};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;

use crate::core::config::ResolvedConfig;
use crate::core::move_engine::Direction;
use crate::core::session::{GameSession, GameStatus};
use crate::tui::component::EventHandler;
use crate::tui::components::{BoardLayout, DialogKind, OptionsEvent, OptionsState};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// Drag distances (terminal cells) below which a press/release pair counts
/// as a tap rather than a swipe. Rows count half because terminal cells are
/// roughly twice as tall as they are wide.
const SWIPE_THRESHOLD_COLUMNS: i32 = 4;
const SWIPE_THRESHOLD_ROWS: i32 = 2;

/// TUI-specific presentation state (not part of core game logic)
pub struct TuiState {
    /// Cell geometry cached by the board view for mouse hit testing.
    pub board_layout: BoardLayout,
    /// Options overlay (None = hidden)
    pub options: Option<OptionsState>,
    /// Win/loss modal (None = hidden)
    pub dialog: Option<DialogKind>,
    pub swipe_enabled: bool,
    /// The win dialog shows once per game even though the status stays
    /// `Won` for every later move.
    pub win_announced: bool,
    /// Transient text for the score bar.
    pub status_line: String,
    /// Screen position of an in-flight left-button press.
    drag_start: Option<(u16, u16)>,
}

impl TuiState {
    pub fn new(swipe_enabled: bool) -> Self {
        Self {
            board_layout: BoardLayout::default(),
            options: None,
            dialog: None,
            swipe_enabled,
            win_announced: false,
            status_line: String::new(),
            drag_start: None,
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture, Hide)?;
        info!("Terminal modes enabled (mouse capture, hidden cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture, Show);
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let mut session = GameSession::new(config.board_size, config.win_target, config.seed)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;
    let mut tui = TuiState::new(config.swipe_enabled);

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    let mut needs_redraw = true;

    loop {
        // Only draw when something changed
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &session, &mut tui))?;
            needs_redraw = false;
        }

        let first_event = poll_event_timeout(Duration::from_millis(500));

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            // Resize just needs a redraw (already flagged above)
            if matches!(event, TuiEvent::Resize) {
                continue;
            }

            // Ctrl+C always quits regardless of what is open
            if matches!(event, TuiEvent::ForceQuit) {
                should_quit = true;
                continue;
            }

            // An open win/loss dialog sees events first
            if tui.dialog.is_some() {
                match event {
                    TuiEvent::InputChar('r') => {
                        session.restart();
                        tui.win_announced = false;
                        tui.status_line.clear();
                        tui.dialog = None;
                    }
                    TuiEvent::InputChar('q') => {
                        should_quit = true;
                    }
                    TuiEvent::Escape | TuiEvent::Submit => {
                        tui.dialog = None;
                    }
                    _ => {}
                }
                continue;
            }

            // Options overlay next
            if tui.options.is_some() {
                let action = tui
                    .options
                    .as_mut()
                    .and_then(|options| options.handle_event(&event));
                match action {
                    Some(OptionsEvent::ApplySize(size)) => match session.resize(size) {
                        Ok(()) => {
                            tui.options = None;
                            tui.win_announced = false;
                            tui.status_line = format!("Board size {}", size);
                        }
                        Err(e) => {
                            if let Some(options) = tui.options.as_mut() {
                                options.validation = Some(e.to_string());
                            }
                        }
                    },
                    Some(OptionsEvent::ToggleSwipe) => {
                        tui.swipe_enabled = !tui.swipe_enabled;
                        tui.status_line = format!(
                            "Swipe input {}",
                            if tui.swipe_enabled { "enabled" } else { "disabled" }
                        );
                    }
                    Some(OptionsEvent::Dismiss) => {
                        tui.options = None;
                    }
                    None => {}
                }
                continue;
            }

            // Mouse: a press starts a potential swipe, the release resolves
            // into a tap (select) or a swipe (move)
            match event {
                TuiEvent::MouseDown(column, row) => {
                    if tui.swipe_enabled {
                        tui.drag_start = Some((column, row));
                    } else if let Some(coord) = tui.board_layout.cell_at(column, row) {
                        session.select(coord);
                    }
                    continue;
                }
                TuiEvent::MouseUp(column, row) => {
                    if let Some((start_x, start_y)) = tui.drag_start.take() {
                        let dx = i32::from(column) - i32::from(start_x);
                        let dy = i32::from(row) - i32::from(start_y);
                        if dx.abs() < SWIPE_THRESHOLD_COLUMNS && dy.abs() < SWIPE_THRESHOLD_ROWS {
                            if let Some(coord) = tui.board_layout.cell_at(column, row) {
                                session.select(coord);
                            }
                        } else {
                            perform_move(&mut session, &mut tui, swipe_direction(dx, dy));
                        }
                    }
                    continue;
                }
                _ => {}
            }

            // Plain keys drive the game directly
            match event {
                TuiEvent::InputChar('q') => should_quit = true,
                TuiEvent::InputChar('r') => {
                    session.restart();
                    tui.win_announced = false;
                    tui.status_line.clear();
                }
                TuiEvent::InputChar('o') => {
                    tui.options = Some(OptionsState::new(session.size()));
                }
                TuiEvent::CursorUp | TuiEvent::InputChar('w') => {
                    perform_move(&mut session, &mut tui, Direction::Up);
                }
                TuiEvent::CursorDown | TuiEvent::InputChar('s') => {
                    perform_move(&mut session, &mut tui, Direction::Down);
                }
                TuiEvent::CursorLeft | TuiEvent::InputChar('a') => {
                    perform_move(&mut session, &mut tui, Direction::Left);
                }
                TuiEvent::CursorRight | TuiEvent::InputChar('d') => {
                    perform_move(&mut session, &mut tui, Direction::Right);
                }
                _ => {}
            }
        }

        if should_quit {
            break;
        }
    }

    ratatui::restore();
    Ok(())
}

/// Resolve a drag delta into the dominant compass direction. Columns are
/// halved so horizontal and vertical distances compare in the same units.
fn swipe_direction(dx: i32, dy: i32) -> Direction {
    if dx.abs() / 2 > dy.abs() {
        if dx > 0 { Direction::Right } else { Direction::Left }
    } else if dy > 0 {
        Direction::Down
    } else {
        Direction::Up
    }
}

/// One full turn from an input direction: move, then surface whatever the
/// terminal check reports.
fn perform_move(session: &mut GameSession, tui: &mut TuiState, direction: Direction) {
    if session.selection().is_none() {
        tui.status_line = "Select a tile first".to_string();
        return;
    }
    let report = session.apply_move(direction);
    if !report.moved {
        return;
    }
    if report.gained > 0 {
        tui.status_line = format!("+{}", report.gained);
    } else {
        tui.status_line.clear();
    }
    match report.status {
        GameStatus::Won if !tui.win_announced => {
            info!(
                "Target {} reached, score {}",
                session.target(),
                session.score()
            );
            tui.win_announced = true;
            tui.dialog = Some(DialogKind::Won {
                target: session.target(),
            });
        }
        GameStatus::Lost => {
            info!("No moves left, final score {}", session.score());
            tui.dialog = Some(DialogKind::Lost);
        }
        _ => {}
    }
}
