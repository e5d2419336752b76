//! # TUI Components
//!
//! All UI components for the terminal interface.
//!
//! Two patterns, as elsewhere in the adapter:
//!
//! - **Stateless (props-based)**: `ScoreBar` and `Dialog` receive all data
//!   as struct fields and just draw it.
//! - **Persistent state + transient wrapper**: `OptionsState` lives in
//!   `TuiState` and handles events; `Options` borrows it each frame to
//!   render. `BoardView` borrows the session's board plus the `BoardLayout`
//!   slot it refreshes for mouse hit testing.
//!
//! Each component file holds its state types, event types, rendering and
//! tests, so one file explains one component.

use ratatui::layout::{Constraint, Layout, Rect};

mod board_view;
mod dialog;
mod options;
mod score_bar;

pub use board_view::{BoardLayout, BoardView};
pub use dialog::{Dialog, DialogKind};
pub use options::{Options, OptionsEvent, OptionsState};
pub use score_bar::ScoreBar;

/// Compute a centered rect using percentage of the outer rect. Shared by
/// the overlay components.
pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, outer: Rect) -> Rect {
    let [_, center_v, _] = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .areas(outer);
    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(center_v);
    center
}
