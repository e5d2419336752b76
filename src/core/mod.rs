//! # Core Game Logic
//!
//! This module contains the game rules. It knows nothing about any
//! specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • board (grid state)   │
//!                    │  • move_engine (slide)  │
//!                    │  • session (one game)   │
//!                    │                         │
//!                    │  No I/O. No UI.         │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`board`]: the N×N grid, its queries and random tile spawning
//! - [`move_engine`]: the single-selected-tile slide and merge rule
//! - [`session`]: one running game (board + selection + score + status)
//! - [`config`]: TOML config with env and CLI layering

pub mod board;
pub mod config;
pub mod move_engine;
pub mod session;
