//! Collapse-style tile-matching puzzle engine.
//!
//! Given a rectangular board of colored tiles, the engine finds clickable
//! same-color groups, removes them, settles the board under gravity,
//! refills the holes, and detects deadlocks. When no move remains it
//! reshuffles constructively, guaranteeing a legal move exists afterwards
//! whenever one is possible at all.
//!
//! Rendering, animation, and input hit-testing live outside this crate.
//! The presentation layer feeds the [`BoardCoordinator`] two callbacks
//! (`on_click`, `on_phase_animation_done`) and drains [`BoardEvent`]
//! batches to animate.

pub mod config;
pub mod core;
pub mod types;

pub use crate::config::{ConfigError, LevelConfig};
pub use crate::core::{Board, BoardCoordinator, ShuffleOutcome, SimpleRng};
pub use crate::types::{BoardEvent, ColorId, ComboTier, Coord, Phase};
