//! Core module - the decision engine behind the puzzle
//!
//! Everything here is synchronous game logic: group search, combo
//! classification, gravity, refill, deadlock detection, the constructive
//! reshuffle, and the coordinator that sequences them. No UI, networking,
//! or I/O; the presentation layer talks to the coordinator through events
//! and callbacks.

pub mod board;
pub mod combo;
pub mod coordinator;
pub mod deadlock;
pub mod gravity;
pub mod groups;
pub mod refill;
pub mod rng;
pub mod shuffle;

// Re-export commonly used types
pub use board::Board;
pub use coordinator::BoardCoordinator;
pub use rng::SimpleRng;
pub use shuffle::{ShuffleOutcome, ShuffleResult};
