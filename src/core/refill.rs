//! Refill engine - new random tiles for the holes gravity left behind
//!
//! Visits every empty cell exactly once and draws a catalog color for it.
//! Draws are independent, so visit order does not affect correctness; the
//! row-major order here only pins down RNG consumption for replays.

use crate::core::board::Board;
use crate::core::rng::SimpleRng;
use crate::types::{BoardEvent, Coord};

/// Occupy every empty cell with a uniformly drawn color. One `BlockSpawned`
/// event per new tile.
pub fn refill(board: &mut Board, rng: &mut SimpleRng, num_colors: u8) -> Vec<BoardEvent> {
    let mut spawns = Vec::new();

    for row in 0..board.rows() {
        for col in 0..board.cols() {
            if board.get(row, col).is_none() {
                let color = rng.next_color(num_colors);
                board.set(row, col, Some(color));
                spawns.push(BoardEvent::BlockSpawned {
                    cell: Coord::new(row, col),
                    color,
                });
            }
        }
    }
    spawns
}
