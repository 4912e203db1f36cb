//! Deadlock detection - is there any clickable group left?
//!
//! A board is deadlocked when no group of size >= 2 exists. The scan is
//! row-major with a shared visited bitmap, and each flood fill bails out
//! the instant its component reaches two cells; materializing full groups
//! here would be wasted work since only the size-2 threshold matters.

use std::collections::VecDeque;

use crate::core::board::Board;
use crate::core::groups;
use crate::types::Coord;

/// True iff at least one group of size >= 2 exists.
pub fn has_any_move(board: &Board) -> bool {
    let cols = board.cols();
    let mut visited = vec![false; board.cell_count()];
    let mut queue = VecDeque::new();

    for at in board.occupied_coords() {
        if visited[at.row * cols + at.col] {
            continue;
        }
        let color = board.get(at.row, at.col);

        // Flood from this cell, short-circuiting at size 2.
        queue.clear();
        visited[at.row * cols + at.col] = true;
        queue.push_back(at);
        let mut size = 1;

        while let Some(current) = queue.pop_front() {
            for next in groups::neighbors(board, current) {
                let idx = next.row * cols + next.col;
                if !visited[idx] && board.get(next.row, next.col) == color {
                    visited[idx] = true;
                    queue.push_back(next);
                    size += 1;
                    if size >= 2 {
                        return true;
                    }
                }
            }
        }
    }
    false
}

/// Deadlock = the negation, kept for call sites that read better this way.
pub fn is_deadlocked(board: &Board) -> bool {
    !has_any_move(board)
}
