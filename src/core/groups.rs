//! Group finding - connected components of same-colored tiles
//!
//! A group is a maximal set of occupied cells sharing one color, connected
//! through 4-directional adjacency. Traversal is an iterative BFS with an
//! explicit queue; recursion depth would otherwise scale with group size.

use std::collections::VecDeque;

use arrayvec::ArrayVec;

use crate::core::board::Board;
use crate::types::Coord;

/// Neighbor offsets in expansion order: North, South, West, East.
/// The order is fixed so traversal (and therefore event order downstream)
/// is reproducible for a given board.
const NEIGHBOR_OFFSETS: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, -1), (0, 1)];

/// In-bounds 4-neighbors of a coordinate, in N/S/W/E order.
pub fn neighbors(board: &Board, at: Coord) -> ArrayVec<Coord, 4> {
    let mut out = ArrayVec::new();
    for (dr, dc) in NEIGHBOR_OFFSETS {
        let row = at.row.checked_add_signed(dr);
        let col = at.col.checked_add_signed(dc);
        if let (Some(row), Some(col)) = (row, col) {
            if board.in_bounds(row, col) {
                out.push(Coord::new(row, col));
            }
        }
    }
    out
}

/// Find the group containing `origin`: all occupied cells reachable from it
/// through same-colored 4-neighbors. An empty or out-of-bounds origin yields
/// an empty group. Members are listed in BFS visit order.
pub fn find_group(board: &Board, origin: Coord) -> Vec<Coord> {
    let mut visited = vec![false; board.cell_count()];
    flood_from(board, origin, &mut visited)
}

/// Partition every occupied cell into exactly one group, scanning row-major.
/// Singleton groups are included; the caller decides whether size matters.
pub fn find_all_groups(board: &Board) -> Vec<Vec<Coord>> {
    let mut visited = vec![false; board.cell_count()];
    let mut groups = Vec::new();

    for at in board.occupied_coords() {
        if !visited[at.row * board.cols() + at.col] {
            groups.push(flood_from(board, at, &mut visited));
        }
    }
    groups
}

/// BFS flood fill from `origin` over the shared visited bitmap.
fn flood_from(board: &Board, origin: Coord, visited: &mut [bool]) -> Vec<Coord> {
    let Some(color) = board.get(origin.row, origin.col) else {
        return Vec::new();
    };

    let cols = board.cols();
    let mut group = Vec::new();
    let mut queue = VecDeque::new();

    visited[origin.row * cols + origin.col] = true;
    queue.push_back(origin);

    while let Some(at) = queue.pop_front() {
        group.push(at);

        for next in neighbors(board, at) {
            let idx = next.row * cols + next.col;
            if !visited[idx] && board.get(next.row, next.col) == Some(color) {
                visited[idx] = true;
                queue.push_back(next);
            }
        }
    }
    group
}
