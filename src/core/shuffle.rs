//! Shuffle engine - constructive reshuffle for deadlocked boards
//!
//! Rather than shuffling and re-checking in a loop (which has no
//! termination guarantee), the reshuffle *constructs* a move: it plants two
//! tiles of one color on an adjacent position pair, then distributes the
//! remaining tiles at random. When every occupied tile has a unique color
//! no adjacent pair can exist, so that case is reported as an explicit
//! no-guarantee outcome instead of being papered over.
//!
//! The color multiset is conserved either way; only the position-to-color
//! mapping changes.

use std::collections::BTreeMap;

use crate::core::board::Board;
use crate::core::rng::SimpleRng;
use crate::types::{BoardEvent, ColorId, Coord};

/// Whether the reshuffle could plant a guaranteed move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShuffleOutcome {
    /// An adjacent same-color pair was placed; `has_any_move` now holds.
    Guaranteed,
    /// No color repeats (or no two occupied cells are adjacent); the board
    /// was shuffled plainly and may still be deadlocked.
    NoGuarantee,
}

/// Result of a reshuffle: the outcome plus one `BlockMoved` per tile that
/// ended up on a new position, for the presentation layer to animate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShuffleResult {
    pub outcome: ShuffleOutcome,
    pub moves: Vec<BoardEvent>,
}

/// Reassign the board's colors to its occupied positions such that a move
/// exists afterwards, whenever that is possible at all.
pub fn smart_shuffle(board: &mut Board, rng: &mut SimpleRng) -> ShuffleResult {
    // Occupied tiles in row-major order; indices into this list identify
    // tiles through the rest of the algorithm.
    let tiles: Vec<(Coord, ColorId)> = board
        .coords()
        .filter_map(|at| board.get(at.row, at.col).map(|color| (at, color)))
        .collect();

    // Bucket tile indices by color. BTreeMap keeps bucket iteration in
    // ascending ColorId order, so the pair color choice below is a fixed,
    // non-semantic tie-break: smallest color with two occurrences.
    let mut buckets: BTreeMap<ColorId, Vec<usize>> = BTreeMap::new();
    for (i, &(_, color)) in tiles.iter().enumerate() {
        buckets.entry(color).or_default().push(i);
    }
    let pair_tiles = buckets
        .values()
        .find(|bucket| bucket.len() >= 2)
        .map(|bucket| (bucket[0], bucket[1]));

    // Axis-adjacent pairs of occupied positions. Occupancy is unchanged by
    // the reshuffle, so the board itself answers the adjacency queries.
    let mut adjacent_pairs: Vec<(Coord, Coord)> = Vec::new();
    for &(at, _) in &tiles {
        if board.is_occupied(at.row, at.col + 1) {
            adjacent_pairs.push((at, Coord::new(at.row, at.col + 1)));
        }
        if board.is_occupied(at.row + 1, at.col) {
            adjacent_pairs.push((at, Coord::new(at.row + 1, at.col)));
        }
    }

    // No repeated color, or no adjacency to exploit: a guaranteed move
    // cannot be constructed. Shuffle plainly and say so.
    let Some((first, second)) = pair_tiles else {
        return fallback_shuffle(board, rng, &tiles);
    };
    if adjacent_pairs.is_empty() {
        return fallback_shuffle(board, rng, &tiles);
    }

    let planted = adjacent_pairs[rng.next_range(adjacent_pairs.len() as u32) as usize];

    // Everything except the planted pair gets shuffled independently:
    // leftover positions and leftover tiles, matched up by index.
    let mut rest_positions: Vec<Coord> = tiles
        .iter()
        .map(|&(at, _)| at)
        .filter(|&at| at != planted.0 && at != planted.1)
        .collect();
    let mut rest_tiles: Vec<usize> = (0..tiles.len())
        .filter(|&i| i != first && i != second)
        .collect();
    rng.shuffle(&mut rest_positions);
    rng.shuffle(&mut rest_tiles);

    let mut placements: Vec<(usize, Coord)> = Vec::with_capacity(tiles.len());
    placements.push((first, planted.0));
    placements.push((second, planted.1));
    placements.extend(rest_tiles.into_iter().zip(rest_positions));

    ShuffleResult {
        outcome: ShuffleOutcome::Guaranteed,
        moves: apply_placements(board, &tiles, &placements),
    }
}

/// Plain Fisher-Yates over all occupied positions, tiles kept in their
/// original order. Used when no guaranteed pair is constructible.
fn fallback_shuffle(
    board: &mut Board,
    rng: &mut SimpleRng,
    tiles: &[(Coord, ColorId)],
) -> ShuffleResult {
    let mut positions: Vec<Coord> = tiles.iter().map(|&(at, _)| at).collect();
    rng.shuffle(&mut positions);

    let placements: Vec<(usize, Coord)> = (0..tiles.len()).zip(positions).collect();
    ShuffleResult {
        outcome: ShuffleOutcome::NoGuarantee,
        moves: apply_placements(board, tiles, &placements),
    }
}

/// Write each tile's color to its destination. The destination set equals
/// the occupied set and each position appears exactly once, so no clearing
/// pass is needed. Emits one move event per tile that changed position.
fn apply_placements(
    board: &mut Board,
    tiles: &[(Coord, ColorId)],
    placements: &[(usize, Coord)],
) -> Vec<BoardEvent> {
    let mut moves = Vec::new();
    for &(tile, to) in placements {
        let (from, color) = tiles[tile];
        board.set(to.row, to.col, Some(color));
        if from != to {
            moves.push(BoardEvent::BlockMoved { from, to });
        }
    }
    moves
}
