//! Gravity engine - per-column compaction after removal
//!
//! Each column is compacted independently toward row 0 with a write cursor,
//! preserving the relative vertical order of its tiles. One `BlockMoved`
//! event per relocated tile; a tile that stays put emits nothing, and the
//! presentation layer animates exactly what it is told.

use crate::core::board::Board;
use crate::types::{BoardEvent, Coord};

/// Close the gaps in every column. Returns the move events in column-major,
/// bottom-up order. Applying this twice in a row yields no events the
/// second time.
pub fn settle(board: &mut Board) -> Vec<BoardEvent> {
    let mut moves = Vec::new();

    for col in 0..board.cols() {
        let mut write_row = 0;
        for row in 0..board.rows() {
            if let Some(color) = board.get(row, col) {
                if row != write_row {
                    board.set(row, col, None);
                    board.set(write_row, col, Some(color));
                    moves.push(BoardEvent::BlockMoved {
                        from: Coord::new(row, col),
                        to: Coord::new(write_row, col),
                    });
                }
                write_row += 1;
            }
        }
    }
    moves
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Cell, ColorId};

    fn cell(id: u8) -> Cell {
        Some(ColorId(id))
    }

    fn column_colors(board: &Board, col: usize) -> Vec<Option<u8>> {
        (0..board.rows())
            .map(|row| board.get(row, col).map(ColorId::index))
            .collect()
    }

    #[test]
    fn test_settle_closes_gaps() {
        //   row2: A
        //   row1: (empty)
        //   row0: B
        let board_rows = [vec![cell(1)], vec![None], vec![cell(0)]];
        let mut board = Board::from_rows(&board_rows);

        let moves = settle(&mut board);
        assert_eq!(
            moves,
            vec![BoardEvent::BlockMoved {
                from: Coord::new(2, 0),
                to: Coord::new(1, 0),
            }]
        );
        assert_eq!(column_colors(&board, 0), vec![Some(1), Some(0), None]);
    }

    #[test]
    fn test_settle_preserves_vertical_order() {
        //   row3: C
        //   row2: (empty)
        //   row1: B
        //   row0: (empty)
        let mut board = Board::from_rows(&[vec![None], vec![cell(1)], vec![None], vec![cell(2)]]);

        settle(&mut board);
        // B below C, same as before compaction.
        assert_eq!(column_colors(&board, 0), vec![Some(1), Some(2), None, None]);
    }

    #[test]
    fn test_settle_conserves_column_multiset() {
        let mut board = Board::from_rows(&[
            vec![None, cell(0)],
            vec![cell(2), None],
            vec![None, cell(0)],
            vec![cell(2), cell(1)],
        ]);

        let before: Vec<Vec<Option<u8>>> = (0..board.cols())
            .map(|col| {
                let mut colors = column_colors(&board, col);
                colors.sort();
                colors
            })
            .collect();

        settle(&mut board);

        for col in 0..board.cols() {
            let mut after = column_colors(&board, col);
            after.sort();
            assert_eq!(after, before[col], "column {} multiset changed", col);
        }
    }

    #[test]
    fn test_settle_is_idempotent() {
        let mut board = Board::from_rows(&[
            vec![None, cell(0), None],
            vec![cell(1), None, None],
            vec![cell(2), cell(0), cell(1)],
        ]);

        let first = settle(&mut board);
        assert!(!first.is_empty());

        let second = settle(&mut board);
        assert!(second.is_empty(), "second settle must be a no-op");
    }

    #[test]
    fn test_settle_full_column_emits_nothing() {
        let mut board = Board::from_rows(&[vec![cell(0)], vec![cell(1)], vec![cell(2)]]);
        assert!(settle(&mut board).is_empty());
    }

    #[test]
    fn test_settle_empty_board_emits_nothing() {
        let mut board = Board::new(4, 4);
        assert!(settle(&mut board).is_empty());
    }
}
