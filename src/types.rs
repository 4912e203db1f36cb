//! Core types shared across the engine
//! This module contains pure data types with no dependencies on the board
//! or the state machine.

use serde::Serialize;

/// Identifier of a tile color: an index into the level's color catalog.
///
/// The catalog size is configured per level (`LevelConfig::num_colors`), so
/// colors are opaque indices rather than a fixed enum. Two cells match iff
/// their `ColorId`s are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct ColorId(pub u8);

impl ColorId {
    /// Raw catalog index.
    pub fn index(self) -> u8 {
        self.0
    }
}

/// Cell occupant (None = empty)
pub type Cell = Option<ColorId>;

/// Board coordinate. Row 0 is the bottom row; gravity pulls toward it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Visual tier of a group, derived from its size against the level's three
/// ascending thresholds. Never stored as board state; recomputed on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum ComboTier {
    /// size <= threshold A: default icon
    Base,
    /// A < size <= B
    First,
    /// B < size <= C
    Second,
    /// size > C
    Third,
}

impl ComboTier {
    /// Numeric tier 0..=3, for presentation layers that index icon sets.
    pub fn index(self) -> u8 {
        match self {
            ComboTier::Base => 0,
            ComboTier::First => 1,
            ComboTier::Second => 2,
            ComboTier::Third => 3,
        }
    }
}

/// Events emitted by the board phases, consumed by the presentation layer
/// to drive removal/fall/spawn animations and icon swaps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BoardEvent {
    BlockRemoved { cell: Coord },
    BlockMoved { from: Coord, to: Coord },
    BlockSpawned { cell: Coord, color: ColorId },
    ComboTierChanged { cell: Coord, tier: ComboTier },
}

/// Coordinator phases. `Idle` is the only phase that accepts player input;
/// every other phase runs to completion and waits for the presentation
/// layer's animation-done signal (`Checking` resolves synchronously and is
/// never observed between calls).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Removing,
    Gravity,
    Refill,
    Checking,
    Shuffling,
}

impl Phase {
    /// Convert to string, for logs and the driver binary.
    pub fn as_str(self) -> &'static str {
        match self {
            Phase::Idle => "idle",
            Phase::Removing => "removing",
            Phase::Gravity => "gravity",
            Phase::Refill => "refill",
            Phase::Checking => "checking",
            Phase::Shuffling => "shuffling",
        }
    }

    /// True for the one phase that accepts clicks.
    pub fn accepts_input(self) -> bool {
        matches!(self, Phase::Idle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combo_tier_index_order() {
        assert_eq!(ComboTier::Base.index(), 0);
        assert_eq!(ComboTier::First.index(), 1);
        assert_eq!(ComboTier::Second.index(), 2);
        assert_eq!(ComboTier::Third.index(), 3);
        assert!(ComboTier::Base < ComboTier::Third);
    }

    #[test]
    fn test_phase_accepts_input() {
        assert!(Phase::Idle.accepts_input());
        for phase in [
            Phase::Removing,
            Phase::Gravity,
            Phase::Refill,
            Phase::Checking,
            Phase::Shuffling,
        ] {
            assert!(!phase.accepts_input(), "{} should reject input", phase.as_str());
        }
    }

    #[test]
    fn test_event_json_shape() {
        let event = BoardEvent::BlockSpawned {
            cell: Coord::new(2, 1),
            color: ColorId(4),
        };
        let json = serde_json::to_string(&event).unwrap();
        assert_eq!(
            json,
            r#"{"type":"block_spawned","cell":{"row":2,"col":1},"color":4}"#
        );
    }
}
