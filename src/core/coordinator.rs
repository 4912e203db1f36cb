//! Board coordinator - the phase state machine driving a full turn
//!
//! A turn walks Idle -> Removing -> Gravity -> Refill -> Checking and back
//! to Idle (through Shuffling when the refilled board is dead). The
//! algorithmic work in each phase is synchronous; what the coordinator
//! waits on is the presentation layer, which animates each phase's events
//! and then calls `on_phase_animation_done`. Only Idle accepts clicks;
//! anything else ignores them.

use tracing::{debug, warn};

use crate::config::{ConfigError, LevelConfig};
use crate::core::board::Board;
use crate::core::rng::SimpleRng;
use crate::core::shuffle::ShuffleOutcome;
use crate::core::{combo, deadlock, gravity, groups, refill, shuffle};
use crate::types::{BoardEvent, ComboTier, Coord, Phase};

/// Owns the board, the RNG, and the phase machine for one game session.
#[derive(Debug, Clone)]
pub struct BoardCoordinator {
    config: LevelConfig,
    board: Board,
    rng: SimpleRng,
    phase: Phase,
    /// Last tier shown per cell (row-major); lets the refresh emit
    /// `ComboTierChanged` only for cells whose icon actually changes.
    tiers: Vec<ComboTier>,
    /// Events queued for the presentation layer, drained batch-wise.
    events: Vec<BoardEvent>,
    /// Outcome of the most recent reshuffle, if one has run.
    last_shuffle: Option<ShuffleOutcome>,
}

impl BoardCoordinator {
    /// Create a session with a randomly populated board.
    pub fn new(config: LevelConfig, seed: u32) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut rng = SimpleRng::new(seed);
        let mut board = Board::new(config.rows, config.cols);
        board.fill_random(&mut rng, config.num_colors);
        Ok(Self::start(config, board, rng))
    }

    /// Create a session from a prepared board (fixtures, replays).
    pub fn with_board(config: LevelConfig, board: Board, seed: u32) -> Result<Self, ConfigError> {
        config.validate()?;
        if board.rows() != config.rows || board.cols() != config.cols {
            return Err(ConfigError::BoardMismatch {
                expected_rows: config.rows,
                expected_cols: config.cols,
                rows: board.rows(),
                cols: board.cols(),
            });
        }
        Ok(Self::start(config, board, SimpleRng::new(seed)))
    }

    fn start(config: LevelConfig, board: Board, rng: SimpleRng) -> Self {
        let mut coordinator = Self {
            tiers: vec![ComboTier::Base; config.cell_count()],
            events: Vec::new(),
            phase: Phase::Idle,
            last_shuffle: None,
            config,
            board,
            rng,
        };

        // A board can roll deadlocked straight out of the fill; reshuffle
        // before the first input so play starts on a solvable board
        // whenever one is constructible.
        if deadlock::is_deadlocked(&coordinator.board) {
            debug!("board deadlocked at creation");
            coordinator.run_shuffle();
        }
        coordinator.refresh_combo_tiers();
        coordinator
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn config(&self) -> &LevelConfig {
        &self.config
    }

    /// Tier currently shown at a cell (Base for empty cells).
    pub fn tier_at(&self, cell: Coord) -> ComboTier {
        self.tiers
            .get(cell.row * self.config.cols + cell.col)
            .copied()
            .unwrap_or(ComboTier::Base)
    }

    /// Outcome of the most recent reshuffle. `NoGuarantee` means the board
    /// may still be unsolvable; a caller can trigger level-reset policy.
    pub fn last_shuffle_outcome(&self) -> Option<ShuffleOutcome> {
        self.last_shuffle
    }

    /// Take the queued events for this batch; the presentation layer calls
    /// this once per phase before animating.
    pub fn drain_events(&mut self) -> Vec<BoardEvent> {
        std::mem::take(&mut self.events)
    }

    /// Player clicked the tile at `cell`. Valid only while Idle and only on
    /// a group of at least two; anything else is a silent no-op. Returns
    /// whether a turn started.
    pub fn on_click(&mut self, cell: Coord) -> bool {
        if !self.phase.accepts_input() {
            debug!(phase = self.phase.as_str(), "click ignored outside idle");
            return false;
        }

        let group = groups::find_group(&self.board, cell);
        if group.len() < 2 {
            debug!(
                row = cell.row,
                col = cell.col,
                size = group.len(),
                "click does not resolve to a removable group"
            );
            return false;
        }

        debug!(size = group.len(), "removing group");
        for &at in &group {
            self.board.set(at.row, at.col, None);
            self.events.push(BoardEvent::BlockRemoved { cell: at });
        }
        self.refresh_combo_tiers();
        self.set_phase(Phase::Removing);
        true
    }

    /// The presentation layer finished animating the current phase's batch.
    /// Runs the next phase's work synchronously. Valid only in a transient
    /// phase; returns whether a transition happened.
    pub fn on_phase_animation_done(&mut self) -> bool {
        match self.phase {
            Phase::Idle | Phase::Checking => {
                debug!(phase = self.phase.as_str(), "animation-done signal ignored");
                false
            }
            Phase::Removing => {
                let moves = gravity::settle(&mut self.board);
                debug!(moves = moves.len(), "gravity settled");
                self.events.extend(moves);
                self.refresh_combo_tiers();
                self.set_phase(Phase::Gravity);
                true
            }
            Phase::Gravity => {
                let spawns = refill::refill(&mut self.board, &mut self.rng, self.config.num_colors);
                debug!(spawns = spawns.len(), "board refilled");
                self.events.extend(spawns);
                self.refresh_combo_tiers();
                self.set_phase(Phase::Refill);
                true
            }
            Phase::Refill => {
                // Checking resolves synchronously; it never waits on an
                // animation of its own.
                self.set_phase(Phase::Checking);
                if deadlock::has_any_move(&self.board) {
                    self.set_phase(Phase::Idle);
                } else {
                    debug!("no move left, reshuffling");
                    self.run_shuffle();
                    self.refresh_combo_tiers();
                    self.set_phase(Phase::Shuffling);
                }
                true
            }
            Phase::Shuffling => {
                self.set_phase(Phase::Idle);
                true
            }
        }
    }

    fn run_shuffle(&mut self) {
        let result = shuffle::smart_shuffle(&mut self.board, &mut self.rng);
        if result.outcome == ShuffleOutcome::NoGuarantee {
            warn!("reshuffle without guarantee, board may remain unsolvable");
        }
        self.last_shuffle = Some(result.outcome);
        self.events.extend(result.moves);
    }

    /// Recompute group tiers for the whole board and emit a
    /// `ComboTierChanged` for every cell whose icon differs from what the
    /// presentation last saw. Runs after every structural change.
    fn refresh_combo_tiers(&mut self) {
        let cols = self.config.cols;

        // Empty cells show no icon; reset their cache so a future occupant
        // diffs against the default tier.
        for at in self.board.coords() {
            if !self.board.is_occupied(at.row, at.col) {
                self.tiers[at.row * cols + at.col] = ComboTier::Base;
            }
        }

        for group in groups::find_all_groups(&self.board) {
            let tier = combo::tier_for_size(group.len(), &self.config);
            for &at in &group {
                let idx = at.row * cols + at.col;
                if self.tiers[idx] != tier {
                    self.tiers[idx] = tier;
                    self.events.push(BoardEvent::ComboTierChanged { cell: at, tier });
                }
            }
        }
    }

    fn set_phase(&mut self, next: Phase) {
        debug!(from = self.phase.as_str(), to = next.as_str(), "phase transition");
        self.phase = next;
    }
}
