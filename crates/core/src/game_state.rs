//! Game state module - the authoritative controller
//!
//! Owns the board, the active/next/held piece slots, the RNG, the buff set,
//! and every timer. All mutation flows through `apply_action` and `tick`;
//! hosts read state back through the accessors or a `GameSnapshot`.
//!
//! Lifecycle: spawn -> falling -> lock -> clear detection -> (combo drain)
//! -> finish -> spawn, with GameOver as the only terminal state. Gameplay
//! commands are rejected outright (returning false) while paused, during a
//! combo drain, or after game over - never queued.

use arrayvec::ArrayVec;

use crate::board::Board;
use crate::buffs::{ActiveBuff, BuffSet};
use crate::pieces::{shape, try_rotate};
use crate::rng::SimpleRng;
use crate::scoring::{base_fall_interval_ms, drop_points, level_for_lines, row_clear_points};
use goldfall_types::{
    BuffKind, GameAction, PieceKind, Rotation, COMBO_ROW_DELAY_MS, FALL_CEILING_MS, FALL_FLOOR_MS,
    GOLDEN_SPAWN_PERCENT, SPAWN_POSITION,
};

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tetromino {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub x: i8,
    pub y: i8,
}

impl Tetromino {
    /// Create a new tetromino at the spawn position
    pub fn new(kind: PieceKind) -> Self {
        Self {
            kind,
            rotation: Rotation::North,
            x: SPAWN_POSITION.0,
            y: SPAWN_POSITION.1,
        }
    }

    /// Get the mino offsets for the current rotation
    pub fn shape(&self) -> [(i8, i8); 4] {
        shape(self.kind, self.rotation)
    }

    /// Check the piece occupies a legal position on the board
    pub fn is_valid(&self, board: &Board) -> bool {
        board.is_valid_position(self.kind, self.rotation, self.x, self.y)
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    active: Option<Tetromino>,
    hold: Option<PieceKind>,
    next: PieceKind,
    rng: SimpleRng,
    buffs: BuffSet,
    score: u32,
    level: u32,
    lines: u32,
    /// Current gravity interval; derived from level, bent by speed buffs.
    fall_interval_ms: u32,
    fall_timer_ms: u32,
    /// Rows awaiting a combo drain, bottom-to-top (descending index).
    pending_rows: ArrayVec<usize, 4>,
    combo_timer_ms: u32,
    paused: bool,
    game_over: bool,
    started: bool,
    can_hold: bool,
}

impl GameState {
    /// Create a new game with the given RNG seed
    pub fn new(seed: u32) -> Self {
        let mut rng = SimpleRng::new(seed);
        let next = rng.next_piece();

        Self {
            board: Board::new(),
            active: None,
            hold: None,
            next,
            rng,
            buffs: BuffSet::new(),
            score: 0,
            level: 1,
            lines: 0,
            fall_interval_ms: base_fall_interval_ms(1),
            fall_timer_ms: 0,
            pending_rows: ArrayVec::new(),
            combo_timer_ms: 0,
            paused: false,
            game_over: false,
            started: false,
            can_hold: true,
        }
    }

    /// Start the game and spawn the first piece
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        self.spawn_piece();
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn can_hold(&self) -> bool {
        self.can_hold
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    /// Current gravity interval in ms (level base, bent by speed buffs)
    pub fn fall_interval_ms(&self) -> u32 {
        self.fall_interval_ms
    }

    pub fn hold_piece(&self) -> Option<PieceKind> {
        self.hold
    }

    pub fn next_piece(&self) -> PieceKind {
        self.next
    }

    pub fn active(&self) -> Option<Tetromino> {
        self.active
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn buffs(&self) -> &BuffSet {
        &self.buffs
    }

    /// Currently active buffs with their remaining times
    pub fn active_buffs(&self) -> impl Iterator<Item = &ActiveBuff> {
        self.buffs.iter()
    }

    /// Number of golden cubes currently on the board
    pub fn golden_count(&self) -> u32 {
        self.board.golden_count()
    }

    /// Whether a multi-row combo is draining (input is rejected meanwhile)
    pub fn in_combo(&self) -> bool {
        !self.pending_rows.is_empty()
    }

    /// Pause or resume. While paused, `tick` advances nothing: gravity,
    /// combo drains, and buff timers are all frozen.
    pub fn set_paused(&mut self, paused: bool) {
        if !self.game_over {
            self.paused = paused;
        }
    }

    /// Spawn the next piece at the spawn position.
    ///
    /// Promotes the "next" slot to active and draws a fresh "next". A blocked
    /// spawn is the terminal condition: the piece is never placed and the
    /// game ends.
    fn spawn_piece(&mut self) -> bool {
        let kind = std::mem::replace(&mut self.next, self.rng.next_piece());
        let piece = Tetromino::new(kind);

        if !piece.is_valid(&self.board) {
            self.game_over = true;
            self.active = None;
            return false;
        }

        self.active = Some(piece);
        self.can_hold = true;
        self.fall_timer_ms = 0;
        true
    }

    /// Try to move the active piece by (dx, dy)
    fn try_move(&mut self, dx: i8, dy: i8) -> bool {
        let Some(active) = self.active else {
            return false;
        };

        if self
            .board
            .is_valid_position(active.kind, active.rotation, active.x + dx, active.y + dy)
        {
            self.active = Some(Tetromino {
                x: active.x + dx,
                y: active.y + dy,
                ..active
            });
            return true;
        }

        false
    }

    /// Try to rotate the active piece, resolving wall kicks
    fn try_rotate_active(&mut self, clockwise: bool) -> bool {
        let Some(active) = self.active else {
            return false;
        };

        let result = try_rotate(
            active.kind,
            active.rotation,
            active.x,
            active.y,
            clockwise,
            |x, y| self.board.is_cell_free(x, y),
        );

        if let Some((rotation, (dx, dy))) = result {
            self.active = Some(Tetromino {
                rotation,
                x: active.x + dx,
                y: active.y + dy,
                ..active
            });
            return true;
        }

        false
    }

    /// Drop the active piece to its lowest valid position and lock it.
    /// Awards hard-drop points per cell descended.
    fn hard_drop(&mut self) {
        let Some(active) = self.active else {
            return;
        };

        let mut distance: i8 = 0;
        while self.board.is_valid_position(
            active.kind,
            active.rotation,
            active.x,
            active.y + distance + 1,
        ) {
            distance += 1;
        }

        if distance > 0 {
            self.active = Some(Tetromino {
                y: active.y + distance,
                ..active
            });
        }
        self.score += drop_points(distance as u32, true);
        self.lock_piece();
    }

    /// Swap the active piece into the hold slot (once per piece lifetime)
    fn hold(&mut self) -> bool {
        if !self.can_hold {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };
        let current = active.kind;

        match self.hold {
            Some(held) => {
                let piece = Tetromino::new(held);
                if !piece.is_valid(&self.board) {
                    self.game_over = true;
                    self.active = None;
                    return false;
                }
                self.active = Some(piece);
                self.hold = Some(current);
            }
            None => {
                // First hold of the game: stash and bring in a fresh piece.
                self.hold = Some(current);
                if !self.spawn_piece() {
                    return false;
                }
            }
        }

        self.can_hold = false;
        self.fall_timer_ms = 0;
        true
    }

    /// Lock the active piece into the board and run line-clear detection.
    ///
    /// Zero full rows spawns the next piece immediately; exactly one clears
    /// synchronously; two or more arm the combo sequencer, which drains one
    /// row per delay interval through `tick`.
    fn lock_piece(&mut self) {
        let Some(active) = self.active else {
            return;
        };

        self.board
            .place_piece(&active.shape(), active.x, active.y, active.kind);
        self.active = None;

        let rows = self.board.full_rows();
        match rows.len() {
            0 => {
                self.spawn_piece();
            }
            1 => {
                self.clear_one_row(rows[0]);
                self.finish_clears();
            }
            _ => {
                self.pending_rows = rows;
                self.combo_timer_ms = 0;
            }
        }
    }

    /// Remove one row: shift the stack, award points, and cash in any golden
    /// cubes the row held for a random buff.
    fn clear_one_row(&mut self, y: usize) {
        let removed_golden = self.board.clear_row(y);
        self.lines += 1;
        self.score += row_clear_points(
            self.level,
            self.buffs.score_multiplier(),
            self.buffs.line_bonus_active(),
        );

        if removed_golden > 0 {
            let kind = self.rng.choose(&BuffKind::ALL);
            self.activate_buff(kind);
        }
    }

    /// Post-clear bookkeeping: level-up, golden-cube roll, next spawn.
    ///
    /// A level-up leaves the fall interval alone while a speed buff is
    /// active; the buff's expiry handler re-derives it from the new level.
    fn finish_clears(&mut self) {
        let new_level = level_for_lines(self.lines);
        if new_level > self.level {
            self.level = new_level;
            if !self.buffs.speed_altered() {
                self.fall_interval_ms = base_fall_interval_ms(self.level);
            }
        }

        if self.rng.percent(GOLDEN_SPAWN_PERCENT) {
            self.board.mark_random_golden(&mut self.rng);
        }

        self.spawn_piece();
    }

    /// Activate a buff, applying instantaneous effects immediately
    fn activate_buff(&mut self, kind: BuffKind) {
        self.buffs.activate(kind);
        match kind {
            BuffKind::SpeedBoost => {
                self.fall_interval_ms = (self.fall_interval_ms / 2).max(FALL_FLOOR_MS);
            }
            BuffKind::SlowFall => {
                self.fall_interval_ms = (self.fall_interval_ms * 2).min(FALL_CEILING_MS);
            }
            BuffKind::HoldReset => {
                self.can_hold = true;
            }
            // Continuous buffs are read on demand by the scoring path.
            BuffKind::DoubleScore | BuffKind::LineBonus => {}
        }
    }

    /// The y the active piece would occupy after a hard drop
    pub fn ghost_y(&self) -> Option<i8> {
        let active = self.active?;

        let mut distance: i8 = 0;
        while self.board.is_valid_position(
            active.kind,
            active.rotation,
            active.x,
            active.y + distance + 1,
        ) {
            distance += 1;
        }

        Some(active.y + distance)
    }

    /// Advance all time-dependent state by `elapsed_ms`.
    ///
    /// Handles buff expiry, the combo row drain, and gravity, in that order.
    /// Does nothing while paused or after game over. Negative elapsed time is
    /// unrepresentable: the unsigned argument clamps it at the boundary.
    pub fn tick(&mut self, elapsed_ms: u32) {
        if !self.started || self.paused || self.game_over {
            return;
        }

        // Buff timers run even while a combo drains.
        let expired = self.buffs.tick(elapsed_ms);
        if expired
            .iter()
            .any(|k| matches!(k, BuffKind::SpeedBoost | BuffKind::SlowFall))
        {
            self.fall_interval_ms = base_fall_interval_ms(self.level);
        }

        if !self.pending_rows.is_empty() {
            self.combo_timer_ms += elapsed_ms;
            if self.combo_timer_ms >= COMBO_ROW_DELAY_MS {
                self.combo_timer_ms = 0;
                // Bottom-most pending row first.
                let y = self.pending_rows.remove(0);
                self.clear_one_row(y);
                // Rows above the removed one shifted down a row.
                for row in self.pending_rows.iter_mut() {
                    if *row < y {
                        *row += 1;
                    }
                }
                if self.pending_rows.is_empty() {
                    self.finish_clears();
                }
            }
            return;
        }

        if self.active.is_some() {
            self.fall_timer_ms += elapsed_ms;
            if self.fall_timer_ms >= self.fall_interval_ms {
                self.fall_timer_ms = 0;
                if !self.try_move(0, 1) {
                    self.lock_piece();
                }
            }
        }
    }

    /// Apply a game command. Returns false when the command is rejected
    /// (game over, paused, mid-combo, or simply illegal).
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Pause => {
                if self.game_over {
                    return false;
                }
                self.paused = !self.paused;
                true
            }
            GameAction::Restart => {
                // Reseed from the current stream so episodes differ.
                let seed = self.rng.state();
                *self = Self::new(seed);
                self.start();
                true
            }
            _ if !self.accepts_gameplay() => false,
            GameAction::MoveLeft => self.try_move(-1, 0),
            GameAction::MoveRight => self.try_move(1, 0),
            GameAction::SoftDrop => {
                if self.try_move(0, 1) {
                    self.score += drop_points(1, false);
                } else {
                    // A blocked downward move locks the piece.
                    self.lock_piece();
                }
                true
            }
            GameAction::HardDrop => {
                self.hard_drop();
                true
            }
            GameAction::RotateCw => self.try_rotate_active(true),
            GameAction::RotateCcw => self.try_rotate_active(false),
            GameAction::Hold => self.hold(),
        }
    }

    /// Fill a reusable snapshot buffer without allocating
    pub fn snapshot_into(&self, out: &mut crate::snapshot::GameSnapshot) {
        use crate::snapshot::{ActiveSnapshot, BuffSnapshot};

        self.board.write_u8_grid(&mut out.board);
        self.board.write_golden_grid(&mut out.golden);

        out.active = self.active.map(ActiveSnapshot::from);
        out.ghost_y = self.ghost_y();
        out.hold = self.hold;
        out.next = self.next;
        out.can_hold = self.can_hold;
        out.paused = self.paused;
        out.game_over = self.game_over;
        out.in_combo = self.in_combo();
        out.score = self.score;
        out.level = self.level;
        out.lines = self.lines;
        out.fall_interval_ms = self.fall_interval_ms;
        out.golden_count = self.board.golden_count();

        out.buffs = [None; BuffKind::ALL.len()];
        for (slot, buff) in out.buffs.iter_mut().zip(self.buffs.iter()) {
            *slot = Some(BuffSnapshot {
                kind: buff.kind,
                remaining_ms: buff.remaining_ms,
            });
        }
    }

    pub fn snapshot(&self) -> crate::snapshot::GameSnapshot {
        let mut s = crate::snapshot::GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    fn accepts_gameplay(&self) -> bool {
        self.started
            && !self.game_over
            && !self.paused
            && self.pending_rows.is_empty()
            && self.active.is_some()
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
