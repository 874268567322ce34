use crate::game_state::Tetromino;
use goldfall_types::{BuffKind, PieceKind, Rotation, BOARD_HEIGHT, BOARD_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub x: i8,
    pub y: i8,
}

impl From<Tetromino> for ActiveSnapshot {
    fn from(value: Tetromino) -> Self {
        Self {
            kind: value.kind,
            rotation: value.rotation,
            x: value.x,
            y: value.y,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BuffSnapshot {
    pub kind: BuffKind,
    pub remaining_ms: u32,
}

/// A complete, allocation-free view of the game for hosts to render or log.
///
/// `board` holds cell codes (0 empty, 1..=7 per piece kind, in `PieceKind`
/// order); `golden` mirrors its layout. `buffs` is a fixed slot array filled
/// front to back; a `None` slot means no further buffs are active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub board: [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    pub golden: [[bool; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    pub active: Option<ActiveSnapshot>,
    pub ghost_y: Option<i8>,
    pub hold: Option<PieceKind>,
    pub next: PieceKind,
    pub can_hold: bool,
    pub paused: bool,
    pub game_over: bool,
    pub in_combo: bool,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub fall_interval_ms: u32,
    pub golden_count: u32,
    pub buffs: [Option<BuffSnapshot>; BuffKind::ALL.len()],
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.board = [[0u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];
        self.golden = [[false; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];
        self.active = None;
        self.ghost_y = None;
        self.hold = None;
        self.next = PieceKind::I;
        self.can_hold = true;
        self.paused = false;
        self.game_over = false;
        self.in_combo = false;
        self.score = 0;
        self.level = 1;
        self.lines = 0;
        self.fall_interval_ms = 0;
        self.golden_count = 0;
        self.buffs = [None; BuffKind::ALL.len()];
    }

    pub fn playable(&self) -> bool {
        !self.game_over && !self.paused && !self.in_combo
    }

    /// Active buffs, in activation order
    pub fn active_buffs(&self) -> impl Iterator<Item = &BuffSnapshot> {
        self.buffs.iter().flatten()
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        let mut s = Self {
            board: [[0u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            golden: [[false; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            active: None,
            ghost_y: None,
            hold: None,
            next: PieceKind::I,
            can_hold: true,
            paused: false,
            game_over: false,
            in_combo: false,
            score: 0,
            level: 1,
            lines: 0,
            fall_interval_ms: 0,
            golden_count: 0,
            buffs: [None; BuffKind::ALL.len()],
        };
        s.clear();
        s
    }
}
