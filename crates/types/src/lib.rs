//! Shared data structures and constants for the goldfall engine.
//!
//! All types here are pure data with no dependencies, usable from the core
//! engine and from any host (terminal shell, GUI, headless driver).
//!
//! # Board dimensions
//!
//! Standard playfield: 10 columns (0-9, left to right) by 20 rows (0-19,
//! top to bottom). New pieces spawn with their 4x4 box origin at (3, 0).
//!
//! # Timing
//!
//! All timing is elapsed-milliseconds accumulation fed through
//! `GameState::tick`; the core never reads a clock. Gravity starts at
//! [`BASE_FALL_MS`] on level 1 and speeds up by [`FALL_STEP_MS`] per level,
//! clamped to [`FALL_FLOOR_MS`]:
//!
//! | Level | Fall interval |
//! |-------|---------------|
//! | 1 | 500ms |
//! | 2 | 450ms |
//! | 5 | 300ms |
//! | 10+ | clamped toward 50ms |
//!
//! Multi-row clears drain one row per [`COMBO_ROW_DELAY_MS`].
//!
//! # Buffs
//!
//! Clearing a row that contains a golden cube activates one random buff from
//! the fixed [`BuffKind`] catalog. Durations are per kind; re-activating a
//! buff refreshes its remaining time instead of stacking.
//!
//! # Examples
//!
//! ```
//! use goldfall_types::{BuffKind, GameAction, PieceKind, Rotation};
//!
//! let piece = PieceKind::from_str("t").unwrap();
//! assert_eq!(piece, PieceKind::T);
//!
//! assert_eq!(Rotation::North.rotate_cw(), Rotation::East);
//!
//! let action = GameAction::from_str("hardDrop").unwrap();
//! assert_eq!(action, GameAction::HardDrop);
//!
//! assert_eq!(BuffKind::SpeedBoost.as_str(), "speed_boost");
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Spawn position for new pieces: origin of the 4x4 shape box (x, y)
pub const SPAWN_POSITION: (i8, i8) = (3, 0);

/// Gravity interval at level 1 (500ms per row)
pub const BASE_FALL_MS: u32 = 500;

/// Gravity speedup per level above 1
pub const FALL_STEP_MS: u32 = 50;

/// Minimum gravity interval; also the floor for the speed-boost buff
pub const FALL_FLOOR_MS: u32 = 50;

/// Maximum gravity interval the slow-fall buff can stretch to
pub const FALL_CEILING_MS: u32 = 1000;

/// Delay between individual row removals while a combo is draining
pub const COMBO_ROW_DELAY_MS: u32 = 250;

/// Base points per cleared row, multiplied by level and active buffs
pub const ROW_CLEAR_POINTS: u32 = 100;

/// Chance (percent) that a golden cube appears after a clear resolves
pub const GOLDEN_SPAWN_PERCENT: u32 = 20;

/// Points per cell descended via the soft-drop command
pub const SOFT_DROP_POINTS: u32 = 1;

/// Points per cell descended via hard drop
pub const HARD_DROP_POINTS: u32 = 2;

/// The seven tetromino piece kinds
///
/// - **I**: cyan bar
/// - **O**: yellow 2x2 square
/// - **T**: magenta T
/// - **S**: green S
/// - **Z**: red Z (mirror of S)
/// - **J**: blue J
/// - **L**: orange L (mirror of J)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// All seven kinds, in catalog order. Spawn draws pick uniformly from
    /// this list (no bag randomizer).
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Parse piece kind from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "o" => Some(PieceKind::O),
            "t" => Some(PieceKind::T),
            "s" => Some(PieceKind::S),
            "z" => Some(PieceKind::Z),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::O => "o",
            PieceKind::T => "t",
            PieceKind::S => "s",
            PieceKind::Z => "z",
            PieceKind::J => "j",
            PieceKind::L => "l",
        }
    }
}

/// Rotation states following the Super Rotation System (SRS)
///
/// - **North**: spawn orientation
/// - **East**: 90° clockwise
/// - **South**: 180°
/// - **West**: 270° clockwise
///
/// All seven kinds use the full 4-state cycle; the O piece's shape happens
/// to be identical in every state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rotation {
    North,
    East,
    South,
    West,
}

impl Rotation {
    /// Rotate clockwise (90°)
    pub fn rotate_cw(&self) -> Self {
        match self {
            Rotation::North => Rotation::East,
            Rotation::East => Rotation::South,
            Rotation::South => Rotation::West,
            Rotation::West => Rotation::North,
        }
    }

    /// Rotate counter-clockwise (-90°)
    pub fn rotate_ccw(&self) -> Self {
        match self {
            Rotation::North => Rotation::West,
            Rotation::West => Rotation::South,
            Rotation::South => Rotation::East,
            Rotation::East => Rotation::North,
        }
    }

    /// Index into rotation-state tables (N=0, E=1, S=2, W=3)
    pub fn index(&self) -> usize {
        match self {
            Rotation::North => 0,
            Rotation::East => 1,
            Rotation::South => 2,
            Rotation::West => 3,
        }
    }
}

/// Game commands applied through `GameState::apply_action`
///
/// Hosts map their own key bindings (and key-repeat policy) onto these;
/// the core only sees discrete commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Drop piece one cell down (locks on a blocked floor)
    SoftDrop,
    /// Instantly drop piece to its lowest valid position and lock
    HardDrop,
    /// Rotate piece 90° clockwise with wall kicks
    RotateCw,
    /// Rotate piece 90° counter-clockwise with wall kicks
    RotateCcw,
    /// Swap the active piece into the hold slot (once per piece)
    Hold,
    /// Toggle pause
    Pause,
    /// Reinitialize the game, discarding all state
    Restart,
}

impl GameAction {
    /// Parse action from its camelCase string form
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "softdrop" => Some(GameAction::SoftDrop),
            "harddrop" => Some(GameAction::HardDrop),
            "rotatecw" => Some(GameAction::RotateCw),
            "rotateccw" => Some(GameAction::RotateCcw),
            "hold" => Some(GameAction::Hold),
            "pause" => Some(GameAction::Pause),
            "restart" => Some(GameAction::Restart),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::SoftDrop => "softDrop",
            GameAction::HardDrop => "hardDrop",
            GameAction::RotateCw => "rotateCw",
            GameAction::RotateCcw => "rotateCcw",
            GameAction::Hold => "hold",
            GameAction::Pause => "pause",
            GameAction::Restart => "restart",
        }
    }
}

/// Timed buffs granted by clearing a golden cube
///
/// Instant buffs apply their effect once at activation and then merely sit
/// in the active set until they expire; continuous buffs are consulted by
/// the scoring path while present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuffKind {
    /// Halve the fall interval (clamped to [`FALL_FLOOR_MS`])
    SpeedBoost,
    /// Double the fall interval (clamped to [`FALL_CEILING_MS`])
    SlowFall,
    /// Double all row-clear points while active
    DoubleScore,
    /// 1.5x row-clear bonus while active
    LineBonus,
    /// Immediately re-enable hold for the current piece
    HoldReset,
}

impl BuffKind {
    /// The fixed buff catalog; golden clears pick uniformly from this.
    pub const ALL: [BuffKind; 5] = [
        BuffKind::SpeedBoost,
        BuffKind::SlowFall,
        BuffKind::DoubleScore,
        BuffKind::LineBonus,
        BuffKind::HoldReset,
    ];

    /// Duration of one activation, in milliseconds
    pub fn duration_ms(&self) -> u32 {
        match self {
            BuffKind::SpeedBoost => 8_000,
            BuffKind::SlowFall => 8_000,
            BuffKind::DoubleScore => 10_000,
            BuffKind::LineBonus => 10_000,
            BuffKind::HoldReset => 3_000,
        }
    }

    /// Whether the effect fires once at activation (vs. checked on demand)
    pub fn is_instant(&self) -> bool {
        matches!(
            self,
            BuffKind::SpeedBoost | BuffKind::SlowFall | BuffKind::HoldReset
        )
    }

    /// Parse buff kind from its snake_case string form
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "speed_boost" => Some(BuffKind::SpeedBoost),
            "slow_fall" => Some(BuffKind::SlowFall),
            "double_score" => Some(BuffKind::DoubleScore),
            "line_bonus" => Some(BuffKind::LineBonus),
            "hold_reset" => Some(BuffKind::HoldReset),
            _ => None,
        }
    }

    /// Convert to snake_case string
    pub fn as_str(&self) -> &'static str {
        match self {
            BuffKind::SpeedBoost => "speed_boost",
            BuffKind::SlowFall => "slow_fall",
            BuffKind::DoubleScore => "double_score",
            BuffKind::LineBonus => "line_bonus",
            BuffKind::HoldReset => "hold_reset",
        }
    }
}

/// A cell on the board: empty or filled with a piece kind's color tag
pub type Cell = Option<PieceKind>;
