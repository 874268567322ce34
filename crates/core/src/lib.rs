//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and simulation
//! logic. It has **zero dependencies** on UI, input handling, or I/O, making
//! it:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: Comprehensive unit tests for all game rules
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//! - **Fast**: Zero-allocation hot paths for game tick processing
//!
//! # Module Structure
//!
//! - [`board`]: 10x20 game board with collision detection, line clearing, and
//!   the golden-cube marker plane
//! - [`game_state`]: Complete game state including active piece, scoring,
//!   timing, the combo sequencer, and buff effects
//! - [`pieces`]: Tetromino shape definitions and SRS rotation with wall kicks
//! - [`rng`]: Seeded LCG driving uniform piece draws and golden-cube rolls
//! - [`scoring`]: Row points, level progression, and gravity intervals
//! - [`buffs`]: Timed modifiers earned by clearing golden cubes
//! - [`snapshot`]: Allocation-free state views for hosts
//!
//! # Game Rules
//!
//! - **Uniform Randomizer**: Each piece is drawn independently of history;
//!   there is no bag
//! - **SRS Rotation**: Super Rotation System with wall kicks for all pieces
//!   except O, which rotates in place
//! - **Golden Cubes**: After a clear there is a 20% chance a random settled
//!   cell turns golden; clearing a row holding one grants a random buff
//! - **Combo Sequencer**: Two or more simultaneous full rows drain one row
//!   every 250ms, bottom to top, with input suspended until done
//! - **Hold**: Store one piece for later use (once per piece; the
//!   `hold_reset` buff re-arms it)
//! - **Ghost Piece**: Shows where the current piece will land
//!
//! # Example
//!
//! ```
//! use goldfall_core::GameState;
//! use goldfall_types::GameAction;
//!
//! // Create and start a game
//! let mut game = GameState::new(12345);
//! game.start();
//!
//! // Apply game actions
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::RotateCw);
//! game.apply_action(GameAction::HardDrop);
//!
//! // Check game state
//! assert!(game.score() > 0); // Hard drop awards points
//! ```
//!
//! # Timing
//!
//! The controller is driven by elapsed wall time:
//! - **Gravity**: `max(50, 500 - (level - 1) * 50)` ms per row, halved or
//!   doubled by speed buffs
//! - **Combo Drain**: one pending row every 250ms
//! - **Buffs**: expire on their own clocks (3-10s)
//!
//! Call [`GameState::tick`](game_state::GameState::tick) every frame with
//! elapsed time. While paused, every one of those clocks is frozen.

pub mod board;
pub mod buffs;
pub mod game_state;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use goldfall_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use buffs::{ActiveBuff, BuffSet};
pub use game_state::{GameState, Tetromino};
pub use pieces::{shape, try_rotate};
pub use rng::SimpleRng;
pub use scoring::{base_fall_interval_ms, drop_points, level_for_lines, row_clear_points};
pub use snapshot::{ActiveSnapshot, BuffSnapshot, GameSnapshot};
