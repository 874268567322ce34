//! Goldfall (workspace facade crate).
//!
//! This package keeps the `goldfall::{core,types}` public API stable while
//! the implementation lives in dedicated crates under `crates/`.

pub use goldfall_core as core;
pub use goldfall_types as types;
