//! Two-player console chess: board state, per-piece move legality and the
//! flat-text save format. The interactive shell lives in the binary.

pub mod board;
pub mod notation;
pub mod rules;
