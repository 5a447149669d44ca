//! Decision engine for two-player, zero-sum, perfect-information play on a
//! 3x3 board, shipped as the tic-tac-toe opponent.
//!
//! The crate is split the way the modules depend on each other, leaves first:
//! - [`game_repr`]: board model and terminal detection (pure functions).
//! - [`agent::ai`]: exhaustive minimax search with alpha-beta pruning and the
//!   root move selector.
//! - [`agent`]: the [`Player`](agent::Player) trait plus engine and terminal
//!   implementations.
//! - [`orchestrator`]: the controller state machine owning turn order.
//!
//! The engine is stateless between calls and never modifies a board it is
//! handed; the orchestrator owns the only long-lived state.

pub mod agent;
pub mod error;
pub mod game_repr;
pub mod orchestrator;

pub use error::EngineError;
