// Decision engine - minimax with alpha-beta pruning
//
// The search is exhaustive (no depth cutoff, no heuristic approximation), so
// on a 3x3 board it is provably optimal: playing second it never loses, and
// it wins in the minimum number of plies whenever a forced win exists.

mod engine_player;
mod minimax;
mod search;

pub use engine_player::EnginePlayer;
pub use minimax::{value, MAX_VALUE, MIN_VALUE, WIN_VALUE};
pub use search::{select_move, SearchResult};
