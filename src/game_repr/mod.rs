mod board;
mod mark;
mod status;

pub use board::*;
pub use mark::*;
pub use status::*;
