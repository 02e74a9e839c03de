//! Game rules for tic-tac-toe.
//!
//! Pure functions over cell arrays. The board delegates to these so the
//! rules can be tested without going through any mutation API.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{WINNING_LINES, find_winner};
