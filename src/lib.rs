// Breakthrough engine: board rules, fixed three-ply minimax, and game drivers
pub mod board;
pub mod config;
pub mod error;
pub mod perft;
pub mod search;
pub mod selfplay;

pub use board::{new_initial_state, BoardState, Move, Side, Square, Winner};
pub use config::GameConfig;
pub use error::{Error, Result};
pub use search::eval::Strategy;
pub use search::{compute_next_state, search, SearchResult};
