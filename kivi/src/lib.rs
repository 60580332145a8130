pub use board::*;
pub use dice::*;
pub use errors::*;
pub use game::*;
pub use match_state::*;
pub use opponent::*;
pub use players::*;
pub use rules::*;
pub use snapshot::*;
pub use turn::*;
pub use visualization::*;

#[cfg(test)]
mod arbitrary;
mod board;
mod dice;
mod errors;
mod game;
mod match_state;
mod opponent;
mod players;
mod rules;
mod snapshot;
mod turn;
mod visualization;
