mod board;
mod column;
mod game;
mod kind;
mod r#move;
mod outcome;
mod piece;
mod position;
mod promotion;
mod row;
mod team;

/// Pseudo-legal move generation.
pub mod movegen;

pub use board::*;
pub use column::*;
pub use game::*;
pub use kind::*;
pub use outcome::*;
pub use piece::*;
pub use position::*;
pub use promotion::*;
pub use r#move::*;
pub use row::*;
pub use team::*;
