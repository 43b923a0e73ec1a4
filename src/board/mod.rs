//! Core board types: powers, units, and the game state.

pub mod power;
pub mod state;
pub mod unit;

pub use power::{Power, ALL_POWERS};
pub use state::{Dislodgement, GameState, Season};
pub use unit::{Unit, UnitKind};
