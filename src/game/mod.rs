//! Core game module: state, rules and the engines that drive them.
//!
//! Nothing in here touches the ECS world beyond deriving `Resource`/`Message`;
//! the plugins feed it time, input and randomness.

mod collision;
mod config;
mod constants;
mod events;
mod expiry;
mod game_loop;
mod movement;
mod power_ups;
mod spawn;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use collision::*;
pub use config::*;
pub use constants::*;
pub use events::*;
pub use expiry::*;
pub use game_loop::*;
pub use movement::*;
pub use power_ups::*;
pub use spawn::*;
pub use state::*;
pub use types::*;
