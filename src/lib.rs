//! Snake with power-ups and wandering enemies.
//!
//! - `game`: rules and state, free of any ECS scheduling
//! - `persistence`: high-score storage
//! - `snake`, `food`, `ui`, `rendering`: Bevy plugins around the core

pub mod food;
pub mod game;
pub mod persistence;
pub mod rendering;
pub mod snake;
pub mod ui;
