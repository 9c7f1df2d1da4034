//! Grid snake: a fixed-step simulation core with a terminal front end.

pub mod body;
pub mod clock;
pub mod collision;
pub mod config;
pub mod error;
pub mod game;
pub mod input;
pub mod logging;
pub mod movement;
pub mod pickup;
pub mod renderer;
pub mod terminal_runtime;
pub mod ui;
