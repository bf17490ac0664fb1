//! Top-down grid simulation with a ring of ultrasonic-style range sensors.

pub mod config;
pub mod error;
pub mod game;
pub mod logging;
pub mod map;
pub mod platform;
pub mod player;
pub mod render;
pub mod sensor;
pub mod trace;
