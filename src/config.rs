//! Configuration constants for the sensor sweep simulation.

use macroquad::color::Color;

// Window
pub const WINDOW_WIDTH: i32 = 800;
pub const WINDOW_HEIGHT: i32 = 800;
pub const WINDOW_TITLE: &str = "BaazSim-2d";
pub const FRAME_RATE: u32 = 60; // Target frame rate

// Sensor sweep
pub const SENSOR_RADIUS: f32 = 20.0; // Player body radius, also the ray start offset in pixels
pub const RAY_COUNT: usize = 12; // Ultrasonic sensors around the body
pub const RAY_STEP_LIMIT: u32 = 100; // Probes per ray before it counts as a miss
pub const DEG_TO_RAD: f64 = 0.0174533; // Rounded on purpose, ray angles depend on it
pub const MARKER_RADIUS: f32 = 10.0; // Wall hit marker
pub const RAY_THICKNESS: f32 = 1.0;

// Player
pub const PLAYER_SPEED: f32 = 1.0; // Pixels per frame on each axis
pub const SPAWN_OFFSET: f32 = 10.0; // Spawn is the window centre minus this on both axes

// Colours
const BACKGROUND_GREY: f32 = 0x18 as f32 / 255.0;
pub const BACKGROUND_COLOR: Color =
    Color::new(BACKGROUND_GREY, BACKGROUND_GREY, BACKGROUND_GREY, 1.0);
pub const WALL_COLOR: Color = macroquad::color::BLUE;
pub const PLAYER_COLOR: Color = macroquad::color::RED;
pub const RAY_COLOR: Color = macroquad::color::GREEN;
pub const MARKER_COLOR: Color = macroquad::color::PINK;
pub const TRACE_BACKGROUND: Color = macroquad::color::BLACK;
