use crate::config::{BACKGROUND_COLOR, FRAME_RATE, PLAYER_SPEED, WINDOW_HEIGHT, WINDOW_WIDTH};
use crate::map::Map;
use crate::platform::Platform;
use crate::player::{Player, PlayerShape};
use crate::render::Renderer;
use crate::sensor::{RayHit, Sensor};
use crate::trace::SensorTrace;
use crate::{debug_player, debug_sensor};
use log::info;
use macroquad::input::prevent_quit;
use macroquad::math::Vec2;
use macroquad::prelude::{get_frame_time, next_frame};

// Most fixed steps run after a single slow frame
const MAX_CATCH_UP_STEPS: u32 = 5;

/// Runtime options gathered from the command line
#[derive(Debug, Clone, Copy)]
pub struct Settings {
    pub speed: f32,
    pub shape: PlayerShape,
    pub reveal_map: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            speed: PLAYER_SPEED,
            shape: PlayerShape::Circle,
            reveal_map: false,
        }
    }
}

/// Fixed-step accumulator: movement advances in whole steps of `1 / rate`
/// seconds regardless of how fast frames are presented
#[derive(Debug, Clone, Copy)]
pub struct FrameClock {
    step: f32,
    accumulator: f32,
}

impl FrameClock {
    pub fn new(rate: u32) -> Self {
        FrameClock {
            step: 1.0 / rate as f32,
            accumulator: 0.0,
        }
    }

    /// Adds `dt` seconds and returns how many steps are due. After a long stall
    /// the backlog is dropped rather than replayed.
    pub fn advance(&mut self, dt: f32) -> u32 {
        self.accumulator += dt;
        let mut steps = 0;
        while self.accumulator >= self.step {
            self.accumulator -= self.step;
            steps += 1;
        }
        if steps > MAX_CATCH_UP_STEPS {
            self.accumulator = 0.0;
            steps = MAX_CATCH_UP_STEPS;
        }
        steps
    }
}

/// The Game struct owns the map, the player and the sensor trace, and advances
/// them one frame at a time
pub struct Game {
    pub map: Map,
    pub player: Player,
    pub sensor: Sensor,
    pub trace: SensorTrace,
    pub frame_count: u64,
    reveal_map: bool,
}

impl Game {
    /// Create a new game on a parsed map, sized for the configured window
    pub fn new(map: Map, settings: &Settings) -> Self {
        let screen = Vec2::new(WINDOW_WIDTH as f32, WINDOW_HEIGHT as f32);
        let player = Player::spawn(&map, screen, settings.speed, settings.shape);
        info!(
            "Player spawned at ({:.1}, {:.1}), size {:.1}x{:.1}.",
            player.position.x, player.position.y, player.size.x, player.size.y
        );

        Game {
            map,
            player,
            sensor: Sensor::default(),
            trace: SensorTrace::new(WINDOW_WIDTH as u16, WINDOW_HEIGHT as u16),
            frame_count: 0,
            reveal_map: settings.reveal_map,
        }
    }

    /// Run the main loop until the platform asks to close
    pub async fn run<P: Platform>(&mut self, platform: &mut P) {
        info!("Starting main loop at {} FPS...", FRAME_RATE);
        // Route the close button through `close_requested` so the loop can log its exit
        prevent_quit();
        let mut clock = FrameClock::new(FRAME_RATE);

        while !platform.close_requested() {
            self.draw_frame(platform);
            for _ in 0..clock.advance(get_frame_time()) {
                self.step();
            }
            next_frame().await;
        }
        info!("Exiting after {} frames.", self.frame_count);
    }

    /// One frame with exactly one movement step. Returns the rays cast this frame.
    pub fn frame<P: Platform>(&mut self, platform: &mut P) -> Vec<RayHit> {
        let rays = self.draw_frame(platform);
        self.step();
        rays
    }

    /// Integrates one fixed step of player movement.
    pub fn step(&mut self) {
        self.player.advance();
    }

    /// Input, sensing and drawing for one frame. Does not move the player.
    pub fn draw_frame<P: Platform>(&mut self, platform: &mut P) -> Vec<RayHit> {
        let screen = platform.screen_size();
        platform.clear(BACKGROUND_COLOR);

        // The opaque trace overlay hides walls drawn beneath it
        if !self.reveal_map {
            Renderer::draw_map(platform, &self.map);
        }

        let key = platform.last_key_pressed();
        if key.is_some() {
            debug_player!(frame: self.frame_count, "Key pressed: {:?}", key);
        }
        self.player.steer(key);

        platform.draw_trace(&self.trace);
        if self.reveal_map {
            Renderer::draw_map(platform, &self.map);
        }

        let rays = self.sensor.sweep(self.player.position, &self.map, screen);
        let committed = self.trace.record(&rays);
        debug_sensor!(
            frame: self.frame_count,
            "{} of {} rays hit, {} trace pixels committed",
            rays.iter().filter(|ray| ray.hit()).count(),
            rays.len(),
            committed
        );

        Renderer::draw_player(platform, &self.player);
        Renderer::draw_rays(platform, &rays);

        self.frame_count += 1;
        rays
    }
}
