//! Window, input and drawing seam. The simulation only talks to a `Platform`,
//! so it can run against macroquad or headless in tests.

use crate::trace::SensorTrace;
use macroquad::color::{Color, WHITE};
use macroquad::input::KeyCode;
use macroquad::math::Vec2;
use macroquad::miniquad::FilterMode;
use macroquad::prelude as mq;
use macroquad::texture::Texture2D;

pub trait Platform {
    fn screen_size(&self) -> Vec2;

    /// Most recent key pressed during this frame, if any.
    fn last_key_pressed(&mut self) -> Option<KeyCode>;

    fn close_requested(&self) -> bool;

    fn clear(&mut self, color: Color);
    fn draw_rectangle(&mut self, position: Vec2, size: Vec2, color: Color);
    fn draw_line(&mut self, from: Vec2, to: Vec2, thickness: f32, color: Color);
    fn draw_circle(&mut self, center: Vec2, radius: f32, color: Color);

    /// Draws the accumulated sensor trace over the whole screen.
    fn draw_trace(&mut self, trace: &SensorTrace);
}

/// Platform backed by the macroquad window. Only usable inside the macroquad
/// event loop.
#[derive(Default)]
pub struct MacroquadPlatform {
    trace_texture: Option<Texture2D>,
}

impl MacroquadPlatform {
    pub fn new() -> Self {
        Default::default()
    }
}

impl Platform for MacroquadPlatform {
    fn screen_size(&self) -> Vec2 {
        Vec2::new(mq::screen_width(), mq::screen_height())
    }

    fn last_key_pressed(&mut self) -> Option<KeyCode> {
        mq::get_last_key_pressed()
    }

    fn close_requested(&self) -> bool {
        mq::is_key_down(KeyCode::Escape) || mq::is_quit_requested()
    }

    fn clear(&mut self, color: Color) {
        mq::clear_background(color);
    }

    fn draw_rectangle(&mut self, position: Vec2, size: Vec2, color: Color) {
        mq::draw_rectangle(position.x, position.y, size.x, size.y, color);
    }

    fn draw_line(&mut self, from: Vec2, to: Vec2, thickness: f32, color: Color) {
        mq::draw_line(from.x, from.y, to.x, to.y, thickness, color);
    }

    fn draw_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        mq::draw_circle(center.x, center.y, radius, color);
    }

    fn draw_trace(&mut self, trace: &SensorTrace) {
        // Reuse one texture and re-upload the image each frame
        let texture = match self.trace_texture.take() {
            Some(texture) => {
                texture.update(trace.image());
                texture
            }
            None => {
                let texture = Texture2D::from_image(trace.image());
                texture.set_filter(FilterMode::Nearest);
                texture
            }
        };
        mq::draw_texture(&texture, 0.0, 0.0, WHITE);
        self.trace_texture = Some(texture);
    }
}
