use crate::config::{RAY_COLOR, TRACE_BACKGROUND};
use crate::sensor::RayHit;
use macroquad::color::Color;
use macroquad::math::Vec2;
use macroquad::texture::Image;

/// Off-screen image that accumulates every ray hit point across frames.
/// Lives on the CPU side; the platform uploads it as a texture when drawing.
pub struct SensorTrace {
    image: Image,
    marked: usize,
}

impl SensorTrace {
    pub fn new(width: u16, height: u16) -> Self {
        SensorTrace {
            image: Image::gen_image_color(width, height, TRACE_BACKGROUND),
            marked: 0,
        }
    }

    pub fn image(&self) -> &Image {
        &self.image
    }

    pub fn width(&self) -> usize {
        self.image.width()
    }

    pub fn height(&self) -> usize {
        self.image.height()
    }

    /// Number of pixel writes committed so far, repeats included.
    pub fn marked(&self) -> usize {
        self.marked
    }

    /// Writes one pixel. Points off the image are dropped and reported as `false`.
    pub fn mark(&mut self, point: Vec2, color: Color) -> bool {
        let x = point.x.floor();
        let y = point.y.floor();
        if !(x >= 0.0 && y >= 0.0 && (x as usize) < self.width() && (y as usize) < self.height()) {
            return false;
        }
        self.image.set_pixel(x as u32, y as u32, color);
        self.marked += 1;
        true
    }

    /// Commits the endpoint of every ray that hit something. Misses leave no trace.
    pub fn record(&mut self, rays: &[RayHit]) -> usize {
        rays.iter()
            .filter(|ray| ray.hit())
            .filter(|ray| self.mark(ray.end, RAY_COLOR))
            .count()
    }

    pub fn is_marked(&self, x: u32, y: u32) -> bool {
        (x as usize) < self.width()
            && (y as usize) < self.height()
            && self.image.get_pixel(x, y) != TRACE_BACKGROUND
    }
}
