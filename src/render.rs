use crate::config::{
    MARKER_COLOR, MARKER_RADIUS, RAY_COLOR, RAY_THICKNESS, SENSOR_RADIUS, WALL_COLOR,
};
use crate::map::{Map, Probe};
use crate::platform::Platform;
use crate::player::{Player, PlayerShape};
use crate::sensor::RayHit;
use macroquad::math::Vec2;

// Draws the simulation state through a platform
pub struct Renderer;

impl Renderer {
    /// Fills every wall cell, stretching the grid over the whole screen.
    pub fn draw_map<P: Platform>(platform: &mut P, map: &Map) {
        let cell = map.cell_size(platform.screen_size());
        for (row, col) in map.walls() {
            let position = Vec2::new(col as f32 * cell.x, row as f32 * cell.y);
            platform.draw_rectangle(position, cell, WALL_COLOR);
        }
    }

    pub fn draw_player<P: Platform>(platform: &mut P, player: &Player) {
        match player.shape {
            PlayerShape::Circle => {
                platform.draw_circle(player.position, SENSOR_RADIUS, player.color)
            }
            PlayerShape::Rect => {
                platform.draw_rectangle(player.position, player.size, player.color)
            }
        }
    }

    /// Draws the rays that hit something, plus a marker where a ray ran into a
    /// wall. Misses are not drawn at all.
    pub fn draw_rays<P: Platform>(platform: &mut P, rays: &[RayHit]) {
        for ray in rays.iter().filter(|ray| ray.hit()) {
            if ray.probe == Probe::Wall {
                platform.draw_circle(ray.end, MARKER_RADIUS, MARKER_COLOR);
            }
            platform.draw_line(ray.start, ray.end, RAY_THICKNESS, RAY_COLOR);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PLAYER_COLOR;
    use crate::platform::recording::{DrawCall, RecordingPlatform};

    fn ray(end: Vec2, probe: Probe) -> RayHit {
        RayHit {
            angle: 0.0,
            start: Vec2::new(1.0, 1.0),
            end,
            probe,
        }
    }

    #[test]
    fn test_draw_map_fills_walls_only() {
        let map = Map::parse("#.\n.#\n").unwrap();
        let mut platform = RecordingPlatform::new(800.0, 600.0);
        Renderer::draw_map(&mut platform, &map);

        assert_eq!(
            platform.calls,
            vec![
                DrawCall::Rectangle {
                    position: Vec2::new(0.0, 0.0),
                    size: Vec2::new(400.0, 300.0),
                    color: WALL_COLOR,
                },
                DrawCall::Rectangle {
                    position: Vec2::new(400.0, 300.0),
                    size: Vec2::new(400.0, 300.0),
                    color: WALL_COLOR,
                },
            ]
        );
    }

    #[test]
    fn test_draw_rays_skips_misses() {
        let rays = [
            ray(Vec2::new(10.0, 10.0), Probe::Wall),
            ray(Vec2::new(20.0, 20.0), Probe::Clear),
            ray(Vec2::new(30.0, 30.0), Probe::OutOfBounds),
        ];
        let mut platform = RecordingPlatform::new(100.0, 100.0);
        Renderer::draw_rays(&mut platform, &rays);

        let ends: Vec<Vec2> = platform
            .lines()
            .map(|call| match call {
                DrawCall::Line { to, .. } => *to,
                _ => unreachable!(),
            })
            .collect();
        assert_eq!(ends, vec![Vec2::new(10.0, 10.0), Vec2::new(30.0, 30.0)]);
        // Only the wall hit gets a marker
        assert_eq!(platform.circles_of(MARKER_COLOR), 1);
    }

    #[test]
    fn test_draw_player_shapes() {
        let mut platform = RecordingPlatform::new(100.0, 100.0);
        let mut player = Player::new(
            Vec2::new(5.0, 6.0),
            Vec2::new(7.0, 8.0),
            1.0,
            PlayerShape::Circle,
        );
        Renderer::draw_player(&mut platform, &player);
        player.shape = PlayerShape::Rect;
        Renderer::draw_player(&mut platform, &player);

        assert_eq!(
            platform.calls,
            vec![
                DrawCall::Circle {
                    center: Vec2::new(5.0, 6.0),
                    radius: SENSOR_RADIUS,
                    color: PLAYER_COLOR,
                },
                DrawCall::Rectangle {
                    position: Vec2::new(5.0, 6.0),
                    size: Vec2::new(7.0, 8.0),
                    color: PLAYER_COLOR,
                },
            ]
        );
    }
}
