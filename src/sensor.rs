//! Simulated ultrasonic sensors: a fixed fan of rays cast from the player
//! against the wall grid.

use crate::config::{DEG_TO_RAD, RAY_COUNT, RAY_STEP_LIMIT, SENSOR_RADIUS};
use crate::map::{Map, Probe};
use macroquad::math::Vec2;

/// Result of casting one ray for the current frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    pub angle: f32,   // Radians
    pub start: Vec2,  // Point on the body outline where the ray leaves
    pub end: Vec2,    // Last probed point
    pub probe: Probe, // What `end` ran into, `Probe::Clear` for a miss
}

impl RayHit {
    pub fn hit(&self) -> bool {
        self.probe.is_hit()
    }
}

/// Ray angles in radians, accumulated the way the sensor ring is laid out:
/// each step adds `360 / count` degrees converted with `DEG_TO_RAD`, so the
/// first ray sits one step past 0 and the last one lands at (almost) a full turn.
pub fn ray_angles(count: usize) -> impl Iterator<Item = f32> {
    let increment = f64::from(360.0_f32 / count as f32) * DEG_TO_RAD;
    let mut angle = 0.0_f32;
    (0..count).map(move |_| {
        angle = (f64::from(angle) + increment) as f32;
        angle
    })
}

#[derive(Debug, Clone, Copy)]
pub struct Sensor {
    pub radius: f32,
    pub ray_count: usize,
    pub step_limit: u32,
}

impl Default for Sensor {
    fn default() -> Self {
        Sensor {
            radius: SENSOR_RADIUS,
            ray_count: RAY_COUNT,
            step_limit: RAY_STEP_LIMIT,
        }
    }
}

impl Sensor {
    /// Casts every ray from `origin`. Each ray is probed at multiples of the
    /// sensor radius and stops at the first hit; a ray that is still clear after
    /// `step_limit` probes is reported as a miss.
    pub fn sweep(&self, origin: Vec2, map: &Map, screen: Vec2) -> Vec<RayHit> {
        ray_angles(self.ray_count)
            .map(|angle| self.cast(origin, angle, map, screen))
            .collect()
    }

    fn cast(&self, origin: Vec2, angle: f32, map: &Map, screen: Vec2) -> RayHit {
        let (sin, cos) = f64::from(angle).sin_cos();
        let at = |distance: f32| {
            Vec2::new(
                origin.x + (cos * f64::from(distance)) as f32,
                origin.y + (sin * f64::from(distance)) as f32,
            )
        };

        let start = at(self.radius);
        let mut end = start;
        let mut probe = Probe::Clear;

        for step in 1..=self.step_limit {
            end = at(self.radius * step as f32);
            probe = map.probe(end, screen);
            if probe.is_hit() {
                break;
            }
        }

        RayHit {
            angle,
            start,
            end,
            probe,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;
    use std::f32::consts::{FRAC_PI_6, TAU};

    const SCREEN: Vec2 = Vec2::new(800.0, 800.0);

    fn open_map(size: usize) -> Map {
        let row = ".".repeat(size);
        let text = vec![row; size].join("\n");
        Map::parse(&text).unwrap()
    }

    #[test]
    fn test_ray_angles_spacing() {
        let angles: Vec<f32> = ray_angles(12).collect();
        assert_eq!(angles.len(), 12);
        for (i, angle) in angles.iter().enumerate() {
            assert_approx_eq!(*angle, (i + 1) as f32 * FRAC_PI_6, 1e-5);
        }
    }

    #[test]
    fn test_ray_angles_use_rounded_conversion() {
        let angles: Vec<f32> = ray_angles(12).collect();
        // 30 * 0.0174533 rounds differently from pi / 6
        assert_ne!(angles[0], FRAC_PI_6);
        assert_eq!(angles[0], (30.0_f64 * DEG_TO_RAD) as f32);
        // The last ray overshoots a full turn slightly
        assert!(angles[11] > TAU);
        assert_approx_eq!(angles[11], TAU, 1e-5);
    }

    #[test]
    fn test_sweep_in_box_hits_every_ray() {
        let map = Map::parse("####\n#..#\n#..#\n####\n").unwrap();
        let origin = Vec2::new(390.0, 390.0);
        let rays = Sensor::default().sweep(origin, &map, SCREEN);

        assert_eq!(rays.len(), RAY_COUNT);
        for ray in &rays {
            assert!(ray.hit());
            assert_eq!(ray.probe, Probe::Wall);
            assert_approx_eq!(ray.start.distance(origin), SENSOR_RADIUS, 1e-3);
            // Inner room spans 200..600, the wall is at least 190px away
            assert!(ray.end.distance(origin) >= 190.0);
        }
    }

    #[test]
    fn test_ray_stops_at_first_wall() {
        // Wall column at x in [600, 800)
        let map = Map::parse("...#\n...#\n...#\n...#\n").unwrap();
        let origin = Vec2::new(100.0, 400.0);
        let rays = Sensor::default().sweep(origin, &map, SCREEN);

        // The 12th ray points along +x (angle ~ 2pi)
        let east = rays[11];
        assert_eq!(east.probe, Probe::Wall);
        // Probes every 20px from x=100: first one inside the wall is x=600
        assert_approx_eq!(east.end.x, 600.0, 1e-2);
        assert_approx_eq!(east.end.y, 400.0, 1e-2);
    }

    #[test]
    fn test_open_map_rays_leave_the_screen() {
        let map = open_map(10);
        let rays = Sensor::default().sweep(Vec2::new(400.0, 400.0), &map, SCREEN);
        for ray in &rays {
            assert_eq!(ray.probe, Probe::OutOfBounds);
        }
    }

    #[test]
    fn test_step_limit_produces_miss() {
        let map = open_map(10);
        let sensor = Sensor {
            step_limit: 3,
            ..Sensor::default()
        };
        let origin = Vec2::new(400.0, 400.0);
        let rays = sensor.sweep(origin, &map, SCREEN);

        assert_eq!(rays.len(), RAY_COUNT);
        for ray in &rays {
            assert!(!ray.hit());
            assert_approx_eq!(ray.end.distance(origin), SENSOR_RADIUS * 3.0, 1e-3);
        }
    }

    #[test]
    fn test_origin_inside_wall_hits_immediately() {
        let map = Map::parse("###\n###\n###\n").unwrap();
        let origin = Vec2::new(400.0, 400.0);
        let rays = Sensor::default().sweep(origin, &map, SCREEN);
        for ray in &rays {
            assert_eq!(ray.probe, Probe::Wall);
            assert_eq!(ray.end, ray.start);
        }
    }
}
