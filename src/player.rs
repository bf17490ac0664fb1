use crate::config::{PLAYER_COLOR, PLAYER_SPEED, SPAWN_OFFSET};
use crate::debug_player;
use crate::map::Map;
use clap::ValueEnum;
use macroquad::color::Color;
use macroquad::input::KeyCode;
use macroquad::math::Vec2;

// Heading of the player. Only one axis is ever non-zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Idle,
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Maps W/A/S/D to a heading; any other key leaves the heading alone.
    pub fn from_key(key: KeyCode) -> Option<Self> {
        match key {
            KeyCode::W => Some(Direction::Up),
            KeyCode::S => Some(Direction::Down),
            KeyCode::A => Some(Direction::Left),
            KeyCode::D => Some(Direction::Right),
            _ => None,
        }
    }

    pub fn vector(self) -> Vec2 {
        match self {
            Direction::Idle => Vec2::ZERO,
            Direction::Up => Vec2::new(0.0, -1.0),
            Direction::Down => Vec2::new(0.0, 1.0),
            Direction::Left => Vec2::new(-1.0, 0.0),
            Direction::Right => Vec2::new(1.0, 0.0),
        }
    }
}

// How the player body is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum PlayerShape {
    #[default]
    Circle,
    Rect,
}

#[derive(Debug, Clone)]
pub struct Player {
    pub position: Vec2,
    pub direction: Direction,
    pub velocity: Vec2,
    pub size: Vec2,
    pub color: Color,
    pub shape: PlayerShape,
}

impl Player {
    pub fn new(position: Vec2, size: Vec2, speed: f32, shape: PlayerShape) -> Self {
        Player {
            position,
            direction: Direction::Idle,
            velocity: Vec2::splat(speed),
            size,
            color: PLAYER_COLOR,
            shape,
        }
    }

    /// Places a stationary player near the middle of the screen, sized to half a
    /// map cell.
    pub fn spawn(map: &Map, screen: Vec2, speed: f32, shape: PlayerShape) -> Self {
        let position = screen / 2.0 - Vec2::splat(SPAWN_OFFSET);
        let size = Vec2::new(
            screen.x / (map.cols() * 2) as f32,
            screen.y / (map.rows() * 2) as f32,
        );
        Player::new(position, size, speed, shape)
    }

    /// Applies the last key pressed this frame. The newest W/A/S/D press replaces
    /// the heading outright; other keys and no key keep it.
    pub fn steer(&mut self, key: Option<KeyCode>) {
        if let Some(direction) = key.and_then(Direction::from_key) {
            if direction != self.direction {
                debug_player!("Heading {:?} -> {:?}", self.direction, direction);
            }
            self.direction = direction;
        }
    }

    /// Integrates one frame of movement. There is no collision response.
    pub fn advance(&mut self) {
        self.position += self.direction.vector() * self.velocity;
    }
}
