use crate::error::{MapError, SimError};
use log::info;
use macroquad::math::Vec2;
use std::fmt;
use std::fs;
use std::path::Path;

// Occupancy of a single grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Wall,
    Empty,
}

impl Tile {
    fn from_char(c: char) -> Self {
        if c == '#' { Tile::Wall } else { Tile::Empty }
    }
}

/// Outcome of a single collision query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Probe {
    Clear,
    Wall,
    OutOfBounds,
}

impl Probe {
    pub fn is_hit(self) -> bool {
        self != Probe::Clear
    }
}

/// Rectangular wall grid, stored row-major in a flat buffer.
/// Immutable once parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Map {
    rows: usize,
    cols: usize,
    tiles: Vec<Tile>,
}

impl Map {
    /// Parses newline-delimited map text where `#` is a wall and every other
    /// character is open space.
    ///
    /// A single trailing newline does not produce an extra row. Rows must all be
    /// as long as the first one.
    pub fn parse(text: &str) -> Result<Self, MapError> {
        let mut lines: Vec<&str> = text
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line))
            .collect();
        if lines.last() == Some(&"") {
            lines.pop();
        }

        let cols = match lines.first() {
            Some(first) => first.chars().count(),
            None => return Err(MapError::Empty),
        };
        if cols == 0 {
            return Err(MapError::Empty);
        }
        let rows = lines.len();

        // Shape is validated before reserving, so the request is bounded by the input size
        for (row, line) in lines.iter().enumerate().skip(1) {
            let found = line.chars().count();
            if found != cols {
                return Err(MapError::RaggedRow {
                    row,
                    expected: cols,
                    found,
                });
            }
        }

        let mut tiles = Vec::new();
        tiles.try_reserve_exact(rows * cols)?;
        for line in &lines {
            tiles.extend(line.chars().map(Tile::from_char));
        }

        Ok(Map { rows, cols, tiles })
    }

    /// Reads and parses a map file.
    pub fn load(path: &Path) -> Result<Self, SimError> {
        if !path.is_file() {
            return Err(SimError::FileNotFound(path.to_path_buf()));
        }
        let text = fs::read_to_string(path).map_err(|source| SimError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let map = Map::parse(&text)?;
        info!("rows : {}, cols : {}", map.rows, map.cols);
        Ok(map)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Bounds-checked tile lookup.
    pub fn tile(&self, row: usize, col: usize) -> Option<Tile> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.tiles.get(row * self.cols + col).copied()
    }

    /// Iterates over every wall cell as `(row, col)`.
    pub fn walls(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.tiles
            .iter()
            .enumerate()
            .filter(|(_, tile)| **tile == Tile::Wall)
            .map(|(i, _)| (i / self.cols, i % self.cols))
    }

    // Pixel size of one cell when the grid is stretched over the screen
    pub fn cell_size(&self, screen: Vec2) -> Vec2 {
        Vec2::new(screen.x / self.cols as f32, screen.y / self.rows as f32)
    }

    /// Classifies a pixel-space point. Anything outside the grid counts as a hit,
    /// so rays always terminate at the screen edge.
    pub fn probe(&self, point: Vec2, screen: Vec2) -> Probe {
        let cell = self.cell_size(screen);
        let col = (point.x / cell.x).floor();
        let row = (point.y / cell.y).floor();

        if !col.is_finite() || !row.is_finite() || col < 0.0 || row < 0.0 {
            return Probe::OutOfBounds;
        }

        match self.tile(row as usize, col as usize) {
            Some(Tile::Wall) => Probe::Wall,
            Some(Tile::Empty) => Probe::Clear,
            None => Probe::OutOfBounds,
        }
    }

    pub fn is_hit(&self, point: Vec2, screen: Vec2) -> bool {
        self.probe(point, screen).is_hit()
    }
}

impl fmt::Display for Map {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.tiles.chunks(self.cols) {
            for tile in row {
                let c = match tile {
                    Tile::Wall => '#',
                    Tile::Empty => '.',
                };
                write!(f, "{}", c)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
