use grid_util::point::Point;

/// The eight moves available from a cell. North is towards row 0, east towards higher columns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    East,
    South,
    West,
    NorthEast,
    SouthEast,
    SouthWest,
    NorthWest,
}

impl Direction {
    /// Expansion order used by the search: the four orthogonal moves, then the diagonals.
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
        Direction::NorthEast,
        Direction::SouthEast,
        Direction::SouthWest,
        Direction::NorthWest,
    ];

    /// Offset `(dx, dy)` of this move.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::North => (0, -1),
            Direction::East => (1, 0),
            Direction::South => (0, 1),
            Direction::West => (-1, 0),
            Direction::NorthEast => (1, -1),
            Direction::SouthEast => (1, 1),
            Direction::SouthWest => (-1, 1),
            Direction::NorthWest => (-1, -1),
        }
    }

    pub fn is_diagonal(self) -> bool {
        let (dx, dy) = self.delta();
        dx != 0 && dy != 0
    }

    /// Multiplier applied to the terrain cost of the target cell: `weight` for orthogonal
    /// moves, `sqrt(2 * weight^2)` for diagonal ones.
    pub fn weight(self, weight: f64) -> f64 {
        if self.is_diagonal() {
            (2.0 * weight * weight).sqrt()
        } else {
            weight
        }
    }

    pub fn step(self, point: Point) -> Point {
        let (dx, dy) = self.delta();
        Point::new(point.x + dx, point.y + dy)
    }
}
