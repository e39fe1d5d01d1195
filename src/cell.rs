use core::fmt;
use grid_util::point::Point;

/// Terrain classification of a single map character.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Terrain {
    #[default]
    Undefined,
    Plain,
    Swamp,
    Mountain,
    Water,
}

impl Terrain {
    /// Classifies a map character. Anything unrecognised is [Terrain::Undefined].
    pub fn from_symbol(symbol: char) -> Terrain {
        match symbol {
            '.' => Terrain::Plain,
            '-' => Terrain::Swamp,
            '^' => Terrain::Mountain,
            '*' => Terrain::Water,
            _ => Terrain::Undefined,
        }
    }

    /// The canonical map character, a space for [Terrain::Undefined].
    pub fn symbol(self) -> char {
        match self {
            Terrain::Plain => '.',
            Terrain::Swamp => '-',
            Terrain::Mountain => '^',
            Terrain::Water => '*',
            Terrain::Undefined => ' ',
        }
    }

    /// Base cost of entering a cell of this terrain. Impassable terrain reports 0.
    pub fn cost(self) -> f64 {
        match self {
            Terrain::Plain => 1.0,
            Terrain::Swamp => 1.5,
            Terrain::Mountain => 2.0,
            Terrain::Water | Terrain::Undefined => 0.0,
        }
    }

    pub fn is_passable(self) -> bool {
        !matches!(self, Terrain::Water | Terrain::Undefined)
    }
}

/// A single grid position together with the state the search keeps for it.
///
/// `g`, `h`, `travel_cost`, `parent` and the three flags only carry meaning during and
/// after a search; [TerrainGrid::reset_all](crate::terrain_grid::TerrainGrid::reset_all)
/// clears them before every run.
#[derive(Clone, Debug)]
pub struct Cell {
    pub position: Point,
    pub terrain: Terrain,
    /// Accumulated cost from the start along the best known path.
    pub g: f64,
    /// Estimated remaining cost to the goal.
    pub h: f64,
    /// Cost of the single step from `parent` into this cell.
    pub travel_cost: f64,
    /// Arena index of the predecessor on the best known path.
    pub parent: Option<usize>,
    pub visited: bool,
    pub closed: bool,
    pub on_path: bool,
}

impl Cell {
    pub fn new(position: Point, terrain: Terrain) -> Cell {
        Cell {
            position,
            terrain,
            g: 0.0,
            h: 0.0,
            travel_cost: 0.0,
            parent: None,
            visited: false,
            closed: false,
            on_path: false,
        }
    }

    /// f = g + h, the frontier's primary sort key.
    pub fn total_cost(&self) -> f64 {
        self.g + self.h
    }

    pub fn is_passable(&self) -> bool {
        self.terrain.is_passable()
    }

    /// The character used when rendering, `+` for cells on the last found path.
    pub fn render_symbol(&self) -> char {
        if self.on_path {
            '+'
        } else {
            self.terrain.symbol()
        }
    }

    pub fn reset(&mut self) {
        *self = Cell::new(self.position, self.terrain);
    }
}

impl PartialEq for Cell {
    fn eq(&self, other: &Self) -> bool {
        self.position == other.position
    }
}

impl Eq for Cell {}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.position.x, self.position.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terrain_table() {
        let expected = [
            ('.', Terrain::Plain, 1.0, true),
            ('-', Terrain::Swamp, 1.5, true),
            ('^', Terrain::Mountain, 2.0, true),
            ('*', Terrain::Water, 0.0, false),
            ('#', Terrain::Undefined, 0.0, false),
        ];
        for (symbol, terrain, cost, passable) in expected {
            let parsed = Terrain::from_symbol(symbol);
            assert_eq!(parsed, terrain);
            assert_eq!(parsed.cost(), cost);
            assert_eq!(parsed.is_passable(), passable);
        }
        assert_eq!(Terrain::Undefined.symbol(), ' ');
        assert_eq!(Terrain::Mountain.symbol(), '^');
    }

    /// Passable terrain never costs less than Plain, which keeps the Euclidean heuristic admissible.
    #[test]
    fn passable_costs_are_at_least_one() {
        for terrain in [Terrain::Plain, Terrain::Swamp, Terrain::Mountain] {
            assert!(terrain.cost() >= 1.0);
        }
    }

    #[test]
    fn reset_keeps_identity_and_terrain() {
        let mut cell = Cell::new(Point::new(2, 3), Terrain::Swamp);
        cell.g = 4.5;
        cell.h = 1.0;
        cell.travel_cost = 1.5;
        cell.parent = Some(7);
        cell.visited = true;
        cell.closed = true;
        cell.on_path = true;
        assert_eq!(cell.render_symbol(), '+');
        cell.reset();
        assert_eq!(cell.position, Point::new(2, 3));
        assert_eq!(cell.terrain, Terrain::Swamp);
        assert_eq!(cell.total_cost(), 0.0);
        assert_eq!(cell.parent, None);
        assert!(!cell.visited && !cell.closed && !cell.on_path);
        assert_eq!(cell.render_symbol(), '-');
    }

    #[test]
    fn equality_is_positional() {
        let mut a = Cell::new(Point::new(1, 1), Terrain::Plain);
        let b = Cell::new(Point::new(1, 1), Terrain::Mountain);
        a.g = 10.0;
        assert_eq!(a, b);
        assert_ne!(a, Cell::new(Point::new(1, 0), Terrain::Plain));
        assert_eq!(format!("{a}"), "(1, 1)");
    }
}
