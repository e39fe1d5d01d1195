use crate::cell::{Cell, Terrain};
use crate::direction::Direction;
use crate::error::{GridError, GridResult};
use crate::MAX_DIMENSION;
use core::fmt;
use grid_util::point::Point;
use itertools::{iproduct, Itertools};
use log::{info, warn};
use petgraph::unionfind::UnionFind;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// [TerrainGrid] owns every [Cell] of a map in a flat arena addressed by
/// `stride * y + x`. The stride is the row count, widened to the column count for maps
/// that are wider than they are tall so that no two coordinates share a slot. Connected
/// components of passable cells are kept in a [UnionFind] so that unreachable goals can
/// be rejected without searching.
#[derive(Clone, Debug)]
pub struct TerrainGrid {
    rows: usize,
    cols: usize,
    stride: usize,
    filled: usize,
    pub(crate) cells: Vec<Cell>,
    pub components: UnionFind<usize>,
}

impl TerrainGrid {
    /// Builds a grid of `rows` x `cols` cells from a map source.
    ///
    /// Whitespace is skipped, every other character fills the next cell in row-major order.
    /// Characters beyond the grid are ignored. A source that runs out early leaves the
    /// remaining cells [Terrain::Undefined] and logs a warning; see [filled_cells](Self::filled_cells).
    pub fn build(source: &str, rows: usize, cols: usize) -> GridResult<TerrainGrid> {
        if !(1..=MAX_DIMENSION).contains(&rows) || !(1..=MAX_DIMENSION).contains(&cols) {
            return Err(GridError::InvalidDimensions { rows, cols });
        }
        let stride = rows.max(cols);
        let mut cells = (0..rows * stride)
            .map(|ix| {
                let position = Point::new((ix % stride) as i32, (ix / stride) as i32);
                Cell::new(position, Terrain::Undefined)
            })
            .collect::<Vec<Cell>>();

        let (mut x, mut y) = (0, 0);
        let mut filled = 0;
        for symbol in source.chars().filter(|c| !c.is_whitespace()) {
            if y == rows {
                break;
            }
            cells[stride * y + x].terrain = Terrain::from_symbol(symbol);
            filled += 1;
            x += 1;
            if x == cols {
                x = 0;
                y += 1;
            }
        }
        if filled < rows * cols {
            warn!(
                "Map source filled {} of {} cells, the remaining cells are impassable",
                filled,
                rows * cols
            );
        }

        let mut grid = TerrainGrid {
            rows,
            cols,
            stride,
            filled,
            cells,
            components: UnionFind::new(0),
        };
        grid.generate_components();
        Ok(grid)
    }

    /// Reads the whole map source from `reader` and [builds](Self::build) a grid from it.
    pub fn from_reader<R: Read>(
        mut reader: R,
        rows: usize,
        cols: usize,
    ) -> GridResult<TerrainGrid> {
        let mut source = String::new();
        reader
            .read_to_string(&mut source)
            .map_err(|source| GridError::Io { path: None, source })?;
        TerrainGrid::build(&source, rows, cols)
    }

    pub fn from_file<P: AsRef<Path>>(
        path: P,
        rows: usize,
        cols: usize,
    ) -> GridResult<TerrainGrid> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| GridError::Io {
            path: Some(path.to_path_buf()),
            source,
        })?;
        TerrainGrid::from_reader(file, rows, cols).map_err(|err| match err {
            GridError::Io { source, .. } => GridError::Io {
                path: Some(path.to_path_buf()),
                source,
            },
            other => other,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of cells that received a character from the map source.
    pub fn filled_cells(&self) -> usize {
        self.filled
    }
    pub fn is_fully_covered(&self) -> bool {
        self.filled == self.rows * self.cols
    }

    /// Iterates over the cells of the grid in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> + '_ {
        iproduct!(0..self.rows, 0..self.cols)
            .map(move |(y, x)| &self.cells[self.stride * y + x])
    }

    fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.cols && (y as usize) < self.rows
    }

    /// Arena index of the cell at `(x, y)`, or [None] if the coordinate is off the grid.
    ///
    /// The index is `stride * y + x`. The stride is the row count, except for maps wider than
    /// they are tall, which use the column count so that rows never overlap.
    pub fn index_of(&self, x: i32, y: i32) -> Option<usize> {
        if self.in_bounds(x, y) {
            Some(self.stride * y as usize + x as usize)
        } else {
            None
        }
    }

    pub(crate) fn index_of_point(&self, point: Point) -> GridResult<usize> {
        self.index_of(point.x, point.y)
            .ok_or_else(|| GridError::OutOfBounds {
                x: point.x,
                y: point.y,
                cols: self.cols,
                rows: self.rows,
            })
    }

    pub fn cell_at(&self, x: i32, y: i32) -> GridResult<&Cell> {
        self.index_of_point(Point::new(x, y)).map(|ix| &self.cells[ix])
    }

    /// Arena index of the cell one step from `index` in `direction`, if the search may enter
    /// it. Cells off the grid, impassable cells and closed cells are all excluded: a closed
    /// cell is final and is never reopened.
    pub(crate) fn neighbor_index(&self, index: usize, direction: Direction) -> Option<usize> {
        let target = direction.step(self.cells[index].position);
        let ix = self.index_of(target.x, target.y)?;
        let cell = &self.cells[ix];
        if cell.is_passable() && !cell.closed {
            Some(ix)
        } else {
            None
        }
    }

    /// The cell one step from `cell` in `direction`, see [neighbor_index](Self::neighbor_index)
    /// for what is excluded.
    pub fn neighbor(&self, cell: &Cell, direction: Direction) -> Option<&Cell> {
        let ix = self.index_of(cell.position.x, cell.position.y)?;
        self.neighbor_index(ix, direction).map(|n| &self.cells[n])
    }

    /// Clears the search state of every cell.
    pub fn reset_all(&mut self) {
        for cell in self.cells.iter_mut() {
            cell.reset();
        }
    }

    /// One line per row, `+` marking cells on the last found path.
    pub fn render(&self) -> String {
        let mut out = (0..self.rows)
            .map(|y| {
                (0..self.cols)
                    .map(|x| self.cells[self.stride * y + x].render_symbol())
                    .collect::<String>()
            })
            .join("\n");
        out.push('\n');
        out
    }

    /// Checks if start and goal are passable and on the same component.
    pub fn reachable(&self, start: &Point, goal: &Point) -> bool {
        !self.unreachable(start, goal)
    }

    /// Checks if start and goal are not on the same component.
    pub fn unreachable(&self, start: &Point, goal: &Point) -> bool {
        match (
            self.index_of(start.x, start.y),
            self.index_of(goal.x, goal.y),
        ) {
            (Some(start_ix), Some(goal_ix)) => {
                !self.cells[start_ix].is_passable()
                    || !self.cells[goal_ix].is_passable()
                    || !self.components.equiv(start_ix, goal_ix)
            }
            _ => true,
        }
    }

    /// Generates a new [UnionFind] structure and links up passable neighbours to the same components.
    pub fn generate_components(&mut self) {
        info!(
            "Generating connected components for {}x{} grid",
            self.cols, self.rows
        );
        self.components = UnionFind::new(self.cells.len());
        for (y, x) in iproduct!(0..self.rows, 0..self.cols) {
            let ix = self.stride * y + x;
            if !self.cells[ix].is_passable() {
                continue;
            }
            // Links towards cells later in scan order suffice to cover every edge once.
            for direction in [
                Direction::East,
                Direction::SouthEast,
                Direction::South,
                Direction::SouthWest,
            ] {
                let p = direction.step(self.cells[ix].position);
                if let Some(n_ix) = self.index_of(p.x, p.y) {
                    if self.cells[n_ix].is_passable() {
                        self.components.union(ix, n_ix);
                    }
                }
            }
        }
    }
}

impl fmt::Display for TerrainGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}
