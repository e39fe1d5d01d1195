use crate::astar::{astar, SearchOutcome};
use crate::cell::Cell;
use crate::error::{GridError, GridResult};
use crate::terrain_grid::TerrainGrid;
use core::fmt;
use grid_util::point::Point;
use log::{info, warn};
use std::path::Path;
use std::time::{Duration, Instant};

/// Runs shortest-path queries over the [TerrainGrid] it owns and remembers the outcome of
/// the most recent one.
///
/// Each query resets and reuses the grid's search state, so queries on one [PathFinder]
/// run strictly one after another; use one instance per concurrent query.
#[derive(Clone, Debug)]
pub struct PathFinder {
    grid: TerrainGrid,
    weight: f64,
    last_start: Option<Point>,
    last_end: Option<Point>,
    last_found: bool,
    last_cost: f64,
    last_duration: Duration,
    last_path: Vec<Point>,
}

impl PathFinder {
    pub fn new(source: &str, rows: usize, cols: usize) -> GridResult<PathFinder> {
        TerrainGrid::build(source, rows, cols).map(PathFinder::from_grid)
    }

    pub fn from_file<P: AsRef<Path>>(
        path: P,
        rows: usize,
        cols: usize,
    ) -> GridResult<PathFinder> {
        TerrainGrid::from_file(path, rows, cols).map(PathFinder::from_grid)
    }

    pub fn from_grid(grid: TerrainGrid) -> PathFinder {
        PathFinder {
            grid,
            weight: 1.0,
            last_start: None,
            last_end: None,
            last_found: false,
            last_cost: 0.0,
            last_duration: Duration::ZERO,
            last_path: Vec::new(),
        }
    }

    /// Scales both the movement costs and the heuristic. Orthogonal moves are multiplied by
    /// `weight`, diagonal ones by `sqrt(2 * weight^2)`. The weight must be finite and positive,
    /// otherwise path costs could turn negative or NaN.
    pub fn with_weight(mut self, weight: f64) -> GridResult<PathFinder> {
        if !weight.is_finite() || weight <= 0.0 {
            return Err(GridError::InvalidWeight(weight));
        }
        self.weight = weight;
        Ok(self)
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Computes the cheapest route from `start` to `end` and records it as the last run.
    ///
    /// Returns whether a path exists. Endpoints on water or undefined terrain are not an
    /// error, they simply yield no path with cost 0. Only coordinates off the grid fail.
    pub fn find_path(&mut self, start: Point, end: Point) -> GridResult<bool> {
        let before = Instant::now();
        let start_ix = self.grid.index_of_point(start)?;
        let end_ix = self.grid.index_of_point(end)?;
        self.last_start = Some(start);
        self.last_end = Some(end);
        self.grid.reset_all();

        let outcome = if !self.grid.cells[start_ix].is_passable()
            || !self.grid.cells[end_ix].is_passable()
        {
            info!("Start {} or end {} lies on impassable terrain", start, end);
            SearchOutcome::default()
        } else if self.grid.unreachable(&start, &end) {
            info!("{} is not reachable from {}", end, start);
            SearchOutcome::default()
        } else {
            let outcome = astar(&mut self.grid, start_ix, end_ix, self.weight);
            if !outcome.found {
                warn!(
                    "Reachable goal {} could not be pathed to from {}, are the components correct?",
                    end, start
                );
            }
            outcome
        };

        self.last_found = outcome.found;
        self.last_cost = outcome.cost;
        self.last_path = outcome.path;
        self.last_duration = before.elapsed();
        Ok(self.last_found)
    }

    pub fn grid(&self) -> &TerrainGrid {
        &self.grid
    }

    /// Start cell of the last query.
    pub fn last_start(&self) -> Option<&Cell> {
        self.last_start.and_then(|p| self.grid.cell_at(p.x, p.y).ok())
    }

    /// End cell of the last query.
    pub fn last_end(&self) -> Option<&Cell> {
        self.last_end.and_then(|p| self.grid.cell_at(p.x, p.y).ok())
    }

    pub fn is_last_found(&self) -> bool {
        self.last_found
    }

    /// Sum of the step costs along the last found path, 0 if none was found.
    pub fn last_cost(&self) -> f64 {
        self.last_cost
    }

    pub fn last_duration(&self) -> Duration {
        self.last_duration
    }

    /// Cells of the last found path from start to end.
    pub fn last_path(&self) -> &[Point] {
        &self.last_path
    }

    /// The map with the last found path drawn in `+`.
    pub fn render(&self) -> String {
        self.grid.render()
    }

    pub fn report(&self) -> SearchReport {
        SearchReport {
            start: self.last_start,
            end: self.last_end,
            found: self.last_found,
            cost: self.last_cost,
            duration: self.last_duration,
        }
    }
}

/// Summary of a query in the form printed by the command line tool.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SearchReport {
    pub start: Option<Point>,
    pub end: Option<Point>,
    pub found: bool,
    pub cost: f64,
    pub duration: Duration,
}

fn write_position(f: &mut fmt::Formatter, label: &str, p: Option<Point>) -> fmt::Result {
    match p {
        Some(p) => writeln!(f, "{} position: ({}, {})", label, p.x, p.y),
        None => writeln!(f, "{} position: -", label),
    }
}

impl fmt::Display for SearchReport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write_position(f, "Start", self.start)?;
        write_position(f, "End", self.end)?;
        writeln!(f)?;
        writeln!(f, "Path found: {}", self.found)?;
        writeln!(f, "Path cost: {:.5}", self.cost)?;
        writeln!(f)?;
        writeln!(
            f,
            "Total duration: {} ms",
            self.duration.as_secs_f64() * 1000.0
        )
    }
}
