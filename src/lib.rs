//! # terrain_pathfinding
//!
//! Grid-based [A*](https://en.wikipedia.org/wiki/A*_search_algorithm) pathfinding over
//! terrain with per-cell movement costs. Maps are read from a character grid:
//!
//! | char | terrain  | cost        |
//! |------|----------|-------------|
//! | `.`  | plain    | 1.0         |
//! | `-`  | swamp    | 1.5         |
//! | `^`  | mountain | 2.0         |
//! | `*`  | water    | impassable  |
//! | else | undefined| impassable  |
//!
//! Movement is 8-directional. Entering a cell costs its terrain cost, multiplied by
//! `sqrt(2)` for diagonal moves. The heuristic is the straight-line distance to the goal,
//! which stays admissible because no passable terrain is cheaper than plain.
//! Pre-computes [connected components](https://en.wikipedia.org/wiki/Component_(graph_theory))
//! so that goals cut off by water are rejected without flood-filling the map.
//!
//! ```
//! use grid_util::point::Point;
//! use terrain_pathfinding::PathFinder;
//!
//! let mut finder = PathFinder::new("...\n.^.\n...", 3, 3).unwrap();
//! assert!(finder.find_path(Point::new(0, 1), Point::new(2, 1)).unwrap());
//! print!("{}", finder.render());
//! ```
mod astar;
pub mod cell;
pub mod direction;
pub mod error;
pub mod pathfinder;
pub mod terrain_grid;

pub use cell::{Cell, Terrain};
pub use direction::Direction;
pub use error::{GridError, GridResult};
pub use pathfinder::{PathFinder, SearchReport};
pub use terrain_grid::TerrainGrid;

/// Largest supported extent of either map axis; coordinates fit in a byte.
pub const MAX_DIMENSION: usize = 256;
/// Map extent used when none is given.
pub const DEFAULT_DIMENSION: usize = 126;
