//! The A* loop over a [TerrainGrid]. Edge weights fold the terrain cost of the entered cell
//! into the move, the heuristic is the weighted straight-line distance to the goal.
use crate::direction::Direction;
use crate::terrain_grid::TerrainGrid;
use grid_util::point::Point;
use log::debug;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Frontier entry. Snapshots `f`, `h` and `g` at push time so that stale entries can be
/// recognised after a cheaper route to the same cell has been found.
#[derive(Clone, Copy, Debug)]
pub(crate) struct SmallestCostHolder {
    estimated_cost: f64,
    heuristic: f64,
    cost: f64,
    index: usize,
}

impl Eq for SmallestCostHolder {}

impl PartialEq for SmallestCostHolder {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl PartialOrd for SmallestCostHolder {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SmallestCostHolder {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed so the max-heap pops the smallest estimated cost first; ties go to the
        // entry closest to the goal.
        match other.estimated_cost.total_cmp(&self.estimated_cost) {
            Ordering::Equal => other.heuristic.total_cmp(&self.heuristic),
            s => s,
        }
    }
}

/// What a single search produced.
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct SearchOutcome {
    pub found: bool,
    pub cost: f64,
    /// Cells from start to goal, empty if no path was found.
    pub path: Vec<Point>,
}

/// Straight-line distance between two cells, scaled by `weight`.
pub(crate) fn euclidean(a: Point, b: Point, weight: f64) -> f64 {
    let dx = (a.x - b.x) as f64;
    let dy = (a.y - b.y) as f64;
    weight * (dx * dx + dy * dy).sqrt()
}

/// Runs A* from `start` to `goal` on a freshly reset grid. Both indices must address
/// passable cells. On success every cell of the path is marked `on_path`.
pub(crate) fn astar(
    grid: &mut TerrainGrid,
    start: usize,
    goal: usize,
    weight: f64,
) -> SearchOutcome {
    let goal_pos = grid.cells[goal].position;
    {
        let s = &mut grid.cells[start];
        s.g = 0.0;
        s.travel_cost = 0.0;
        s.visited = true;
        s.on_path = true;
    }

    let mut to_see = BinaryHeap::new();
    to_see.push(SmallestCostHolder {
        estimated_cost: 0.0,
        heuristic: 0.0,
        cost: 0.0,
        index: start,
    });
    let mut settled = 0usize;
    let mut found = false;
    while let Some(SmallestCostHolder { cost, index, .. }) = to_see.pop() {
        if index == goal {
            found = true;
            break;
        }
        // A cell may sit in the heap several times if a cheaper way to it turned up after it
        // was first pushed. Only the cheapest entry gets expanded.
        let current = &grid.cells[index];
        if current.closed || cost > current.g {
            continue;
        }
        let current_g = current.g;
        grid.cells[index].closed = true;
        settled += 1;

        for direction in Direction::ALL {
            let Some(n_ix) = grid.neighbor_index(index, direction) else {
                continue;
            };
            let neighbour = &mut grid.cells[n_ix];
            let new_g = current_g + neighbour.terrain.cost() * direction.weight(weight);
            let first_visit = !neighbour.visited;
            if !first_visit && new_g >= neighbour.g {
                continue;
            }
            neighbour.g = new_g;
            neighbour.parent = Some(index);
            neighbour.travel_cost = new_g - current_g;
            if first_visit {
                neighbour.h = euclidean(neighbour.position, goal_pos, weight);
                neighbour.visited = true;
            }
            to_see.push(SmallestCostHolder {
                estimated_cost: neighbour.total_cost(),
                heuristic: neighbour.h,
                cost: new_g,
                index: n_ix,
            });
        }
    }

    if !found {
        debug!("Frontier exhausted after settling {} cells", settled);
        return SearchOutcome::default();
    }

    let mut total_cost = 0.0f64;
    let mut path = Vec::new();
    let mut ix = goal;
    while ix != start {
        let cell = &mut grid.cells[ix];
        cell.on_path = true;
        total_cost += cell.travel_cost;
        path.push(cell.position);
        match cell.parent {
            Some(parent) => ix = parent,
            None => break,
        }
    }
    path.push(grid.cells[start].position);
    path.reverse();
    debug!(
        "Path of {} cells with cost {:.3} found after settling {} cells",
        path.len(),
        total_cost,
        settled
    );
    SearchOutcome {
        found: true,
        cost: total_cost,
        path,
    }
}
