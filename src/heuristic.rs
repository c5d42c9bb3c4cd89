//! Heuristics that guide the A* search towards the Goal
//!
//! A Heuristic estimates how expensive it is to reach the Goal from a Node. The search only
//! returns the cheapest Path if that estimate never exceeds the actual remaining Cost
//! (*admissible*), and it only expands every Node once if the estimate drops by at most
//! the weight of an Edge when walking along that Edge (*consistent*).
//!
//! If there is no proper way of estimating the remaining Cost, use [`Zero`]. This turns A* into
//! Dijkstra's Algorithm, which is slower, but always correct.

use crate::cost::Cost;

/// Estimates the remaining Cost from a Node to the Goal.
///
/// Implemented for every `Fn(&N, &N) -> C`, so a closure can be passed wherever a Heuristic is
/// expected:
/// ```
/// use weighted_astar::Heuristic;
///
/// let distance = |a: &i32, b: &i32| (a - b).unsigned_abs();
/// assert_eq!(distance.estimate(&3, &-2), 5);
/// ```
pub trait Heuristic<N, C> {
    /// Gives an estimate of the Cost to reach `goal` from `node`.
    ///
    /// Must never be negative and must return zero for `estimate(goal, goal)`.
    fn estimate(&self, node: &N, goal: &N) -> C;
}

impl<N, C, F: Fn(&N, &N) -> C> Heuristic<N, C> for F {
    fn estimate(&self, node: &N, goal: &N) -> C {
        self(node, goal)
    }
}

/// The uninformed Heuristic that always estimates zero.
///
/// Valid for any Graph and any Node Type. A search using this Heuristic is equivalent to
/// Dijkstra's Algorithm.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Zero;

impl<N, C: Cost> Heuristic<N, C> for Zero {
    fn estimate(&self, _: &N, _: &N) -> C {
        C::ZERO
    }
}

/// A Node that has a position on a 2D integer Grid
pub trait Coord2D {
    /// The distance along the x axis between `self` and `other`
    fn x_distance(&self, other: &Self) -> u64;
    /// The distance along the y axis between `self` and `other`
    fn y_distance(&self, other: &Self) -> u64;
}

macro_rules! impl_coord_2d {
    ($($type:ty),+) => {$(
        #[allow(trivial_numeric_casts)]
        impl Coord2D for ($type, $type) {
            fn x_distance(&self, other: &Self) -> u64 {
                self.0.abs_diff(other.0) as u64
            }
            fn y_distance(&self, other: &Self) -> u64 {
                self.1.abs_diff(other.1) as u64
            }
        }
    )+}
}

impl_coord_2d!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

fn axis_distances<N: Coord2D>(node: &N, goal: &N) -> (u64, u64) {
    (node.x_distance(goal), node.y_distance(goal))
}

/// The Distance for Agents moving along the 4 cardinal directions.
///
/// Also known as [Taxicab Geometry](https://en.wikipedia.org/wiki/Taxicab_geometry).
/// Admissible as long as no Edge between two Nodes is cheaper than their Manhattan Distance.
///
/// ```
/// use weighted_astar::{Heuristic, Manhattan};
///
/// let estimate: u32 = Manhattan.estimate(&(3i32, 1i32), &(0, 0));
/// assert_eq!(estimate, 3 + 1);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Manhattan;

impl<N: Coord2D, C: Cost> Heuristic<N, C> for Manhattan {
    fn estimate(&self, node: &N, goal: &N) -> C {
        let (dx, dy) = axis_distances(node, goal);
        C::from_distance(dx.saturating_add(dy))
    }
}

/// The Distance for Agents moving along the 4 cardinal directions and the 4 diagonals,
/// where a diagonal step costs the same as a straight one.
///
/// Also known as [Maximum Metric](https://en.wikipedia.org/wiki/Chebyshev_distance).
///
/// ```
/// use weighted_astar::{Chebyshev, Heuristic};
///
/// let estimate: u32 = Chebyshev.estimate(&(3i32, 1i32), &(0, 0));
/// assert_eq!(estimate, 3);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Chebyshev;

impl<N: Coord2D, C: Cost> Heuristic<N, C> for Chebyshev {
    fn estimate(&self, node: &N, goal: &N) -> C {
        let (dx, dy) = axis_distances(node, goal);
        C::from_distance(dx.max(dy))
    }
}
