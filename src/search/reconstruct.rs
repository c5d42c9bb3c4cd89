use super::NodeMap;
use crate::{cost::Cost, path::Path};

use std::hash::Hash;

/// Walks back from `goal` along the recorded predecessors until it reaches a Node without one,
/// which is the start of the search.
///
/// The returned Path contains both the start and `goal`. If `goal` has no predecessor, it is
/// the start itself and the Path consists of only that Node.
pub(crate) fn reconstruct<N: Clone + Eq + Hash, C: Cost>(
    came_from: &NodeMap<N, N>,
    goal: N,
    cost: C,
) -> Path<N, C> {
    let mut steps = vec![];
    let mut current = goal;

    while let Some(prev) = came_from.get(&current) {
        let prev = prev.clone();
        steps.push(std::mem::replace(&mut current, prev));
    }
    steps.push(current);
    steps.reverse();

    Path::new(steps, cost)
}
