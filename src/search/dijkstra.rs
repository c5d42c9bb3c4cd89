use super::{Budget, NodeSet, Pathfinder, SearchState};
use crate::{
    cost::Cost,
    error::{Result, SearchError},
    graph::Graph,
    path::Path,
};

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

impl Pathfinder {
    /// Searches a Graph using [Dijkstra's Algorithm](https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm).
    ///
    /// This function can be used to search for several Goals and will calculate the cheapest Path
    /// for every reachable Goal. It stops as soon as it has the cheapest Path to every Goal, or
    /// when all reachable Nodes have been expanded.
    ///
    /// Edges that would overflow the Cost Type are ignored. If a Goal is left unreached after
    /// such an Edge was ignored, the search fails with
    /// [`SearchError::CostOverflow`](crate::SearchError::CostOverflow).
    ///
    /// The limits and validation of the [`SearchConfig`](crate::SearchConfig) apply to the
    /// search as a whole, not to the individual Goals.
    ///
    /// ## Examples
    /// Basic usage:
    /// ```
    /// use weighted_astar::{AdjacencyList, Pathfinder};
    ///
    /// // A     B--2--E
    /// // |\
    /// // 1 9
    /// // |  \
    /// // C-6-D
    /// let mut graph = AdjacencyList::new();
    /// graph
    ///     .add_undirected_edge('A', 'C', 1u32)
    ///     .add_undirected_edge('A', 'D', 9)
    ///     .add_undirected_edge('C', 'D', 6)
    ///     .add_undirected_edge('B', 'E', 2);
    ///
    /// let result = Pathfinder::default().dijkstra(&graph, 'A', &['D', 'E']).unwrap();
    ///
    /// // if the Goal is reachable, the Path is added to the Map
    /// let path = &result[&'D'];
    /// assert_eq!(path, &vec!['A', 'C', 'D']);
    /// assert_eq!(path.cost(), 7);
    ///
    /// // if the Goal is not reachable, there won't be an entry in the Map
    /// assert!(!result.contains_key(&'E'));
    /// ```
    ///
    /// ## Returns
    /// a HashMap with all reachable Goals as the Key and the cheapest Path to reach that Goal as
    /// Value. The first Node in every Path is `start` and the last is the corresponding Goal.
    pub fn dijkstra<N, G>(
        &self,
        graph: &G,
        start: N,
        goals: &[N],
    ) -> Result<HashMap<N, Path<N, G::Cost>>>
    where
        N: Clone + Eq + Hash + Debug,
        G: Graph<N> + ?Sized,
    {
        let budget = Budget::start(self.config, None);
        let mut state = SearchState::new(self.config.size_hint);

        let result = dijkstra(&mut state, graph, start, goals, &budget);

        log_search!("dijkstra", result, state.stats, budget);
        result
    }
}

fn dijkstra<N, G>(
    state: &mut SearchState<N, G::Cost>,
    graph: &G,
    start: N,
    goals: &[N],
    budget: &Budget,
) -> Result<HashMap<N, Path<N, G::Cost>>>
where
    N: Clone + Eq + Hash + Debug,
    G: Graph<N> + ?Sized,
{
    let mut remaining_goals: NodeSet<N> = goals.iter().cloned().collect();
    let mut goal_data = HashMap::with_capacity(remaining_goals.len());

    state.open(graph, start, <G::Cost as Cost>::ZERO, budget.validate())?;
    if remaining_goals.is_empty() {
        return Ok(goal_data);
    }

    let mut estimate = |_: &N| <G::Cost as Cost>::ZERO;

    while let Some((current, current_cost)) = state.pop() {
        if remaining_goals.remove(&current) {
            goal_data.insert(current.clone(), state.path_to(current.clone(), current_cost));
            if remaining_goals.is_empty() {
                break;
            }
        }
        state.expand(graph, current, current_cost, &mut estimate, budget)?;
    }

    if !remaining_goals.is_empty() && state.overflowed() {
        return Err(SearchError::CostOverflow);
    }
    Ok(goal_data)
}

#[cfg(test)]
mod tests {
    use crate::{AdjacencyList, Pathfinder, SearchConfig, SearchError};

    #[test]
    fn start_is_a_goal() {
        let mut graph = AdjacencyList::new();
        graph.add_edge(0u8, 1, 3u16);

        let result = Pathfinder::default().dijkstra(&graph, 0, &[0, 1]).unwrap();

        assert_eq!(result[&0], vec![0]);
        assert_eq!(result[&1].cost(), 3);
    }

    #[test]
    fn no_goals() {
        let mut graph = AdjacencyList::new();
        graph.add_edge(0u8, 1, 3u16);

        let result = Pathfinder::default().dijkstra(&graph, 0, &[]).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn limits_apply() {
        let graph: AdjacencyList<u32, u32> = (0..100).map(|i| (i, i + 1, 1)).collect();
        let pathfinder = Pathfinder::new(SearchConfig::default().with_max_expansions(5));

        let result = pathfinder.dijkstra(&graph, 0, &[3, 50]);
        assert_eq!(result, Err(SearchError::ExpansionLimitReached { limit: 5 }));

        let result = pathfinder.dijkstra(&graph, 0, &[2, 4]).unwrap();
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn overflow_only_matters_for_unreached_goals() {
        let graph: AdjacencyList<char, u8> = [('A', 'B', 1), ('A', 'C', 5), ('B', 'D', 255)]
            .into_iter()
            .collect();

        let result = Pathfinder::default().dijkstra(&graph, 'A', &['B', 'C']).unwrap();
        assert_eq!(result[&'C'].cost(), 5);

        let result = Pathfinder::default().dijkstra(&graph, 'A', &['C', 'D']);
        assert_eq!(result, Err(SearchError::CostOverflow));
    }

    #[test]
    fn validation() {
        let graph: AdjacencyList<u32, i64> = [(0, 1, 4), (1, 2, -4)].into_iter().collect();

        let result = Pathfinder::default().dijkstra(&graph, 0, &[2]);
        assert!(matches!(result, Err(SearchError::NegativeWeight { .. })));

        let result = Pathfinder::default().dijkstra(&graph, 9, &[2]);
        assert_eq!(result, Err(SearchError::StartNotInGraph("9".into())));
    }
}
