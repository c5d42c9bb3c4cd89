//! The A* search and its Dijkstra sibling

mod frontier;

mod reconstruct;

mod state;
use self::state::{Budget, SearchState};

mod dijkstra;

use crate::{
    config::SearchConfig,
    cost::Cost,
    error::{Result, SearchError},
    graph::Graph,
    heuristic::Heuristic,
    path::Path,
};

use std::fmt::Debug;
use std::hash::Hash;
use std::sync::atomic::AtomicBool;

pub(crate) type NodeMap<N, V> = hashbrown::HashMap<N, V>;
pub(crate) type NodeSet<N> = hashbrown::HashSet<N>;

/// Counters describing the work done by a single search
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// the number of Nodes that were expanded (closed)
    pub expanded: usize,
    /// the number of entries pushed onto the open set, including the start
    pub pushed: usize,
    /// the number of outdated open set entries that were popped and skipped
    pub stale_skipped: usize,
    /// the largest size of the open set during the search
    pub max_frontier: usize,
}

/// Finds the cheapest Path from `start` to `goal` using the default [`SearchConfig`].
///
/// Shorthand for `Pathfinder::default().find_path(graph, start, goal, heuristic)`.
/// See [`Pathfinder::find_path`] for details.
///
/// ## Examples
/// The Graph from the introduction of the crate:
/// ```
/// use weighted_astar::{find_path, AdjacencyList, Manhattan};
///
/// let mut graph = AdjacencyList::new();
/// graph
///     .add_undirected_edge((0, 0), (0, 1), 1)
///     .add_undirected_edge((0, 0), (1, 0), 1)
///     .add_undirected_edge((0, 1), (1, 1), 1)
///     .add_undirected_edge((1, 0), (1, 1), 1)
///     .add_undirected_edge((1, 1), (2, 2), 2);
///
/// let path = find_path(&graph, (0, 0), (2, 2), &Manhattan).unwrap();
/// assert_eq!(path.cost(), 4);
/// assert_eq!(path, vec![(0, 0), (0, 1), (1, 1), (2, 2)]);
/// ```
pub fn find_path<N, G, H>(
    graph: &G,
    start: N,
    goal: N,
    heuristic: &H,
) -> Result<Path<N, G::Cost>>
where
    N: Clone + Eq + Hash + Debug,
    G: Graph<N> + ?Sized,
    H: Heuristic<N, G::Cost> + ?Sized,
{
    Pathfinder::default().find_path(graph, start, goal, heuristic)
}

/// Searches weighted Graphs using the [A* Algorithm](https://en.wikipedia.org/wiki/A*_search_algorithm).
///
/// A Pathfinder holds nothing but its [`SearchConfig`]. Every search creates its own state and
/// only borrows the Graph, so the same Pathfinder and Graph can be used for any number of
/// searches, also from several threads at once.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Pathfinder {
    config: SearchConfig,
}

impl Pathfinder {
    /// Creates a Pathfinder with the given options
    pub fn new(config: SearchConfig) -> Pathfinder {
        Pathfinder { config }
    }

    /// The options used by this Pathfinder
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Calculates the cheapest Path from `start` to `goal`.
    ///
    /// The search always expands the open Node with the lowest `cost + heuristic`. Among Nodes
    /// with the same value, the one that was discovered first is expanded first, which makes
    /// the result deterministic as long as the Graph reports its Edges in a fixed order.
    ///
    /// ## Arguments
    /// - `graph` - the Graph to search. See [`Graph`]
    /// - `start` - the Node where the search starts
    /// - `goal` - the Node to search for. It does not need to be part of the Graph
    /// - `heuristic` - estimates the Cost from a Node to `goal`. Use [`Zero`](crate::Zero) if
    ///     there is no proper estimate. With validation enabled (default), the Heuristic must
    ///     be consistent, not only admissible, or the search fails with
    ///     [`SearchError::InconsistentHeuristic`].
    ///
    /// ## Returns
    /// The Path, if one was found. The first Node in the Path is always `start` and the last
    /// is `goal`. If `start == goal` the Path consists of only that Node.
    ///
    /// [`SearchError::NotFound`] if `goal` is unreachable, or one of the other variants if the
    /// search was aborted or the input was invalid.
    ///
    /// Edges whose end can't be reached without overflowing the Cost Type are ignored. If the
    /// search then runs out of Nodes without reaching `goal`, it fails with
    /// [`SearchError::CostOverflow`] instead of [`NotFound`](SearchError::NotFound).
    ///
    /// ## Examples
    /// Basic usage:
    /// ```
    /// use weighted_astar::{AdjacencyList, Pathfinder, SearchConfig, SearchError, Zero};
    ///
    /// // A     B--2--E
    /// // |\
    /// // 1 9
    /// // |  \
    /// // C-6-D
    /// let graph: AdjacencyList<char, u32> = [
    ///     ('A', 'C', 1),
    ///     ('A', 'D', 9),
    ///     ('C', 'D', 6),
    ///     ('B', 'E', 2),
    /// ]
    /// .into_iter()
    /// .collect();
    ///
    /// let pathfinder = Pathfinder::new(SearchConfig::default());
    ///
    /// let path = pathfinder.find_path(&graph, 'A', 'D', &Zero).unwrap();
    /// assert_eq!(path, vec!['A', 'C', 'D']);
    /// assert_eq!(path.cost(), 7);
    ///
    /// let result = pathfinder.find_path(&graph, 'A', 'E', &Zero);
    /// assert_eq!(result, Err(SearchError::NotFound));
    /// ```
    pub fn find_path<N, G, H>(
        &self,
        graph: &G,
        start: N,
        goal: N,
        heuristic: &H,
    ) -> Result<Path<N, G::Cost>>
    where
        N: Clone + Eq + Hash + Debug,
        G: Graph<N> + ?Sized,
        H: Heuristic<N, G::Cost> + ?Sized,
    {
        self.find_path_with_stats(graph, start, goal, heuristic).0
    }

    /// Same as [`find_path`](Pathfinder::find_path), but also returns what the search did.
    ///
    /// ```
    /// use weighted_astar::{AdjacencyList, Pathfinder, Zero};
    ///
    /// let mut graph = AdjacencyList::new();
    /// graph.add_edge(0, 1, 1u32).add_edge(1, 2, 1).add_edge(2, 0, 1);
    ///
    /// let (path, stats) = Pathfinder::default().find_path_with_stats(&graph, 0, 2, &Zero);
    /// assert_eq!(path.unwrap().cost(), 2);
    /// assert_eq!(stats.expanded, 2);
    /// ```
    pub fn find_path_with_stats<N, G, H>(
        &self,
        graph: &G,
        start: N,
        goal: N,
        heuristic: &H,
    ) -> (Result<Path<N, G::Cost>>, SearchStats)
    where
        N: Clone + Eq + Hash + Debug,
        G: Graph<N> + ?Sized,
        H: Heuristic<N, G::Cost> + ?Sized,
    {
        self.run(graph, start, goal, heuristic, None)
    }

    /// Same as [`find_path`](Pathfinder::find_path), but fails with
    /// [`SearchError::Cancelled`] as soon as `cancel` is set.
    ///
    /// The flag is checked once per expanded Node and may be set from another thread.
    ///
    /// ```
    /// use std::sync::atomic::AtomicBool;
    /// use weighted_astar::{FnGraph, Pathfinder, SearchError, Zero};
    ///
    /// // an infinite Graph where the Goal can't be reached
    /// let graph = FnGraph::new(|&n: &u64, out: &mut Vec<(u64, u64)>| out.push((n + 2, 1)));
    ///
    /// let cancel = AtomicBool::new(true);
    /// let result = Pathfinder::default().find_path_cancellable(&graph, 0, 1, &Zero, &cancel);
    /// assert_eq!(result, Err(SearchError::Cancelled));
    /// ```
    pub fn find_path_cancellable<N, G, H>(
        &self,
        graph: &G,
        start: N,
        goal: N,
        heuristic: &H,
        cancel: &AtomicBool,
    ) -> Result<Path<N, G::Cost>>
    where
        N: Clone + Eq + Hash + Debug,
        G: Graph<N> + ?Sized,
        H: Heuristic<N, G::Cost> + ?Sized,
    {
        self.run(graph, start, goal, heuristic, Some(cancel)).0
    }

    /// Runs one independent search for every `(start, goal)` pair on the same Graph.
    ///
    /// The results are in the same order as `queries`. With the `parallel` feature enabled
    /// (default), the searches are distributed over the rayon thread pool.
    ///
    /// ```
    /// use weighted_astar::{AdjacencyList, Pathfinder, SearchError, Zero};
    ///
    /// let mut graph = AdjacencyList::new();
    /// graph.add_undirected_edge(1, 2, 5u32).add_undirected_edge(2, 3, 1);
    /// graph.add_node(4);
    ///
    /// let results = Pathfinder::default().find_paths(&graph, &[(1, 3), (3, 1), (1, 4)], &Zero);
    /// assert_eq!(results[0].as_ref().unwrap().cost(), 6);
    /// assert_eq!(results[1].as_ref().unwrap(), &vec![3, 2, 1]);
    /// assert_eq!(results[2], Err(SearchError::NotFound));
    /// ```
    pub fn find_paths<N, G, H>(
        &self,
        graph: &G,
        queries: &[(N, N)],
        heuristic: &H,
    ) -> Vec<Result<Path<N, G::Cost>>>
    where
        N: Clone + Eq + Hash + Debug + Send + Sync,
        G: Graph<N> + Sync + ?Sized,
        H: Heuristic<N, G::Cost> + Sync + ?Sized,
    {
        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            queries
                .par_iter()
                .map(|(start, goal)| self.find_path(graph, start.clone(), goal.clone(), heuristic))
                .collect()
        }
        #[cfg(not(feature = "parallel"))]
        {
            queries
                .iter()
                .map(|(start, goal)| self.find_path(graph, start.clone(), goal.clone(), heuristic))
                .collect()
        }
    }

    fn run<N, G, H>(
        &self,
        graph: &G,
        start: N,
        goal: N,
        heuristic: &H,
        cancel: Option<&AtomicBool>,
    ) -> (Result<Path<N, G::Cost>>, SearchStats)
    where
        N: Clone + Eq + Hash + Debug,
        G: Graph<N> + ?Sized,
        H: Heuristic<N, G::Cost> + ?Sized,
    {
        let budget = Budget::start(self.config, cancel);
        let mut state = SearchState::new(self.config.size_hint);

        let result = a_star(&mut state, graph, start, goal, heuristic, &budget);

        log_search!("a_star", result, state.stats, budget);
        (result, state.stats)
    }
}

fn a_star<N, G, H>(
    state: &mut SearchState<N, G::Cost>,
    graph: &G,
    start: N,
    goal: N,
    heuristic: &H,
    budget: &Budget,
) -> Result<Path<N, G::Cost>>
where
    N: Clone + Eq + Hash + Debug,
    G: Graph<N> + ?Sized,
    H: Heuristic<N, G::Cost> + ?Sized,
{
    let validate = budget.validate();
    if validate {
        let goal_estimate = heuristic.estimate(&goal, &goal);
        if goal_estimate != <G::Cost as Cost>::ZERO {
            return Err(SearchError::NonZeroGoalEstimate {
                estimate: format!("{:?}", goal_estimate),
            });
        }
    }

    let start_estimate = heuristic.estimate(&start, &goal);
    state.open(graph, start, start_estimate, validate)?;

    let mut estimate = |node: &N| heuristic.estimate(node, &goal);

    while let Some((current, current_cost)) = state.pop() {
        if current == goal {
            return Ok(state.path_to(current, current_cost));
        }
        state.expand(graph, current, current_cost, &mut estimate, budget)?;
    }

    if state.overflowed() {
        Err(SearchError::CostOverflow)
    } else {
        Err(SearchError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AdjacencyList, Manhattan, Zero};

    fn example_graph() -> AdjacencyList<(i32, i32), u32> {
        let mut graph = AdjacencyList::new();
        graph
            .add_edge((0, 0), (0, 1), 1)
            .add_edge((0, 0), (1, 0), 1)
            .add_edge((0, 1), (0, 0), 1)
            .add_edge((0, 1), (1, 1), 1)
            .add_edge((1, 0), (0, 0), 1)
            .add_edge((1, 0), (1, 1), 1)
            .add_edge((1, 1), (0, 1), 1)
            .add_edge((1, 1), (1, 0), 1)
            .add_edge((1, 1), (2, 2), 2)
            .add_edge((2, 2), (1, 1), 2);
        graph
    }

    #[test]
    fn basic() {
        let graph = example_graph();
        let path = find_path(&graph, (0, 0), (2, 2), &Manhattan).unwrap();

        assert_eq!(path.cost(), 4);
        // (0, 1) is discovered before (1, 0), so it wins the tie
        assert_eq!(path, vec![(0, 0), (0, 1), (1, 1), (2, 2)]);
    }

    #[test]
    fn start_is_goal() {
        let graph = example_graph();
        let (path, stats) =
            Pathfinder::default().find_path_with_stats(&graph, (1, 1), (1, 1), &Manhattan);

        assert_eq!(path, Ok(Path::new(vec![(1, 1)], 0)));
        assert_eq!(stats.expanded, 0);
    }

    #[test]
    fn unreachable_goal() {
        let mut graph = example_graph();
        graph.add_node((5, 5));

        let result = find_path(&graph, (0, 0), (5, 5), &Manhattan);
        assert_eq!(result, Err(SearchError::NotFound));

        // the goal doesn't even need to exist
        let result = find_path(&graph, (0, 0), (9, 9), &Manhattan);
        assert_eq!(result, Err(SearchError::NotFound));
    }

    #[test]
    fn missing_start() {
        let graph = example_graph();

        let result = find_path(&graph, (7, 7), (0, 0), &Manhattan);
        assert_eq!(
            result,
            Err(SearchError::StartNotInGraph("(7, 7)".to_string()))
        );

        let result =
            Pathfinder::new(SearchConfig::UNCHECKED).find_path(&graph, (7, 7), (0, 0), &Manhattan);
        assert_eq!(result, Err(SearchError::NotFound));
    }

    #[test]
    fn stale_entries_are_skipped() {
        // B is first reached via the expensive direct Edge, then improved via C
        let graph: AdjacencyList<char, u32> = [
            ('A', 'B', 10),
            ('A', 'C', 1),
            ('C', 'B', 1),
            ('B', 'D', 1),
            ('D', 'E', 20),
        ]
        .into_iter()
        .collect();

        let (path, stats) = Pathfinder::default().find_path_with_stats(&graph, 'A', 'E', &Zero);

        assert_eq!(path.unwrap(), vec!['A', 'C', 'B', 'D', 'E']);
        assert_eq!(stats.expanded, 4);
        assert_eq!(stats.pushed, 6);
        assert_eq!(stats.stale_skipped, 1);
    }

    #[test]
    fn cycles_expand_every_node_once() {
        let mut graph = AdjacencyList::new();
        for i in 0..10u32 {
            graph.add_undirected_edge(i, (i + 1) % 10, 1u32);
            graph.add_edge(i, i, 0);
        }

        let (path, stats) = Pathfinder::default().find_path_with_stats(&graph, 0, 42, &Zero);

        assert_eq!(path, Err(SearchError::NotFound));
        assert_eq!(stats.expanded, 10);
    }

    #[test]
    fn invalid_heuristics() {
        let graph = example_graph();

        let shifted = |a: &(i32, i32), b: &(i32, i32)| {
            let h: u32 = Manhattan.estimate(a, b);
            h + 1
        };
        let result = find_path(&graph, (0, 0), (2, 2), &shifted);
        assert_eq!(
            result,
            Err(SearchError::NonZeroGoalEstimate {
                estimate: "1".into()
            })
        );

        // overestimates everything but the Goal
        let greedy = |a: &(i32, i32), b: &(i32, i32)| {
            let h: u32 = Manhattan.estimate(a, b);
            h * 10
        };
        let result = find_path(&graph, (0, 0), (2, 2), &greedy);
        assert!(matches!(
            result,
            Err(SearchError::InconsistentHeuristic { .. })
        ));

        let result =
            Pathfinder::new(SearchConfig::UNCHECKED).find_path(&graph, (0, 0), (2, 2), &greedy);
        assert!(result.is_ok());
    }

    #[test]
    fn negative_weights() {
        let graph: AdjacencyList<u8, i32> = [(0, 1, 2), (1, 2, -1)].into_iter().collect();

        let result = find_path(&graph, 0, 2, &Zero);
        assert_eq!(
            result,
            Err(SearchError::NegativeWeight {
                from: "1".into(),
                to: "2".into(),
                weight: "-1".into(),
            })
        );
    }

    #[test]
    fn overflow() {
        let graph: AdjacencyList<u8, u8> = [(0, 1, 200), (1, 2, 100)].into_iter().collect();

        let result = find_path(&graph, 0, 2, &Zero);
        assert_eq!(result, Err(SearchError::CostOverflow));
    }

    #[test]
    fn overflow_on_a_side_branch() {
        let graph: AdjacencyList<char, u8> = [('A', 'B', 1), ('A', 'C', 5), ('B', 'D', 255)]
            .into_iter()
            .collect();

        let path = find_path(&graph, 'A', 'C', &Zero).unwrap();
        assert_eq!(path, vec!['A', 'C']);
        assert_eq!(path.cost(), 5);

        // D is only reachable with a Cost of 256
        let result = find_path(&graph, 'A', 'D', &Zero);
        assert_eq!(result, Err(SearchError::CostOverflow));
    }

    #[test]
    fn dead_ends_estimated_as_max() {
        let graph: AdjacencyList<char, u32> = [('A', 'X', 1), ('A', 'G', 3)].into_iter().collect();
        let heuristic = |node: &char, _: &char| match node {
            'X' => u32::MAX,
            'G' => 0,
            _ => 3,
        };

        for config in [SearchConfig::default(), SearchConfig::UNCHECKED] {
            let path = Pathfinder::new(config)
                .find_path(&graph, 'A', 'G', &heuristic)
                .unwrap();
            assert_eq!(path, vec!['A', 'G']);
            assert_eq!(path.cost(), 3);
        }
    }

    #[test]
    fn expansion_limit() {
        let graph: AdjacencyList<u32, u32> = (0..100).map(|i| (i, i + 1, 1)).collect();
        let pathfinder = Pathfinder::new(SearchConfig::default().with_max_expansions(10));

        let result = pathfinder.find_path(&graph, 0, 100, &Zero);
        assert_eq!(
            result,
            Err(SearchError::ExpansionLimitReached { limit: 10 })
        );

        let path = pathfinder.find_path(&graph, 0, 10, &Zero).unwrap();
        assert_eq!(path.len(), 11);
    }

    #[test]
    fn deterministic() {
        let graph = example_graph();
        let pathfinder = Pathfinder::default();

        let first = pathfinder.find_path_with_stats(&graph, (0, 0), (2, 2), &Zero);
        let second = pathfinder.find_path_with_stats(&graph, (0, 0), (2, 2), &Zero);
        assert_eq!(first, second);
    }
}
