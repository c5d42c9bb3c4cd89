use super::{frontier::Frontier, reconstruct::reconstruct, NodeMap, NodeSet, SearchStats};
use crate::{
    config::SearchConfig,
    cost::Cost,
    error::{Result, SearchError},
    graph::Graph,
    path::Path,
};

use std::fmt::Debug;
use std::hash::Hash;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

/// The limits of a single search, checked once per expanded Node
pub(crate) struct Budget<'a> {
    config: SearchConfig,
    started: Instant,
    cancel: Option<&'a AtomicBool>,
}

impl<'a> Budget<'a> {
    pub fn start(config: SearchConfig, cancel: Option<&'a AtomicBool>) -> Self {
        Budget {
            config,
            started: Instant::now(),
            cancel,
        }
    }

    #[cfg(feature = "log")]
    pub fn started(&self) -> Instant {
        self.started
    }

    pub fn validate(&self) -> bool {
        self.config.validate
    }

    fn check(&self, expanded: usize) -> Result<()> {
        if let Some(limit) = self.config.max_expansions {
            if expanded >= limit {
                return Err(SearchError::ExpansionLimitReached { limit });
            }
        }
        if let Some(limit) = self.config.time_limit {
            if self.started.elapsed() > limit {
                return Err(SearchError::TimedOut { limit });
            }
        }
        if let Some(cancel) = self.cancel {
            if cancel.load(Ordering::Relaxed) {
                return Err(SearchError::Cancelled);
            }
        }
        Ok(())
    }
}

/// Everything a single search keeps track of. Created for one search and dropped afterwards.
pub(crate) struct SearchState<N, C> {
    g_score: NodeMap<N, C>,
    came_from: NodeMap<N, N>,
    closed: NodeSet<N>,
    frontier: Frontier<N, C>,
    neighbors: Vec<(N, C)>,
    overflowed: bool,
    pub stats: SearchStats,
}

impl<N, C> SearchState<N, C>
where
    N: Clone + Eq + Hash + Debug,
    C: Cost,
{
    pub fn new(size_hint: usize) -> Self {
        SearchState {
            g_score: NodeMap::with_capacity(size_hint),
            came_from: NodeMap::with_capacity(size_hint),
            closed: NodeSet::with_capacity(size_hint),
            frontier: Frontier::with_capacity(size_hint / 2),
            neighbors: Vec::new(),
            overflowed: false,
            stats: SearchStats::default(),
        }
    }

    /// Makes `start` the only Node of the open set.
    pub fn open<G>(&mut self, graph: &G, start: N, f_score: C, validate: bool) -> Result<()>
    where
        G: Graph<N, Cost = C> + ?Sized,
    {
        if validate && !graph.contains(&start) {
            return Err(SearchError::StartNotInGraph(format!("{:?}", start)));
        }
        if validate && f_score.is_negative() {
            return Err(SearchError::NegativeEstimate {
                node: format!("{:?}", start),
            });
        }
        self.g_score.insert(start.clone(), C::ZERO);
        self.push(start, C::ZERO, f_score);
        Ok(())
    }

    fn push(&mut self, node: N, cost: C, f_score: C) {
        self.frontier.push(node, cost, f_score);
        self.stats.pushed += 1;
        self.stats.max_frontier = self.stats.max_frontier.max(self.frontier.len());
    }

    /// Pops the open Node with the lowest f-score, skipping outdated entries.
    ///
    /// An entry is outdated if its Node was already expanded, or if a cheaper way to reach the
    /// Node was found after the entry was pushed.
    pub fn pop(&mut self) -> Option<(N, C)> {
        while let Some(element) = self.frontier.pop() {
            let is_stale = self.closed.contains(&element.node)
                || self
                    .g_score
                    .get(&element.node)
                    .map_or(false, |&best| element.cost > best);
            if is_stale {
                self.stats.stale_skipped += 1;
                continue;
            }
            return Some((element.node, element.cost));
        }
        None
    }

    /// `true` if an Edge was dropped because the Cost of reaching its end did not fit into `C`.
    ///
    /// Such an Edge can't be part of any representable Path, but it may have been the only
    /// way to reach some Nodes.
    pub fn overflowed(&self) -> bool {
        self.overflowed
    }

    /// The Path from the start to `goal`, which must have been popped from the open set
    pub fn path_to(&self, goal: N, cost: C) -> Path<N, C> {
        reconstruct(&self.came_from, goal, cost)
    }

    /// Closes `current` and relaxes all of its outgoing Edges.
    ///
    /// `estimate` is the Heuristic towards the Goal of the search.
    pub fn expand<G>(
        &mut self,
        graph: &G,
        current: N,
        current_cost: C,
        estimate: &mut impl FnMut(&N) -> C,
        budget: &Budget,
    ) -> Result<()>
    where
        G: Graph<N, Cost = C> + ?Sized,
    {
        budget.check(self.stats.expanded)?;
        let validate = budget.validate();

        let current_estimate = if validate { estimate(&current) } else { C::ZERO };

        let mut neighbors = std::mem::take(&mut self.neighbors);
        neighbors.clear();
        graph.neighbors(&current, &mut neighbors);

        for (other, weight) in neighbors.drain(..) {
            let other_estimate = if validate {
                let other_estimate = estimate(&other);
                check_edge(&current, current_estimate, &other, weight, other_estimate)?;
                Some(other_estimate)
            } else {
                None
            };

            if self.closed.contains(&other) || other == current {
                continue;
            }

            let other_cost = match current_cost.checked_add(weight) {
                Some(cost) => cost,
                None => {
                    self.overflowed = true;
                    continue;
                }
            };

            let improves = match self.g_score.get(&other) {
                Some(&prev_cost) => other_cost < prev_cost,
                None => true,
            };
            if !improves {
                continue;
            }

            let heuristic = match other_estimate {
                Some(h) => h,
                None => estimate(&other),
            };
            // only used for ordering, so a huge estimate may saturate
            let f_score = other_cost.saturating_add(heuristic);

            self.g_score.insert(other.clone(), other_cost);
            self.came_from.insert(other.clone(), current.clone());
            self.push(other, other_cost, f_score);
        }

        self.neighbors = neighbors;
        self.closed.insert(current);
        self.stats.expanded += 1;
        Ok(())
    }
}

/// Checks the preconditions of A* along the Edge `from -> to`
fn check_edge<N: Debug, C: Cost>(
    from: &N,
    from_estimate: C,
    to: &N,
    weight: C,
    to_estimate: C,
) -> Result<()> {
    if weight.is_negative() {
        return Err(SearchError::NegativeWeight {
            from: format!("{:?}", from),
            to: format!("{:?}", to),
            weight: format!("{:?}", weight),
        });
    }
    if to_estimate.is_negative() {
        return Err(SearchError::NegativeEstimate {
            node: format!("{:?}", to),
        });
    }
    // an overflowing bound can't be exceeded
    let consistent = match weight.checked_add(to_estimate) {
        Some(bound) => from_estimate <= bound,
        None => true,
    };
    if !consistent {
        return Err(SearchError::InconsistentHeuristic {
            from: format!("{:?}", from),
            to: format!("{:?}", to),
        });
    }
    Ok(())
}
