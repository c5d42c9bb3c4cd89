//! Error types of the search Functions

use std::time::Duration;
use thiserror::Error;

/// Everything that can stop a search from returning a Path.
///
/// Nodes are included as their `Debug` representation, so that this Type does not depend on the
/// Node Type of the Graph.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The Goal is not reachable from the start. This is a regular outcome, not a failure.
    #[error("no path exists between the given nodes")]
    NotFound,

    /// The start Node is not part of the Graph
    #[error("start node {0} is not part of the graph")]
    StartNotInGraph(String),

    /// An Edge with a negative weight was encountered
    #[error("edge {from} -> {to} has negative weight {weight}")]
    NegativeWeight {
        /// the source of the Edge
        from: String,
        /// the target of the Edge
        to: String,
        /// the offending weight
        weight: String,
    },

    /// The Heuristic returned a negative estimate
    #[error("heuristic estimate for {node} is negative")]
    NegativeEstimate {
        /// the Node that was estimated
        node: String,
    },

    /// The Heuristic does not estimate zero for the Goal itself, so it cannot be admissible
    #[error("heuristic estimates {estimate} from the goal to itself, expected zero")]
    NonZeroGoalEstimate {
        /// the returned estimate
        estimate: String,
    },

    /// The Heuristic dropped by more than the weight of an Edge along that Edge
    #[error("heuristic is inconsistent along edge {from} -> {to}")]
    InconsistentHeuristic {
        /// the source of the Edge
        from: String,
        /// the target of the Edge
        to: String,
    },

    /// The search expanded more Nodes than allowed by [`SearchConfig::max_expansions`](crate::SearchConfig::max_expansions)
    #[error("search gave up after expanding {limit} nodes")]
    ExpansionLimitReached {
        /// the configured limit
        limit: usize,
    },

    /// The search ran longer than allowed by [`SearchConfig::time_limit`](crate::SearchConfig::time_limit)
    #[error("search exceeded its time limit of {limit:?}")]
    TimedOut {
        /// the configured limit
        limit: Duration,
    },

    /// The search was cancelled from the outside
    #[error("search was cancelled")]
    Cancelled,

    /// The Goal was not reached, and some Nodes were only reachable with a Cost that does not
    /// fit into the Cost Type of the Graph
    #[error("goal not reached, some path costs overflowed the cost type")]
    CostOverflow,
}

impl SearchError {
    /// `true` if the search completed and no Path exists.
    ///
    /// All other variants mean that the search was aborted or the input was invalid.
    pub fn is_not_found(&self) -> bool {
        matches!(self, SearchError::NotFound)
    }

    /// `true` if the error stems from a configured limit or a cancellation rather than
    /// from the Graph itself. Retrying with a larger budget may succeed.
    pub fn is_interrupted(&self) -> bool {
        matches!(
            self,
            SearchError::ExpansionLimitReached { .. }
                | SearchError::TimedOut { .. }
                | SearchError::Cancelled
        )
    }
}

/// A [`Result`](std::result::Result) with a [`SearchError`]
pub type Result<T> = std::result::Result<T, SearchError>;
