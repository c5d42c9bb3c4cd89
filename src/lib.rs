#![warn(
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications
)]

//! A crate to find the cheapest Paths in weighted Graphs using A*.
//!
//! ## Introduction
//! [A*](https://en.wikipedia.org/wiki/A*_search_algorithm) is a best-first search: it keeps
//! a set of discovered Nodes and always continues with the one that looks most promising, which
//! is the Node with the lowest sum of the Cost to reach it and an estimate of the Cost that
//! remains to the Goal (the *Heuristic*). As long as that estimate never exceeds the actual
//! remaining Cost, the first Path found to the Goal is the cheapest one.
//!
//! This crate provides that search for any Graph and any Node Type. The Graph is never stored or
//! modified, it only needs to list the outgoing Edges of a Node when asked (see [`Graph`]). The
//! Heuristic is supplied by the caller as well (see [`Heuristic`]). For Nodes without a sensible
//! estimate, [`Zero`] turns the search into Dijkstra's Algorithm.
//!
//! ## Examples
//! Finding the Path to a single Goal:
//! ```
//! use weighted_astar::prelude::*;
//!
//! // (0, 0) --1-- (0, 1)
//! //   |            |
//! //   1            1
//! //   |            |
//! // (1, 0) --1-- (1, 1) --2-- (2, 2)
//! let mut graph = AdjacencyList::new();
//! graph
//!     .add_undirected_edge((0, 0), (0, 1), 1u32)
//!     .add_undirected_edge((0, 0), (1, 0), 1)
//!     .add_undirected_edge((0, 1), (1, 1), 1)
//!     .add_undirected_edge((1, 0), (1, 1), 1)
//!     .add_undirected_edge((1, 1), (2, 2), 2);
//!
//! // find_path returns Ok(Path) on success
//! let path = find_path(&graph, (0, 0), (2, 2), &Manhattan).unwrap();
//!
//! assert_eq!(path.cost(), 4);
//! assert_eq!(path.start(), Some(&(0, 0)));
//! assert_eq!(path.goal(), Some(&(2, 2)));
//! ```
//!
//! A plain nested HashMap works as a Graph as well, and an unreachable Goal is reported as
//! [`SearchError::NotFound`]:
//! ```
//! use std::collections::HashMap;
//! use weighted_astar::prelude::*;
//!
//! let mut graph: HashMap<&str, HashMap<&str, u32>> = HashMap::new();
//! graph.entry("home").or_default().insert("work", 10);
//! graph.entry("work").or_default().insert("gym", 3);
//! graph.entry("island").or_default();
//!
//! let path = find_path(&graph, "home", "gym", &Zero).unwrap();
//! assert_eq!(path, vec!["home", "work", "gym"]);
//!
//! let result = find_path(&graph, "home", "island", &Zero);
//! assert!(result.unwrap_err().is_not_found());
//! ```
//!
//! ### Configuration
//! [`Pathfinder::new`] takes a [`SearchConfig`] to validate the input, limit the number of
//! expanded Nodes or the time a search may take:
//! ```
//! use std::time::Duration;
//! use weighted_astar::prelude::*;
//!
//! // every number is connected to its successor, so this Graph never ends
//! let graph = FnGraph::new(|&n: &u64, out: &mut Vec<(u64, u64)>| out.push((n + 1, 1)));
//!
//! let pathfinder = Pathfinder::new(
//!     SearchConfig::default()
//!         .with_max_expansions(1000)
//!         .with_time_limit(Duration::from_secs(5)),
//! );
//!
//! assert_eq!(pathfinder.find_path(&graph, 0, 100, &Zero).unwrap().cost(), 100);
//!
//! let result = pathfinder.find_path(&graph, 0, 5000, &Zero);
//! assert_eq!(result, Err(SearchError::ExpansionLimitReached { limit: 1000 }));
//! ```
//!
//! ## Features
//! - `parallel` (default): [`Pathfinder::find_paths`] runs its searches on the rayon thread pool
//! - `log`: every search logs a summary through the [log](https://docs.rs/log) crate
//! - `serde`: [`SearchConfig`] implements `Serialize` and `Deserialize`

/// Logs the outcome of a search if the `log` feature is enabled
macro_rules! log_search {
    ($name:expr, $result:expr, $stats:expr, $budget:expr) => {
        #[cfg(feature = "log")]
        {
            let elapsed = $budget.started().elapsed();
            match &$result {
                Ok(_) => log::debug!("{} succeeded in {:?}: {:?}", $name, elapsed, $stats),
                Err(err) if err.is_not_found() => {
                    log::debug!("{} found no path in {:?}: {:?}", $name, elapsed, $stats)
                }
                Err(err) => log::trace!("{} aborted after {:?}: {}", $name, elapsed, err),
            }
        }
    };
}

mod config;
pub use self::config::SearchConfig;

mod cost;
pub use self::cost::Cost;

mod error;
pub use self::error::{Result, SearchError};

pub mod graph;
pub use self::graph::{AdjacencyList, FnGraph, Graph};

pub mod heuristic;
pub use self::heuristic::{Chebyshev, Coord2D, Heuristic, Manhattan, Zero};

mod path;
pub use self::path::Path;

mod search;
pub use self::search::{find_path, Pathfinder, SearchStats};

/// The most commonly used Types and Functions
pub mod prelude {
    pub use crate::{
        find_path, AdjacencyList, Chebyshev, FnGraph, Graph, Heuristic, Manhattan, Path,
        Pathfinder, SearchConfig, SearchError, Zero,
    };
}
