//! The Graph abstraction searched by the [`Pathfinder`](crate::Pathfinder)
//!
//! The search never asks for the Graph as a whole, it only needs to know the outgoing Edges
//! of a single Node at a time. This allows the user to store the Graph in any format they want
//! (HashMap, Vec, a Grid, or not at all), as long as the Edges of a Node can be listed on request.

use crate::cost::Cost;
use std::collections::HashMap as StdHashMap;
use std::fmt::Debug;
use std::hash::{BuildHasher, Hash};
use std::marker::PhantomData;

/// A read-only view of a weighted, possibly directed Graph.
///
/// ## Examples
/// Implementing the Trait for a custom Graph:
/// ```
/// use weighted_astar::Graph;
///
/// // every Number n is connected to n + 1 and n * 2
/// struct Numbers;
///
/// impl Graph<u32> for Numbers {
///     type Cost = u32;
///     fn neighbors(&self, node: &u32, out: &mut Vec<(u32, u32)>) {
///         out.push((node + 1, 1));
///         out.push((node * 2, 1));
///     }
///     fn contains(&self, _: &u32) -> bool {
///         true
///     }
/// }
///
/// let mut out = vec![];
/// Numbers.neighbors(&3, &mut out);
/// assert_eq!(out, vec![(4, 1), (6, 1)]);
/// ```
pub trait Graph<N> {
    /// The Type of the Edge weights
    type Cost: Cost;

    /// Appends all outgoing Edges of `node` to `out`, as `(neighbor, weight)`.
    ///
    /// `out` is reused between calls and is always empty when this is called.
    /// A Node that is not part of the Graph simply has no Edges.
    fn neighbors(&self, node: &N, out: &mut Vec<(N, Self::Cost)>);

    /// `true` if `node` is part of the Graph.
    fn contains(&self, node: &N) -> bool;
}

impl<G: Graph<N> + ?Sized, N> Graph<N> for &G {
    type Cost = G::Cost;
    fn neighbors(&self, node: &N, out: &mut Vec<(N, Self::Cost)>) {
        (**self).neighbors(node, out)
    }
    fn contains(&self, node: &N) -> bool {
        (**self).contains(node)
    }
}

macro_rules! impl_nested_map_graph {
    ($($map:ident),+) => {$(
        impl<N, C, S, T> Graph<N> for $map<N, $map<N, C, T>, S>
        where
            N: Clone + Eq + Hash,
            C: Cost,
            S: BuildHasher,
            T: BuildHasher,
        {
            type Cost = C;
            fn neighbors(&self, node: &N, out: &mut Vec<(N, C)>) {
                if let Some(edges) = self.get(node) {
                    out.extend(edges.iter().map(|(other, &cost)| (other.clone(), cost)));
                }
            }
            fn contains(&self, node: &N) -> bool {
                self.contains_key(node)
            }
        }
    )+}
}

type HashbrownMap<K, V, S> = hashbrown::HashMap<K, V, S>;
impl_nested_map_graph!(StdHashMap, HashbrownMap);

/// A Graph stored as a List of outgoing Edges per Node.
///
/// Edges are reported in the order they were added, which makes every search on an
/// AdjacencyList fully deterministic.
///
/// ## Examples
/// Basic usage:
/// ```
/// use weighted_astar::{AdjacencyList, Graph};
///
/// let mut graph = AdjacencyList::new();
/// graph.add_edge('a', 'b', 3);
/// graph.add_undirected_edge('b', 'c', 1);
///
/// let mut out = vec![];
/// graph.neighbors(&'b', &mut out);
/// assert_eq!(out, vec![('c', 1)]);
///
/// // Nodes that only appear as the target of an Edge are still part of the Graph
/// graph.add_edge('c', 'd', 2);
/// assert!(graph.contains(&'d'));
/// assert_eq!(graph.node_count(), 4);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdjacencyList<N: Eq + Hash, C> {
    edges: hashbrown::HashMap<N, Vec<(N, C)>>,
    edge_count: usize,
}

impl<N: Clone + Eq + Hash, C: Cost> AdjacencyList<N, C> {
    /// Creates an empty Graph
    pub fn new() -> Self {
        AdjacencyList {
            edges: hashbrown::HashMap::new(),
            edge_count: 0,
        }
    }

    /// Creates an empty Graph with space for at least `nodes` Nodes
    pub fn with_capacity(nodes: usize) -> Self {
        AdjacencyList {
            edges: hashbrown::HashMap::with_capacity(nodes),
            edge_count: 0,
        }
    }

    /// Adds a Node without any Edges. Does nothing if the Node already exists.
    pub fn add_node(&mut self, node: N) -> &mut Self {
        self.edges.entry(node).or_default();
        self
    }

    /// Adds a directed Edge from `from` to `to`. Both Nodes are added to the Graph if necessary.
    ///
    /// Adding the same Edge twice keeps both; the search simply uses the cheaper one.
    pub fn add_edge(&mut self, from: N, to: N, cost: C) -> &mut Self {
        self.edges.entry(to.clone()).or_default();
        self.edges.entry(from).or_default().push((to, cost));
        self.edge_count += 1;
        self
    }

    /// Adds an Edge in both directions with the same `cost`
    pub fn add_undirected_edge(&mut self, a: N, b: N, cost: C) -> &mut Self {
        self.add_edge(a.clone(), b.clone(), cost);
        self.add_edge(b, a, cost)
    }

    /// The number of Nodes in the Graph
    pub fn node_count(&self) -> usize {
        self.edges.len()
    }

    /// The number of directed Edges in the Graph
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// An Iterator over all Nodes in arbitrary order
    pub fn nodes(&self) -> impl Iterator<Item = &N> + '_ {
        self.edges.keys()
    }

    /// The outgoing Edges of `node`, if it is part of the Graph
    pub fn edges_of(&self, node: &N) -> Option<&[(N, C)]> {
        self.edges.get(node).map(Vec::as_slice)
    }
}

impl<N: Clone + Eq + Hash, C: Cost> Default for AdjacencyList<N, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: Clone + Eq + Hash, C: Cost> Graph<N> for AdjacencyList<N, C> {
    type Cost = C;
    fn neighbors(&self, node: &N, out: &mut Vec<(N, C)>) {
        if let Some(edges) = self.edges.get(node) {
            out.extend(edges.iter().cloned());
        }
    }
    fn contains(&self, node: &N) -> bool {
        self.edges.contains_key(node)
    }
}

impl<N: Clone + Eq + Hash, C: Cost> FromIterator<(N, N, C)> for AdjacencyList<N, C> {
    /// Collects directed Edges `(from, to, cost)` into a Graph
    fn from_iter<I: IntoIterator<Item = (N, N, C)>>(iter: I) -> Self {
        let mut graph = AdjacencyList::new();
        for (from, to, cost) in iter {
            graph.add_edge(from, to, cost);
        }
        graph
    }
}

impl<N: Clone + Eq + Hash, C: Cost> Extend<(N, N, C)> for AdjacencyList<N, C> {
    fn extend<I: IntoIterator<Item = (N, N, C)>>(&mut self, iter: I) {
        for (from, to, cost) in iter {
            self.add_edge(from, to, cost);
        }
    }
}

/// An implicit Graph that computes the Edges of a Node on demand.
///
/// Useful for Graphs that are too large (or infinite) to be stored. Every Node is considered
/// part of the Graph. Note that a search on an infinite Graph only terminates if the Goal is
/// reachable, so a [`max_expansions`](crate::SearchConfig::max_expansions) or
/// [`time_limit`](crate::SearchConfig::time_limit) should be set.
///
/// ## Examples
/// ```
/// use weighted_astar::{FnGraph, Graph};
///
/// // the infinite number line
/// let graph = FnGraph::new(|&n: &i64, out: &mut Vec<(i64, u32)>| {
///     out.push((n - 1, 1));
///     out.push((n + 1, 1));
/// });
///
/// let mut out = vec![];
/// graph.neighbors(&0, &mut out);
/// assert_eq!(out, vec![(-1, 1), (1, 1)]);
/// ```
#[derive(Clone, Copy)]
pub struct FnGraph<F, C> {
    get_neighbors: F,
    cost: PhantomData<fn() -> C>,
}

impl<F, C> FnGraph<F, C> {
    /// Wraps a Function that appends the outgoing Edges of a Node to the given Vec
    pub fn new<N>(get_neighbors: F) -> Self
    where
        F: Fn(&N, &mut Vec<(N, C)>),
    {
        FnGraph {
            get_neighbors,
            cost: PhantomData,
        }
    }
}

impl<F, C> Debug for FnGraph<F, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnGraph").finish_non_exhaustive()
    }
}

impl<N, C, F> Graph<N> for FnGraph<F, C>
where
    C: Cost,
    F: Fn(&N, &mut Vec<(N, C)>),
{
    type Cost = C;
    fn neighbors(&self, node: &N, out: &mut Vec<(N, C)>) {
        (self.get_neighbors)(node, out)
    }
    fn contains(&self, _: &N) -> bool {
        true
    }
}
