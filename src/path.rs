use crate::cost::Cost;

/// A Path through a Graph, as returned by the search Functions.
///
/// Stores the sequence of Nodes from the start to the Goal, **including both**, and the total
/// Cost of walking along the Edges between them. The trivial Path from a Node to itself consists
/// of only that Node and has a Cost of zero.
///
/// Note that the individual costs of the steps within the Path cannot be retrieved through this struct.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Path<N, C> {
    nodes: Vec<N>,
    cost: C,
}

impl<N, C: Cost> Path<N, C> {
    /// creates a new Path with the given sequence of Nodes and total Cost
    /// ## Examples
    /// Basic usage:
    /// ```
    /// # use weighted_astar::Path;
    /// let path = Path::new(vec!['a', 'b', 'c'], 42);
    ///
    /// assert_eq!(path, vec!['a', 'b', 'c']);
    /// assert_eq!(path.cost(), 42);
    /// ```
    pub fn new(nodes: Vec<N>, cost: C) -> Path<N, C> {
        Path { nodes, cost }
    }

    /// The total Cost of the Path
    pub fn cost(&self) -> C {
        self.cost
    }

    /// The number of Nodes in the Path, including start and Goal
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// `true` if the Path contains no Nodes. Never the case for a Path returned from a search.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The number of Edges walked along, which is one less than [`len`](Path::len)
    pub fn steps(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }

    /// The first Node of the Path
    pub fn start(&self) -> Option<&N> {
        self.nodes.first()
    }

    /// The last Node of the Path
    pub fn goal(&self) -> Option<&N> {
        self.nodes.last()
    }

    /// The Nodes of the Path as a slice
    pub fn nodes(&self) -> &[N] {
        &self.nodes
    }

    /// Consumes the Path, returning only the Nodes
    pub fn into_nodes(self) -> Vec<N> {
        self.nodes
    }

    /// Returns an Iterator over the Nodes of the Path
    pub fn iter(&self) -> std::slice::Iter<'_, N> {
        self.nodes.iter()
    }

    /// Returns a reversed copy of the Path.
    ///
    /// The Cost stays the same, so this is only meaningful on undirected Graphs.
    /// ## Examples
    /// Basic usage:
    /// ```
    /// # use weighted_astar::Path;
    /// let path = Path::new(vec!['a', 'b', 'c'], 42);
    /// let reversed = path.reversed();
    ///
    /// assert_eq!(reversed, vec!['c', 'b', 'a']);
    /// assert_eq!(reversed.cost(), 42);
    /// ```
    pub fn reversed(&self) -> Path<N, C>
    where
        N: Clone,
    {
        let mut nodes = self.nodes.clone();
        nodes.reverse();
        Path::new(nodes, self.cost)
    }
}

use std::ops::Index;

impl<N, C> Index<usize> for Path<N, C> {
    type Output = N;
    fn index(&self, index: usize) -> &N {
        &self.nodes[index]
    }
}

impl<N, C> IntoIterator for Path<N, C> {
    type Item = N;
    type IntoIter = std::vec::IntoIter<N>;
    fn into_iter(self) -> Self::IntoIter {
        self.nodes.into_iter()
    }
}

impl<'a, N, C> IntoIterator for &'a Path<N, C> {
    type Item = &'a N;
    type IntoIter = std::slice::Iter<'a, N>;
    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}

impl<N: PartialEq, C> PartialEq<Vec<N>> for Path<N, C> {
    fn eq(&self, rhs: &Vec<N>) -> bool {
        self.nodes == *rhs
    }
}

impl<'a, N: PartialEq, C> PartialEq<&'a [N]> for Path<N, C> {
    fn eq(&self, rhs: &&'a [N]) -> bool {
        self.nodes == *rhs
    }
}

use std::fmt;
impl<N: fmt::Debug, C: fmt::Display> fmt::Display for Path<N, C> {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "Path[Cost = {}]: ", self.cost)?;
        if self.nodes.is_empty() {
            write!(fmt, "<empty>")
        } else {
            write!(fmt, "{:?}", self.nodes[0])?;
            for p in self.nodes.iter().skip(1) {
                write!(fmt, " -> {:?}", p)?;
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {

    use super::Path;
    #[test]
    fn index() {
        let path = Path::new(vec![4, 2, 0], 42u32);

        assert_eq!(path[0], 4);
        assert_eq!(path[1], 2);
        assert_eq!(path[2], 0);
    }

    #[test]
    fn endpoints() {
        let path = Path::new(vec!['s', 'x', 'g'], 3u8);

        assert_eq!(path.start(), Some(&'s'));
        assert_eq!(path.goal(), Some(&'g'));
        assert_eq!(path.steps(), 2);

        let trivial = Path::new(vec!['s'], 0u8);
        assert_eq!(trivial.start(), trivial.goal());
        assert_eq!(trivial.steps(), 0);
    }

    #[test]
    fn display() {
        let path = Path::new(vec![(0, 0), (1, 1)], 4u32);

        assert_eq!(&format!("{}", path), "Path[Cost = 4]: (0, 0) -> (1, 1)");
    }

    #[test]
    fn display_empty() {
        let path = Path::new(Vec::<i32>::new(), 0u32);

        assert_eq!(&format!("{}", path), "Path[Cost = 0]: <empty>");
    }
}
