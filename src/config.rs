use std::time::Duration;

/// Options for configuring a [`Pathfinder`](crate::Pathfinder)
///
/// Default options:
/// ```
/// # use weighted_astar::SearchConfig;
/// assert_eq!(
///     SearchConfig {
///         validate: true,
///         max_expansions: None,
///         time_limit: None,
///         size_hint: 64,
///     },
///     Default::default()
/// );
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchConfig {
    /// `true` (default): check the preconditions of A* while searching and fail with a
    /// [`SearchError`](crate::SearchError) as soon as one is violated:
    /// - the start Node must be part of the Graph
    /// - every expanded Edge must have a non-negative weight
    /// - the Heuristic must never be negative, must estimate zero for the Goal and must be
    ///   consistent along every expanded Edge
    ///
    /// `false`: skip these checks. A start Node outside of the Graph then simply has no
    /// Edges and the search returns [`NotFound`](crate::SearchError::NotFound). Invalid
    /// weights or Heuristics may lead to Paths that are not the cheapest.
    pub validate: bool,
    /// The maximum number of Nodes to expand before giving up (defaults to `None` = unlimited)
    pub max_expansions: Option<usize>,
    /// The maximum time a single search may take (defaults to `None` = unlimited).
    ///
    /// The clock is checked once per expanded Node.
    pub time_limit: Option<Duration>,
    /// The number of Nodes a search is expected to touch (defaults to `64`).
    ///
    /// Only used to pre-allocate the internal maps, so it does not need to be exact.
    pub size_hint: usize,
}

impl SearchConfig {
    /// a SearchConfig that skips all validation and has no limits
    ///
    /// Values:
    /// ```
    /// # use weighted_astar::SearchConfig;
    /// assert_eq!(
    ///     SearchConfig {
    ///         validate: false,
    ///         max_expansions: None,
    ///         time_limit: None,
    ///         size_hint: 64,
    ///     },
    ///     SearchConfig::UNCHECKED
    /// );
    /// ```
    pub const UNCHECKED: SearchConfig = SearchConfig {
        validate: false,
        max_expansions: None,
        time_limit: None,
        size_hint: 64,
    };

    /// a SearchConfig for untrusted Graphs: validation on and at most one million expansions
    /// or one second per search.
    ///
    /// Values:
    /// ```
    /// # use weighted_astar::SearchConfig;
    /// # use std::time::Duration;
    /// assert_eq!(
    ///     SearchConfig {
    ///         validate: true,
    ///         max_expansions: Some(1_000_000),
    ///         time_limit: Some(Duration::from_secs(1)),
    ///         size_hint: 64,
    ///     },
    ///     SearchConfig::STRICT
    /// );
    /// ```
    pub const STRICT: SearchConfig = SearchConfig {
        validate: true,
        max_expansions: Some(1_000_000),
        time_limit: Some(Duration::from_secs(1)),
        size_hint: 64,
    };

    /// Returns a copy with [`max_expansions`](SearchConfig::max_expansions) set to `limit`
    pub fn with_max_expansions(self, limit: usize) -> SearchConfig {
        SearchConfig {
            max_expansions: Some(limit),
            ..self
        }
    }

    /// Returns a copy with [`time_limit`](SearchConfig::time_limit) set to `limit`
    pub fn with_time_limit(self, limit: Duration) -> SearchConfig {
        SearchConfig {
            time_limit: Some(limit),
            ..self
        }
    }

    /// Returns a copy with [`size_hint`](SearchConfig::size_hint) set to `size_hint`
    pub fn with_size_hint(self, size_hint: usize) -> SearchConfig {
        SearchConfig { size_hint, ..self }
    }

    /// Returns a copy with [`validate`](SearchConfig::validate) set to `validate`
    pub fn with_validation(self, validate: bool) -> SearchConfig {
        SearchConfig { validate, ..self }
    }
}

impl Default for SearchConfig {
    fn default() -> SearchConfig {
        SearchConfig {
            validate: true,
            max_expansions: None,
            time_limit: None,
            size_hint: 64,
        }
    }
}
