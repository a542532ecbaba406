//! Query parameters and their validation.

use lexgraph_core::error::{LexgraphError, Result};

/// A retrieval request: free text plus the traversal bounds, fixed for the
/// lifetime of one run.
#[derive(Debug, Clone)]
pub struct Query {
    /// The raw query text. May be empty; an empty query scores 0 against
    /// every node instead of failing.
    pub text: String,
    /// Seeds must score at least this much. Within `[0, 1]`.
    pub similarity_threshold: f64,
    /// How many hops beyond a seed the expansion may walk. The check fires
    /// when a node is dequeued, so nodes at exactly this depth still
    /// expand once.
    pub max_depth: usize,
    /// Ceiling on the ranked seed list.
    pub max_seeds: usize,
    /// Ceiling on emitted records, shared across all seeds of one call.
    pub max_results: usize,
}

impl Query {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            similarity_threshold: 0.0,
            max_depth: 2,
            max_seeds: 5000,
            max_results: 5000,
        }
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.similarity_threshold = threshold;
        self
    }

    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    pub fn with_max_seeds(mut self, n: usize) -> Self {
        self.max_seeds = n;
        self
    }

    pub fn with_max_results(mut self, n: usize) -> Self {
        self.max_results = n;
        self
    }

    /// Check parameter ranges before a run. A threshold outside `[0, 1]`
    /// (NaN included) is rejected; an empty query is fine. Depth and the
    /// caps are unsigned, so they need no range check.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.similarity_threshold) {
            return Err(LexgraphError::invalid_threshold(self.similarity_threshold));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_overrides_defaults() {
        let query = Query::new("hak asasi")
            .with_threshold(0.4)
            .with_max_depth(3)
            .with_max_seeds(10)
            .with_max_results(100);
        assert_eq!(query.text, "hak asasi");
        assert_eq!(query.similarity_threshold, 0.4);
        assert_eq!(query.max_depth, 3);
        assert_eq!(query.max_seeds, 10);
        assert_eq!(query.max_results, 100);
    }

    #[test]
    fn threshold_bounds_are_inclusive() {
        assert!(Query::new("q").with_threshold(0.0).validate().is_ok());
        assert!(Query::new("q").with_threshold(1.0).validate().is_ok());
    }

    #[test]
    fn out_of_range_threshold_is_rejected() {
        assert!(Query::new("q").with_threshold(1.5).validate().is_err());
        assert!(Query::new("q").with_threshold(-0.1).validate().is_err());
        assert!(Query::new("q").with_threshold(f64::NAN).validate().is_err());
    }

    #[test]
    fn empty_query_is_valid() {
        assert!(Query::new("").validate().is_ok());
    }
}
