//! Word-overlap similarity between a query and node content.
//!
//! Deliberately crude: lower-case both sides, split on whitespace, collapse
//! duplicates, and take the fraction of query words that appear in the
//! content. There is no stemming, no punctuation stripping, and no
//! stop-word removal. Retrieval quality comes from the graph expansion, not
//! from this scorer; it only has to find plausible entry points.

use std::collections::HashSet;

/// Score `content` against `query`.
///
/// Returns the number of distinct query words found in the content divided
/// by the number of distinct query words, a value in `[0, 1]`. The
/// denominator is the query's word count, not the union, so a query fully
/// contained in a long article scores 1.0 while the reverse comparison can
/// score much lower.
///
/// An empty (or all-whitespace) query scores 0.0 against any content.
pub fn word_overlap(query: &str, content: &str) -> f64 {
    let query = query.to_lowercase();
    let query_words: HashSet<&str> = query.split_whitespace().collect();
    if query_words.is_empty() {
        return 0.0;
    }

    let content = content.to_lowercase();
    let content_words: HashSet<&str> = content.split_whitespace().collect();

    let common = query_words.intersection(&content_words).count();
    common as f64 / query_words.len() as f64
}
