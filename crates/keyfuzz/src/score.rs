//! Edit-distance scoring
//!
//! A score is the number of single-character edits between the pattern and a
//! candidate, so lower is closer and `0` means identical. A candidate is a
//! match when its score does not exceed [`SearchOptions::threshold`].
//!
//! - [`Levenshtein`]: full dynamic-programming table, the default scorer
//! - [`StrsimScorer`]: `strsim` distances, including transposition-aware ones

use serde::{Deserialize, Serialize};
use strsim::{damerau_levenshtein, levenshtein, osa_distance};

/// Matching parameters passed to every scorer call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchOptions {
    /// Maximum edit distance still accepted as a match. `0` requires equality.
    pub threshold: usize,
    /// Compare without folding case
    pub case_sensitive: bool,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            threshold: 4,
            case_sensitive: false,
        }
    }
}

impl SearchOptions {
    /// Fold `text` the way candidates and patterns are compared
    pub fn fold<'t>(&self, text: &'t str) -> std::borrow::Cow<'t, str> {
        if self.case_sensitive {
            std::borrow::Cow::Borrowed(text)
        } else {
            std::borrow::Cow::Owned(text.to_lowercase())
        }
    }
}

/// Outcome of scoring one string against the pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub is_match: bool,
    pub score: usize,
}

impl SearchResult {
    /// Build a result, deriving `is_match` from the threshold
    pub fn from_distance(score: usize, options: &SearchOptions) -> Self {
        Self {
            is_match: score <= options.threshold,
            score,
        }
    }
}

/// Scores a (pre-folded) candidate against a (pre-folded) pattern.
///
/// Implementations must never fail; empty strings are valid on both sides.
pub trait Scorer: Send + Sync {
    fn score(&self, pattern: &str, candidate: &str, options: &SearchOptions) -> SearchResult;
}

impl<F> Scorer for F
where
    F: Fn(&str, &str, &SearchOptions) -> SearchResult + Send + Sync,
{
    fn score(&self, pattern: &str, candidate: &str, options: &SearchOptions) -> SearchResult {
        self(pattern, candidate, options)
    }
}

/// Classic Levenshtein distance with unit costs, compared per `char`.
///
/// Builds the whole `(m+1) x (n+1)` table; no early termination.
#[derive(Debug, Clone, Copy, Default)]
pub struct Levenshtein;

impl Levenshtein {
    /// Edit distance between `a` and `b`
    pub fn distance(a: &str, b: &str) -> usize {
        let a: Vec<char> = a.chars().collect();
        let b: Vec<char> = b.chars().collect();
        let (m, n) = (a.len(), b.len());

        let mut d = vec![vec![0usize; n + 1]; m + 1];
        for (i, row) in d.iter_mut().enumerate() {
            row[0] = i;
        }
        for (j, cell) in d[0].iter_mut().enumerate() {
            *cell = j;
        }

        for j in 1..=n {
            for i in 1..=m {
                let substitution = usize::from(a[i - 1] != b[j - 1]);
                d[i][j] = (d[i - 1][j] + 1)
                    .min(d[i][j - 1] + 1)
                    .min(d[i - 1][j - 1] + substitution);
            }
        }

        d[m][n]
    }
}

impl Scorer for Levenshtein {
    fn score(&self, pattern: &str, candidate: &str, options: &SearchOptions) -> SearchResult {
        SearchResult::from_distance(Self::distance(pattern, candidate), options)
    }
}

/// Distance metric used by [`StrsimScorer`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EditMetric {
    #[default]
    Levenshtein,
    /// Optimal string alignment: adjacent transpositions cost 1, no substring edited twice
    OsaDistance,
    /// Unrestricted Damerau-Levenshtein
    DamerauLevenshtein,
}

/// Scorer backed by the `strsim` crate
#[derive(Debug, Clone, Copy, Default)]
pub struct StrsimScorer {
    pub metric: EditMetric,
}

impl StrsimScorer {
    pub fn new(metric: EditMetric) -> Self {
        Self { metric }
    }
}

impl Scorer for StrsimScorer {
    fn score(&self, pattern: &str, candidate: &str, options: &SearchOptions) -> SearchResult {
        let distance = match self.metric {
            EditMetric::Levenshtein => levenshtein(pattern, candidate),
            EditMetric::OsaDistance => osa_distance(pattern, candidate),
            EditMetric::DamerauLevenshtein => damerau_levenshtein(pattern, candidate),
        };
        SearchResult::from_distance(distance, options)
    }
}
