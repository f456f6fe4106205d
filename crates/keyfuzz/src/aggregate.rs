//! Per-item reduction of key scores
//!
//! An item searched on several keys yields one score per key. Only matching
//! keys count, and exactly one of them represents the item in the output.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{FuzzyError, FuzzyResult};
use crate::fields::{FieldResolver, KeyPath};
use crate::score::{Scorer, SearchOptions, SearchResult};

/// Which matching key represents an item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AggregationPolicy {
    /// Keep the highest (most distant) score among matching keys.
    ///
    /// This is the historical behavior: an item is ranked by its weakest
    /// matching key, not its closest one.
    #[default]
    WorstMatchingKey,
    /// Keep the lowest (closest) score among matching keys
    BestMatchingKey,
}

impl AggregationPolicy {
    /// Whether `candidate` replaces `current`. Ties keep the earlier key.
    fn prefers(self, candidate: &SearchResult, current: &SearchResult) -> bool {
        match self {
            AggregationPolicy::WorstMatchingKey => candidate.score > current.score,
            AggregationPolicy::BestMatchingKey => candidate.score < current.score,
        }
    }
}

/// Scores one item on its configured keys
pub struct MatchAggregator<'e, T> {
    pub scorer: &'e dyn Scorer,
    pub resolver: &'e dyn FieldResolver<T>,
    pub options: &'e SearchOptions,
    pub policy: AggregationPolicy,
}

impl<T> MatchAggregator<'_, T> {
    /// Representative match for `item`, or `None` when no key matches.
    ///
    /// `pattern` must already be folded. With no keys the item itself must be
    /// a string. Any key that does not resolve to a string fails the call.
    pub fn best_match(
        &self,
        item: &T,
        keys: &[KeyPath],
        pattern: &str,
    ) -> FuzzyResult<Option<SearchResult>> {
        if keys.is_empty() {
            let result = self.score_key(item, &KeyPath::root(), pattern)?;
            return Ok(result.is_match.then_some(result));
        }

        let mut representative: Option<SearchResult> = None;
        for key in keys {
            let result = self.score_key(item, key, pattern)?;
            if !result.is_match {
                continue;
            }
            match representative {
                Some(current) if !self.policy.prefers(&result, &current) => {}
                _ => representative = Some(result),
            }
        }

        Ok(representative)
    }

    fn score_key(&self, item: &T, key: &KeyPath, pattern: &str) -> FuzzyResult<SearchResult> {
        let value = self.resolver.resolve(item, key)?;
        let Some(text) = value.as_text() else {
            debug!(key = %key, "key does not point to a string value");
            return Err(FuzzyError::invalid_key(key));
        };
        let candidate = self.options.fold(text);
        Ok(self.scorer.score(pattern, &candidate, self.options))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::StructuralResolver;
    use crate::score::Levenshtein;
    use pretty_assertions::assert_eq;
    use serde_json::{json, Value};

    fn keys(paths: &[&str]) -> Vec<KeyPath> {
        paths.iter().map(|p| KeyPath::new(p)).collect()
    }

    fn aggregate(
        item: &Value,
        paths: &[&str],
        pattern: &str,
        threshold: usize,
        policy: AggregationPolicy,
    ) -> FuzzyResult<Option<SearchResult>> {
        let options = SearchOptions {
            threshold,
            case_sensitive: false,
        };
        let aggregator = MatchAggregator {
            scorer: &Levenshtein,
            resolver: &StructuralResolver,
            options: &options,
            policy,
        };
        aggregator.best_match(item, &keys(paths), pattern)
    }

    fn acer() -> Value {
        json!({"Manufacturer": "Acer", "CPU": {"Manufacturer": "Intel", "Series": "i5"}, "Touch": false})
    }

    #[test]
    fn test_single_key() {
        let result = aggregate(&acer(), &["CPU.Manufacturer"], "inetl", 4, Default::default());
        assert_eq!(result.unwrap(), Some(SearchResult { is_match: true, score: 2 }));
    }

    #[test]
    fn test_candidate_case_folded() {
        let result = aggregate(&acer(), &["Manufacturer"], "acer", 0, Default::default());
        assert_eq!(result.unwrap(), Some(SearchResult { is_match: true, score: 0 }));
    }

    #[test]
    fn test_worst_matching_key_kept() {
        // "acer" vs "acer" = 0, "acer" vs "intel" = 4
        let result = aggregate(
            &acer(),
            &["Manufacturer", "CPU.Manufacturer"],
            "acer",
            4,
            AggregationPolicy::WorstMatchingKey,
        );
        assert_eq!(result.unwrap(), Some(SearchResult { is_match: true, score: 4 }));
    }

    #[test]
    fn test_best_matching_key_kept() {
        let result = aggregate(
            &acer(),
            &["CPU.Manufacturer", "Manufacturer"],
            "acer",
            4,
            AggregationPolicy::BestMatchingKey,
        );
        assert_eq!(result.unwrap(), Some(SearchResult { is_match: true, score: 0 }));
    }

    #[test]
    fn test_non_matching_keys_ignored() {
        let result = aggregate(
            &acer(),
            &["Manufacturer", "CPU.Manufacturer"],
            "acer",
            1,
            AggregationPolicy::WorstMatchingKey,
        );
        assert_eq!(result.unwrap(), Some(SearchResult { is_match: true, score: 0 }));
    }

    #[test]
    fn test_no_match() {
        let result = aggregate(&acer(), &["Manufacturer"], "lenovo", 0, Default::default());
        assert_eq!(result.unwrap(), None);
    }

    #[test]
    fn test_boolean_key_fails() {
        let err = aggregate(&acer(), &["Manufacturer", "Touch"], "acer", 4, Default::default())
            .unwrap_err();
        assert!(matches!(err, FuzzyError::InvalidKey { ref path } if path == "Touch"));
    }

    #[test]
    fn test_missing_key_fails_even_after_match() {
        let err = aggregate(&acer(), &["Manufacturer", "GPU"], "acer", 4, Default::default());
        assert!(err.unwrap_err().is_invalid_key());
    }

    #[test]
    fn test_whole_item_without_keys() {
        let item = json!("Lenovo");
        let result = aggregate(&item, &[], "elnovo", 4, Default::default());
        assert_eq!(result.unwrap(), Some(SearchResult { is_match: true, score: 2 }));
    }

    #[test]
    fn test_whole_item_must_be_string() {
        let err = aggregate(&acer(), &[], "acer", 4, Default::default()).unwrap_err();
        assert!(matches!(err, FuzzyError::InvalidKey { ref path } if path.is_empty()));
    }
}
