//! Engine configuration

use serde::{Deserialize, Serialize};

use crate::aggregate::AggregationPolicy;
use crate::error::{FuzzyError, FuzzyResult};
use crate::fields::KeyPath;
use crate::score::SearchOptions;

/// Plain-data configuration of a [`Fuzzy`](super::Fuzzy) engine.
///
/// Hooks (scorer, resolver, comparator) are not part of it; they are set on
/// the engine directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FuzzyConfig {
    /// Maximum edit distance accepted as a match
    pub threshold: usize,
    pub case_sensitive: bool,
    /// Sort results by score (ascending)
    pub should_sort: bool,
    /// Fields to search. Empty means the items themselves are strings.
    pub keys: Vec<KeyPath>,
    /// When set, results are this field of each matched item
    pub id: Option<KeyPath>,
    pub aggregation: AggregationPolicy,
    /// Collections at least this large are scored in parallel by `par_search`
    pub parallel_threshold: usize,
}

impl Default for FuzzyConfig {
    fn default() -> Self {
        let options = SearchOptions::default();
        Self {
            threshold: options.threshold,
            case_sensitive: options.case_sensitive,
            should_sort: true,
            keys: Vec::new(),
            id: None,
            aggregation: AggregationPolicy::default(),
            parallel_threshold: 1000,
        }
    }
}

impl FuzzyConfig {
    /// Parse a JSON document; missing fields take their defaults
    pub fn from_json(json: &str) -> FuzzyResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> FuzzyResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject configurations no search could succeed with
    pub fn validate(&self) -> FuzzyResult<()> {
        if let Some(id) = &self.id {
            if id.is_root() {
                return Err(FuzzyError::Config("identifier path must not be empty".into()));
            }
        }
        if self.keys.iter().any(KeyPath::is_root) {
            return Err(FuzzyError::Config("key paths must not be empty".into()));
        }
        if self.parallel_threshold == 0 {
            return Err(FuzzyError::Config("parallel_threshold must be at least 1".into()));
        }
        Ok(())
    }

    pub fn options(&self) -> SearchOptions {
        SearchOptions {
            threshold: self.threshold,
            case_sensitive: self.case_sensitive,
        }
    }
}
