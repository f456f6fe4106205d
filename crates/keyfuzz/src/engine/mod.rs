//! Search orchestration
//!
//! [`Fuzzy`] scans a borrowed collection linearly, keeps one representative
//! result per matching item, stable-sorts by score and projects either the
//! items or an identifier field of each.
//!
//! # Example
//!
//! ```rust
//! use keyfuzz::{Fuzzy, Hit};
//! use serde_json::json;
//!
//! let laptops = vec![
//!     json!({"Manufacturer": "Acer", "CPU": {"Manufacturer": "Intel", "Series": "i5-8250U"}}),
//!     json!({"Manufacturer": "Lenovo", "CPU": {"Manufacturer": "AMD", "Series": "Ryzen 5"}}),
//! ];
//!
//! let mut fuzzy = Fuzzy::new();
//! fuzzy.set(&laptops);
//! fuzzy.set_keys(["Manufacturer", "CPU.Manufacturer"]);
//!
//! let hits = fuzzy.search("Inetl").unwrap();
//! assert_eq!(hits, vec![Hit::Item(&laptops[0])]);
//! ```

mod comparator;
mod config;

pub use comparator::{ByScore, Comparator};
pub use config::FuzzyConfig;

use tracing::debug;

use crate::aggregate::{AggregationPolicy, MatchAggregator};
use crate::error::FuzzyResult;
use crate::fields::{FieldResolver, FieldValue, Fields, KeyPath, StructuralResolver};
use crate::score::{Levenshtein, Scorer, SearchOptions, SearchResult};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// A matching item with its representative result
#[derive(Debug)]
pub struct ResultWrapper<'a, T> {
    pub result: SearchResult,
    pub item: &'a T,
}

impl<T> Clone for ResultWrapper<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ResultWrapper<'_, T> {}

/// One element of the search output
#[derive(Debug, PartialEq)]
pub enum Hit<'a, T> {
    /// The matched item itself
    Item(&'a T),
    /// The identifier field of the matched item
    Id(FieldValue),
}

impl<'a, T> Hit<'a, T> {
    pub fn item(&self) -> Option<&'a T> {
        match self {
            Hit::Item(item) => Some(*item),
            Hit::Id(_) => None,
        }
    }

    pub fn id(&self) -> Option<&FieldValue> {
        match self {
            Hit::Id(id) => Some(id),
            Hit::Item(_) => None,
        }
    }
}

/// Fuzzy search engine over a borrowed collection of `T`
pub struct Fuzzy<'a, T> {
    items: &'a [T],
    config: FuzzyConfig,
    scorer: Box<dyn Scorer>,
    resolver: Box<dyn FieldResolver<T>>,
    comparator: Box<dyn Comparator<T>>,
}

impl<T: Fields> Default for Fuzzy<'_, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Fields> Fuzzy<'_, T> {
    /// Engine with default configuration and the structural resolver
    pub fn new() -> Self {
        Self::with_resolver(StructuralResolver)
    }

    /// Engine with the structural resolver and a validated configuration
    pub fn from_config(config: FuzzyConfig) -> FuzzyResult<Self> {
        let mut fuzzy = Self::new();
        fuzzy.apply_config(config)?;
        Ok(fuzzy)
    }
}

impl<'a, T> Fuzzy<'a, T> {
    /// Engine for item types that do not implement [`Fields`]
    pub fn with_resolver(resolver: impl FieldResolver<T> + 'static) -> Self {
        Self {
            items: &[],
            config: FuzzyConfig::default(),
            scorer: Box::new(Levenshtein),
            resolver: Box::new(resolver),
            comparator: Box::new(ByScore),
        }
    }

    /// Set the collection to search. Returns the new collection.
    pub fn set(&mut self, items: &'a [T]) -> &'a [T] {
        self.items = items;
        self.items
    }

    /// The configured collection
    pub fn items(&self) -> &'a [T] {
        self.items
    }

    /// Current configuration
    pub fn config(&self) -> &FuzzyConfig {
        &self.config
    }

    /// Replace the whole configuration after validating it
    pub fn apply_config(&mut self, config: FuzzyConfig) -> FuzzyResult<()> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    /// Fields to search; supports nested fields via dot notation
    pub fn set_keys<K: Into<KeyPath>>(&mut self, keys: impl IntoIterator<Item = K>) {
        self.config.keys = keys.into_iter().map(Into::into).collect();
    }

    /// Return this field of each matched item instead of the item.
    /// An empty path clears the identifier.
    pub fn set_id(&mut self, id: impl Into<KeyPath>) {
        let id = id.into();
        self.config.id = (!id.is_root()).then_some(id);
    }

    /// Return the matched items themselves
    pub fn clear_id(&mut self) {
        self.config.id = None;
    }

    /// Compare pattern and candidates without case folding
    pub fn set_case_sensitive(&mut self, case_sensitive: bool) {
        self.config.case_sensitive = case_sensitive;
    }

    /// Sort results with the comparator (stable)
    pub fn set_should_sort(&mut self, should_sort: bool) {
        self.config.should_sort = should_sort;
    }

    /// Maximum score accepted as a match
    pub fn set_threshold(&mut self, threshold: usize) {
        self.config.threshold = threshold;
    }

    /// How per-key scores reduce to one score per item
    pub fn set_aggregation(&mut self, policy: AggregationPolicy) {
        self.config.aggregation = policy;
    }

    /// Replace the string scorer
    pub fn set_scorer(&mut self, scorer: impl Scorer + 'static) {
        self.scorer = Box::new(scorer);
    }

    /// Replace the field resolver
    pub fn set_resolver(&mut self, resolver: impl FieldResolver<T> + 'static) {
        self.resolver = Box::new(resolver);
    }

    /// Replace the result ordering
    pub fn set_comparator(&mut self, comparator: impl Comparator<T> + 'static) {
        self.comparator = Box::new(comparator);
    }

    /// Search the configured collection
    pub fn search(&self, pattern: &str) -> FuzzyResult<Vec<Hit<'a, T>>> {
        self.search_in(pattern, self.items)
    }

    /// Search any collection with this engine's configuration
    pub fn search_in<'b>(&self, pattern: &str, items: &'b [T]) -> FuzzyResult<Vec<Hit<'b, T>>> {
        let matches = self.matches_in(pattern, items)?;
        let hits = self.project(matches)?;
        debug!(
            pattern_len = pattern.chars().count(),
            items = items.len(),
            hits = hits.len(),
            "search complete"
        );
        Ok(hits)
    }

    /// Scored matches of the configured collection, sorted but not projected
    pub fn matches(&self, pattern: &str) -> FuzzyResult<Vec<ResultWrapper<'a, T>>> {
        self.matches_in(pattern, self.items)
    }

    /// Scored matches of any collection
    pub fn matches_in<'b>(
        &self,
        pattern: &str,
        items: &'b [T],
    ) -> FuzzyResult<Vec<ResultWrapper<'b, T>>> {
        let options = self.config.options();
        let pattern = options.fold(pattern);
        let aggregator = self.aggregator(&options);

        let mut results = Vec::new();
        for item in items {
            if let Some(result) = aggregator.best_match(item, &self.config.keys, &pattern)? {
                results.push(ResultWrapper { result, item });
            }
        }

        self.sort(&mut results);
        Ok(results)
    }

    fn aggregator<'s>(&'s self, options: &'s SearchOptions) -> MatchAggregator<'s, T> {
        MatchAggregator {
            scorer: &*self.scorer,
            resolver: &*self.resolver,
            options,
            policy: self.config.aggregation,
        }
    }

    fn sort(&self, results: &mut [ResultWrapper<'_, T>]) {
        if self.config.should_sort {
            // stable: equal scores keep collection order
            results.sort_by(|a, b| self.comparator.compare(a, b));
        }
    }

    fn project<'b>(&self, results: Vec<ResultWrapper<'b, T>>) -> FuzzyResult<Vec<Hit<'b, T>>> {
        let Some(id) = &self.config.id else {
            return Ok(results.into_iter().map(|r| Hit::Item(r.item)).collect());
        };
        results
            .into_iter()
            .map(|r| self.resolver.resolve(r.item, id).map(Hit::Id))
            .collect()
    }
}

#[cfg(feature = "parallel")]
impl<'a, T: Sync> Fuzzy<'a, T> {
    /// Like [`Fuzzy::search`], scoring items on the rayon pool when the
    /// collection reaches `parallel_threshold`.
    ///
    /// Output order and the reported error are the same as the sequential scan.
    pub fn par_search(&self, pattern: &str) -> FuzzyResult<Vec<Hit<'a, T>>> {
        let items = self.items;
        if items.len() < self.config.parallel_threshold {
            return self.search_in(pattern, items);
        }

        let options = self.config.options();
        let folded = options.fold(pattern);
        let aggregator = self.aggregator(&options);
        let keys = &self.config.keys;

        let outcomes: Vec<FuzzyResult<Option<SearchResult>>> = items
            .par_iter()
            .map(|item| aggregator.best_match(item, keys, &folded))
            .collect();

        let mut results = Vec::new();
        for (item, outcome) in items.iter().zip(outcomes) {
            if let Some(result) = outcome? {
                results.push(ResultWrapper { result, item });
            }
        }

        self.sort(&mut results);
        let hits = self.project(results)?;
        debug!(
            pattern_len = pattern.chars().count(),
            items = items.len(),
            hits = hits.len(),
            "parallel search complete"
        );
        Ok(hits)
    }
}
