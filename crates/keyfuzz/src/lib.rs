//! keyfuzz
//!
//! Edit-distance fuzzy search over collections of arbitrary items. Each item
//! is matched on one or more dotted key paths (`"CPU.Manufacturer"`), scored
//! with Levenshtein distance, filtered by a threshold and ranked closest
//! first.
//!
//! # Features
//!
//! - `parallel` - `Fuzzy::par_search` scores large collections via rayon
//! - `logging` - `logging::init` installs a RUST_LOG-aware subscriber
//!
//! # Example
//!
//! ```rust
//! use keyfuzz::{FieldValue, Fuzzy, Hit};
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
//! fuzzy.set_id("CPU.Series");
//!
//! let hits = fuzzy.search("Inetl").unwrap();
//! assert_eq!(hits, vec![Hit::Id(FieldValue::from("i5-8250U"))]);
//! ```

pub mod aggregate;
pub mod engine;
pub mod error;
pub mod fields;
pub mod score;

#[cfg(feature = "logging")]
pub mod logging;

// Re-export main types at crate root
pub use aggregate::{AggregationPolicy, MatchAggregator};
pub use engine::{ByScore, Comparator, Fuzzy, FuzzyConfig, Hit, ResultWrapper};
pub use error::{FuzzyError, FuzzyResult};
pub use fields::{Field, FieldResolver, FieldValue, Fields, KeyPath, StructuralResolver};
pub use score::{EditMetric, Levenshtein, Scorer, SearchOptions, SearchResult, StrsimScorer};
