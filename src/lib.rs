//! Google web search without an API key: request the HTML results page, pull
//! out the organic results in the order Google listed them.
//!
//! ```no_run
//! # async fn run() -> Result<(), google_searcher::SearchFailedError> {
//! let searcher = google_searcher::Searcher::new();
//! let set = searcher.search("rust async runtime").await?;
//! for r in set.results() {
//!     println!("{} <{}> {:?}", r.title(), r.url(), r.date());
//! }
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod tools;

// --- Primary core exports ---
pub use crate::core::config;
pub use crate::core::error;
pub use crate::core::types;
pub use crate::core::types::*;
pub use crate::core::{SearchFailedError, SearchFailureKind, SearcherConfig};

pub use crate::tools::search;
pub use crate::tools::search::Searcher;
