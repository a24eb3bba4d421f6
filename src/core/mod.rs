pub mod config;
pub mod error;
pub mod types;

pub use config::SearcherConfig;
pub use error::{SearchFailedError, SearchFailureKind};
