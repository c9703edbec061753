pub mod cli;
pub mod config;
pub mod error;
pub mod fetch;
pub mod parser;
pub mod pipeline;
pub mod storage;

pub use config::Config;
pub use error::{FetchError, ParseError, Result, ScrapingError};
pub use fetch::{HttpFetcher, PageFetcher};
pub use parser::{RepoRecord, TrendingParser};
pub use storage::TrendingTable;
