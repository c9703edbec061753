pub mod matchers;
pub mod options;
pub mod repo_record;
pub mod trending_parser;

pub use options::*;
pub use repo_record::*;
pub use trending_parser::TrendingParser;
