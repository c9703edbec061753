use thiserror::Error;

pub type Result<T> = std::result::Result<T, ScrapingError>;

#[derive(Error, Debug)]
pub enum ScrapingError {
    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Failures of the single listing-page GET. None of them are retried.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("got status code {status} from {url}")]
    Status { status: u16, url: String },

    #[error("request to {url} failed: {message}")]
    Transport { url: String, message: String },

    #[error("invalid listing url '{0}'")]
    InvalidUrl(String),
}

/// A required element of one entry was missing or had the wrong shape.
/// `entry` is the 0-based position of the `Box-row` block in the document.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("entry {entry}: malformed heading '{text}', expected 'owner / name'")]
    MalformedHeading { entry: usize, text: String },

    #[error("entry {entry}: no stargazers link")]
    MissingStargazers { entry: usize },

    #[error("entry {entry}: no '{phrase}' star count")]
    MissingRangeStars { entry: usize, phrase: String },

    #[error("entry {entry}: no fork icon")]
    MissingForks { entry: usize },

    #[error("entry {entry}: {field} count '{text}' is not a number")]
    InvalidCount {
        entry: usize,
        field: &'static str,
        text: String,
    },

    #[error("invalid selector '{selector}': {message}")]
    InvalidSelector { selector: String, message: String },
}

// Conversion implementations for common error types
impl From<std::io::Error> for ScrapingError {
    fn from(err: std::io::Error) -> Self {
        ScrapingError::StorageError(err.to_string())
    }
}

impl From<serde_json::Error> for ScrapingError {
    fn from(err: serde_json::Error) -> Self {
        ScrapingError::StorageError(err.to_string())
    }
}

impl From<toml::de::Error> for ScrapingError {
    fn from(err: toml::de::Error) -> Self {
        ScrapingError::ConfigError(err.to_string())
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        FetchError::Transport {
            url: err.url().map(|u| u.to_string()).unwrap_or_default(),
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_reports_code() {
        let err = ScrapingError::from(FetchError::Status {
            status: 404,
            url: "https://github.com/trending/nope".to_string(),
        });
        let message = err.to_string();
        assert!(message.contains("404"));
        assert!(message.contains("https://github.com/trending/nope"));
    }

    #[test]
    fn test_parse_error_names_entry() {
        let err = ParseError::MalformedHeading {
            entry: 3,
            text: "just-a-name".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "entry 3: malformed heading 'just-a-name', expected 'owner / name'"
        );
    }

    #[test]
    fn test_io_error_maps_to_storage() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        assert!(matches!(ScrapingError::from(io), ScrapingError::StorageError(_)));
    }
}
