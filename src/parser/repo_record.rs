use serde::{Deserialize, Serialize};

/// Rendered in place of a missing optional text field.
pub const NOT_AVAILABLE: &str = "N/A";

/// An optional text field of an entry. Kept explicit until export,
/// where `Absent` becomes [`NOT_AVAILABLE`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum TextField {
    Present(String),
    Absent,
}

impl TextField {
    pub fn from_trimmed(text: &str) -> Self {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            TextField::Absent
        } else {
            TextField::Present(trimmed.to_string())
        }
    }

    pub fn render(&self) -> &str {
        match self {
            TextField::Present(text) => text,
            TextField::Absent => NOT_AVAILABLE,
        }
    }

    pub fn is_present(&self) -> bool {
        matches!(self, TextField::Present(_))
    }
}

/// One trending repository, built once per `Box-row` entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RepoRecord {
    pub owner: String,
    pub name: String,
    pub language: TextField,
    pub description: TextField,
    pub stargazers: u64,
    pub stars_in_range: Option<u64>,
    pub forks: u64,
    pub top_contributors: Option<Vec<String>>,
    pub stars_growth_pct: Option<f64>,
}

impl RepoRecord {
    // growth is derived here so a record never carries a stale percentage
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        owner: String,
        name: String,
        language: TextField,
        description: TextField,
        stargazers: u64,
        stars_in_range: Option<u64>,
        forks: u64,
        top_contributors: Option<Vec<String>>,
    ) -> Self {
        let stars_growth_pct = stars_in_range.and_then(|gained| growth_pct(stargazers, gained));

        Self {
            owner,
            name,
            language,
            description,
            stargazers,
            stars_in_range,
            forks,
            top_contributors,
            stars_growth_pct,
        }
    }

    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.name)
    }
}

/// Share of the total stars gained inside the window, in percent.
/// `None` when the repository has no stars at all.
pub fn growth_pct(stargazers: u64, stars_in_range: u64) -> Option<f64> {
    if stargazers == 0 {
        return None;
    }
    Some(stars_in_range as f64 / stargazers as f64 * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_record(stargazers: u64, stars_in_range: Option<u64>) -> RepoRecord {
        RepoRecord::new(
            "rust-lang".to_string(),
            "rust".to_string(),
            TextField::Present("Rust".to_string()),
            TextField::Absent,
            stargazers,
            stars_in_range,
            12,
            Some(vec!["alice".to_string()]),
        )
    }

    #[test]
    fn test_growth_pct() {
        assert_eq!(growth_pct(200, 50), Some(25.0));
        assert_eq!(growth_pct(1, 0), Some(0.0));
    }

    #[test]
    fn test_growth_pct_zero_stargazers() {
        assert_eq!(growth_pct(0, 0), None);
        assert_eq!(growth_pct(0, 7), None);
    }

    #[test]
    fn test_record_derives_growth() {
        let record = create_test_record(200, Some(50));
        assert_eq!(record.stars_growth_pct, Some(25.0));
        assert_eq!(record.full_name(), "rust-lang/rust");

        let without_range = create_test_record(200, None);
        assert_eq!(without_range.stars_growth_pct, None);

        let no_stars = create_test_record(0, Some(3));
        assert_eq!(no_stars.stars_growth_pct, None);
    }

    #[test]
    fn test_text_field_render() {
        assert_eq!(TextField::Present("Go".to_string()).render(), "Go");
        assert_eq!(TextField::Absent.render(), "N/A");
        assert_eq!(TextField::from_trimmed("  \n "), TextField::Absent);
        assert_eq!(
            TextField::from_trimmed("  A fast tool \n"),
            TextField::Present("A fast tool".to_string())
        );
    }

    #[test]
    fn test_serialization() {
        let record = create_test_record(10, Some(1));
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["language"], "Rust");
        assert!(json["description"].is_null());
        let deserialized: RepoRecord = serde_json::from_value(json).unwrap();
        assert_eq!(record, deserialized);
    }
}
