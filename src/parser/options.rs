use serde::{Deserialize, Serialize};
use std::fmt;

/// Date window of the trending listing, sent upstream as `since=<value>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DateRange {
    #[default]
    Daily,
    Weekly,
    Monthly,
}

impl DateRange {
    pub fn as_query(&self) -> &'static str {
        match self {
            DateRange::Daily => "daily",
            DateRange::Weekly => "weekly",
            DateRange::Monthly => "monthly",
        }
    }

    /// Wording GitHub uses after the star count for this window,
    /// e.g. "1,024 stars this week".
    pub fn star_phrase(&self) -> &'static str {
        match self {
            DateRange::Daily => "today",
            DateRange::Weekly => "this week",
            DateRange::Monthly => "this month",
        }
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_query())
    }
}

/// Which optional fields one run pulls out of each entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractOptions {
    pub date_range: DateRange,
    pub range_stars: bool,
    pub contributors: bool,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            date_range: DateRange::Daily,
            range_stars: true,
            contributors: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_star_phrases() {
        assert_eq!(DateRange::Daily.star_phrase(), "today");
        assert_eq!(DateRange::Weekly.star_phrase(), "this week");
        assert_eq!(DateRange::Monthly.star_phrase(), "this month");
    }

    #[test]
    fn test_date_range_serde() {
        let json = serde_json::to_string(&DateRange::Weekly).unwrap();
        assert_eq!(json, "\"weekly\"");
        let parsed: DateRange = serde_json::from_str("\"monthly\"").unwrap();
        assert_eq!(parsed, DateRange::Monthly);
    }
}
