use serde_json::{Map, Value};
use std::fmt;

use crate::parser::{ExtractOptions, RepoRecord};

/// Cells wider than this are cut when the table is echoed to the console.
const MAX_CELL_WIDTH: usize = 40;

/// Output columns, in record field order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Owner,
    Name,
    Language,
    Description,
    Stargazers,
    StarsInRange,
    Forks,
    TopContributors,
    StarsGrowthPct,
}

impl Column {
    pub fn header(&self) -> &'static str {
        match self {
            Column::Owner => "owner",
            Column::Name => "name",
            Column::Language => "language",
            Column::Description => "description",
            Column::Stargazers => "stargazers",
            Column::StarsInRange => "stars_in_range",
            Column::Forks => "forks",
            Column::TopContributors => "top_contributors",
            Column::StarsGrowthPct => "stars_growth_pct",
        }
    }

    /// Columns present for a run with `options`.
    pub fn for_options(options: &ExtractOptions) -> Vec<Column> {
        let mut columns = vec![
            Column::Owner,
            Column::Name,
            Column::Language,
            Column::Description,
            Column::Stargazers,
        ];
        if options.range_stars {
            columns.push(Column::StarsInRange);
        }
        columns.push(Column::Forks);
        if options.contributors {
            columns.push(Column::TopContributors);
        }
        if options.range_stars {
            columns.push(Column::StarsGrowthPct);
        }
        columns
    }

    /// Text form used in files and on the console. Missing values are
    /// empty, except the optional text fields which render as `N/A`.
    pub fn render(&self, record: &RepoRecord) -> String {
        match self {
            Column::Owner => record.owner.clone(),
            Column::Name => record.name.clone(),
            Column::Language => record.language.render().to_string(),
            Column::Description => record.description.render().to_string(),
            Column::Stargazers => record.stargazers.to_string(),
            Column::StarsInRange => record.stars_in_range.map_or(String::new(), |v| v.to_string()),
            Column::Forks => record.forks.to_string(),
            Column::TopContributors => record
                .top_contributors
                .as_ref()
                .map_or(String::new(), |handles| handles.join(";")),
            Column::StarsGrowthPct => record.stars_growth_pct.map_or(String::new(), |v| v.to_string()),
        }
    }

    pub fn json_value(&self, record: &RepoRecord) -> Value {
        match self {
            Column::Owner => Value::from(record.owner.clone()),
            Column::Name => Value::from(record.name.clone()),
            Column::Language => Value::from(record.language.render()),
            Column::Description => Value::from(record.description.render()),
            Column::Stargazers => Value::from(record.stargazers),
            Column::StarsInRange => record.stars_in_range.map_or(Value::Null, Value::from),
            Column::Forks => Value::from(record.forks),
            Column::TopContributors => record
                .top_contributors
                .as_ref()
                .map_or(Value::Null, |handles| Value::from(handles.clone())),
            // serde_json maps non-finite floats to null as well
            Column::StarsGrowthPct => record.stars_growth_pct.map_or(Value::Null, Value::from),
        }
    }
}

/// All records of one run with the column set they were extracted for.
#[derive(Debug, Clone, PartialEq)]
pub struct TrendingTable {
    columns: Vec<Column>,
    records: Vec<RepoRecord>,
}

impl TrendingTable {
    pub fn from_records(records: Vec<RepoRecord>, options: &ExtractOptions) -> Self {
        Self {
            columns: Column::for_options(options),
            records,
        }
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn records(&self) -> &[RepoRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Rendered cells, one `Vec` per record.
    pub fn rows(&self) -> impl Iterator<Item = Vec<String>> + '_ {
        self.records
            .iter()
            .map(move |record| self.columns.iter().map(|c| c.render(record)).collect())
    }

    /// Column name -> values in row order.
    pub fn column_mapping(&self) -> Map<String, Value> {
        let mut mapping = Map::new();
        for column in &self.columns {
            let values = self.records.iter().map(|r| column.json_value(r)).collect();
            mapping.insert(column.header().to_string(), Value::Array(values));
        }
        mapping
    }
}

fn truncate(cell: &str) -> String {
    if cell.chars().count() <= MAX_CELL_WIDTH {
        cell.to_string()
    } else {
        let mut cut: String = cell.chars().take(MAX_CELL_WIDTH - 3).collect();
        cut.push_str("...");
        cut
    }
}

impl fmt::Display for TrendingTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut lines: Vec<Vec<String>> = Vec::with_capacity(self.records.len() + 1);

        let mut header = vec![String::new()];
        header.extend(self.columns.iter().map(|c| c.header().to_string()));
        lines.push(header);

        for (index, row) in self.rows().enumerate() {
            let mut line = vec![index.to_string()];
            line.extend(row.iter().map(|cell| truncate(cell)));
            lines.push(line);
        }

        let widths: Vec<usize> = (0..=self.columns.len())
            .map(|i| lines.iter().map(|l| l[i].chars().count()).max().unwrap_or(0))
            .collect();

        for line in &lines {
            let padded: Vec<String> = line
                .iter()
                .zip(&widths)
                .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
                .collect();
            writeln!(f, "{}", padded.join("  ").trim_end())?;
        }

        if self.records.is_empty() {
            writeln!(f, "(no repositories)")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::{DateRange, TextField};

    fn create_test_record(owner: &str, stargazers: u64, gained: u64) -> RepoRecord {
        RepoRecord::new(
            owner.to_string(),
            "tool".to_string(),
            TextField::Absent,
            TextField::Present("x".repeat(60)),
            stargazers,
            Some(gained),
            3,
            Some(vec!["alice".to_string(), "bob".to_string()]),
        )
    }

    #[test]
    fn test_columns_for_options() {
        let headers: Vec<&str> = Column::for_options(&ExtractOptions::default())
            .iter()
            .map(|c| c.header())
            .collect();
        assert_eq!(
            headers,
            vec![
                "owner",
                "name",
                "language",
                "description",
                "stargazers",
                "stars_in_range",
                "forks",
                "top_contributors",
                "stars_growth_pct"
            ]
        );

        let minimal = ExtractOptions {
            date_range: DateRange::Daily,
            range_stars: false,
            contributors: false,
        };
        assert_eq!(Column::for_options(&minimal).len(), 6);
    }

    #[test]
    fn test_render_cells() {
        let record = create_test_record("acme", 200, 50);
        assert_eq!(Column::Language.render(&record), "N/A");
        assert_eq!(Column::TopContributors.render(&record), "alice;bob");
        assert_eq!(Column::StarsGrowthPct.render(&record), "25");

        let no_stars = create_test_record("acme", 0, 0);
        assert_eq!(Column::StarsGrowthPct.render(&no_stars), "");
        assert_eq!(Column::StarsGrowthPct.json_value(&no_stars), Value::Null);
    }

    #[test]
    fn test_column_mapping() {
        let table = TrendingTable::from_records(
            vec![create_test_record("a", 200, 50), create_test_record("b", 0, 1)],
            &ExtractOptions::default(),
        );
        let mapping = table.column_mapping();

        assert_eq!(mapping["owner"], serde_json::json!(["a", "b"]));
        assert_eq!(mapping["language"], serde_json::json!(["N/A", "N/A"]));
        assert_eq!(mapping["stars_growth_pct"], serde_json::json!([25.0, null]));
        assert_eq!(mapping["top_contributors"][0], serde_json::json!(["alice", "bob"]));
    }

    #[test]
    fn test_display_truncates_and_indexes() {
        let table = TrendingTable::from_records(
            vec![create_test_record("acme", 10, 1)],
            &ExtractOptions::default(),
        );
        let text = table.to_string();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 2);
        assert!(lines[0].trim_start().starts_with("owner"));
        assert!(lines[1].starts_with("0"));
        assert!(lines[1].contains(&format!("{}...", "x".repeat(37))));
        assert!(!lines[1].contains(&"x".repeat(41)));
    }

    #[test]
    fn test_display_empty_table() {
        let table = TrendingTable::from_records(vec![], &ExtractOptions::default());
        assert!(table.is_empty());
        assert!(table.to_string().contains("(no repositories)"));
    }
}
