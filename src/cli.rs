use clap::Parser;
use std::path::PathBuf;

use crate::config::Config;
use crate::parser::DateRange;

/// Scrape the most trending GitHub repositories into a CSV file.
#[derive(Parser, Debug)]
#[command(name = "trending-scraper")]
#[command(version)]
pub struct Cli {
    #[arg(short = 'd', long = "date_range", value_enum, help = "The date range to search in [default: daily]")]
    pub date_range: Option<DateRange>,

    #[arg(short, long, help = "The programming language to filter by (empty for all)")]
    pub language: Option<String>,

    #[arg(short, long, help = "TOML config file; flags given here take precedence")]
    pub config: Option<PathBuf>,

    #[arg(short, long, help = "Where to write the table [default: repos.csv]")]
    pub output: Option<PathBuf>,

    #[arg(long, help = "Print the extracted columns as JSON before the table")]
    pub dump_json: bool,

    #[arg(long, help = "Do not extract the 'Built by' contributors")]
    pub no_contributors: bool,

    #[arg(long, help = "Do not extract stars gained in the date range (or growth)")]
    pub no_range_stars: bool,
}

impl Cli {
    /// Lays the flags that were actually given over `config`.
    pub fn apply(&self, config: &mut Config) {
        if let Some(date_range) = self.date_range {
            config.extraction.date_range = date_range;
        }
        if let Some(ref language) = self.language {
            config.extraction.language = language.trim().to_string();
        }
        if let Some(ref output) = self.output {
            config.output.path = output.clone();
        }
        if self.dump_json {
            config.output.dump_json = true;
        }
        if self.no_contributors {
            config.extraction.contributors = false;
        }
        if self.no_range_stars {
            config.extraction.range_stars = false;
        }
    }
}
