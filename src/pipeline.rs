use tracing::info;

use crate::config::Config;
use crate::error::Result;
use crate::fetch::PageFetcher;
use crate::parser::TrendingParser;
use crate::storage::{self, CsvFormatter, JsonFormatter, OutputFormatter, TrendingTable};

/// One run: fetch, extract, export, echo. Nothing is written unless the
/// fetch and every entry succeed.
pub async fn run(config: &Config, fetcher: &dyn PageFetcher) -> Result<TrendingTable> {
    let options = config.extract_options();
    info!(
        "Scraping trending repositories (range: {}, language: {})",
        options.date_range,
        if config.extraction.language.is_empty() { "any" } else { config.extraction.language.as_str() }
    );

    let markup = fetcher
        .fetch_listing(&config.extraction.language, options.date_range)
        .await?;

    let parser = TrendingParser::new()?;
    let records = parser.parse_trending_html(&markup, &options)?;
    let table = TrendingTable::from_records(records, &options);

    if config.output.dump_json {
        println!("{}", JsonFormatter.format_table(&table)?);
    }

    storage::write_table(&config.output.path, &table, &CsvFormatter)?;
    println!("{}", table);

    Ok(table)
}
