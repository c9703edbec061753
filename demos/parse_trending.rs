use trending_scraper::parser::{DateRange, ExtractOptions};
use trending_scraper::storage::{CsvFormatter, OutputFormatter};
use trending_scraper::{TrendingParser, TrendingTable};

const SAMPLE_TRENDING_HTML: &str = r#"
<article class="Box-row">
    <h2 class="h3 lh-condensed">
        <a href="/tokio-rs/tokio">
            <span class="text-normal">tokio-rs /</span>
            tokio
        </a>
    </h2>
    <p class="col-9 color-fg-muted my-1 pr-4">
        A runtime for writing reliable asynchronous applications with Rust.
    </p>
    <div class="f6 color-fg-muted mt-2">
        <span class="d-inline-block ml-0 mr-3">
            <span class="repo-language-color"></span>
            <span itemprop="programmingLanguage">Rust</span>
        </span>
        <a href="/tokio-rs/tokio/stargazers" class="Link--muted d-inline-block mr-3">
            <svg class="octicon octicon-star"></svg>
            27,412
        </a>
        <a href="/tokio-rs/tokio/forks" class="Link--muted d-inline-block mr-3">
            <svg class="octicon octicon-repo-forked"></svg>
            2,501
        </a>
        <span class="d-inline-block mr-3">
            Built by
            <a class="d-inline-block" href="/carllerche"><img class="avatar mb-1" alt="@carllerche"></a>
            <a class="d-inline-block" href="/Darksonn"><img class="avatar mb-1" alt="@Darksonn"></a>
        </span>
        <span class="d-inline-block float-sm-right">
            <svg class="octicon octicon-star"></svg>
            412 stars this week
        </span>
    </div>
</article>

<article class="Box-row">
    <h2 class="h3 lh-condensed">
        <a href="/someone/dotfiles">someone / dotfiles</a>
    </h2>
    <div class="f6 color-fg-muted mt-2">
        <a href="/someone/dotfiles/stargazers">88</a>
        <a href="/someone/dotfiles/forks"><svg class="octicon octicon-repo-forked"></svg> 4</a>
        <span class="d-inline-block float-sm-right">30 stars this week</span>
    </div>
</article>
"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    println!("=== Trending Parser Example ===\n");

    let parser = TrendingParser::new()?;
    let options = ExtractOptions {
        date_range: DateRange::Weekly,
        ..ExtractOptions::default()
    };

    let records = parser.parse_trending_html(SAMPLE_TRENDING_HTML, &options)?;
    println!("✓ Parsed {} repositories from HTML", records.len());

    for (i, record) in records.iter().enumerate() {
        println!("\n--- Repository {} ---", i + 1);
        println!("Name: {}", record.full_name());
        println!("Language: {}", record.language.render());
        println!("Stars: {} (+{:?} this week)", record.stargazers, record.stars_in_range);
        if let Some(growth) = record.stars_growth_pct {
            println!("Growth: {:.2}%", growth);
        }
        if let Some(contributors) = &record.top_contributors {
            println!("Built by: {:?}", contributors);
        }
    }

    let table = TrendingTable::from_records(records, &options);
    println!("\n=== CSV ===\n");
    print!("{}", CsvFormatter.format_table(&table)?);

    println!("\n=== Table ===\n");
    print!("{}", table);

    Ok(())
}
