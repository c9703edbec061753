use crate::error::ParseError;
use crate::parser::matchers;
use crate::parser::{ExtractOptions, RepoRecord, TextField};
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, info};

/// html parser for the github trending listing
pub struct TrendingParser {
    // CSS selectors for the parts of one Box-row entry
    entry_selector: Selector,
    heading_selector: Selector,
    language_selector: Selector,
    description_selector: Selector,
    stargazers_selector: Selector,
    forks_selector: Selector,
    link_selector: Selector,
}

fn selector(css: &str) -> Result<Selector, ParseError> {
    Selector::parse(css).map_err(|e| ParseError::InvalidSelector {
        selector: css.to_string(),
        message: format!("{:?}", e),
    })
}

impl TrendingParser {
    // set up a parser with css selectors ready
    pub fn new() -> Result<Self, ParseError> {
        Ok(Self {
            entry_selector: selector("article.Box-row")?,
            heading_selector: selector("h1.h3.lh-condensed, h2.h3.lh-condensed")?,
            language_selector: selector("span[itemprop='programmingLanguage']")?,
            description_selector: selector("p")?,
            stargazers_selector: selector("a[href$='stargazers']")?,
            forks_selector: selector("svg.octicon-repo-forked")?,
            link_selector: selector("a[href]")?,
        })
    }

    /// Pulls one record per entry, in document order. The first entry that
    /// does not fit the expected shape aborts the whole parse.
    pub fn parse_trending_html(
        &self,
        html: &str,
        options: &ExtractOptions,
    ) -> Result<Vec<RepoRecord>, ParseError> {
        let document = Html::parse_document(html);
        let mut records = Vec::new();

        for (index, entry) in document.select(&self.entry_selector).enumerate() {
            let record = self.parse_single_entry(&entry, index, options)?;
            debug!("Parsed entry {}: {}", index, record.full_name());
            records.push(record);
        }

        info!("Parsed {} repositories from HTML", records.len());
        Ok(records)
    }

    fn parse_single_entry(
        &self,
        entry: &ElementRef,
        index: usize,
        options: &ExtractOptions,
    ) -> Result<RepoRecord, ParseError> {
        let (owner, name) = self.extract_names(entry, index)?;
        let language = self.extract_language(entry);
        let description = self.extract_description(entry);
        let stargazers = self.extract_stargazers(entry, index)?;
        let forks = self.extract_forks(entry, index)?;

        let stars_in_range = if options.range_stars {
            Some(self.extract_range_stars(entry, index, options)?)
        } else {
            None
        };

        let top_contributors = if options.contributors {
            Some(self.extract_contributors(entry))
        } else {
            None
        };

        Ok(RepoRecord::new(
            owner,
            name,
            language,
            description,
            stargazers,
            stars_in_range,
            forks,
            top_contributors,
        ))
    }

    fn extract_names(&self, entry: &ElementRef, index: usize) -> Result<(String, String), ParseError> {
        let text = entry
            .select(&self.heading_selector)
            .next()
            .map(|heading| heading.text().collect::<String>())
            .unwrap_or_default();

        matchers::split_heading(&text).ok_or_else(|| ParseError::MalformedHeading {
            entry: index,
            text: text.split_whitespace().collect::<Vec<_>>().join(" "),
        })
    }

    fn extract_language(&self, entry: &ElementRef) -> TextField {
        entry
            .select(&self.language_selector)
            .next()
            .map(|span| TextField::from_trimmed(&span.text().collect::<String>()))
            .unwrap_or(TextField::Absent)
    }

    fn extract_description(&self, entry: &ElementRef) -> TextField {
        entry
            .select(&self.description_selector)
            .next()
            .map(|p| TextField::from_trimmed(&p.text().collect::<String>()))
            .unwrap_or(TextField::Absent)
    }

    fn extract_stargazers(&self, entry: &ElementRef, index: usize) -> Result<u64, ParseError> {
        let link = entry
            .select(&self.stargazers_selector)
            .next()
            .ok_or(ParseError::MissingStargazers { entry: index })?;

        parse_entry_count(&link.text().collect::<String>(), "stargazers", index)
    }

    // the count sits next to the icon, so read the icon's parent
    fn extract_forks(&self, entry: &ElementRef, index: usize) -> Result<u64, ParseError> {
        let container = entry
            .select(&self.forks_selector)
            .next()
            .and_then(|icon| icon.parent())
            .and_then(ElementRef::wrap)
            .ok_or(ParseError::MissingForks { entry: index })?;

        parse_entry_count(&container.text().collect::<String>(), "forks", index)
    }

    fn extract_range_stars(
        &self,
        entry: &ElementRef,
        index: usize,
        options: &ExtractOptions,
    ) -> Result<u64, ParseError> {
        entry
            .text()
            .find_map(|text| matchers::range_stars(text, options.date_range))
            .ok_or_else(|| ParseError::MissingRangeStars {
                entry: index,
                phrase: format!("stars {}", options.date_range.star_phrase()),
            })
    }

    // no "Built by" marker means nobody is credited, not a broken entry
    fn extract_contributors(&self, entry: &ElementRef) -> Vec<String> {
        let marker_parent = entry
            .descendants()
            .filter(|node| {
                node.value()
                    .as_text()
                    .map_or(false, |text| matchers::is_built_by_marker(text))
            })
            .find_map(|node| node.parent().and_then(ElementRef::wrap));

        match marker_parent {
            Some(container) => container
                .select(&self.link_selector)
                .filter_map(|link| link.value().attr("href"))
                .filter_map(matchers::handle_from_href)
                .collect(),
            None => {
                debug!("No '{}' marker in entry", matchers::BUILT_BY_MARKER);
                Vec::new()
            }
        }
    }
}

fn parse_entry_count(text: &str, field: &'static str, index: usize) -> Result<u64, ParseError> {
    matchers::parse_count(text).ok_or_else(|| ParseError::InvalidCount {
        entry: index,
        field,
        text: text.trim().to_string(),
    })
}

impl Default for TrendingParser {
    fn default() -> Self {
        Self::new().expect("Failed to create default TrendingParser")
    }
}
