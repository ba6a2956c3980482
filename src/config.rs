use std::ops::Range;
use std::path::PathBuf;
use std::time::Duration;

use crate::record::NOT_AVAILABLE;

pub const SITE_ORIGIN: &str = "https://www.mycareersfuture.gov.sg";
pub const SEARCH_QUERY: &str = "Data Science";
pub const SORT_BY: &str = "new_posting_date";
pub const DEFAULT_PAGES: Range<u32> = 0..17;
pub const SETTLE_DELAY: Duration = Duration::from_secs(2);

pub const INITIAL_FILE: &str = "job_data_initial.csv";
pub const DETAILED_FILE: &str = "job_data_detailed.csv";
pub const PROGRESS_FILE: &str = "progress.json";

/// Everything the pipeline needs to know about the target site and where
/// checkpoints live. The binary runs with `ScrapeConfig::default()`.
#[derive(Debug, Clone)]
pub struct ScrapeConfig {
    pub origin: String,
    pub search_query: String,
    pub sort_by: String,
    pub pages: Range<u32>,
    pub settle_delay: Duration,
    pub headless: bool,
    pub output_dir: PathBuf,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        ScrapeConfig {
            origin: SITE_ORIGIN.to_string(),
            search_query: SEARCH_QUERY.to_string(),
            sort_by: SORT_BY.to_string(),
            pages: DEFAULT_PAGES,
            settle_delay: SETTLE_DELAY,
            headless: true,
            output_dir: PathBuf::from("."),
        }
    }
}

impl ScrapeConfig {
    pub fn search_url(&self, page: u32) -> String {
        format!(
            "{}/search?search={}&sortBy={}&page={}",
            self.origin,
            urlencoding::encode(&self.search_query),
            self.sort_by,
            page
        )
    }

    /// Absolute detail URL for a card's relative `href`. Missing or empty
    /// hrefs map to the sentinel.
    pub fn job_url(&self, href: Option<&str>) -> String {
        match href {
            Some(path) if !path.is_empty() => format!("{}{}", self.origin, path),
            _ => NOT_AVAILABLE.to_string(),
        }
    }

    pub fn initial_path(&self) -> PathBuf {
        self.output_dir.join(INITIAL_FILE)
    }

    pub fn detailed_path(&self) -> PathBuf {
        self.output_dir.join(DETAILED_FILE)
    }

    pub fn progress_path(&self) -> PathBuf {
        self.output_dir.join(PROGRESS_FILE)
    }
}
