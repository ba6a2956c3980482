use log::{debug, info, warn};

use crate::browser::PageSource;
use crate::checkpoint;
use crate::config::ScrapeConfig;
use crate::error::Result;
use crate::extractor::{DetailExtractor, ListingExtractor};
use crate::record::{JobDetails, JobRecord};

/// Walks the search result pages and collects one record per job card.
pub struct ListingFetcher<'a, S: PageSource> {
    session: S,
    config: &'a ScrapeConfig,
    extractor: ListingExtractor,
}

impl<'a, S: PageSource> ListingFetcher<'a, S> {
    pub fn new(session: S, config: &'a ScrapeConfig) -> Result<Self> {
        Ok(ListingFetcher {
            session,
            config,
            extractor: ListingExtractor::new()?,
        })
    }

    /// Scrapes `pages` in order, writes the initial checkpoint and closes the
    /// browser session.
    pub fn run<I>(mut self, pages: I) -> Result<Vec<JobRecord>>
    where
        I: IntoIterator<Item = u32>,
    {
        let mut all_jobs = Vec::new();

        for page in pages {
            let url = self.config.search_url(page);
            info!("Scraping page {}...", page);
            let html = self.session.fetch(&url)?;

            let jobs = self.extractor.extract_page(&html, self.config);
            for (index, job) in jobs.iter().enumerate() {
                debug!("Card {}: {} @ {}", index + 1, job.job_title, job.company_name);
            }
            info!("Scraped {} jobs from page {}", jobs.len(), page);
            all_jobs.extend(jobs);
        }

        self.session.close()?;
        checkpoint::write_initial(&self.config.initial_path(), &all_jobs)?;
        Ok(all_jobs)
    }
}

/// Visits each record's detail page and fills in its `details`.
pub struct DetailFetcher<'a, S: PageSource> {
    session: S,
    config: &'a ScrapeConfig,
    extractor: DetailExtractor,
}

impl<'a, S: PageSource> DetailFetcher<'a, S> {
    pub fn new(session: S, config: &'a ScrapeConfig) -> Result<Self> {
        Ok(DetailFetcher {
            session,
            config,
            extractor: DetailExtractor::new()?,
        })
    }

    /// Enriches `records` in place (order preserved), writes the detailed
    /// checkpoint and closes the browser session.
    pub fn run(mut self, records: &mut [JobRecord]) -> Result<()> {
        let total = records.len();

        for (index, record) in records.iter_mut().enumerate() {
            info!(
                "Extracting detailed information for job {}/{}: {}",
                index + 1,
                total,
                record.job_title
            );

            let details = if record.has_url() {
                let html = self.session.fetch(&record.job_url)?;
                self.extractor.extract(&html)
            } else {
                warn!("Job {} has no URL. Skipping detail page.", index + 1);
                JobDetails::not_available()
            };
            record.details = Some(details);
        }

        self.session.close()?;
        checkpoint::write_detailed(&self.config.detailed_path(), records)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::NOT_AVAILABLE;
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::Rc;

    struct StaticPages {
        pages: HashMap<String, String>,
        visited: Rc<RefCell<Vec<String>>>,
    }

    impl PageSource for StaticPages {
        fn fetch(&mut self, url: &str) -> Result<String> {
            self.visited.borrow_mut().push(url.to_string());
            Ok(self.pages.get(url).cloned().unwrap_or_default())
        }

        fn close(self) -> Result<()> {
            Ok(())
        }
    }

    fn tmp_config(name: &str) -> ScrapeConfig {
        let mut dir = std::env::temp_dir();
        dir.push(format!("job_scraper_fetcher_{}", name));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        ScrapeConfig {
            output_dir: dir,
            settle_delay: std::time::Duration::ZERO,
            ..ScrapeConfig::default()
        }
    }

    fn record(url: &str) -> JobRecord {
        let na = || NOT_AVAILABLE.to_string();
        JobRecord {
            company_name: "Acme".into(),
            job_title: "Analyst".into(),
            job_url: url.into(),
            location: na(),
            employment_type: na(),
            seniority: na(),
            category: na(),
            skills_matched: na(),
            applications: na(),
            posting_date: na(),
            salary_range: na(),
            salary_type: na(),
            logo_url: na(),
            details: None,
        }
    }

    #[test]
    fn listing_visits_pages_in_order() {
        let config = tmp_config("listing");
        let visited = Rc::new(RefCell::new(Vec::new()));
        let session = StaticPages { pages: HashMap::new(), visited: visited.clone() };
        let jobs = ListingFetcher::new(session, &config).unwrap().run([4, 1]).unwrap();

        assert!(jobs.is_empty());
        assert_eq!(*visited.borrow(), vec![config.search_url(4), config.search_url(1)]);
        let written = checkpoint::read_initial(&config.initial_path()).unwrap();
        assert!(written.is_empty());
    }

    #[test]
    fn detail_skips_records_without_url() {
        let config = tmp_config("detail");
        let url = "https://www.mycareersfuture.gov.sg/job/7";
        let mut pages = HashMap::new();
        pages.insert(
            url.to_string(),
            r#"<span data-testid="job-details-info-job-post-id">MCF-7</span>"#.to_string(),
        );
        let visited = Rc::new(RefCell::new(Vec::new()));
        let session = StaticPages { pages, visited: visited.clone() };

        let mut records = vec![record(NOT_AVAILABLE), record(url)];
        DetailFetcher::new(session, &config).unwrap().run(&mut records).unwrap();

        assert_eq!(records[0].details, Some(JobDetails::not_available()));
        assert_eq!(records[1].details.as_ref().unwrap().job_id, "MCF-7");
        assert_eq!(records[1].job_url, url);
        assert_eq!(*visited.borrow(), vec![url.to_string()]);
        assert!(config.detailed_path().exists());
    }
}
