use log::info;

use crate::browser::SessionLauncher;
use crate::checkpoint;
use crate::config::ScrapeConfig;
use crate::error::Result;
use crate::fetcher::{DetailFetcher, ListingFetcher};
use crate::record::JobRecord;
use crate::resume_manager::{Phase, ProgressState};

/// Runs the listing phase unless a listing checkpoint already exists, then
/// always runs the detail phase. Each phase gets its own browser session.
pub fn run<L: SessionLauncher>(launcher: &L, config: &ScrapeConfig) -> Result<Vec<JobRecord>> {
    let phase = ProgressState::detect(config);

    let mut records = if phase >= Phase::ListingDone {
        info!("{:?} found. Using existing data.", config.initial_path());
        checkpoint::read_initial(&config.initial_path())?
    } else {
        info!("{:?} not found. Scraping job listings...", config.initial_path());
        let session = launcher.launch()?;
        let records = ListingFetcher::new(session, config)?.run(config.pages.clone())?;
        ProgressState::mark(config, Phase::ListingDone, records.len())?;
        records
    };

    let session = launcher.launch()?;
    DetailFetcher::new(session, config)?.run(&mut records)?;
    ProgressState::mark(config, Phase::DetailDone, records.len())?;

    info!("Scraping completed. {} jobs enriched.", records.len());
    Ok(records)
}
