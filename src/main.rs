use std::error::Error;

use job_scraper_lib::{logger, pipeline, ChromeLauncher, ScrapeConfig};
use log::info;

fn main() -> Result<(), Box<dyn Error>> {
    logger::init();
    info!("Starting job data scraper...");

    let config = ScrapeConfig::default();
    let launcher = ChromeLauncher::new(config.headless, config.settle_delay);

    let records = pipeline::run(&launcher, &config)?;
    info!(
        "Done. {} jobs written to {:?}",
        records.len(),
        config.detailed_path()
    );
    Ok(())
}
