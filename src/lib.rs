pub mod browser;
pub mod checkpoint;
pub mod config;
pub mod delay_manager;
pub mod error;
pub mod extractor;
pub mod fetcher;
pub mod logger;
pub mod pipeline;
pub mod record;
pub mod resume_manager;

// Exporting types for convenience
pub use browser::{ChromeLauncher, PageSource, SessionLauncher};
pub use config::ScrapeConfig;
pub use error::{Result, ScrapeError};
pub use fetcher::{DetailFetcher, ListingFetcher};
pub use record::{JobDetails, JobRecord, NOT_AVAILABLE};
pub use resume_manager::{Phase, ProgressState};
