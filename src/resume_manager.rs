use std::fs;
use std::path::Path;

use log::{error, info, warn};
use serde::{Deserialize, Serialize};

use crate::config::ScrapeConfig;
use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Phase {
    ListingPending,
    ListingDone,
    DetailDone,
}

/// Contents of the progress marker file.
#[derive(Debug, Serialize, Deserialize)]
pub struct ProgressState {
    pub phase: Phase,
    pub records: usize,
    pub updated_at: String,
}

impl ProgressState {
    /// Current phase of the pipeline in `config.output_dir`.
    ///
    /// The phase inferred from which checkpoint files exist is a floor: a
    /// readable marker can only move it forward, and only while the initial
    /// checkpoint is on disk.
    pub fn detect(config: &ScrapeConfig) -> Phase {
        let initial_exists = config.initial_path().exists();
        let inferred = match (initial_exists, config.detailed_path().exists()) {
            (false, _) => Phase::ListingPending,
            (true, false) => Phase::ListingDone,
            (true, true) => Phase::DetailDone,
        };

        match Self::load(&config.progress_path()) {
            Some(state) if state.phase > Phase::ListingPending && !initial_exists => {
                warn!(
                    "Progress marker says {:?} but {:?} is missing. Scraping listings again.",
                    state.phase,
                    config.initial_path()
                );
                Phase::ListingPending
            }
            Some(state) => state.phase.max(inferred),
            None => inferred,
        }
    }

    fn load(path: &Path) -> Option<ProgressState> {
        if !path.exists() {
            return None;
        }
        let content = match fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) => {
                error!("Failed to read progress file: {}", e);
                return None;
            }
        };
        match serde_json::from_str::<ProgressState>(&content) {
            Ok(state) => {
                info!("Resumed previous session: {:?} ({} jobs).", state.phase, state.records);
                Some(state)
            }
            Err(e) => {
                error!("Failed to parse progress file: {}. Falling back to checkpoint files.", e);
                None
            }
        }
    }

    pub fn mark(config: &ScrapeConfig, phase: Phase, records: usize) -> Result<()> {
        let state = ProgressState {
            phase,
            records,
            updated_at: chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        };
        let json = serde_json::to_string_pretty(&state)?;
        fs::write(config.progress_path(), json)?;
        Ok(())
    }
}
