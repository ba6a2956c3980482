use std::sync::Arc;
use std::time::Duration;

use headless_chrome::{Browser, LaunchOptions, Tab};
use log::{debug, info};

use crate::delay_manager;
use crate::error::{Result, ScrapeError};

/// A single page instance that can be pointed at a URL.
pub trait PageSource {
    /// Navigates to `url`, waits the settle delay and returns the rendered HTML.
    fn fetch(&mut self, url: &str) -> Result<String>;

    fn close(self) -> Result<()>
    where
        Self: Sized;
}

/// Opens one browser session per fetch phase.
pub trait SessionLauncher {
    type Session: PageSource;

    fn launch(&self) -> Result<Self::Session>;
}

pub struct ChromeLauncher {
    pub headless: bool,
    pub settle_delay: Duration,
}

impl ChromeLauncher {
    pub fn new(headless: bool, settle_delay: Duration) -> Self {
        ChromeLauncher { headless, settle_delay }
    }
}

impl SessionLauncher for ChromeLauncher {
    type Session = ChromeSession;

    fn launch(&self) -> Result<ChromeSession> {
        let options = LaunchOptions::default_builder()
            .headless(self.headless)
            .build()
            .map_err(ScrapeError::browser)?;
        let browser = Browser::new(options).map_err(ScrapeError::browser)?;
        let tab = browser.wait_for_initial_tab().map_err(ScrapeError::browser)?;
        info!("Browser session started (headless: {}).", self.headless);

        Ok(ChromeSession {
            browser,
            tab,
            settle_delay: self.settle_delay,
        })
    }
}

/// Chromium instance with the one tab reused for every navigation.
pub struct ChromeSession {
    // Dropping the browser kills the Chromium process.
    browser: Browser,
    tab: Arc<Tab>,
    settle_delay: Duration,
}

impl PageSource for ChromeSession {
    fn fetch(&mut self, url: &str) -> Result<String> {
        debug!("Navigating to {}", url);
        self.tab.navigate_to(url).map_err(ScrapeError::browser)?;
        delay_manager::settle(self.settle_delay);
        self.tab.get_content().map_err(ScrapeError::browser)
    }

    fn close(self) -> Result<()> {
        self.tab.close(true).map_err(ScrapeError::browser)?;
        drop(self.browser);
        info!("Browser session closed.");
        Ok(())
    }
}
