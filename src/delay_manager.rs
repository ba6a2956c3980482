use std::thread;
use std::time::Duration;

use log::debug;

/// Blocks for the fixed settle delay after a navigation.
pub fn settle(delay: Duration) {
    if delay.is_zero() {
        return;
    }
    debug!("Waiting {:?} for the page to settle...", delay);
    thread::sleep(delay);
}
