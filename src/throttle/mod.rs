//! Fixed-delay pacing between successive API calls
//!
//! The search collector issues one request per result page. To stay polite
//! toward the service it sleeps for a fixed interval after every page fetch.
//! There is no adaptive component: the delay is configured once and applied
//! uniformly.

use std::time::Duration;

/// Default pause between paginated API calls, in milliseconds
pub const DEFAULT_PAGE_DELAY_MS: u64 = 300;

/// Applies a fixed pause between consecutive requests
///
/// # Example
///
/// ```
/// use yelp_scout::Pacer;
///
/// # async fn demo() {
/// let pacer = Pacer::from_millis(300);
/// pacer.pause().await; // sleeps 300ms
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pacer {
    delay: Duration,
}

impl Pacer {
    /// Creates a pacer with the given delay between calls
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// Creates a pacer from a delay in milliseconds
    pub fn from_millis(millis: u64) -> Self {
        Self::new(Duration::from_millis(millis))
    }

    /// Creates a pacer that never sleeps
    ///
    /// Useful in tests where wall-clock delays would only slow the suite down.
    pub fn zero() -> Self {
        Self::new(Duration::ZERO)
    }

    /// Returns the configured delay
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Sleeps for the configured delay
    ///
    /// A zero delay returns immediately without yielding to the timer.
    pub async fn pause(&self) {
        if self.delay.is_zero() {
            return;
        }

        tokio::time::sleep(self.delay).await;
    }
}

impl Default for Pacer {
    fn default() -> Self {
        Self::from_millis(DEFAULT_PAGE_DELAY_MS)
    }
}
