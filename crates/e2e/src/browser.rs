//! Portal browser session
//!
//! One [`PortalSession`] is shared sequentially by all UI cases in a test
//! module: connect once, hand out `&self` to each case, `quit()` at module
//! end on every exit path. The explicit wait helpers poll with a deadline
//! instead of relying on driver-specific wait builders, so a timeout always
//! surfaces as [`SuiteError::Timeout`] naming the condition it was
//! watching.

use std::time::{Duration, Instant};

use thirtyfour::prelude::*;
use tokio::time::sleep;
use tracing::{debug, warn};

use crate::config::BrowserConfig;
use crate::error::{SuiteError, SuiteResult};

/// Class name of the portal's checkbox-style bot-check challenge.
const CAPTCHA_CHECKBOX: &str = "CheckboxCaptcha-Button";

/// Bounded attempts at dismissing the challenge before giving up.
const CAPTCHA_ATTEMPTS: usize = 3;

/// Poll interval for the explicit wait helpers.
const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// How a followed click resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    /// The URL of the current window changed.
    SameTab,
    /// A second window handle appeared.
    NewTab,
}

/// Live WebDriver handle plus the portal-specific preconditions.
pub struct PortalSession {
    driver: WebDriver,
    portal_url: String,
    wait_timeout: Duration,
}

impl PortalSession {
    /// Start a browser session against the configured WebDriver endpoint.
    ///
    /// A session that cannot be created aborts the whole module's cases,
    /// so the failure is classified as a startup error rather than folded
    /// into the per-case taxonomy.
    pub async fn connect(config: &BrowserConfig) -> SuiteResult<Self> {
        let caps = DesiredCapabilities::chrome();
        let driver = WebDriver::new(config.webdriver_url.as_str(), caps)
            .await
            .map_err(|e| SuiteError::DriverStartup(e.to_string()))?;
        driver.set_implicit_wait_timeout(config.implicit_wait).await?;

        Ok(Self {
            driver,
            portal_url: config.portal_url.clone(),
            wait_timeout: config.wait_timeout,
        })
    }

    /// The underlying driver, for case-specific lookups.
    pub fn driver(&self) -> &WebDriver {
        &self.driver
    }

    /// Navigate to the portal and wait for the document body.
    pub async fn open_portal(&self) -> SuiteResult<()> {
        self.driver.goto(self.portal_url.as_str()).await?;
        self.wait_for_present(By::Tag("body")).await?;
        Ok(())
    }

    /// Best-effort dismissal of the portal's bot-check challenge.
    ///
    /// Up to [`CAPTCHA_ATTEMPTS`] passes: if the checkbox challenge is
    /// present, click it and wait for it to disappear; if it is absent,
    /// stop early. A challenge that never disappears is logged and
    /// tolerated, the case's own assertions will fail against whatever
    /// page is left. WebDriver transport faults still propagate.
    pub async fn dismiss_captcha(&self) -> SuiteResult<()> {
        for attempt in 1..=CAPTCHA_ATTEMPTS {
            let challenges = self.driver.find_all(By::ClassName(CAPTCHA_CHECKBOX)).await?;
            let Some(button) = challenges.first() else {
                if attempt > 1 {
                    debug!("bot-check challenge gone after {} attempt(s)", attempt - 1);
                }
                return Ok(());
            };

            debug!(attempt, "clicking the bot-check checkbox");
            button.click().await?;

            if let Err(e) = self.wait_for_absent(By::ClassName(CAPTCHA_CHECKBOX)).await {
                warn!(attempt, "bot-check challenge still present: {e}");
            }
        }

        warn!("bot-check challenge not dismissed after {CAPTCHA_ATTEMPTS} attempts, continuing");
        Ok(())
    }

    /// Wait until at least one element matches, returning the first.
    pub async fn wait_for_present(&self, by: By) -> SuiteResult<WebElement> {
        let deadline = Instant::now() + self.wait_timeout;
        loop {
            let found = self.driver.find_all(by.clone()).await?;
            if let Some(element) = found.into_iter().next() {
                return Ok(element);
            }
            if Instant::now() >= deadline {
                return Err(self.timeout(format!("element {by:?} to be present")));
            }
            sleep(POLL_INTERVAL).await;
        }
    }

    /// Wait until no element matches.
    pub async fn wait_for_absent(&self, by: By) -> SuiteResult<()> {
        let deadline = Instant::now() + self.wait_timeout;
        loop {
            if self.driver.find_all(by.clone()).await?.is_empty() {
                return Ok(());
            }
            if Instant::now() >= deadline {
                return Err(self.timeout(format!("element {by:?} to disappear")));
            }
            sleep(POLL_INTERVAL).await;
        }
    }

    /// Wait until the page title contains `needle`, returning the title.
    pub async fn wait_for_title_contains(&self, needle: &str) -> SuiteResult<String> {
        let deadline = Instant::now() + self.wait_timeout;
        loop {
            let title = self.driver.title().await?;
            if title.contains(needle) {
                return Ok(title);
            }
            if Instant::now() >= deadline {
                return Err(self.timeout(format!("title to contain {needle:?} (last: {title:?})")));
            }
            sleep(POLL_INTERVAL).await;
        }
    }

    /// Wait for a click to resolve into a navigation: either a second
    /// window opened or the current window left `prior_url`.
    pub async fn wait_for_navigation(&self, prior_url: &str) -> SuiteResult<Navigation> {
        let deadline = Instant::now() + self.wait_timeout;
        loop {
            if self.driver.windows().await?.len() > 1 {
                return Ok(Navigation::NewTab);
            }
            if self.driver.current_url().await?.as_str() != prior_url {
                return Ok(Navigation::SameTab);
            }
            if Instant::now() >= deadline {
                return Err(self.timeout(format!("navigation away from {prior_url}")));
            }
            sleep(POLL_INTERVAL).await;
        }
    }

    /// Shut the browser down. Consumes the session; call it on every exit
    /// path of the owning module.
    pub async fn quit(self) -> SuiteResult<()> {
        self.driver.quit().await?;
        Ok(())
    }

    fn timeout(&self, condition: String) -> SuiteError {
        SuiteError::Timeout {
            condition,
            timeout: self.wait_timeout,
        }
    }
}
