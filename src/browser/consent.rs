//! Consent overlay dismissal
//!
//! The source site gates its content behind a privacy consent popup. This
//! module waits a bounded time for the accept button and clicks it; a
//! timeout is non-fatal and the scrape proceeds with whatever markup is
//! reachable.

use crate::browser::navigation::PageNavigator;
use crate::browser::PageHandle;
use crate::error::{Error, Result};
use tracing::{info, instrument, warn};

/// Consent popup handling
pub struct ConsentHandler;

impl ConsentHandler {
    /// Wait for the consent button and click it
    ///
    /// Returns `true` when the popup was dismissed, `false` when the wait
    /// timed out. Only timeouts degrade; other CDP failures propagate.
    #[instrument(skip(page))]
    pub async fn dismiss(page: &PageHandle, selector: &str, timeout_ms: u64) -> Result<bool> {
        match PageNavigator::wait_for_selector(page, selector, timeout_ms).await {
            Ok(()) => {}
            Err(Error::Navigation(_)) | Err(Error::Cdp(_)) => {
                warn!("Consent button did not appear within {}ms", timeout_ms);
                return Ok(false);
            }
            Err(e) => return Err(e),
        }

        let button = page
            .inner()
            .find_element(selector)
            .await
            .map_err(|e| Error::cdp(e.to_string()))?;
        button.click().await.map_err(|e| Error::cdp(e.to_string()))?;

        info!("Consent popup accepted");
        Ok(true)
    }
}
