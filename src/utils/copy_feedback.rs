//! Transient "Copied!" indicator for the preview modal.
//!
//! Every successful copy takes a ticket. The reset timer hands the ticket back
//! when it fires, and only the most recent ticket may clear the indicator, so
//! a timer left over from an earlier copy cannot hide a newer one.

use std::time::Duration;

/// How long the indicator stays visible after a successful copy
pub const COPIED_INDICATOR_DURATION: Duration = Duration::from_millis(2000);

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CopyFeedback {
    visible: bool,
    ticket: u64,
}

impl CopyFeedback {
    /// Show the indicator and return the ticket its reset timer must present.
    pub fn show(&mut self) -> u64 {
        self.ticket = self.ticket.wrapping_add(1);
        self.visible = true;
        self.ticket
    }

    /// Hide the indicator if `ticket` belongs to the latest copy.
    ///
    /// Returns whether the indicator was cleared.
    pub fn expire(&mut self, ticket: u64) -> bool {
        if ticket != self.ticket || !self.visible {
            return false;
        }
        self.visible = false;
        true
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

/// Sleep on the browser timer queue (wasm) or the tokio clock (native/tests)
pub async fn sleep(duration: Duration) {
    #[cfg(not(target_arch = "wasm32"))]
    {
        tokio::time::sleep(duration).await;
    }
    #[cfg(target_arch = "wasm32")]
    {
        gloo_timers::future::sleep(duration).await;
    }
}
