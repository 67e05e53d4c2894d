//! Clipboard utilities for copying cloned HTML
//!
//! Wraps the Web Clipboard API. When the API is unavailable or rejects the
//! write (insecure context, denied permission), the user gets a blocking
//! `alert` instead of an error state.

use async_trait::async_trait;
use wasm_bindgen::JsValue;

/// Shown in the fallback alert when the clipboard write fails
pub const COPY_FALLBACK_MESSAGE: &str =
    "Could not copy automatically. Please select the HTML and copy it manually.";

/// Somewhere copied text can go, plus a way to tell the user it didn't
#[async_trait(?Send)]
pub trait Clipboard {
    async fn write_text(&self, text: &str) -> Result<(), String>;

    /// Blocking notification shown when `write_text` fails
    fn notify(&self, message: &str);
}

/// The browser's `navigator.clipboard` with `window.alert` as fallback
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserClipboard;

#[async_trait(?Send)]
impl Clipboard for BrowserClipboard {
    async fn write_text(&self, text: &str) -> Result<(), String> {
        copy_to_clipboard(text).await.map_err(|e| format!("{:?}", e))
    }

    fn notify(&self, message: &str) {
        let Some(window) = web_sys::window() else {
            log::warn!("No window to show clipboard fallback alert");
            return;
        };
        if let Err(e) = window.alert_with_message(message) {
            log::warn!("Failed to show clipboard fallback alert: {:?}", e);
        }
    }
}

/// Copy text to the system clipboard
///
/// # Returns
/// * `Ok(())` if the text was successfully copied
/// * `Err(JsValue)` if the operation failed
pub async fn copy_to_clipboard(text: &str) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;
    let clipboard = window.navigator().clipboard();
    wasm_bindgen_futures::JsFuture::from(clipboard.write_text(text))
        .await
        .map(|_| ())
}

/// Copy text, falling back to a blocking notification on failure.
///
/// Returns true when the text reached the clipboard.
pub async fn copy_or_notify<C: Clipboard + ?Sized>(clipboard: &C, text: &str) -> bool {
    match clipboard.write_text(text).await {
        Ok(()) => {
            log::info!("Copied {} bytes of HTML to clipboard", text.len());
            true
        }
        Err(e) => {
            log::warn!("Clipboard write failed: {}", e);
            clipboard.notify(COPY_FALLBACK_MESSAGE);
            false
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::cell::RefCell;

    /// In-memory clipboard recording writes and fallback notifications
    #[derive(Default)]
    pub(crate) struct FakeClipboard {
        pub fail: bool,
        pub writes: RefCell<Vec<String>>,
        pub notices: RefCell<Vec<String>>,
    }

    impl FakeClipboard {
        pub(crate) fn failing() -> Self {
            Self {
                fail: true,
                ..Self::default()
            }
        }
    }

    #[async_trait(?Send)]
    impl Clipboard for FakeClipboard {
        async fn write_text(&self, text: &str) -> Result<(), String> {
            if self.fail {
                return Err("NotAllowedError".to_string());
            }
            self.writes.borrow_mut().push(text.to_string());
            Ok(())
        }

        fn notify(&self, message: &str) {
            self.notices.borrow_mut().push(message.to_string());
        }
    }

    #[tokio::test]
    async fn test_copy_writes_exact_text() {
        let clipboard = FakeClipboard::default();
        assert!(copy_or_notify(&clipboard, "<p>hi</p>").await);
        assert_eq!(clipboard.writes.borrow().as_slice(), ["<p>hi</p>".to_string()]);
        assert!(clipboard.notices.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_failed_copy_falls_back_to_notice() {
        let clipboard = FakeClipboard::failing();
        assert!(!copy_or_notify(&clipboard, "<p>hi</p>").await);
        assert!(clipboard.writes.borrow().is_empty());
        assert_eq!(clipboard.notices.borrow().as_slice(), [COPY_FALLBACK_MESSAGE.to_string()]);
    }
}
