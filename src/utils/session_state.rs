/// Shown when the user submits an empty or whitespace-only URL
pub const VALIDATION_MESSAGE: &str = "Please enter a valid URL";

/// Shown for every request failure the backend did not describe itself
pub const GENERIC_FAILURE_MESSAGE: &str =
    "Failed to clone the webpage. Please check the URL and try again.";

/// State machine for the clone widget
///
/// Replaces separate loading / error / show-preview flags with a single enum
/// so that impossible combinations (loading while previewing, an error shown
/// next to a preview) cannot be represented.
///
/// # Examples
///
/// ```
/// let mut state = use_signal(|| SessionState::Idle);
///
/// // On submit:
/// match SessionState::validate_draft(&draft.read()) {
///     Ok(url) => state.set(SessionState::Loading),
///     Err(failed) => state.set(failed),
/// }
///
/// // On completion:
/// state.set(SessionState::Previewing(html));
/// ```

#[derive(Debug, Clone, PartialEq, Default)]
pub enum SessionState {
    /// Nothing submitted yet, or the preview was closed
    #[default]
    Idle,

    /// A clone request is in flight
    Loading,

    /// Validation or request failure with the message to show inline
    Failed(String),

    /// Cloned HTML ready to be shown in the preview modal
    Previewing(String),
}

impl SessionState {
    /// Validate the draft URL before a request is issued.
    ///
    /// Returns the trimmed URL to send, or the `Failed` state to display.
    pub fn validate_draft(draft: &str) -> Result<String, SessionState> {
        let url = draft.trim();
        if url.is_empty() {
            return Err(SessionState::Failed(VALIDATION_MESSAGE.to_string()));
        }
        Ok(url.to_string())
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, SessionState::Loading)
    }

    /// Returns the error message if in failed state, None otherwise
    pub fn error(&self) -> Option<&str> {
        match self {
            SessionState::Failed(msg) => Some(msg),
            _ => None,
        }
    }

    /// HTML to render in the preview modal.
    ///
    /// An empty payload never opens the modal.
    pub fn preview_html(&self) -> Option<&str> {
        match self {
            SessionState::Previewing(html) if !html.is_empty() => Some(html),
            _ => None,
        }
    }
}
