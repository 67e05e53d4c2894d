//! use_clone_session hook - request lifecycle for the clone widget
//!
//! Owns the URL draft, the session state and the copy indicator for one
//! widget instance:
//! - Validating the draft before anything goes over the wire
//! - Issuing the clone request through the backend from `AppContext`
//! - Copying through the context's clipboard, with an alert on failure
//! - Closing the preview back to a blank form
//! - A self-clearing "Copied!" indicator after each successful copy

use dioxus::prelude::*;

use crate::context::AppContext;
use crate::services::clone_api::run_clone;
use crate::utils::clipboard::{copy_or_notify, Clipboard};
use crate::utils::copy_feedback::{self, CopyFeedback, COPIED_INDICATOR_DURATION};
use crate::utils::SessionState;

/// Draft URL plus session state, with the transitions the widget allows
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CloneSession {
    pub draft: String,
    pub state: SessionState,
}

impl CloneSession {
    /// Start a submit.
    ///
    /// Returns the URL to send, or None when nothing should be sent: a request
    /// is already in flight, or the draft failed validation (the state then
    /// carries the validation error).
    pub fn begin_submit(&mut self) -> Option<String> {
        if self.state.is_loading() {
            return None;
        }

        match SessionState::validate_draft(&self.draft) {
            Ok(url) => {
                self.state = SessionState::Loading;
                Some(url)
            }
            Err(failed) => {
                self.state = failed;
                None
            }
        }
    }

    /// Record the outcome of the request started by `begin_submit`
    pub fn finish(&mut self, outcome: SessionState) {
        self.state = match outcome {
            // Completion always leaves the loading state
            SessionState::Loading => SessionState::Idle,
            other => other,
        };
    }

    /// Tear the preview down to a blank form
    pub fn close(&mut self) {
        self.draft.clear();
        self.state = SessionState::Idle;
    }
}

/// Copy the previewed HTML.
///
/// Returns whether the "Copied!" indicator should be shown. Nothing is copied
/// unless the session is previewing a document.
pub async fn copy_preview<C: Clipboard + ?Sized>(session: &CloneSession, clipboard: &C) -> bool {
    let Some(html) = session.state.preview_html() else {
        return false;
    };
    copy_or_notify(clipboard, html).await
}

/// Return type for the use_clone_session hook
#[derive(Clone, Copy)]
pub struct UseCloneSession {
    /// Draft URL and current session state
    pub session: Signal<CloneSession>,
    /// "Copied!" indicator, independent of the session state
    pub copied: Signal<CopyFeedback>,
    /// Replace the draft with the current input value
    pub set_draft: Callback<String>,
    /// Validate the draft and issue the clone request
    pub submit: Callback<()>,
    /// Close the preview and reset the form
    pub close: Callback<()>,
    /// Copy the previewed HTML to the clipboard
    pub copy: Callback<()>,
}

/// Hook for one clone widget
///
/// # Example
/// ```rust
/// let widget = use_clone_session();
///
/// button {
///     disabled: widget.session.read().state.is_loading(),
///     onclick: move |_| widget.submit.call(()),
///     "Clone"
/// }
/// ```
pub fn use_clone_session() -> UseCloneSession {
    let ctx = use_context::<AppContext>();
    let backend = ctx.backend.clone();
    let clipboard = ctx.clipboard.clone();

    let mut session = use_signal(CloneSession::default);
    let mut copied = use_signal(CopyFeedback::default);

    let set_draft = use_callback(move |value: String| {
        session.write().draft = value;
    });

    let submit = use_callback(move |_: ()| {
        let Some(url) = session.write().begin_submit() else {
            return;
        };

        let backend = backend.clone();
        spawn(async move {
            let outcome = run_clone(backend.as_ref(), &url).await;
            session.write().finish(outcome);
        });
    });

    let close = use_callback(move |_: ()| {
        session.write().close();
    });

    let copy = use_callback(move |_: ()| {
        let snapshot = session.peek().clone();
        let clipboard = clipboard.clone();

        spawn(async move {
            if !copy_preview(&snapshot, clipboard.as_ref()).await {
                return;
            }

            let ticket = copied.write().show();
            copy_feedback::sleep(COPIED_INDICATOR_DURATION).await;
            copied.write().expire(ticket);
        });
    });

    UseCloneSession {
        session,
        copied,
        set_draft,
        submit,
        close,
        copy,
    }
}
