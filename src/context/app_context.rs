//! Application Context
//!
//! Carries the resolved configuration, the clone backend and the clipboard
//! down the component tree. It is provided once by `App` and read by the
//! widget through `use_context`, so every widget instance shares the same
//! services without a process-wide singleton.

use std::rc::Rc;

use crate::services::clone_api::{CloneBackend, HttpCloneBackend};
use crate::stores::config_store::CloneConfig;
use crate::utils::clipboard::{BrowserClipboard, Clipboard};

#[derive(Clone)]
pub struct AppContext {
    pub config: CloneConfig,
    pub backend: Rc<dyn CloneBackend>,
    pub clipboard: Rc<dyn Clipboard>,
}

impl AppContext {
    /// Build a context that talks to the configured HTTP endpoint
    pub fn new(config: CloneConfig) -> Self {
        let backend = Rc::new(HttpCloneBackend::new(config.endpoint.clone()));
        Self {
            config,
            backend,
            clipboard: Rc::new(BrowserClipboard),
        }
    }
}
