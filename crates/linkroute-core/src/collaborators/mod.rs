//! External services the route classifier queries.
//!
//! Each collaborator is a cheap synchronous query. The classifier holds
//! them behind shared trait objects, so every implementation must be
//! `Send + Sync`.

mod pasteboard;
mod tabs;

pub use pasteboard::StaticPasteboard;
pub use tabs::{load_simple_tabs, FileTabSnapshot, SimpleTab, TabStoreError};

use std::collections::HashMap;

use url::Url;

/// Answers "was the user last browsing privately?".
pub trait PrivateModeResolver: Send + Sync {
    fn last_mode_was_private(&self) -> bool;
}

impl<F> PrivateModeResolver for F
where
    F: Fn() -> bool + Send + Sync,
{
    fn last_mode_was_private(&self) -> bool {
        self()
    }
}

/// Read-only view of the system clipboard.
pub trait Pasteboard: Send + Sync {
    /// URL content, if the clipboard holds one.
    fn url(&self) -> Option<Url>;
    /// Plain string content.
    fn string(&self) -> Option<String>;
}

/// Snapshot of open tabs shared by the widget extension, keyed by tab id.
pub trait TabSnapshot: Send + Sync {
    fn open_tabs(&self) -> HashMap<String, SimpleTab>;
}

/// No tabs.
impl TabSnapshot for () {
    fn open_tabs(&self) -> HashMap<String, SimpleTab> {
        HashMap::new()
    }
}

impl TabSnapshot for HashMap<String, SimpleTab> {
    fn open_tabs(&self) -> HashMap<String, SimpleTab> {
        self.clone()
    }
}

/// Told when the app was launched to open a plain web link.
pub trait DefaultBrowserSignal: Send + Sync {
    fn opened_as_default_browser(&self);
}

impl DefaultBrowserSignal for () {
    fn opened_as_default_browser(&self) {}
}
