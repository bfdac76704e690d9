//! Resolved navigation targets.
//!
//! A [`Route`] is what the host application acts on after a deeplink has
//! been classified. Routes are plain values: built once, never mutated.

mod section;

pub use section::{DefaultBrowserSection, HomepanelSection, SettingsSection};

use std::collections::BTreeMap;

use serde::Serialize;
use url::Url;

/// What the host application should do for a classified deeplink.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "route", rename_all = "kebab-case")]
pub enum Route {
    /// Open `url` (or a blank tab if `None`) in the given browsing mode.
    Search { url: Option<Url>, is_private: bool },
    /// Run a search for free text.
    SearchQuery { query: String },
    /// Switch to an existing tab by id, loading `url` if the tab is gone.
    SearchUrl { url: Option<Url>, tab_id: String },
    /// Telemetry debug link, passed through verbatim.
    Glean { url: Url },
    Settings { section: SettingsSection },
    Homepanel { section: HomepanelSection },
    DefaultBrowser { section: DefaultBrowserSection },
    Action { action: AppAction },
    /// Hand off to the account sign-in flow.
    FxaSignIn { params: AuthLaunchParams },
}

/// Fixed app-level actions reachable from widgets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum AppAction {
    ClosePrivateTabs,
}

/// Where an account sign-in flow was started from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum AuthEntrypoint {
    DeepLinkNavigation,
}

/// Launch parameters for the external sign-in flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthLaunchParams {
    pub entrypoint: AuthEntrypoint,
    /// Raw query string of the originating deeplink.
    pub query: String,
}

impl AuthLaunchParams {
    pub fn from_deeplink(query: impl Into<String>) -> Self {
        Self {
            entrypoint: AuthEntrypoint::DeepLinkNavigation,
            query: query.into(),
        }
    }

    /// Decoded query parameters (last value wins on duplicates).
    pub fn params(&self) -> BTreeMap<String, String> {
        url::form_urlencoded::parse(self.query.as_bytes())
            .into_owned()
            .collect()
    }
}
