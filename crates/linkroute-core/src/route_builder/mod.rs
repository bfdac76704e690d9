//! Deeplink route classification.
//!
//! [`RouteBuilder::make_route`] turns an incoming URL into a [`Route`], or
//! `None` when the URL is not something the app handles. Classification is
//! a single pass with no retained state; the only side effects are
//! fire-and-forget telemetry and the default-browser signal.

mod deep_link;
mod widget;

use std::sync::Arc;

use url::Url;

use crate::collaborators::{
    DefaultBrowserSignal, Pasteboard, PrivateModeResolver, StaticPasteboard, TabSnapshot,
};
use crate::config::LinkrouteConfig;
use crate::deeplink::HostToken;
use crate::route::{AppAction, AuthLaunchParams, Route};
use crate::telemetry::{event_for_host, EventObject, TelemetryEvent, TelemetrySink, TracingTelemetry};
use crate::url_scanner::{parse_bool, UrlScanner};

/// Classifies deeplinks into routes.
///
/// Holds only the app's scheme list and shared handles to its
/// collaborators, so one builder can serve concurrent callers.
pub struct RouteBuilder {
    app_schemes: Vec<String>,
    is_private: Arc<dyn PrivateModeResolver>,
    telemetry: Arc<dyn TelemetrySink>,
    pasteboard: Arc<dyn Pasteboard>,
    tabs: Arc<dyn TabSnapshot>,
    default_browser: Arc<dyn DefaultBrowserSignal>,
}

impl RouteBuilder {
    /// Builder for `app_schemes` with tracing telemetry, an empty
    /// pasteboard and no open tabs.
    pub fn new<I, S>(app_schemes: I, is_private: impl PrivateModeResolver + 'static) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            app_schemes: app_schemes
                .into_iter()
                .map(|s| s.into().to_ascii_lowercase())
                .collect(),
            is_private: Arc::new(is_private),
            telemetry: Arc::new(TracingTelemetry),
            pasteboard: Arc::new(StaticPasteboard::empty()),
            tabs: Arc::new(()),
            default_browser: Arc::new(()),
        }
    }

    /// Builder using the schemes from `cfg`.
    pub fn from_config(cfg: &LinkrouteConfig, is_private: impl PrivateModeResolver + 'static) -> Self {
        Self::new(cfg.app_schemes.iter().cloned(), is_private)
    }

    pub fn with_telemetry(mut self, telemetry: Arc<dyn TelemetrySink>) -> Self {
        self.telemetry = telemetry;
        self
    }

    pub fn with_pasteboard(mut self, pasteboard: Arc<dyn Pasteboard>) -> Self {
        self.pasteboard = pasteboard;
        self
    }

    pub fn with_tabs(mut self, tabs: Arc<dyn TabSnapshot>) -> Self {
        self.tabs = tabs;
        self
    }

    pub fn with_default_browser_signal(mut self, signal: Arc<dyn DefaultBrowserSignal>) -> Self {
        self.default_browser = signal;
        self
    }

    pub fn app_schemes(&self) -> &[String] {
        &self.app_schemes
    }

    /// Classifies `input`. `None` means "not a link this app handles".
    pub fn make_route(&self, input: &str) -> Option<Route> {
        let Some(scanner) = UrlScanner::parse(input, self.app_schemes.as_slice()) else {
            tracing::debug!(input, "deeplink rejected: not an absolute URL with a host");
            return None;
        };
        self.route_for(&scanner)
    }

    /// Same as [`RouteBuilder::make_route`] for an already parsed URL.
    pub fn make_route_from_url(&self, url: &Url) -> Option<Route> {
        let Some(scanner) = UrlScanner::from_url(url.clone(), self.app_schemes.as_slice()) else {
            tracing::debug!(url = %url, "deeplink rejected: URL has no host");
            return None;
        };
        self.route_for(&scanner)
    }

    fn route_for(&self, scanner: &UrlScanner) -> Option<Route> {
        if scanner.is_our_scheme() {
            match HostToken::parse(scanner.host()) {
                Some(host) => return self.route_for_host(host, scanner),
                None => {
                    tracing::debug!(host = scanner.host(), "deeplink rejected: unknown host");
                    return None;
                }
            }
        }

        if scanner.is_http_scheme() {
            self.telemetry
                .record(TelemetryEvent::open(EventObject::AsDefaultBrowser));
            self.default_browser.opened_as_default_browser();
            return Some(Route::Search {
                url: Some(scanner.url().clone()),
                is_private: self.is_private.last_mode_was_private(),
            });
        }

        tracing::debug!(scheme = scanner.scheme(), "deeplink rejected: foreign scheme");
        None
    }

    fn route_for_host(&self, host: HostToken, scanner: &UrlScanner) -> Option<Route> {
        // An explicit `private` flag wins over the last browsing mode.
        let is_private = scanner
            .value("private")
            .and_then(parse_bool)
            .unwrap_or_else(|| self.is_private.last_mode_was_private());

        if let Some(event) = event_for_host(host, is_private) {
            self.telemetry.record(event);
        }

        let url_query = || scanner.value("url").and_then(|v| Url::parse(v).ok());

        let route = match host {
            HostToken::DeepLink => deep_link::route(scanner.value("url")),
            HostToken::FxaSignIn => scanner
                .value("signin")
                .map(|_| Route::FxaSignIn {
                    params: AuthLaunchParams::from_deeplink(scanner.raw_query()),
                }),
            HostToken::OpenUrl
            | HostToken::WidgetMediumTopSitesOpenUrl
            | HostToken::WidgetSmallQuickLinkOpenUrl
            | HostToken::WidgetMediumQuickLinkOpenUrl => Some(Route::Search {
                url: url_query(),
                is_private,
            }),
            HostToken::OpenText => Some(Route::SearchQuery {
                query: scanner.value("text").unwrap_or_default().to_string(),
            }),
            HostToken::Glean => Some(Route::Glean {
                url: scanner.url().clone(),
            }),
            HostToken::WidgetSmallQuickLinkOpenCopied
            | HostToken::WidgetMediumQuickLinkOpenCopied => {
                Some(widget::open_copied(self.pasteboard.as_ref(), is_private))
            }
            HostToken::WidgetSmallQuickLinkClosePrivateTabs
            | HostToken::WidgetMediumQuickLinkClosePrivateTabs => Some(Route::Action {
                action: AppAction::ClosePrivateTabs,
            }),
            HostToken::WidgetTabsMediumOpenUrl | HostToken::WidgetTabsLargeOpenUrl => {
                Some(widget::open_tab(self.tabs.as_ref(), scanner.value("uuid")))
            }
        };

        match &route {
            Some(r) => tracing::debug!(%host, route = ?r, "deeplink classified"),
            None => tracing::debug!(%host, "deeplink rejected: missing or invalid parameters"),
        }
        route
    }
}

impl std::fmt::Debug for RouteBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RouteBuilder")
            .field("app_schemes", &self.app_schemes)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests;
