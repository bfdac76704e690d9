//! Host tokens recognised on the application's own scheme.

use std::fmt;

/// Action named by the host segment of an app-scheme deeplink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HostToken {
    DeepLink,
    FxaSignIn,
    OpenUrl,
    OpenText,
    Glean,
    WidgetMediumTopSitesOpenUrl,
    WidgetSmallQuickLinkOpenUrl,
    WidgetMediumQuickLinkOpenUrl,
    WidgetSmallQuickLinkOpenCopied,
    WidgetMediumQuickLinkOpenCopied,
    WidgetSmallQuickLinkClosePrivateTabs,
    WidgetMediumQuickLinkClosePrivateTabs,
    WidgetTabsMediumOpenUrl,
    WidgetTabsLargeOpenUrl,
}

impl HostToken {
    pub const ALL: [HostToken; 14] = [
        HostToken::DeepLink,
        HostToken::FxaSignIn,
        HostToken::OpenUrl,
        HostToken::OpenText,
        HostToken::Glean,
        HostToken::WidgetMediumTopSitesOpenUrl,
        HostToken::WidgetSmallQuickLinkOpenUrl,
        HostToken::WidgetMediumQuickLinkOpenUrl,
        HostToken::WidgetSmallQuickLinkOpenCopied,
        HostToken::WidgetMediumQuickLinkOpenCopied,
        HostToken::WidgetSmallQuickLinkClosePrivateTabs,
        HostToken::WidgetMediumQuickLinkClosePrivateTabs,
        HostToken::WidgetTabsMediumOpenUrl,
        HostToken::WidgetTabsLargeOpenUrl,
    ];

    /// Wire form as it appears in the URL host.
    pub fn as_str(self) -> &'static str {
        match self {
            HostToken::DeepLink => "deep-link",
            HostToken::FxaSignIn => "fxa-signin",
            HostToken::OpenUrl => "open-url",
            HostToken::OpenText => "open-text",
            HostToken::Glean => "glean",
            HostToken::WidgetMediumTopSitesOpenUrl => "widget-medium-topsites-open-url",
            HostToken::WidgetSmallQuickLinkOpenUrl => "widget-small-quicklink-open-url",
            HostToken::WidgetMediumQuickLinkOpenUrl => "widget-medium-quicklink-open-url",
            HostToken::WidgetSmallQuickLinkOpenCopied => "widget-small-quicklink-open-copied",
            HostToken::WidgetMediumQuickLinkOpenCopied => "widget-medium-quicklink-open-copied",
            HostToken::WidgetSmallQuickLinkClosePrivateTabs => {
                "widget-small-quicklink-close-private-tabs"
            }
            HostToken::WidgetMediumQuickLinkClosePrivateTabs => {
                "widget-medium-quicklink-close-private-tabs"
            }
            HostToken::WidgetTabsMediumOpenUrl => "widget-tabs-medium-open-url",
            HostToken::WidgetTabsLargeOpenUrl => "widget-tabs-large-open-url",
        }
    }

    /// Case-insensitive lookup of a host segment.
    pub fn parse(host: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.as_str().eq_ignore_ascii_case(host))
    }

    /// True for tokens originating from a home-screen widget.
    pub fn is_widget(self) -> bool {
        self.as_str().starts_with("widget-")
    }
}

impl fmt::Display for HostToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
