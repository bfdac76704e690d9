//! Event vocabulary and the per-host-token event table.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::deeplink::HostToken;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum EventCategory {
    Action,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum EventMethod {
    Open,
    Tap,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum EventObject {
    AsDefaultBrowser,
    MediumTopSitesWidget,
    SmallQuickActionSearch,
    MediumQuickActionSearch,
    MediumQuickActionPrivateSearch,
    SmallQuickActionClosePrivate,
    MediumQuickActionClosePrivate,
    MediumTabsOpenUrl,
    LargeTabsOpenUrl,
    OnboardingClose,
}

impl EventCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            EventCategory::Action => "action",
        }
    }
}

impl EventMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            EventMethod::Open => "open",
            EventMethod::Tap => "tap",
        }
    }
}

impl EventObject {
    pub fn as_str(self) -> &'static str {
        match self {
            EventObject::AsDefaultBrowser => "as-default-browser",
            EventObject::MediumTopSitesWidget => "medium-top-sites-widget",
            EventObject::SmallQuickActionSearch => "small-quick-action-search",
            EventObject::MediumQuickActionSearch => "medium-quick-action-search",
            EventObject::MediumQuickActionPrivateSearch => "medium-quick-action-private-search",
            EventObject::SmallQuickActionClosePrivate => "small-quick-action-close-private",
            EventObject::MediumQuickActionClosePrivate => "medium-quick-action-close-private",
            EventObject::MediumTabsOpenUrl => "medium-tabs-open-url",
            EventObject::LargeTabsOpenUrl => "large-tabs-open-url",
            EventObject::OnboardingClose => "onboarding-close",
        }
    }
}

/// One telemetry record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TelemetryEvent {
    pub category: EventCategory,
    pub method: EventMethod,
    pub object: EventObject,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub extras: BTreeMap<String, String>,
}

impl TelemetryEvent {
    pub fn new(category: EventCategory, method: EventMethod, object: EventObject) -> Self {
        Self {
            category,
            method,
            object,
            extras: BTreeMap::new(),
        }
    }

    /// `action / open / <object>`, the shape every deeplink event takes.
    pub fn open(object: EventObject) -> Self {
        Self::new(EventCategory::Action, EventMethod::Open, object)
    }

    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extras.insert(key.into(), value.into());
        self
    }
}

/// Event recorded when a deeplink with `host` is classified, if any.
pub fn event_for_host(host: HostToken, is_private: bool) -> Option<TelemetryEvent> {
    let object = match host {
        HostToken::DeepLink
        | HostToken::FxaSignIn
        | HostToken::OpenUrl
        | HostToken::OpenText
        | HostToken::Glean => return None,
        HostToken::WidgetMediumTopSitesOpenUrl => EventObject::MediumTopSitesWidget,
        HostToken::WidgetSmallQuickLinkOpenUrl => EventObject::SmallQuickActionSearch,
        HostToken::WidgetMediumQuickLinkOpenUrl if is_private => {
            EventObject::MediumQuickActionPrivateSearch
        }
        HostToken::WidgetMediumQuickLinkOpenUrl => EventObject::MediumQuickActionSearch,
        // Open-copied quick links share the close-private objects.
        HostToken::WidgetSmallQuickLinkOpenCopied
        | HostToken::WidgetSmallQuickLinkClosePrivateTabs => EventObject::SmallQuickActionClosePrivate,
        HostToken::WidgetMediumQuickLinkOpenCopied
        | HostToken::WidgetMediumQuickLinkClosePrivateTabs => {
            EventObject::MediumQuickActionClosePrivate
        }
        HostToken::WidgetTabsMediumOpenUrl => EventObject::MediumTabsOpenUrl,
        HostToken::WidgetTabsLargeOpenUrl => EventObject::LargeTabsOpenUrl,
    };
    Some(TelemetryEvent::open(object))
}
