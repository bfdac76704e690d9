//! Section enums addressed by `deep-link` URLs.
//!
//! Tokens are lowercase because the deep-link target is lowercased before
//! it is split and matched.

use serde::{Serialize, Serializer};

/// Settings screens reachable by deep link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingsSection {
    ClearPrivateData,
    ContentBlocker,
    Fxa,
    General,
    Homepage,
    Mailto,
    NewTab,
    Search,
    Theme,
    Wallpaper,
    CreditCard,
    Password,
    RateApp,
    Tabs,
    Toolbar,
    TopSites,
}

impl SettingsSection {
    pub const ALL: [SettingsSection; 16] = [
        SettingsSection::ClearPrivateData,
        SettingsSection::ContentBlocker,
        SettingsSection::Fxa,
        SettingsSection::General,
        SettingsSection::Homepage,
        SettingsSection::Mailto,
        SettingsSection::NewTab,
        SettingsSection::Search,
        SettingsSection::Theme,
        SettingsSection::Wallpaper,
        SettingsSection::CreditCard,
        SettingsSection::Password,
        SettingsSection::RateApp,
        SettingsSection::Tabs,
        SettingsSection::Toolbar,
        SettingsSection::TopSites,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SettingsSection::ClearPrivateData => "clear-private-data",
            SettingsSection::ContentBlocker => "content-blocker",
            SettingsSection::Fxa => "fxa",
            SettingsSection::General => "general",
            SettingsSection::Homepage => "homepage",
            SettingsSection::Mailto => "mailto",
            SettingsSection::NewTab => "newtab",
            SettingsSection::Search => "search",
            SettingsSection::Theme => "theme",
            SettingsSection::Wallpaper => "wallpaper",
            SettingsSection::CreditCard => "credit-card",
            SettingsSection::Password => "password",
            SettingsSection::RateApp => "rate-app",
            SettingsSection::Tabs => "tabs",
            SettingsSection::Toolbar => "toolbar",
            SettingsSection::TopSites => "top-sites",
        }
    }

    pub fn parse(token: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|s| s.as_str() == token)
    }
}

/// Home panel sections reachable by deep link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HomepanelSection {
    Bookmarks,
    TopSites,
    History,
    ReadingList,
    Downloads,
    NewPrivateTab,
    NewTab,
}

impl HomepanelSection {
    pub const ALL: [HomepanelSection; 7] = [
        HomepanelSection::Bookmarks,
        HomepanelSection::TopSites,
        HomepanelSection::History,
        HomepanelSection::ReadingList,
        HomepanelSection::Downloads,
        HomepanelSection::NewPrivateTab,
        HomepanelSection::NewTab,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            HomepanelSection::Bookmarks => "bookmarks",
            HomepanelSection::TopSites => "top-sites",
            HomepanelSection::History => "history",
            HomepanelSection::ReadingList => "reading-list",
            HomepanelSection::Downloads => "downloads",
            HomepanelSection::NewPrivateTab => "new-private-tab",
            HomepanelSection::NewTab => "new-tab",
        }
    }

    pub fn parse(token: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|s| s.as_str() == token)
    }
}

/// Default-browser onboarding screens reachable by deep link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DefaultBrowserSection {
    Tutorial,
    SystemSettings,
}

impl DefaultBrowserSection {
    pub const ALL: [DefaultBrowserSection; 2] = [
        DefaultBrowserSection::Tutorial,
        DefaultBrowserSection::SystemSettings,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            DefaultBrowserSection::Tutorial => "tutorial",
            DefaultBrowserSection::SystemSettings => "system-settings",
        }
    }

    pub fn parse(token: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|s| s.as_str() == token)
    }
}

impl Serialize for SettingsSection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl Serialize for HomepanelSection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl Serialize for DefaultBrowserSection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
