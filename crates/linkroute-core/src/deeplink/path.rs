//! First segment of a `deep-link?url=<path>/<section>` target.

/// Category a deep link navigates into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeeplinkPath {
    Settings,
    Homepanel,
    DefaultBrowser,
}

impl DeeplinkPath {
    pub const ALL: [DeeplinkPath; 3] = [
        DeeplinkPath::Settings,
        DeeplinkPath::Homepanel,
        DeeplinkPath::DefaultBrowser,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            DeeplinkPath::Settings => "settings",
            DeeplinkPath::Homepanel => "homepanel",
            DeeplinkPath::DefaultBrowser => "default-browser",
        }
    }

    /// Exact match on an already lowercased segment.
    pub fn parse(segment: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|p| p.as_str() == segment)
    }
}
