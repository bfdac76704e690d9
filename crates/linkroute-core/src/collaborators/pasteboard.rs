//! Fixed pasteboard contents.

use url::Url;

use super::Pasteboard;

/// Pasteboard frozen at construction time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticPasteboard {
    url: Option<Url>,
    string: Option<String>,
}

impl StaticPasteboard {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Classifies copied text the way the system clipboard does: an
    /// absolute URL with a host is URL content, anything else is a string.
    pub fn from_text(text: impl Into<String>) -> Self {
        let text = text.into();
        match Url::parse(text.trim()) {
            Ok(url) if url.host_str().is_some() => Self {
                url: Some(url),
                string: Some(text),
            },
            _ => Self {
                url: None,
                string: Some(text),
            },
        }
    }

    pub fn with_url(url: Url) -> Self {
        Self {
            string: Some(url.to_string()),
            url: Some(url),
        }
    }
}

impl Pasteboard for StaticPasteboard {
    fn url(&self) -> Option<Url> {
        self.url.clone()
    }

    fn string(&self) -> Option<String> {
        self.string.clone()
    }
}
