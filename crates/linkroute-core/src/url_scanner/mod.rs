//! URL decomposition for incoming deeplinks.
//!
//! Splits an input URI into a lowercased scheme, the host segment and a
//! decoded query map, and answers whether the scheme belongs to the
//! application or is a plain web scheme.

mod query;

pub use query::{parse_bool, QueryMap};

use url::Url;

/// Web schemes treated as "opened as default browser".
const HTTP_SCHEMES: [&str; 2] = ["http", "https"];

/// Scanned view of a URL: scheme, host, and query parameters.
#[derive(Debug, Clone)]
pub struct UrlScanner {
    url: Url,
    host: String,
    query: QueryMap,
    is_our_scheme: bool,
}

impl UrlScanner {
    /// Parses `input` and classifies its scheme against `app_schemes`.
    ///
    /// Returns `None` if the input is not an absolute URL or has no host.
    pub fn parse<S: AsRef<str>>(input: &str, app_schemes: &[S]) -> Option<Self> {
        let url = Url::parse(input).ok()?;
        Self::from_url(url, app_schemes)
    }

    /// Same as [`UrlScanner::parse`] for an already parsed URL.
    pub fn from_url<S: AsRef<str>>(url: Url, app_schemes: &[S]) -> Option<Self> {
        let host = url.host_str().filter(|h| !h.is_empty())?.to_string();
        let query = QueryMap::from_url(&url);
        let is_our_scheme = app_schemes
            .iter()
            .any(|s| s.as_ref().eq_ignore_ascii_case(url.scheme()));
        Some(Self {
            url,
            host,
            query,
            is_our_scheme,
        })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Scheme, lowercased by the URL parser.
    pub fn scheme(&self) -> &str {
        self.url.scheme()
    }

    /// Host segment as written (not case-normalised for custom schemes).
    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn is_our_scheme(&self) -> bool {
        self.is_our_scheme
    }

    pub fn is_http_scheme(&self) -> bool {
        HTTP_SCHEMES.iter().any(|s| *s == self.scheme())
    }

    /// Decoded value of query parameter `name` (last occurrence wins).
    pub fn value(&self, name: &str) -> Option<&str> {
        self.query.get(name)
    }

    /// Raw (still percent-encoded) query string, empty if none.
    pub fn raw_query(&self) -> &str {
        self.url.query().unwrap_or("")
    }
}
