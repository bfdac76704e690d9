//! Query-string decoding.

use std::collections::HashMap;

use url::Url;

/// Decoded query parameters. Duplicate names keep the last value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryMap {
    values: HashMap<String, String>,
}

impl QueryMap {
    pub fn from_url(url: &Url) -> Self {
        let values = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        Self { values }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Parses an explicit boolean flag. Only the exact literals `true` and `false` count.
pub fn parse_bool(value: &str) -> Option<bool> {
    match value {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_percent_and_plus() {
        let url = Url::parse("firefox://open-text?text=hello%20world+again").unwrap();
        let q = QueryMap::from_url(&url);
        assert_eq!(q.get("text"), Some("hello world again"));
        assert_eq!(q.len(), 1);
    }

    #[test]
    fn empty_query() {
        let url = Url::parse("firefox://glean").unwrap();
        assert!(QueryMap::from_url(&url).is_empty());
    }

    #[test]
    fn bool_literals_only() {
        assert_eq!(parse_bool("true"), Some(true));
        assert_eq!(parse_bool("false"), Some(false));
        assert_eq!(parse_bool("TRUE"), None);
        assert_eq!(parse_bool("1"), None);
        assert_eq!(parse_bool(""), None);
    }
}
