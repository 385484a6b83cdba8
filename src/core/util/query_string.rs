use std::borrow::Cow;

use tracing::debug;

/// Ordered key/value parameters. Keys are unique: re-inserting a key keeps
/// its original position and replaces the value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.pairs.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = value,
            None => self.pairs.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Rewrites every value, keys untouched.
    pub fn map_values<F>(self, mut f: F) -> Self
    where
        F: FnMut(&str) -> String,
    {
        Self {
            pairs: self
                .pairs
                .into_iter()
                .map(|(k, v)| {
                    let mapped = f(&v);
                    (k, mapped)
                })
                .collect(),
        }
    }

    pub fn to_query_string(&self) -> String {
        encode_pairs(self.iter())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = QueryParams::new();
        for (k, v) in iter {
            params.insert(k, v);
        }
        params
    }
}

/// Percent-encodes pairs as `k1=v1&k2=v2`.
pub fn encode_pairs<'a, I>(pairs: I) -> String
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    pairs
        .into_iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Parses a URL-encoded query string. Empty or unparsable input yields
/// empty params rather than an error.
pub fn parse_query_string(raw: &str) -> QueryParams {
    let mut params = QueryParams::new();

    for pair in raw.trim().trim_start_matches('?').split('&') {
        if pair.is_empty() {
            continue;
        }

        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        let (Ok(key), Ok(value)) = (decode(key), decode(value)) else {
            debug!(pair, "Skipping undecodable query-string pair");
            continue;
        };

        if key.is_empty() {
            continue;
        }
        params.insert(key, value);
    }

    params
}

fn decode(part: &str) -> Result<String, std::string::FromUtf8Error> {
    let spaced = part.replace('+', " ");
    urlencoding::decode(&spaced).map(Cow::into_owned)
}
