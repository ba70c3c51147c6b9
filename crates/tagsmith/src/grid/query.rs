//! Lenient URL splitting and query-string editing.
//!
//! URLs are never rejected. Whatever precedes the query (scheme, host, path,
//! or nothing at all) is carried through byte-for-byte, as is the fragment.
//! Only the parameters that are explicitly set are rewritten; every other
//! parameter keeps its raw text and position.

use std::borrow::Cow;

/// A URL-like string split around its query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridUrl<'a> {
    base: &'a str,
    query: QueryParams,
    fragment: Option<&'a str>,
}

impl<'a> GridUrl<'a> {
    /// Split `url` into base, query and fragment. Never fails.
    pub fn parse(url: &'a str) -> Self {
        let (rest, fragment) = match url.split_once('#') {
            Some((rest, fragment)) => (rest, Some(fragment)),
            None => (url, None),
        };
        let (base, query) = rest.split_once('?').unwrap_or((rest, ""));
        tracing::trace!(base, query, fragment = ?fragment, "split grid url");
        Self {
            base,
            query: QueryParams::parse(query),
            fragment,
        }
    }

    pub fn query(&self) -> &QueryParams {
        &self.query
    }

    pub fn query_mut(&mut self) -> &mut QueryParams {
        &mut self.query
    }

    /// Reassemble the URL: base, `?query` (when non-empty), `#fragment`.
    pub fn to_url_string(&self) -> String {
        let mut out = String::from(self.base);
        let query = self.query.to_query_string();
        if !query.is_empty() {
            out.push('?');
            out.push_str(&query);
        }
        if let Some(fragment) = self.fragment {
            out.push('#');
            out.push_str(fragment);
        }
        out
    }
}

/// One raw `key[=value]` segment of a query string.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Param {
    key: String,
    value: Option<String>,
}

impl Param {
    fn decoded_key(&self) -> Cow<'_, str> {
        decode(&self.key)
    }
}

/// Ordered query parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    params: Vec<Param>,
}

impl QueryParams {
    /// Parse a query string without its leading `?`. Empty segments are skipped.
    pub fn parse(query: &str) -> Self {
        let params = query
            .split('&')
            .filter(|segment| !segment.is_empty())
            .map(|segment| match segment.split_once('=') {
                Some((key, value)) => Param {
                    key: key.to_string(),
                    value: Some(value.to_string()),
                },
                None => Param {
                    key: segment.to_string(),
                    value: None,
                },
            })
            .collect();
        Self { params }
    }

    /// Decoded value of the first occurrence of `key`. A bare key reads as `""`.
    pub fn get(&self, key: &str) -> Option<String> {
        self.params
            .iter()
            .find(|param| param.decoded_key() == key)
            .map(|param| decode(param.value.as_deref().unwrap_or("")).into_owned())
    }

    /// Set `key` to `value`. Both are written verbatim, without escaping.
    ///
    /// The first occurrence is updated in place and any later duplicates are
    /// dropped. An absent key is appended.
    pub fn set(&mut self, key: &str, value: &str) {
        let mut seen = false;
        self.params.retain_mut(|param| {
            if param.decoded_key() != key {
                return true;
            }
            if seen {
                return false;
            }
            seen = true;
            param.value = Some(value.to_string());
            true
        });
        if !seen {
            self.params.push(Param {
                key: key.to_string(),
                value: Some(value.to_string()),
            });
        }
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Serialize without a leading `?`.
    pub fn to_query_string(&self) -> String {
        self.params
            .iter()
            .map(|param| match &param.value {
                Some(value) => format!("{}={}", param.key, value),
                None => param.key.clone(),
            })
            .collect::<Vec<_>>()
            .join("&")
    }
}

/// Percent-decode, reading `+` as a space. Undecodable input is returned raw.
fn decode(raw: &str) -> Cow<'_, str> {
    if !raw.contains(|c: char| c == '%' || c == '+') {
        return Cow::Borrowed(raw);
    }
    let spaced = raw.replace('+', " ");
    match urlencoding::decode(&spaced) {
        Ok(decoded) => Cow::Owned(decoded.into_owned()),
        Err(_) => Cow::Borrowed(raw),
    }
}
