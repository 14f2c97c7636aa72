use crate::constants::header;
use crate::util::is_http_token;
use std::collections::HashSet;

/// Request headers advertised in `Access-Control-Allow-Headers`.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct AllowedHeaders(Vec<String>);

impl AllowedHeaders {
    /// Header names compare case-insensitively, so duplicates differing only
    /// in case collapse to the first spelling. The result is sorted.
    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        let mut deduped: Vec<String> = Vec::new();
        for value in values.into_iter() {
            let trimmed = value.into().trim().to_string();
            if trimmed.is_empty() {
                continue;
            }
            let key = trimmed.to_ascii_lowercase();
            if seen.insert(key) {
                deduped.push(trimmed);
            }
        }
        deduped.sort();

        Self(deduped)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn header_value(&self) -> Option<String> {
        if self.0.is_empty() {
            None
        } else {
            Some(self.0.join(", "))
        }
    }

    pub(crate) fn first_invalid(&self) -> Option<&str> {
        self.0
            .iter()
            .map(String::as_str)
            .find(|value| !is_http_token(value))
    }
}

impl Default for AllowedHeaders {
    fn default() -> Self {
        Self::list([header::CONTENT_TYPE, header::AUTHORIZATION])
    }
}

#[cfg(test)]
#[path = "allowed_headers_test.rs"]
mod allowed_headers_test;
