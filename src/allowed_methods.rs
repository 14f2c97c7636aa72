use crate::constants::method;
use crate::util::is_http_token;

/// Methods advertised in `Access-Control-Allow-Methods`.
///
/// Stored sorted and de-duplicated so the header value is deterministic.
/// Method names are case-sensitive and kept as given.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct AllowedMethods(Vec<String>);

impl AllowedMethods {
    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut methods: Vec<String> = values
            .into_iter()
            .map(|value| value.into().trim().to_string())
            .filter(|value| !value.is_empty())
            .collect();
        methods.sort();
        methods.dedup();
        Self(methods)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Comma-space joined value, or `None` when no methods are configured.
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

impl Default for AllowedMethods {
    fn default() -> Self {
        Self::list([
            method::GET,
            method::POST,
            method::PUT,
            method::DELETE,
            method::OPTIONS,
        ])
    }
}

#[cfg(test)]
#[path = "allowed_methods_test.rs"]
mod allowed_methods_test;
