use indexmap::IndexSet;

/// Origin the local frontend dev server is served from.
pub const LOOPBACK_DEV_ORIGIN: &str = "http://127.0.0.1:5173";

/// Allow-list of trusted origins.
///
/// Membership is an exact, case-sensitive comparison of the full
/// `scheme://host[:port]` string. There is no wildcard or suffix matching.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AllowedOrigins(IndexSet<String>);

impl AllowedOrigins {
    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(values.into_iter().map(Into::into).collect())
    }

    pub fn contains(&self, origin: &str) -> bool {
        !origin.is_empty() && self.0.contains(origin)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for AllowedOrigins {
    fn default() -> Self {
        Self::list([LOOPBACK_DEV_ORIGIN])
    }
}

#[cfg(test)]
#[path = "origin_test.rs"]
mod origin_test;
