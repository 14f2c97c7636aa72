use crate::allowed_headers::AllowedHeaders;
use crate::allowed_methods::AllowedMethods;
use crate::options::{CorsOptions, ValidationError};
use crate::origin::AllowedOrigins;

/// Immutable trust policy consulted for every request.
///
/// Built once from validated [`CorsOptions`] and shared read-only; all queries
/// are pure.
#[derive(Clone, Debug)]
pub struct OriginPolicy {
    origins: AllowedOrigins,
    methods: AllowedMethods,
    allowed_headers: AllowedHeaders,
    resource_prefix: String,
}

impl OriginPolicy {
    pub fn new(options: CorsOptions) -> Result<Self, ValidationError> {
        options.validate()?;

        let CorsOptions {
            origins,
            methods,
            allowed_headers,
            resource_prefix,
        } = options;

        Ok(Self {
            origins,
            methods,
            allowed_headers,
            resource_prefix,
        })
    }

    /// `true` only for a non-empty origin present verbatim in the allow-list.
    pub fn is_trusted(&self, origin: &str) -> bool {
        self.origins.contains(origin)
    }

    /// Sorted method names.
    pub fn allowed_methods(&self) -> &[String] {
        self.methods.as_slice()
    }

    /// Sorted request header names.
    pub fn allowed_headers(&self) -> &[String] {
        self.allowed_headers.as_slice()
    }

    /// Whether `path` is covered by the resource prefix. The prefix matches
    /// with or without its trailing slash, so `/api` is in scope for `/api/`.
    pub fn in_scope(&self, path: &str) -> bool {
        let prefix = self.resource_prefix.as_str();
        if path.starts_with(prefix) {
            return true;
        }
        let bare = prefix.trim_end_matches('/');
        !bare.is_empty() && path == bare
    }

    pub(crate) fn methods(&self) -> &AllowedMethods {
        &self.methods
    }

    pub(crate) fn headers(&self) -> &AllowedHeaders {
        &self.allowed_headers
    }
}

#[cfg(test)]
#[path = "policy_test.rs"]
mod policy_test;
