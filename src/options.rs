use crate::allowed_headers::AllowedHeaders;
use crate::allowed_methods::AllowedMethods;
use crate::origin::AllowedOrigins;
use crate::util::is_header_safe;
use thiserror::Error;

/// Path prefix the CORS layer applies to by default.
pub const DEFAULT_RESOURCE_PREFIX: &str = "/api/";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CorsOptions {
    pub origins: AllowedOrigins,
    pub methods: AllowedMethods,
    pub allowed_headers: AllowedHeaders,
    /// Requests whose path falls outside this prefix are left untouched.
    pub resource_prefix: String,
}

impl Default for CorsOptions {
    fn default() -> Self {
        Self {
            origins: AllowedOrigins::default(),
            methods: AllowedMethods::default(),
            allowed_headers: AllowedHeaders::default(),
            resource_prefix: DEFAULT_RESOURCE_PREFIX.to_string(),
        }
    }
}

impl CorsOptions {
    pub fn validate(&self) -> Result<(), ValidationError> {
        for origin in self.origins.iter() {
            if origin.is_empty() {
                return Err(ValidationError::EmptyOrigin);
            }
            if origin == "*" {
                return Err(ValidationError::WildcardOrigin);
            }
            if !is_header_safe(origin) {
                return Err(ValidationError::InvalidOrigin(origin.to_string()));
            }
        }

        if let Some(method) = self.methods.first_invalid() {
            return Err(ValidationError::InvalidMethod(method.to_string()));
        }

        if let Some(name) = self.allowed_headers.first_invalid() {
            return Err(ValidationError::InvalidHeaderName(name.to_string()));
        }

        if !self.resource_prefix.starts_with('/') {
            return Err(ValidationError::InvalidResourcePrefix(
                self.resource_prefix.clone(),
            ));
        }

        Ok(())
    }
}

/// Configuration errors caught when the policy is built.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("allowed origins must not contain empty entries")]
    EmptyOrigin,
    #[error(
        "allowed origins must not contain the wildcard `*`; credentials are always allowed, so every origin is echoed explicitly"
    )]
    WildcardOrigin,
    #[error("allowed origin `{0}` cannot be sent as a header value")]
    InvalidOrigin(String),
    #[error("allowed method `{0}` is not a valid HTTP token")]
    InvalidMethod(String),
    #[error("allowed header `{0}` is not a valid HTTP header name")]
    InvalidHeaderName(String),
    #[error("resource prefix `{0}` must start with `/`")]
    InvalidResourcePrefix(String),
}

#[cfg(test)]
#[path = "options_test.rs"]
mod options_test;
