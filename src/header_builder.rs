use crate::constants::header;
use crate::headers::Headers;
use crate::policy::OriginPolicy;

/// Builds the access-control headers for an origin the policy trusts.
///
/// `Access-Control-Allow-Private-Network` has no builder and is never emitted.
pub(crate) struct HeaderBuilder<'a> {
    policy: &'a OriginPolicy,
}

impl<'a> HeaderBuilder<'a> {
    pub(crate) fn new(policy: &'a OriginPolicy) -> Self {
        Self { policy }
    }

    pub(crate) fn build_trusted_headers(&self, origin: &str) -> Headers {
        let mut headers = Headers::new();
        headers.extend(self.build_origin_headers(origin));
        headers.extend(self.build_methods_header());
        headers.extend(self.build_allowed_headers());
        headers.extend(self.build_credentials_header());
        headers
    }

    /// Echoes the origin verbatim. Credentials are allowed, so `*` is never
    /// an option here.
    pub(crate) fn build_origin_headers(&self, origin: &str) -> Headers {
        let mut headers = Headers::new();
        headers.insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, origin);
        headers.add_vary(header::ORIGIN);
        headers
    }

    pub(crate) fn build_methods_header(&self) -> Headers {
        let mut headers = Headers::new();
        if let Some(value) = self.policy.methods().header_value() {
            headers.insert(header::ACCESS_CONTROL_ALLOW_METHODS, value);
        }
        headers
    }

    pub(crate) fn build_allowed_headers(&self) -> Headers {
        let mut headers = Headers::new();
        if let Some(value) = self.policy.headers().header_value() {
            headers.insert(header::ACCESS_CONTROL_ALLOW_HEADERS, value);
        }
        headers
    }

    pub(crate) fn build_credentials_header(&self) -> Headers {
        let mut headers = Headers::new();
        headers.insert(header::ACCESS_CONTROL_ALLOW_CREDENTIALS, "true");
        headers
    }
}

#[cfg(test)]
#[path = "header_builder_test.rs"]
mod header_builder_test;
