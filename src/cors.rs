use crate::constants::method;
use crate::context::RequestContext;
use crate::header_builder::HeaderBuilder;
use crate::options::{CorsOptions, ValidationError};
use crate::policy::OriginPolicy;
use crate::result::CorsDecision;

/// CORS decision engine.
///
/// [`Cors::check`] is a total function over the request's path, method and
/// origin. It never fails and holds no per-request state, so a single
/// instance can be shared across any number of concurrent requests.
#[derive(Clone, Debug)]
pub struct Cors {
    policy: OriginPolicy,
}

impl Cors {
    pub fn new(options: CorsOptions) -> Result<Self, ValidationError> {
        Ok(Self::from_policy(OriginPolicy::new(options)?))
    }

    pub fn from_policy(policy: OriginPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &OriginPolicy {
        &self.policy
    }

    pub fn check(&self, request: &RequestContext<'_>) -> CorsDecision {
        if !self.policy.in_scope(request.path) {
            return CorsDecision::NotApplicable;
        }

        if request.method.eq_ignore_ascii_case(method::OPTIONS) {
            self.process_preflight(request)
        } else {
            self.process_simple(request)
        }
    }

    fn process_preflight(&self, request: &RequestContext<'_>) -> CorsDecision {
        match self.trusted_origin(request) {
            Some(origin) => CorsDecision::PreflightAccepted {
                headers: HeaderBuilder::new(&self.policy).build_trusted_headers(origin),
            },
            None => CorsDecision::PreflightDenied,
        }
    }

    fn process_simple(&self, request: &RequestContext<'_>) -> CorsDecision {
        match self.trusted_origin(request) {
            Some(origin) => CorsDecision::SimpleAccepted {
                headers: HeaderBuilder::new(&self.policy).build_trusted_headers(origin),
            },
            None => CorsDecision::NotApplicable,
        }
    }

    fn trusted_origin<'r>(&self, request: &RequestContext<'r>) -> Option<&'r str> {
        request
            .origin
            .filter(|origin| self.policy.is_trusted(origin))
    }
}

#[cfg(test)]
#[path = "cors_test.rs"]
mod cors_test;
