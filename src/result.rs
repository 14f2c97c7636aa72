use crate::headers::Headers;

/// Outcome of evaluating one request against the policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsDecision {
    /// Trusted preflight. Answer with 204, an empty body and these headers.
    PreflightAccepted { headers: Headers },
    /// Untrusted or origin-less preflight. Answer with 204, an empty body and
    /// no access-control headers.
    PreflightDenied,
    /// Trusted non-preflight request. Run the handler, then add these headers.
    SimpleAccepted { headers: Headers },
    /// Out of scope, untrusted or origin-less. Run the handler and leave its
    /// response untouched.
    NotApplicable,
}

impl CorsDecision {
    /// `true` when the request must be answered without running a handler.
    pub fn ends_response(&self) -> bool {
        matches!(
            self,
            CorsDecision::PreflightAccepted { .. } | CorsDecision::PreflightDenied
        )
    }

    pub fn headers(&self) -> Option<&Headers> {
        match self {
            CorsDecision::PreflightAccepted { headers } | CorsDecision::SimpleAccepted { headers } => {
                Some(headers)
            }
            CorsDecision::PreflightDenied | CorsDecision::NotApplicable => None,
        }
    }

    pub(crate) fn outcome(&self) -> &'static str {
        match self {
            CorsDecision::PreflightAccepted { .. } => "preflight_accepted",
            CorsDecision::PreflightDenied => "preflight_denied",
            CorsDecision::SimpleAccepted { .. } => "simple_accepted",
            CorsDecision::NotApplicable => "not_applicable",
        }
    }
}
