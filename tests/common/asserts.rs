#![allow(dead_code)]

use backend::constants::header;
use backend::{CorsDecision, Headers};

pub fn assert_simple(decision: CorsDecision) -> Headers {
    match decision {
        CorsDecision::SimpleAccepted { headers } => headers,
        other => panic!("expected accepted simple decision, got {:?}", other),
    }
}

pub fn assert_preflight(decision: CorsDecision) -> Headers {
    match decision {
        CorsDecision::PreflightAccepted { headers } => headers,
        other => panic!("expected accepted preflight decision, got {:?}", other),
    }
}

pub fn assert_header_eq(headers: &Headers, name: &str, expected: &str) {
    assert_eq!(
        headers.get(name),
        Some(expected),
        "unexpected value for {name}"
    );
}

/// Checks the full trusted-origin header set for `origin` under the default
/// method and header lists.
pub fn assert_default_trusted_headers(headers: &Headers, origin: &str) {
    assert_eq!(headers.len(), header::CORS_RESPONSE_HEADERS.len());
    assert_header_eq(headers, header::ACCESS_CONTROL_ALLOW_ORIGIN, origin);
    assert_header_eq(headers, header::VARY, header::ORIGIN);
    assert_header_eq(
        headers,
        header::ACCESS_CONTROL_ALLOW_METHODS,
        "DELETE, GET, OPTIONS, POST, PUT",
    );
    assert_header_eq(
        headers,
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        "Authorization, Content-Type",
    );
    assert_header_eq(headers, header::ACCESS_CONTROL_ALLOW_CREDENTIALS, "true");
}
