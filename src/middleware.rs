use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{HeaderMap, HeaderName, HeaderValue, StatusCode, header::VARY},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::{debug, warn};

use crate::constants::header;
use crate::context::RequestContext;
use crate::cors::Cors;
use crate::headers::Headers;
use crate::result::CorsDecision;
use crate::util::merge_vary;

pub type SharedCors = Arc<Cors>;

/// Axum middleware enforcing the CORS policy around every route.
///
/// Preflights are answered here and never reach a handler. Every other
/// request runs the handler first and is annotated on the way out.
pub async fn cors_middleware(
    State(cors): State<SharedCors>,
    request: Request,
    next: Next,
) -> Response {
    let decision = {
        let context = RequestContext {
            method: request.method().as_str(),
            path: request.uri().path(),
            origin: header_value(request.headers(), header::ORIGIN),
        };
        let decision = cors.check(&context);
        debug!(
            method = context.method,
            path = context.path,
            origin = context.origin.unwrap_or("-"),
            outcome = decision.outcome(),
            "cors decision"
        );
        decision
    };

    match decision {
        CorsDecision::PreflightAccepted { headers } => preflight_response(Some(&headers)),
        CorsDecision::PreflightDenied => preflight_response(None),
        CorsDecision::SimpleAccepted { headers } => {
            let mut response = next.run(request).await;
            apply_headers(response.headers_mut(), &headers);
            response
        }
        CorsDecision::NotApplicable => next.run(request).await,
    }
}

fn preflight_response(headers: Option<&Headers>) -> Response {
    let mut response = StatusCode::NO_CONTENT.into_response();
    if let Some(headers) = headers {
        apply_headers(response.headers_mut(), headers);
    }
    response
}

/// Writes `headers` into `map`, replacing any value the handler set so no
/// name appears twice. `Vary` is merged with what is already there.
pub(crate) fn apply_headers(map: &mut HeaderMap, headers: &Headers) {
    for (name, value) in headers.iter() {
        let Ok(header_name) = HeaderName::try_from(name) else {
            warn!(header = name, "skipping CORS header with invalid name");
            continue;
        };

        let value = if header_name == VARY {
            let existing = map
                .get_all(VARY)
                .iter()
                .filter_map(|value| value.to_str().ok())
                .collect::<Vec<_>>()
                .join(", ");
            merge_vary(&existing, value)
        } else {
            value.to_string()
        };

        match HeaderValue::from_str(&value) {
            Ok(header_value) => {
                map.insert(header_name, header_value);
            }
            Err(_) => warn!(header = name, "skipping CORS header with invalid value"),
        }
    }
}

fn header_value<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|value| value.to_str().ok())
}

#[cfg(test)]
#[path = "middleware_test.rs"]
mod middleware_test;
