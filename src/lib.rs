mod allowed_headers;
mod allowed_methods;
pub mod config;
pub mod constants;
mod context;
mod cors;
pub mod error;
mod header_builder;
mod headers;
pub mod middleware;
mod options;
mod origin;
mod policy;
mod result;
pub mod routes;
pub mod telemetry;
mod util;

pub use allowed_headers::AllowedHeaders;
pub use allowed_methods::AllowedMethods;
pub use context::RequestContext;
pub use cors::Cors;
pub use headers::Headers;
pub use options::{CorsOptions, DEFAULT_RESOURCE_PREFIX, ValidationError};
pub use origin::{AllowedOrigins, LOOPBACK_DEV_ORIGIN};
pub use policy::OriginPolicy;
pub use result::CorsDecision;
