#![allow(dead_code)]

use backend::constants::method;
use backend::{
    AllowedHeaders, AllowedMethods, AllowedOrigins, Cors, CorsDecision, CorsOptions,
    RequestContext,
};

#[derive(Default)]
pub struct CorsBuilder {
    origins: Option<AllowedOrigins>,
    methods: Option<AllowedMethods>,
    allowed_headers: Option<AllowedHeaders>,
    resource_prefix: Option<String>,
}

impl CorsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn origins<I, S>(mut self, origins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.origins = Some(AllowedOrigins::list(origins));
        self
    }

    pub fn methods<I, S>(mut self, methods: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.methods = Some(AllowedMethods::list(methods));
        self
    }

    pub fn allowed_headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_headers = Some(AllowedHeaders::list(headers));
        self
    }

    pub fn resource_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.resource_prefix = Some(prefix.into());
        self
    }

    pub fn build(self) -> Cors {
        let CorsOptions {
            origins: default_origins,
            methods: default_methods,
            allowed_headers: default_allowed_headers,
            resource_prefix: default_resource_prefix,
        } = CorsOptions::default();

        Cors::new(CorsOptions {
            origins: self.origins.unwrap_or(default_origins),
            methods: self.methods.unwrap_or(default_methods),
            allowed_headers: self.allowed_headers.unwrap_or(default_allowed_headers),
            resource_prefix: self.resource_prefix.unwrap_or(default_resource_prefix),
        })
        .expect("valid CORS configuration")
    }
}

pub struct RequestBuilder {
    method: String,
    path: String,
    origin: Option<String>,
}

impl RequestBuilder {
    fn with_method(method: &str) -> Self {
        Self {
            method: method.into(),
            path: "/api/health".into(),
            origin: None,
        }
    }

    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = method.into();
        self
    }

    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    pub fn check(&self, cors: &Cors) -> CorsDecision {
        let ctx = RequestContext {
            method: &self.method,
            path: &self.path,
            origin: self.origin.as_deref(),
        };
        cors.check(&ctx)
    }
}

pub fn cors() -> CorsBuilder {
    CorsBuilder::new()
}

pub fn simple_request() -> RequestBuilder {
    RequestBuilder::with_method(method::GET)
}

pub fn preflight_request() -> RequestBuilder {
    RequestBuilder::with_method(method::OPTIONS)
}
