/// Borrowed view of the parts of an inbound request the CORS engine reads.
///
/// `origin` is `None` for same-origin and non-browser requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestContext<'a> {
    pub method: &'a str,
    pub path: &'a str,
    pub origin: Option<&'a str>,
}
