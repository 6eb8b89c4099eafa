/// Borrowed view of the request fields CORS evaluation reads.
///
/// Adapters extract these from the hosting framework's request type once per
/// request; evaluation never looks at anything else.
#[derive(Debug, Clone)]
pub struct RequestContext<'a> {
    pub method: &'a str,
    pub origin: Option<&'a str>,
    pub access_control_request_method: Option<&'a str>,
    pub access_control_request_headers: Option<&'a str>,
}
