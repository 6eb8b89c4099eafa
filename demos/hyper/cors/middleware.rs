use std::future::Future;
use std::pin::Pin;

use http_body_util::Full;
use hyper::body::{Bytes, Incoming};
use hyper::http::StatusCode;
use hyper::http::header::{HeaderMap, HeaderName, HeaderValue};
use hyper::service::Service;
use hyper::{Request, Response};
use ocelot_cors::{CorsDecision, CorsPolicy, Headers, RequestContext, constants::header};

type BoxFuture<T> = Pin<Box<dyn Future<Output = T> + Send>>;

pub type CorsBody = Full<Bytes>;

/// Hyper middleware following the pattern from the official
/// "Getting Started with a Server Middleware" guide:
/// https://hyper.rs/guides/1/server/middleware/
#[derive(Clone)]
pub struct OcelotCors<S> {
    inner: S,
    policy: &'static CorsPolicy,
}

impl<S> OcelotCors<S> {
    pub fn new(policy: &'static CorsPolicy, inner: S) -> Self {
        Self { inner, policy }
    }
}

impl<S> Service<Request<Incoming>> for OcelotCors<S>
where
    S: Service<Request<Incoming>, Response = Response<CorsBody>> + Clone + Send + 'static,
    S::Future: Send + 'static,
    S::Error: Send + 'static,
{
    type Response = Response<CorsBody>;
    type Error = S::Error;
    type Future = BoxFuture<Result<Self::Response, Self::Error>>;

    fn call(&self, req: Request<Incoming>) -> Self::Future {
        let owned_ctx = OwnedRequestContext::from_request(&req);
        let decision = self.policy.evaluate(&owned_ctx.as_request_context());

        match decision {
            CorsDecision::PreflightAccepted { headers, status } => {
                let status = StatusCode::from_u16(status).unwrap_or(StatusCode::NO_CONTENT);
                Box::pin(async move { Ok(preflight_response(status, headers)) })
            }
            CorsDecision::PreflightRejected { headers } => {
                Box::pin(async move { Ok(preflight_rejection(headers)) })
            }
            CorsDecision::SimpleAccepted { headers }
            | CorsDecision::SimpleDisallowed { headers } => {
                let inner = self.inner.clone();
                Box::pin(async move {
                    let mut response = inner.call(req).await?;
                    apply_headers(response.headers_mut(), &headers);
                    Ok(response)
                })
            }
            CorsDecision::NotApplicable => {
                let inner = self.inner.clone();
                Box::pin(async move { inner.call(req).await })
            }
        }
    }
}

fn preflight_response(status: StatusCode, headers: Headers) -> Response<CorsBody> {
    let mut builder = Response::builder().status(status);
    if let Some(map) = builder.headers_mut() {
        apply_headers(map, &headers);
    }
    builder
        .body(Full::new(Bytes::new()))
        .expect("failed to build preflight response")
}

fn preflight_rejection(headers: Headers) -> Response<CorsBody> {
    let mut builder = Response::builder().status(StatusCode::FORBIDDEN);
    if let Some(map) = builder.headers_mut() {
        apply_headers(map, &headers);
    }
    builder
        .body(Full::new(Bytes::from_static(
            b"Preflight rejected: origin not allowed",
        )))
        .expect("failed to build rejection response")
}

fn apply_headers(map: &mut HeaderMap, headers: &Headers) {
    for (name, value) in headers.iter() {
        if let (Ok(header_name), Ok(header_value)) = (
            HeaderName::try_from(name.as_str()),
            HeaderValue::from_str(value),
        ) {
            map.insert(header_name, header_value);
        }
    }
}

struct OwnedRequestContext {
    method: String,
    origin: Option<String>,
    access_control_request_method: Option<String>,
    access_control_request_headers: Option<String>,
}

impl OwnedRequestContext {
    fn from_request(request: &Request<Incoming>) -> Self {
        let headers = request.headers();

        Self {
            method: request.method().as_str().to_string(),
            origin: header_value(headers, header::ORIGIN),
            access_control_request_method: header_value(
                headers,
                header::ACCESS_CONTROL_REQUEST_METHOD,
            ),
            access_control_request_headers: header_value(
                headers,
                header::ACCESS_CONTROL_REQUEST_HEADERS,
            ),
        }
    }

    fn as_request_context(&self) -> RequestContext<'_> {
        RequestContext {
            method: &self.method,
            origin: self.origin.as_deref(),
            access_control_request_method: self.access_control_request_method.as_deref(),
            access_control_request_headers: self.access_control_request_headers.as_deref(),
        }
    }
}

fn header_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.to_string())
}
