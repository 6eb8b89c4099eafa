use std::future::{Ready, ready};
use std::pin::Pin;
use std::task::{Context, Poll};

use actix_web::body::{EitherBody, MessageBody};
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::{
    StatusCode,
    header::{HeaderMap, HeaderName, HeaderValue},
};
use actix_web::{Error, HttpRequest, HttpResponse, HttpResponseBuilder};
use ocelot_cors::{CorsDecision, CorsPolicy, Headers, RequestContext, constants::header};

type LocalBoxFuture<'a, T> = Pin<Box<dyn std::future::Future<Output = T> + 'a>>;

pub struct OcelotCors {
    policy: &'static CorsPolicy,
}

impl OcelotCors {
    pub fn new(policy: &'static CorsPolicy) -> Self {
        Self { policy }
    }
}

impl<S, B> Transform<S, ServiceRequest> for OcelotCors
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: MessageBody + 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = OcelotCorsMiddleware<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(OcelotCorsMiddleware {
            service,
            policy: self.policy,
        }))
    }
}

pub struct OcelotCorsMiddleware<S> {
    service: S,
    policy: &'static CorsPolicy,
}

impl<S, B> Service<ServiceRequest> for OcelotCorsMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: MessageBody + 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let owned_ctx = OwnedRequestContext::from_request(req.request());
        let decision = self.policy.evaluate(&owned_ctx.as_request_context());

        match decision {
            CorsDecision::PreflightAccepted { headers, status } => {
                let status = StatusCode::from_u16(status).unwrap_or(StatusCode::NO_CONTENT);
                Box::pin(async move { Ok(preflight_response(req, status, headers)) })
            }
            CorsDecision::PreflightRejected { headers } => {
                Box::pin(async move { Ok(preflight_rejection(req, headers)) })
            }
            CorsDecision::SimpleAccepted { headers }
            | CorsDecision::SimpleDisallowed { headers } => {
                let fut = self.service.call(req);
                Box::pin(async move {
                    let mut res = fut.await?.map_into_left_body();
                    apply_headers(res.headers_mut(), &headers);
                    Ok(res)
                })
            }
            CorsDecision::NotApplicable => {
                let fut = self.service.call(req);
                Box::pin(async move { Ok(fut.await?.map_into_left_body()) })
            }
        }
    }
}

fn preflight_response<B>(
    req: ServiceRequest,
    status: StatusCode,
    headers: Headers,
) -> ServiceResponse<EitherBody<B>> {
    let mut builder = HttpResponse::build(status);
    insert_headers(&mut builder, &headers);
    let response = builder.finish().map_into_right_body();
    req.into_response(response)
}

fn preflight_rejection<B>(req: ServiceRequest, headers: Headers) -> ServiceResponse<EitherBody<B>> {
    let mut builder = HttpResponse::Forbidden();
    insert_headers(&mut builder, &headers);
    let response = builder
        .body("Preflight rejected: origin not allowed".to_string())
        .map_into_right_body();
    req.into_response(response)
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

fn insert_headers(builder: &mut HttpResponseBuilder, headers: &Headers) {
    for (name, value) in headers.iter() {
        if let (Ok(header_name), Ok(header_value)) = (
            HeaderName::try_from(name.as_str()),
            HeaderValue::from_str(value),
        ) {
            builder.insert_header((header_name, header_value));
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
    fn from_request(request: &HttpRequest) -> Self {
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
