use crate::allowed_headers::AllowedHeaders;
use crate::allowed_origins::OriginDecision;
use crate::constants::{header, method};
use crate::context::RequestContext;
use crate::headers::HeaderCollection;
use crate::options::{CorsOptions, ValidationError};
use crate::result::CorsDecision;

/// Core CORS policy engine that evaluates requests against a
/// [`CorsOptions`].
///
/// Evaluation is a pure function of the frozen options and the current
/// request's headers; the engine holds no mutable state and is shared
/// freely across request tasks.
pub struct CorsPolicy {
    options: CorsOptions,
}

impl CorsPolicy {
    /// Validates and freezes the configuration.
    pub fn new(options: CorsOptions) -> Result<Self, ValidationError> {
        options.validate()?;
        Ok(Self { options })
    }

    /// Decide how the hosting framework should treat one request.
    ///
    /// A request without an `Origin` header is same-origin and out of
    /// scope. `OPTIONS` carrying `Access-Control-Request-Method` is a
    /// preflight; every other shape is an actual request, including bare
    /// `OPTIONS`.
    pub fn evaluate(&self, request: &RequestContext<'_>) -> CorsDecision {
        let Some(origin) = request
            .origin
            .map(str::trim)
            .filter(|value| !value.is_empty())
        else {
            return CorsDecision::NotApplicable;
        };

        if Self::is_preflight(request) {
            self.evaluate_preflight(request, origin)
        } else {
            self.evaluate_simple(origin)
        }
    }

    fn is_preflight(request: &RequestContext<'_>) -> bool {
        request.method.eq_ignore_ascii_case(method::OPTIONS)
            && request
                .access_control_request_method
                .is_some_and(|value| !value.trim().is_empty())
    }

    fn evaluate_preflight(&self, request: &RequestContext<'_>, origin: &str) -> CorsDecision {
        let mut headers = HeaderCollection::new();

        match self.options.origins.resolve(origin) {
            OriginDecision::Any => {
                headers.push(header::ACCESS_CONTROL_ALLOW_ORIGIN, "*");
            }
            OriginDecision::Mirror => {
                headers.add_vary(header::ORIGIN);
                headers.push(header::ACCESS_CONTROL_ALLOW_ORIGIN, origin);
            }
            OriginDecision::Disallow => {
                headers.add_vary(header::ORIGIN);
                return CorsDecision::PreflightRejected {
                    headers: headers.into_headers(),
                };
            }
        }

        headers.extend(self.build_credentials_header());
        headers.extend(self.build_methods_header());
        headers.extend(self.build_allowed_headers(request));
        headers.extend(self.build_max_age_header());

        CorsDecision::PreflightAccepted {
            headers: headers.into_headers(),
            status: self.options.options_success_status,
        }
    }

    // The requested method is never filtered here: the policy advertises
    // the allowed set during preflight and leaves actual-request method
    // handling to the application.
    fn evaluate_simple(&self, origin: &str) -> CorsDecision {
        let mut headers = HeaderCollection::new();

        match self.options.origins.resolve(origin) {
            OriginDecision::Any => {
                headers.push(header::ACCESS_CONTROL_ALLOW_ORIGIN, "*");
            }
            OriginDecision::Mirror => {
                headers.add_vary(header::ORIGIN);
                headers.push(header::ACCESS_CONTROL_ALLOW_ORIGIN, origin);
            }
            OriginDecision::Disallow => {
                headers.add_vary(header::ORIGIN);
                return CorsDecision::SimpleDisallowed {
                    headers: headers.into_headers(),
                };
            }
        }

        headers.extend(self.build_credentials_header());

        CorsDecision::SimpleAccepted {
            headers: headers.into_headers(),
        }
    }

    fn build_credentials_header(&self) -> HeaderCollection {
        let mut headers = HeaderCollection::with_estimate(1);
        if self.options.credentials {
            headers.push(header::ACCESS_CONTROL_ALLOW_CREDENTIALS, "true");
        }
        headers
    }

    fn build_methods_header(&self) -> HeaderCollection {
        let mut headers = HeaderCollection::with_estimate(1);
        if let Some(value) = self.options.methods.header_value() {
            headers.push(header::ACCESS_CONTROL_ALLOW_METHODS, value);
        }
        headers
    }

    fn build_allowed_headers(&self, request: &RequestContext<'_>) -> HeaderCollection {
        let mut headers = HeaderCollection::with_estimate(2);
        match &self.options.allowed_headers {
            AllowedHeaders::List(values) => {
                if !values.is_empty() {
                    headers.push(header::ACCESS_CONTROL_ALLOW_HEADERS, values.join(", "));
                }
            }
            AllowedHeaders::MirrorRequest => {
                headers.add_vary(header::ACCESS_CONTROL_REQUEST_HEADERS);
                if let Some(requested) = request
                    .access_control_request_headers
                    .filter(|value| !value.trim().is_empty())
                {
                    // Echoed verbatim, including the caller's spacing.
                    headers.push(header::ACCESS_CONTROL_ALLOW_HEADERS, requested);
                }
            }
        }
        headers
    }

    fn build_max_age_header(&self) -> HeaderCollection {
        let mut headers = HeaderCollection::with_estimate(1);
        if let Some(value) = self.options.max_age {
            headers.push(header::ACCESS_CONTROL_MAX_AGE, value.to_string());
        }
        headers
    }
}

#[cfg(test)]
#[path = "policy_test.rs"]
mod policy_test;
