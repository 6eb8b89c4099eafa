use crate::headers::Headers;

/// Decision returned by the policy engine. Each variant tells the hosting
/// framework how to treat the current request.
#[derive(Debug, Clone)]
pub enum CorsDecision {
    /// Allowed preflight. Terminal: answer with `status` and `headers`
    /// without invoking the application handler.
    PreflightAccepted { headers: Headers, status: u16 },
    /// Preflight from a disallowed origin. Terminal: answer without any
    /// `Access-Control-Allow-*` headers; `headers` carries only cache
    /// correctness (`Vary`). The rejection status is the adapter's choice.
    PreflightRejected { headers: Headers },
    /// Cross-origin actual request from an allowed origin. Invoke the
    /// handler, then attach `headers` to its response.
    SimpleAccepted { headers: Headers },
    /// Cross-origin actual request from a disallowed origin. Invoke the
    /// handler anyway; attach only `headers` (`Vary`), never allow headers.
    /// The browser enforces the denial by their absence.
    SimpleDisallowed { headers: Headers },
    /// Same-origin request. Pass through unmodified.
    NotApplicable,
}
