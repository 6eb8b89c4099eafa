//! The compiled-in policy for the Ocelot Training services.

use once_cell::sync::Lazy;

use crate::allowed_headers::AllowedHeaders;
use crate::allowed_methods::AllowedMethods;
use crate::allowed_origins::AllowedOrigins;
use crate::constants::method;
use crate::options::CorsOptions;
use crate::policy::CorsPolicy;

/// Origins allowed to make credentialed cross-origin calls: the apex
/// domain and its public subdomains.
pub const ALLOWED_ORIGINS: [&str; 3] = [
    "https://ocelottraining.com",
    "https://www.ocelottraining.com",
    "https://app.ocelottraining.com",
];

/// Methods advertised on preflight responses, in advertised order.
pub const ALLOWED_METHODS: [&str; 5] = [
    method::GET,
    method::POST,
    method::PUT,
    method::DELETE,
    method::OPTIONS,
];

/// Preflight cache lifetime advertised via `Access-Control-Max-Age`.
pub const PREFLIGHT_MAX_AGE_SECS: u64 = 1_800;

/// The site configuration: exact origin allow-list, fixed method set,
/// reflected request headers, credentials enabled.
pub fn options() -> CorsOptions {
    CorsOptions {
        origins: AllowedOrigins::list(ALLOWED_ORIGINS),
        methods: AllowedMethods::list(ALLOWED_METHODS),
        allowed_headers: AllowedHeaders::MirrorRequest,
        credentials: true,
        max_age: Some(PREFLIGHT_MAX_AGE_SECS),
        options_success_status: 204,
    }
}

static POLICY: Lazy<CorsPolicy> =
    Lazy::new(|| CorsPolicy::new(options()).expect("site CORS configuration is valid"));

/// Shared policy instance, built on first use and reused for the process
/// lifetime. Never rebuilt or mutated.
pub fn policy() -> &'static CorsPolicy {
    &POLICY
}

#[cfg(test)]
#[path = "site_test.rs"]
mod site_test;
