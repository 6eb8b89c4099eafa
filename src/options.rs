use crate::allowed_headers::AllowedHeaders;
use crate::allowed_methods::AllowedMethods;
use crate::allowed_origins::AllowedOrigins;
use crate::util::is_http_token;
use thiserror::Error;

/// Immutable CORS configuration. Built once at application startup, frozen
/// by [`crate::CorsPolicy::new`], and read on every request thereafter.
#[derive(Clone, Debug)]
pub struct CorsOptions {
    pub origins: AllowedOrigins,
    pub methods: AllowedMethods,
    pub allowed_headers: AllowedHeaders,
    pub credentials: bool,
    /// Preflight cache lifetime in seconds, emitted as
    /// `Access-Control-Max-Age` when present.
    pub max_age: Option<u64>,
    /// Status for accepted preflight responses.
    pub options_success_status: u16,
}

impl Default for CorsOptions {
    fn default() -> Self {
        Self {
            origins: AllowedOrigins::Any,
            methods: AllowedMethods::default(),
            allowed_headers: AllowedHeaders::default(),
            credentials: false,
            max_age: None,
            options_success_status: 204,
        }
    }
}

/// Rejected configurations. All checks run at construction so evaluation
/// stays infallible.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error(
        "credentialed responses require an explicit origin allow-list; a wildcard origin with credentials is forbidden by the CORS protocol"
    )]
    CredentialsRequireSpecificOrigin,
    #[error("origin allow-list cannot contain the wildcard; use AllowedOrigins::any() instead")]
    OriginListCannotContainWildcard,
    #[error("allowed origin '{0}' is missing a scheme; origins are scheme://host values")]
    OriginMissingScheme(String),
    #[error(
        "allowed headers list cannot contain the wildcard; use AllowedHeaders::MirrorRequest instead"
    )]
    AllowedHeadersListCannotContainWildcard,
    #[error("allowed method '{0}' is not a valid HTTP method token")]
    InvalidMethodToken(String),
    #[error("options success status {0} must be in the 2xx range")]
    InvalidSuccessStatus(u16),
}

impl CorsOptions {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.credentials && matches!(self.origins, AllowedOrigins::Any) {
            return Err(ValidationError::CredentialsRequireSpecificOrigin);
        }

        if let AllowedOrigins::List(origins) = &self.origins {
            for origin in origins {
                if origin == "*" {
                    return Err(ValidationError::OriginListCannotContainWildcard);
                }
                if !origin.contains("://") {
                    return Err(ValidationError::OriginMissingScheme(origin.clone()));
                }
            }
        }

        if let AllowedMethods::List(methods) = &self.methods
            && let Some(invalid) = methods.iter().find(|value| !is_http_token(value))
        {
            return Err(ValidationError::InvalidMethodToken(invalid.clone()));
        }

        if let AllowedHeaders::List(headers) = &self.allowed_headers
            && headers.iter().any(|value| value == "*")
        {
            return Err(ValidationError::AllowedHeadersListCannotContainWildcard);
        }

        if !(200..=299).contains(&self.options_success_status) {
            return Err(ValidationError::InvalidSuccessStatus(
                self.options_success_status,
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "options_test.rs"]
mod options_test;
