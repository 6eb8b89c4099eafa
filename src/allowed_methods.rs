use crate::constants::method;
use std::collections::HashSet;

/// Configuration for the `Access-Control-Allow-Methods` response header.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AllowedMethods {
    /// Emit the wildcard `*`.
    Any,
    /// Emit the configured tokens joined by `", "`. Case is preserved to
    /// honor caller intent.
    List(Vec<String>),
}

impl AllowedMethods {
    /// Construct an explicit method list, dropping case-insensitive
    /// duplicates while keeping the first spelling.
    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        let mut deduped: Vec<String> = Vec::new();
        for value in values.into_iter() {
            let value = value.into();
            if seen.insert(value.to_ascii_lowercase()) {
                deduped.push(value);
            }
        }

        Self::List(deduped)
    }

    /// Construct the wildcard variant (`*`).
    pub fn any() -> Self {
        Self::Any
    }

    /// Return the header value representation, if any.
    pub fn header_value(&self) -> Option<String> {
        match self {
            AllowedMethods::Any => Some("*".to_string()),
            AllowedMethods::List(values) if values.is_empty() => None,
            AllowedMethods::List(values) => Some(values.join(", ")),
        }
    }

    pub fn into_inner(self) -> Vec<String> {
        match self {
            AllowedMethods::Any => vec!["*".to_string()],
            AllowedMethods::List(values) => values,
        }
    }
}

impl Default for AllowedMethods {
    fn default() -> Self {
        Self::list([
            method::GET,
            method::HEAD,
            method::PUT,
            method::PATCH,
            method::POST,
            method::DELETE,
        ])
    }
}

#[cfg(test)]
#[path = "allowed_methods_test.rs"]
mod allowed_methods_test;
