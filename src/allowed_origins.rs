use crate::util::{equals_ignore_case, normalize_lower};
use std::collections::HashSet;

/// Request origins longer than this are disallowed without a list lookup.
const MAX_ORIGIN_LENGTH: usize = 4_096;

/// Origin admission list for cross-origin requests.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum AllowedOrigins {
    /// Wildcard: any origin is admitted and `*` is emitted. Rejected by
    /// validation when credentials are enabled.
    #[default]
    Any,
    /// Exact-match allow-list of `scheme://host` origin strings.
    List(Vec<String>),
}

/// How the origin headers should be rendered for a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum OriginDecision {
    Any,
    Mirror,
    Disallow,
}

impl AllowedOrigins {
    pub fn any() -> Self {
        Self::Any
    }

    /// Builds the allow-list, trimming whitespace and dropping
    /// case-insensitive duplicates while preserving order.
    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        let mut deduped: Vec<String> = Vec::new();
        for value in values.into_iter() {
            let trimmed = value.into().trim().to_string();
            if seen.insert(normalize_lower(&trimmed)) {
                deduped.push(trimmed);
            }
        }

        Self::List(deduped)
    }

    pub(crate) fn resolve(&self, origin: &str) -> OriginDecision {
        if origin.len() > MAX_ORIGIN_LENGTH {
            return OriginDecision::Disallow;
        }

        match self {
            Self::Any => OriginDecision::Any,
            Self::List(values) => {
                if values
                    .iter()
                    .any(|allowed| equals_ignore_case(allowed, origin))
                {
                    OriginDecision::Mirror
                } else {
                    OriginDecision::Disallow
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "allowed_origins_test.rs"]
mod allowed_origins_test;
