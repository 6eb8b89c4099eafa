#![allow(dead_code)]

use crate::common::headers::{header_value, vary_values};
use ocelot_cors::constants::header;
use ocelot_cors::{CorsDecision, Headers};
use std::collections::HashSet;

pub fn assert_simple(decision: CorsDecision) -> Headers {
    match decision {
        CorsDecision::SimpleAccepted { headers } => headers,
        other => panic!("expected accepted simple decision, got {other:?}"),
    }
}

pub fn assert_simple_disallowed(decision: CorsDecision) -> Headers {
    match decision {
        CorsDecision::SimpleDisallowed { headers } => headers,
        other => panic!("expected disallowed simple decision, got {other:?}"),
    }
}

pub fn assert_preflight(decision: CorsDecision) -> (Headers, u16) {
    match decision {
        CorsDecision::PreflightAccepted { headers, status } => (headers, status),
        other => panic!("expected accepted preflight decision, got {other:?}"),
    }
}

pub fn assert_preflight_rejected(decision: CorsDecision) -> Headers {
    match decision {
        CorsDecision::PreflightRejected { headers } => headers,
        other => panic!("expected rejected preflight decision, got {other:?}"),
    }
}

pub fn assert_header_eq(headers: &Headers, name: &str, expected: &str) {
    assert_eq!(
        header_value(headers, name),
        Some(expected),
        "unexpected value for header '{name}'",
    );
}

pub fn assert_vary_eq<I, S>(headers: &Headers, expected: I)
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let expected: HashSet<String> = expected.into_iter().map(Into::into).collect();
    assert_eq!(vary_values(headers), expected);
}

pub fn assert_vary_is_empty(headers: &Headers) {
    assert!(
        header_value(headers, header::VARY).is_none(),
        "expected Vary to be absent",
    );
}
