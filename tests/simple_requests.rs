mod common;

use common::asserts::{assert_simple, assert_simple_disallowed};
use common::builders::{policy, simple_request};
use common::headers::{has_header, header_value};
use ocelot_cors::constants::{header, method};
use ocelot_cors::{AllowedOrigins, CorsDecision};

mod evaluate {
    use super::*;

    #[test]
    fn should_return_wildcard_when_default_policy_handles_simple_request() {
        let policy = policy().build();

        let headers = assert_simple(simple_request().origin("https://example.com").evaluate(&policy));

        assert_eq!(
            header_value(&headers, header::ACCESS_CONTROL_ALLOW_ORIGIN),
            Some("*"),
        );
        assert!(!has_header(&headers, header::VARY));
    }

    #[test]
    fn should_return_not_applicable_when_simple_request_has_no_origin() {
        let policy = policy().build();

        let decision = simple_request().evaluate(&policy);

        assert!(matches!(decision, CorsDecision::NotApplicable));
    }

    #[test]
    fn should_mirror_origin_and_credentials_when_origin_is_listed() {
        let policy = policy()
            .origins(AllowedOrigins::list(["https://allowed.example"]))
            .credentials(true)
            .build();

        let headers =
            assert_simple(simple_request().origin("https://allowed.example").evaluate(&policy));

        assert_eq!(
            header_value(&headers, header::ACCESS_CONTROL_ALLOW_ORIGIN),
            Some("https://allowed.example"),
        );
        assert_eq!(
            header_value(&headers, header::ACCESS_CONTROL_ALLOW_CREDENTIALS),
            Some("true"),
        );
        assert!(has_header(&headers, header::VARY));
    }

    #[test]
    fn should_omit_sensitive_headers_when_simple_request_origin_disallowed() {
        let policy = policy()
            .origins(AllowedOrigins::list(["https://allowed.example"]))
            .credentials(true)
            .build();

        let headers = assert_simple_disallowed(
            simple_request().origin("https://deny.example").evaluate(&policy),
        );

        assert!(!has_header(&headers, header::ACCESS_CONTROL_ALLOW_ORIGIN));
        assert!(!has_header(&headers, header::ACCESS_CONTROL_ALLOW_CREDENTIALS));
        assert!(has_header(&headers, header::VARY));
    }

    #[test]
    fn should_still_accept_when_simple_request_method_is_outside_configured_set() {
        // Method advertisement is a preflight concern; actual requests are
        // left to the application handler.
        let policy = policy()
            .origins(AllowedOrigins::list(["https://methods.example"]))
            .methods([method::POST])
            .build();

        let headers = assert_simple(
            simple_request()
                .method(method::DELETE)
                .origin("https://methods.example")
                .evaluate(&policy),
        );

        assert_eq!(
            header_value(&headers, header::ACCESS_CONTROL_ALLOW_ORIGIN),
            Some("https://methods.example"),
        );
    }

    #[test]
    fn should_treat_bare_options_as_actual_request_when_no_request_method_header() {
        let policy = policy()
            .origins(AllowedOrigins::list(["https://allowed.example"]))
            .build();

        let decision = simple_request()
            .method(method::OPTIONS)
            .origin("https://allowed.example")
            .evaluate(&policy);

        assert!(matches!(decision, CorsDecision::SimpleAccepted { .. }));
    }
}
