//! Tests for the error system.

use lectio::error::*;

#[test]
fn error_api_creation() {
    let err = LectioError::api(404, "Not found");
    assert!(matches!(&err, LectioError::Api { status: 404, .. }));
    assert_eq!(err.status(), Some(404));
    assert_eq!(err.to_string(), "API error (status 404): Not found");
}

#[test]
fn error_helper_mappings_are_stable_for_major_variants() {
    struct Case {
        error: LectioError,
        expected_category: ErrorCategory,
        expected_recovery: RecoverySuggestion,
    }

    let network_error = reqwest::Client::new()
        .get("http://[::1")
        .build()
        .unwrap_err();
    let serde_error = serde_json::from_str::<serde_json::Value>("{not-json}").unwrap_err();

    let cases = vec![
        Case {
            error: LectioError::Authentication("bad-key".to_string()),
            expected_category: ErrorCategory::Authentication,
            expected_recovery: RecoverySuggestion::CheckCredentials,
        },
        Case {
            error: LectioError::RateLimited {
                retry_after_ms: Some(1000),
            },
            expected_category: ErrorCategory::RateLimit,
            expected_recovery: RecoverySuggestion::TryAgainLater,
        },
        Case {
            error: LectioError::Configuration("bad-config".to_string()),
            expected_category: ErrorCategory::Configuration,
            expected_recovery: RecoverySuggestion::CheckConfiguration,
        },
        Case {
            error: LectioError::Network(network_error),
            expected_category: ErrorCategory::Network,
            expected_recovery: RecoverySuggestion::TryAgainLater,
        },
        Case {
            error: LectioError::Serialization(serde_error),
            expected_category: ErrorCategory::Serialization,
            expected_recovery: RecoverySuggestion::ContactSupport,
        },
        Case {
            error: LectioError::malformed("openai", "no choices"),
            expected_category: ErrorCategory::Serialization,
            expected_recovery: RecoverySuggestion::ContactSupport,
        },
        Case {
            error: LectioError::api(401, "Unauthorized"),
            expected_category: ErrorCategory::Authentication,
            expected_recovery: RecoverySuggestion::CheckCredentials,
        },
        Case {
            error: LectioError::api(503, "Unavailable"),
            expected_category: ErrorCategory::Server,
            expected_recovery: RecoverySuggestion::TryAgainLater,
        },
        Case {
            error: LectioError::api(400, "Bad request"),
            expected_category: ErrorCategory::Api,
            expected_recovery: RecoverySuggestion::ContactSupport,
        },
        Case {
            error: LectioError::Resource("read-only".to_string()),
            expected_category: ErrorCategory::Resource,
            expected_recovery: RecoverySuggestion::CheckResourceDirectory,
        },
        Case {
            error: LectioError::Export("zip".to_string()),
            expected_category: ErrorCategory::Export,
            expected_recovery: RecoverySuggestion::CheckOutputDirectory,
        },
    ];

    for case in cases {
        assert_eq!(case.error.category(), case.expected_category, "{}", case.error);
        assert_eq!(
            case.error.recovery_suggestion(),
            case.expected_recovery,
            "{}",
            case.error
        );
        assert!(!case.error.recovery_suggestion().hint().is_empty());
    }
}
