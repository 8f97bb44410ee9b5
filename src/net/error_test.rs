use super::*;

// =============================================================
// Classification
// =============================================================

#[test]
fn status_401_maps_to_auth_expired() {
    let err = ApiError::from_response(401, Some(&serde_json::json!({"detail": "expired"})));
    assert_eq!(err, ApiError::AuthExpired);
    assert!(err.is_auth_expired());
}

#[test]
fn rejection_preserves_detail_string() {
    let err = ApiError::from_response(400, Some(&serde_json::json!({"detail": "too long"})));
    assert_eq!(
        err,
        ApiError::Rejected {
            status: 400,
            detail: Some("too long".to_owned())
        }
    );
}

#[test]
fn rejection_without_body_has_no_detail() {
    let err = ApiError::from_response(500, None);
    assert_eq!(
        err,
        ApiError::Rejected {
            status: 500,
            detail: None
        }
    );
}

#[test]
fn non_string_detail_is_ignored() {
    let err = ApiError::from_response(400, Some(&serde_json::json!({"detail": 17})));
    assert_eq!(
        err,
        ApiError::Rejected {
            status: 400,
            detail: None
        }
    );
}

// =============================================================
// User messages
// =============================================================

#[test]
fn user_message_prefers_server_detail_verbatim() {
    let err = ApiError::Rejected {
        status: 400,
        detail: Some("Текст сообщения слишком длинный".to_owned()),
    };
    assert_eq!(
        err.user_message("Failed to send message"),
        "Текст сообщения слишком длинный"
    );
}

#[test]
fn user_message_falls_back_for_network_errors() {
    let err = ApiError::Network("connection refused".to_owned());
    assert_eq!(
        err.user_message("Failed to load messages"),
        "Failed to load messages"
    );
}

#[test]
fn user_message_falls_back_when_detail_is_absent() {
    let err = ApiError::Rejected {
        status: 502,
        detail: None,
    };
    assert_eq!(err.user_message("Failed to send message"), "Failed to send message");
}
