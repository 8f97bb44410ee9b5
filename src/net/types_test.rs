use super::*;

// =============================================================
// Message decoding
// =============================================================

#[test]
fn message_decodes_integer_id_and_numeric_timestamp() {
    let msg: Message = serde_json::from_value(serde_json::json!({
        "id": 1,
        "username": "a",
        "text": "hi",
        "created_at": 1000
    }))
    .expect("message");
    assert_eq!(msg.id, Some(MessageId::Int(1)));
    assert_eq!(msg.created_at, Timestamp::Seconds(1000.0));
}

#[test]
fn message_decodes_string_id_and_string_timestamp() {
    let msg: Message = serde_json::from_value(serde_json::json!({
        "id": "m-7",
        "username": "a",
        "text": "hi",
        "created_at": "2024-05-01T12:00:00Z"
    }))
    .expect("message");
    assert_eq!(msg.id, Some(MessageId::Text("m-7".to_owned())));
    assert_eq!(
        msg.created_at,
        Timestamp::Text("2024-05-01T12:00:00Z".to_owned())
    );
}

#[test]
fn message_id_is_optional() {
    let msg: Message = serde_json::from_value(serde_json::json!({
        "username": "a",
        "text": "hi",
        "created_at": 1000
    }))
    .expect("message");
    assert!(msg.id.is_none());
}

// =============================================================
// Feed decoding
// =============================================================

#[test]
fn feed_array_decodes_to_messages() {
    let feed = messages_from_value(serde_json::json!([
        {"id": 1, "username": "a", "text": "hi", "created_at": 1000}
    ]));
    assert_eq!(feed.len(), 1);
    assert_eq!(feed[0].text, "hi");
}

#[test]
fn non_array_feed_is_treated_as_empty() {
    assert!(messages_from_value(serde_json::json!({"detail": "nope"})).is_empty());
    assert!(messages_from_value(serde_json::json!("hi")).is_empty());
    assert!(messages_from_value(serde_json::Value::Null).is_empty());
}

#[test]
fn undecodable_elements_are_skipped() {
    let feed = messages_from_value(serde_json::json!([
        {"id": 1, "username": "a", "text": "hi", "created_at": 1000},
        {"unexpected": true},
        {"id": 2, "username": "b", "text": "yo", "created_at": 1001}
    ]));
    assert_eq!(feed.len(), 2);
    assert_eq!(feed[1].username, "b");
}

// =============================================================
// Auth / profile shapes
// =============================================================

#[test]
fn auth_response_decodes() {
    let resp: AuthResponse =
        serde_json::from_value(serde_json::json!({"token": "T1", "username": "bob"}))
            .expect("auth response");
    assert_eq!(resp.token, "T1");
    assert_eq!(resp.username, "bob");
}

#[test]
fn profile_created_at_is_optional() {
    let profile: Profile =
        serde_json::from_value(serde_json::json!({"username": "bob"})).expect("profile");
    assert!(profile.created_at.is_none());
}
