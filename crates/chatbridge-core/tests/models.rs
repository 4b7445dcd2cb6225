use chatbridge_core::error::CoreError;
use chatbridge_core::models::chat::{ChatRequest, ChatResponse};
use chatbridge_core::models::turn::Turn;

#[test]
fn request_uses_camel_case_history_field() {
    let req: ChatRequest = serde_json::from_str(
        r#"{
            "message": "How are you?",
            "conversationHistory": [
                {"role": "user", "content": "Hello"},
                {"role": "assistant", "content": "Hi there"}
            ]
        }"#,
    )
    .unwrap();

    assert_eq!(req.message, "How are you?");
    assert_eq!(
        req.conversation_history,
        vec![Turn::user("Hello"), Turn::assistant("Hi there")]
    );
}

#[test]
fn missing_history_defaults_to_empty() {
    let req: ChatRequest = serde_json::from_str(r#"{"message": "Hello"}"#).unwrap();
    assert!(req.conversation_history.is_empty());
}

#[test]
fn unknown_role_is_rejected() {
    let err = ChatRequest::from_slice(
        br#"{"message": "x", "conversationHistory": [{"role": "system", "content": "y"}]}"#,
    )
    .unwrap_err();
    assert!(matches!(err, CoreError::InvalidRequest(ref msg) if msg.contains("system")));
}

#[test]
fn from_slice_rejects_non_json_and_blank_messages() {
    assert!(matches!(
        ChatRequest::from_slice(b"message=Hello"),
        Err(CoreError::InvalidRequest(_))
    ));
    assert!(matches!(
        ChatRequest::from_slice(br#"{"conversationHistory": []}"#),
        Err(CoreError::InvalidRequest(_))
    ));
    assert!(matches!(
        ChatRequest::from_slice(br#"{"message": " "}"#),
        Err(CoreError::EmptyMessage)
    ));

    let req = ChatRequest::from_slice(br#"{"message": "Hello"}"#).unwrap();
    assert_eq!(req.message, "Hello");
}

#[test]
fn empty_and_blank_messages_fail_validation() {
    for message in ["", "   ", "\n\t"] {
        let req = ChatRequest {
            message: message.to_string(),
            conversation_history: Vec::new(),
        };
        assert!(matches!(req.validate(), Err(CoreError::EmptyMessage)));
    }

    let req = ChatRequest {
        message: "Hello".to_string(),
        conversation_history: Vec::new(),
    };
    assert!(req.validate().is_ok());
}

#[test]
fn response_serializes_with_lowercase_roles() {
    let resp = ChatResponse::new(
        "Hi there".to_string(),
        vec![Turn::user("Hello"), Turn::assistant("Hi there")],
    );
    let json = serde_json::to_value(&resp).unwrap();

    assert_eq!(
        json,
        serde_json::json!({
            "success": true,
            "response": "Hi there",
            "conversationHistory": [
                {"role": "user", "content": "Hello"},
                {"role": "assistant", "content": "Hi there"}
            ]
        })
    );
}
