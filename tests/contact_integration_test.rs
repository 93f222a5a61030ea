use httpmock::prelude::*;
use portfolio_gateway::utils::error::ErrorCategory;
use portfolio_gateway::{ContactMessage, ContactService, EnvironmentConfig, GatewayError};

fn sample_message() -> ContactMessage {
    ContactMessage::new("A", "a@b.com", "S", "M")
}

#[tokio::test]
async fn test_send_message_posts_payload_once() {
    let server = MockServer::start();
    let contact_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/api/contact")
            .header("content-type", "application/json")
            .json_body(serde_json::json!({
                "name": "A",
                "email": "a@b.com",
                "subject": "S",
                "message": "M"
            }));
        then.status(200).json_body(serde_json::json!({
            "success": true,
            "message": "Message received. I'll get back to you soon!"
        }));
    });

    let config = EnvironmentConfig::new(server.url("/api"), "/");
    let service = ContactService::new(&config);

    let response = service.send_message(&sample_message()).await.unwrap();

    assert_eq!(response.status(), 200);
    contact_mock.assert();
}

#[tokio::test]
async fn test_response_is_returned_unmodified() {
    let server = MockServer::start();
    let contact_mock = server.mock(|when, then| {
        when.method(POST).path("/api/contact");
        then.status(201)
            .header("x-request-id", "abc-123")
            .body("raw body");
    });

    let config = EnvironmentConfig::new(server.url("/api"), "/");
    let service = ContactService::new(&config);

    let response = service.send_message(&sample_message()).await.unwrap();
    assert_eq!(response.status(), 201);
    assert_eq!(response.headers()["x-request-id"], "abc-123");
    assert_eq!(response.text().await.unwrap(), "raw body");
    contact_mock.assert();
}

#[tokio::test]
async fn test_send_and_read_decodes_envelope() {
    let server = MockServer::start();
    let contact_mock = server.mock(|when, then| {
        when.method(POST).path("/api/contact");
        then.status(200).json_body(serde_json::json!({
            "success": true,
            "message": "Message received. I'll get back to you soon!"
        }));
    });

    let config = EnvironmentConfig::new(server.url("/api"), "/");
    let service = ContactService::new(&config);

    let reply = service.send_and_read(&sample_message()).await.unwrap();
    assert!(reply.success);
    assert_eq!(reply.message, "Message received. I'll get back to you soon!");
    contact_mock.assert();
}

#[tokio::test]
async fn test_backend_rejection_is_propagated() {
    let server = MockServer::start();
    let contact_mock = server.mock(|when, then| {
        when.method(POST).path("/api/contact");
        then.status(400).json_body(serde_json::json!({
            "success": false,
            "message": "Input validation failed",
            "data": {"email": "Please provide a valid email address"}
        }));
    });

    let config = EnvironmentConfig::new(server.url("/api"), "/");
    let service = ContactService::new(&config);

    let err = service.send_message(&sample_message()).await.unwrap_err();
    let transport = err.as_transport().expect("transport error");
    assert_eq!(transport.status().map(|s| s.as_u16()), Some(400));
    assert_eq!(err.category(), ErrorCategory::Backend);

    // no retry
    contact_mock.assert_hits(1);
}

#[tokio::test]
async fn test_validation_errors_survive_rejection() {
    let server = MockServer::start();
    let contact_mock = server.mock(|when, then| {
        when.method(POST).path("/api/contact");
        then.status(400).json_body(serde_json::json!({
            "success": false,
            "message": "Input validation failed",
            "data": {"email": "Please provide a valid email address"}
        }));
    });

    let config = EnvironmentConfig::new(server.url("/api"), "/");
    let service = ContactService::new(&config);

    let message = ContactMessage::new("A", "not-an-email", "S", "Hello there");
    let err = service.send_and_read(&message).await.unwrap_err();

    match &err {
        GatewayError::Rejected { status, body, .. } => {
            assert_eq!(status.as_u16(), 400);
            let body = body.as_ref().expect("rejection envelope");
            assert!(!body.success);
            assert_eq!(body.message, "Input validation failed");
            assert_eq!(
                body.data.as_ref().and_then(|d| d["email"].as_str()),
                Some("Please provide a valid email address")
            );
        }
        other => panic!("expected rejection, got {:?}", other),
    }

    let friendly = err.user_friendly_message();
    assert!(friendly.contains("Input validation failed"));
    assert!(friendly.contains("email: Please provide a valid email address"));
    contact_mock.assert_hits(1);
}

#[tokio::test]
async fn test_rejection_without_envelope_keeps_status() {
    let server = MockServer::start();
    let contact_mock = server.mock(|when, then| {
        when.method(POST).path("/api/contact");
        then.status(503).body("upstream unavailable");
    });

    let config = EnvironmentConfig::new(server.url("/api"), "/");
    let service = ContactService::new(&config);

    let err = service.send_message(&sample_message()).await.unwrap_err();
    match &err {
        GatewayError::Rejected { status, body, .. } => {
            assert_eq!(status.as_u16(), 503);
            assert!(body.is_none());
        }
        other => panic!("expected rejection, got {:?}", other),
    }
    assert_eq!(
        err.user_friendly_message(),
        "The server could not process the message (503 Service Unavailable)."
    );
    contact_mock.assert_hits(1);
}

#[tokio::test]
async fn test_accepted_message_with_plain_reply_is_delivered() {
    let server = MockServer::start();
    let contact_mock = server.mock(|when, then| {
        when.method(POST).path("/api/contact");
        then.status(200).body("OK");
    });

    let config = EnvironmentConfig::new(server.url("/api"), "/");
    let service = ContactService::new(&config);

    let err = service.send_and_read(&sample_message()).await.unwrap_err();
    match &err {
        GatewayError::UnreadableReply { status, .. } => assert_eq!(status.as_u16(), 200),
        other => panic!("expected unreadable reply, got {:?}", other),
    }
    assert_eq!(err.category(), ErrorCategory::Delivered);
    assert!(err.user_friendly_message().contains("delivered"));
    contact_mock.assert_hits(1);
}

#[tokio::test]
async fn test_connection_refused_is_propagated() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let config = EnvironmentConfig::new(format!("http://127.0.0.1:{}/api", port), "/");
    let service = ContactService::new(&config);

    let err = service.send_message(&sample_message()).await.unwrap_err();
    match &err {
        GatewayError::ApiError(e) => assert!(e.is_connect()),
        other => panic!("expected transport error, got {:?}", other),
    }
    assert_eq!(err.category(), ErrorCategory::Network);
}
