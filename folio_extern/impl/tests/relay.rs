use folio_extern_contracts::relay::{
    RelayApiService, RelayRequest, RelaySendError, RelaySendResponse,
};
use folio_extern_impl::relay::{RelayApiServiceConfig, RelayApiServiceImpl};
use folio_models::contact::{ContactFormInput, ContactMessage};
use folio_utils::assert_matches;
use httpmock::prelude::*;
use serde_json::json;

const ACCESS_KEY: &str = "test-access-key";

#[tokio::test]
async fn success() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/submit")
                .header("content-type", "application/json")
                .header("accept", "application/json")
                .json_body(json!({
                    "access_key": ACCESS_KEY,
                    "name": "Jane Doe",
                    "email": "jane@example.com",
                    "message": "Let's work together!",
                    "subject": "New Portfolio Contact from Jane Doe",
                }));
            then.status(200)
                .json_body(json!({"success": true, "message": "Email sent successfully!"}));
        })
        .await;

    let result = make_sut(&server).send(request(), ACCESS_KEY).await.unwrap();

    mock.assert_async().await;
    assert_eq!(
        result,
        RelaySendResponse {
            success: true,
            message: Some("Email sent successfully!".into())
        }
    );
}

#[tokio::test]
async fn rejected() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/submit");
            then.status(200)
                .json_body(json!({"success": false, "message": "Invalid access key"}));
        })
        .await;

    let result = make_sut(&server).send(request(), ACCESS_KEY).await.unwrap();

    assert_eq!(
        result,
        RelaySendResponse {
            success: false,
            message: Some("Invalid access key".into())
        }
    );
}

#[tokio::test]
async fn error_status() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/submit");
            then.status(500);
        })
        .await;

    let result = make_sut(&server).send(request(), ACCESS_KEY).await;

    assert_matches!(result, Err(RelaySendError::Status(500)));
}

#[tokio::test]
async fn malformed_response() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/submit");
            then.status(200).body("<!doctype html>");
        })
        .await;

    let result = make_sut(&server).send(request(), ACCESS_KEY).await;

    assert_matches!(result, Err(RelaySendError::MalformedResponse(_)));
}

#[tokio::test]
async fn unreachable_endpoint() {
    // The discard port is not listening.
    let sut = RelayApiServiceImpl::new(RelayApiServiceConfig::new(Some(
        "http://127.0.0.1:9/submit".parse().unwrap(),
    )));

    let result = sut.send(request(), ACCESS_KEY).await;

    assert_matches!(result, Err(RelaySendError::Network(_)));
}

fn make_sut(server: &MockServer) -> RelayApiServiceImpl {
    RelayApiServiceImpl::new(RelayApiServiceConfig::new(Some(
        server.url("/submit").parse().unwrap(),
    )))
}

fn request() -> RelayRequest {
    let message = ContactMessage::try_from(ContactFormInput {
        name: "Jane Doe".into(),
        email: "jane@example.com".into(),
        message: "Let's work together!".into(),
    })
    .unwrap();

    RelayRequest {
        subject: "New Portfolio Contact from Jane Doe".into(),
        message,
    }
}
