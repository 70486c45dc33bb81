//! HTTP-contract tests for the remote analysis client.

use std::sync::Arc;

use zemedic_analysis::{
    AnalysisClient, AnalysisError, AnalysisRequest, ImageCategory, NoCredential, RemoteConfig,
    RemoteAnalysisClient, Severity, StaticCredential,
};

fn request() -> AnalysisRequest {
    AnalysisRequest {
        bytes: vec![0xff, 0xd8, 0xff, 0xe0],
        file_name: "chest.jpg".to_string(),
        category: ImageCategory::Xray,
        preview_reference: "data:image/png;base64,AAAA".to_string(),
    }
}

fn client_for(url: &str) -> RemoteAnalysisClient {
    RemoteAnalysisClient::new(
        RemoteConfig::for_base_url(url),
        StaticCredential::new("test-token"),
    )
    .unwrap()
}

#[tokio::test]
async fn test_successful_upload_maps_response() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/upload-image")
        .match_header("authorization", "Bearer test-token")
        .match_body(mockito::Matcher::Regex(
            "name=\"imageType\"[\\s\\S]*xray".to_string(),
        ))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{
                "id": "result-1",
                "image_type": "xray",
                "findings": [
                    {"name": "Pneumonia", "location": "Right Lower Lobe", "severity": "Moderate"},
                    {"name": "Pleural Effusion", "location": "Right Side", "severity": "Mild"}
                ],
                "confidence_scores": {"Pneumonia": 0.94, "Pleural Effusion": 0.78},
                "timestamp": "2025-05-01T12:00:00Z",
                "image_url": "https://cdn.example.com/scan.png"
            }"#,
        )
        .create_async()
        .await;

    let result = client_for(&server.url()).analyze(request()).await.unwrap();

    mock.assert_async().await;
    assert_eq!(result.id, "result-1");
    assert_eq!(result.category, ImageCategory::Xray);
    assert_eq!(result.findings.len(), 2);
    assert_eq!(result.findings[0].name, "Pneumonia");
    assert_eq!(result.findings[0].severity, Some(Severity::Moderate));
    assert_eq!(result.confidence_by_name["Pneumonia"], 0.94);
    assert_eq!(result.preview_reference, "https://cdn.example.com/scan.png");
}

#[tokio::test]
async fn test_unauthorized_maps_to_missing_credential() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/upload-image")
        .with_status(401)
        .with_body(r#"{"detail": "Could not validate credentials"}"#)
        .create_async()
        .await;

    let err = client_for(&server.url())
        .analyze(request())
        .await
        .unwrap_err();
    assert_eq!(err, AnalysisError::MissingCredential);
}

#[tokio::test]
async fn test_rejection_prefers_server_detail() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/upload-image")
        .with_status(422)
        .with_body(r#"{"detail": "Unsupported image type"}"#)
        .create_async()
        .await;

    let err = client_for(&server.url())
        .analyze(request())
        .await
        .unwrap_err();
    assert_eq!(
        err,
        AnalysisError::ServerRejected {
            detail: "Unsupported image type".to_string()
        }
    );
}

#[tokio::test]
async fn test_rejection_without_detail_uses_generic_message() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/upload-image")
        .with_status(500)
        .with_body("internal server error")
        .create_async()
        .await;

    let err = client_for(&server.url())
        .analyze(request())
        .await
        .unwrap_err();
    assert_eq!(
        err,
        AnalysisError::ServerRejected {
            detail: AnalysisError::GENERIC_REJECTION.to_string()
        }
    );
}

#[tokio::test]
async fn test_missing_credential_sends_no_request() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/upload-image")
        .expect(0)
        .create_async()
        .await;

    let client =
        RemoteAnalysisClient::new(RemoteConfig::for_base_url(server.url()), Arc::new(NoCredential))
            .unwrap();

    let err = client.analyze(request()).await.unwrap_err();
    assert_eq!(err, AnalysisError::MissingCredential);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_unreachable_service_is_a_transport_failure() {
    // Nothing listens on this port.
    let client = client_for("http://127.0.0.1:9");
    let err = client.analyze(request()).await.unwrap_err();
    assert!(matches!(err, AnalysisError::TransportFailure(_)));
}
