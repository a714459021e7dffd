//! Workers AI client against a local stand-in for the REST API.

use axum::{
    Json, Router,
    extract::Path,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
};
use base64::{Engine as _, engine::general_purpose::STANDARD};
use marquee_core::{GenerateRequest, Message};
use marquee_error::{GenerationErrorKind, MarqueeError, MarqueeErrorKind};
use marquee_interface::{ImageGeneration, JsonMode, MarqueeDriver};
use marquee_models::{CloudflareCredentials, WorkersAiClient};
use serde_json::{Value, json};

const JPEG: &[u8] = b"\xff\xd8\xff\xe0poster";

async fn run_model(
    Path((account, model)): Path<(String, String)>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    let authorized = headers
        .get("authorization")
        .and_then(|value| value.to_str().ok())
        == Some("Bearer test-token");
    if account != "acct" || !authorized {
        return (StatusCode::UNAUTHORIZED, "bad credentials").into_response();
    }

    match model.as_str() {
        "text" => {
            let prompt = body["messages"][0]["content"].as_str().unwrap_or_default();
            Json(json!({
                "result": {"response": format!("echo: {prompt}")},
                "success": true,
                "errors": []
            }))
            .into_response()
        }
        "structured" => Json(json!({
            "result": {"response": "[\"Heist\", \"Noir\"]"},
            "success": true,
            "errors": []
        }))
        .into_response(),
        "image" => Json(json!({
            "result": {"image": STANDARD.encode(JPEG)},
            "success": true,
            "errors": []
        }))
        .into_response(),
        "broken-image" => Json(json!({
            "result": {"image": "not base64!!"},
            "success": true,
            "errors": []
        }))
        .into_response(),
        "refused" => Json(json!({
            "result": null,
            "success": false,
            "errors": [{"code": 5006, "message": "Model refused the input"}]
        }))
        .into_response(),
        _ => (StatusCode::TOO_MANY_REQUESTS, "slow down").into_response(),
    }
}

async fn spawn_api() -> anyhow::Result<String> {
    let app = Router::new().route("/accounts/:account/ai/run/:model", post(run_model));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    Ok(format!("http://{addr}"))
}

async fn client() -> anyhow::Result<WorkersAiClient> {
    let base = spawn_api().await?;
    Ok(
        WorkersAiClient::with_credentials(CloudflareCredentials::new("acct", "test-token"))
            .with_base_url(base)
            .with_text_model("text")
            .with_structured_model("structured")
            .with_image_model("image"),
    )
}

fn generation_kind(err: &MarqueeError) -> Option<&GenerationErrorKind> {
    match err.kind() {
        MarqueeErrorKind::Generation(e) => Some(&e.kind),
        _ => None,
    }
}

fn request() -> GenerateRequest {
    GenerateRequest::new(vec![Message::user("Heat")])
}

#[tokio::test]
async fn test_text_round_trip_through_envelope() -> anyhow::Result<()> {
    let client = client().await?;
    let response = client.generate(&request()).await?;
    assert_eq!(response.text(), Some("echo: Heat"));
    Ok(())
}

#[tokio::test]
async fn test_structured_string_is_parsed() -> anyhow::Result<()> {
    let client = client().await?;
    let value = client
        .generate_json(&request(), &json!({"type": "array"}))
        .await?;
    assert_eq!(value, json!(["Heist", "Noir"]));
    Ok(())
}

#[tokio::test]
async fn test_image_is_base64_decoded() -> anyhow::Result<()> {
    let client = client().await?;
    let bytes = client.generate_image("a rain-soaked street").await?;
    assert_eq!(bytes, JPEG.to_vec());
    Ok(())
}

#[tokio::test]
async fn test_invalid_image_payload_is_decode_error() -> anyhow::Result<()> {
    let client = client().await?.with_image_model("broken-image");
    let err = client
        .generate_image("a rain-soaked street")
        .await
        .expect_err("invalid base64 should fail");
    assert!(matches!(
        generation_kind(&err),
        Some(GenerationErrorKind::Base64Decode(_))
    ));
    Ok(())
}

#[tokio::test]
async fn test_error_status_maps_to_http_status() -> anyhow::Result<()> {
    let client = client().await?.with_text_model("overloaded");
    let err = client
        .generate(&request())
        .await
        .expect_err("429 should fail");
    match generation_kind(&err) {
        Some(GenerationErrorKind::HttpStatus {
            status_code,
            message,
        }) => {
            assert_eq!(*status_code, 429);
            assert_eq!(message, "slow down");
        }
        other => panic!("expected HttpStatus, got {other:?}"),
    }
    Ok(())
}

#[tokio::test]
async fn test_wrong_token_is_unauthorized() -> anyhow::Result<()> {
    let base = spawn_api().await?;
    let client = WorkersAiClient::with_credentials(CloudflareCredentials::new("acct", "nope"))
        .with_base_url(base)
        .with_text_model("text");
    let err = client
        .generate(&request())
        .await
        .expect_err("bad token should fail");
    assert!(matches!(
        generation_kind(&err),
        Some(GenerationErrorKind::HttpStatus {
            status_code: 401,
            ..
        })
    ));
    Ok(())
}

#[tokio::test]
async fn test_unsuccessful_envelope_reports_api_errors() -> anyhow::Result<()> {
    let client = client().await?.with_text_model("refused");
    let err = client
        .generate(&request())
        .await
        .expect_err("success: false should fail");
    assert!(err.to_string().contains("Model refused the input"));
    Ok(())
}
