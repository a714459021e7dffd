//! Conversions between Marquee types and Workers AI DTOs.

use super::dto::{
    ApiMessage, Envelope, ImageResult, ResponseFormat, TextResult, WorkersAiMessage,
    WorkersAiTextRequest,
};
use base64::{Engine as _, engine::general_purpose::STANDARD};
use marquee_core::{GenerateRequest, GenerateResponse, Output};
use marquee_error::{GenerationError, GenerationErrorKind, MarqueeResult};

/// Convert a generation request into the chat request body.
pub fn to_text_request(
    req: &GenerateRequest,
    schema: Option<&serde_json::Value>,
) -> MarqueeResult<WorkersAiTextRequest> {
    let messages = req
        .messages()
        .iter()
        .map(|message| WorkersAiMessage {
            role: message.role.as_str().to_string(),
            content: message.content.clone(),
        })
        .collect::<Vec<_>>();

    let response_format = schema.map(|schema| ResponseFormat {
        format_type: "json_schema".to_string(),
        json_schema: schema.clone(),
    });

    WorkersAiTextRequest::builder()
        .messages(messages)
        .max_tokens(*req.max_tokens())
        .response_format(response_format)
        .build()
        .map_err(|e| {
            GenerationError::new(GenerationErrorKind::ApiRequest(format!(
                "Failed to build request: {}",
                e
            )))
            .into()
        })
}

/// Unwrap an API envelope, turning `success: false` into an error.
pub fn unwrap_envelope<T>(envelope: Envelope<T>, model: &str) -> MarqueeResult<T> {
    if !envelope.success {
        return Err(GenerationError::new(GenerationErrorKind::ApiRequest(
            describe_errors(&envelope.errors),
        ))
        .into());
    }
    envelope.result.ok_or_else(|| {
        GenerationError::new(GenerationErrorKind::EmptyResponse(model.to_string())).into()
    })
}

fn describe_errors(errors: &[ApiMessage]) -> String {
    if errors.is_empty() {
        return "API reported failure without details".to_string();
    }
    errors
        .iter()
        .map(|e| format!("{} ({})", e.message, e.code))
        .collect::<Vec<_>>()
        .join("; ")
}

/// Convert a text result into a response. Strings become text, anything else JSON.
pub fn from_text_result(result: TextResult, model: &str) -> MarqueeResult<GenerateResponse> {
    let output = match result.response {
        Some(serde_json::Value::String(text)) => Output::Text(text),
        Some(serde_json::Value::Null) | None => {
            return Err(
                GenerationError::new(GenerationErrorKind::EmptyResponse(model.to_string())).into(),
            );
        }
        Some(value) => Output::Json(value),
    };
    Ok(GenerateResponse::new(vec![output]))
}

/// Pull the structured value out of a schema-constrained response.
///
/// Some models return the JSON document as a string; that string must parse.
pub fn structured_value(response: &GenerateResponse) -> MarqueeResult<serde_json::Value> {
    match response.outputs().first() {
        Some(Output::Json(value)) => Ok(value.clone()),
        Some(Output::Text(text)) => serde_json::from_str(text.trim()).map_err(|e| {
            GenerationError::new(GenerationErrorKind::SchemaMismatch(format!(
                "response is not JSON: {}",
                e
            )))
            .into()
        }),
        None => Err(GenerationError::new(GenerationErrorKind::SchemaMismatch(
            "no structured output in response".to_string(),
        ))
        .into()),
    }
}

/// Decode the base64 JPEG carried by an image result.
pub fn decode_image(result: ImageResult, model: &str) -> MarqueeResult<Vec<u8>> {
    let encoded = result.image.ok_or_else(|| {
        GenerationError::new(GenerationErrorKind::EmptyResponse(model.to_string()))
    })?;
    Ok(STANDARD
        .decode(encoded.trim())
        .map_err(|e| GenerationError::new(GenerationErrorKind::Base64Decode(e.to_string())))?)
}
