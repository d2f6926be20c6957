//! Request extractors: validated JSON bodies and UUID path parameters.

use axum::{
    extract::{FromRequest, FromRequestParts, Json, Path, Request},
    http::StatusCode,
    http::request::Parts,
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;
use uuid::Uuid;
use validator::Validate;

use crate::error::ErrorResponse;

/// JSON extractor with automatic validation.
///
/// Deserializes the request body, then runs the `validator` crate's
/// `Validate` derive over it. Malformed JSON and failed validation both
/// produce a 400 with a structured [`ErrorResponse`] body, so invalid input
/// never reaches a handler.
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(data) = Json::<T>::from_request(req, state).await.map_err(|e| {
            // All malformed bodies are client errors, including ones axum
            // would report as 422 (syntactically valid JSON of the wrong shape)
            let body = ErrorResponse::new("BadRequest", e.body_text());
            (StatusCode::BAD_REQUEST, Json(body)).into_response()
        })?;

        data.validate().map_err(|e| {
            // Convert validator errors to structured JSON
            let details = e
                .field_errors()
                .iter()
                .map(|(field, errors)| {
                    let messages: Vec<serde_json::Value> = errors
                        .iter()
                        .map(|err| {
                            serde_json::json!({
                                "code": err.code,
                                "message": err.message,
                                "params": err.params,
                            })
                        })
                        .collect();
                    (field.to_string(), serde_json::json!(messages))
                })
                .collect::<serde_json::Map<_, _>>();

            let body = ErrorResponse {
                error: "BadRequest".to_string(),
                message: "Request validation failed".to_string(),
                details: Some(serde_json::Value::Object(details)),
            };

            (StatusCode::BAD_REQUEST, Json(body)).into_response()
        })?;

        Ok(ValidatedJson(data))
    }
}

/// Extractor for UUID path parameters.
///
/// Parses the `{id}` path segment, returning a 400 rather than a routing
/// error when it is not a valid UUID.
pub struct UuidPath(pub Uuid);

impl<S> FromRequestParts<S> for UuidPath
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| e.into_response())?;

        match Uuid::parse_str(&id) {
            Ok(uuid) => Ok(UuidPath(uuid)),
            Err(_) => {
                let body = ErrorResponse::new("BadRequest", format!("Invalid UUID: {}", id));
                Err((StatusCode::BAD_REQUEST, Json(body)).into_response())
            }
        }
    }
}
