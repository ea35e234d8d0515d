//! Uniform JSON responses for API handlers.
//!
//! Each function builds a finalized [`Response`] with a fixed status code
//! and envelope shape, localizing its message through the request's locale.
//! Returning the response is the single emission point, so a handler cannot
//! emit twice. Only the `error` path touches the notifier.
//!
//! Two quirks of the historical API contract are kept as-is until consumers
//! confirm they can change: `not_found` answers 404 with `success: true`,
//! and `success` answers 201 with `success: false`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::{json, Value};

use crate::i18n::{translate, LocaleSource};
use crate::notify::{error_blocks, Notifier};

/// The canonical success/error payload shape.
///
/// `data` serializes as `null` when absent; `message` is omitted entirely
/// when there is none.
#[derive(Debug, Serialize)]
pub struct Envelope {
    pub success: bool,
    pub data: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// General envelope constructor used by every envelope-shaped response.
pub fn custom(status: StatusCode, success: bool, data: Value, message: Option<String>) -> Response {
    (
        status,
        Json(Envelope {
            success,
            data,
            message,
        }),
    )
        .into_response()
}

fn translated<S: LocaleSource + ?Sized>(src: &S, key: &str) -> Option<String> {
    translate(src, key).map(str::to_string)
}

/// 400 with the localized missing-parameters message.
pub fn bad_request<S: LocaleSource + ?Sized>(src: &S) -> Response {
    custom(
        StatusCode::BAD_REQUEST,
        false,
        Value::Null,
        translated(src, "missing_parameters"),
    )
}

/// 400 carrying a caller-supplied message verbatim, not translated.
pub fn bad_request_with_message(message: &str) -> Response {
    custom(
        StatusCode::BAD_REQUEST,
        false,
        Value::Null,
        Some(message.to_string()),
    )
}

/// 409 with the localized already-exists message.
pub fn conflict<S: LocaleSource + ?Sized>(src: &S) -> Response {
    custom(
        StatusCode::CONFLICT,
        false,
        Value::Null,
        translated(src, "already_exist"),
    )
}

/// 404 with the localized not-found message. Keeps `success: true`.
pub fn not_found<S: LocaleSource + ?Sized>(src: &S) -> Response {
    custom(
        StatusCode::NOT_FOUND,
        true,
        json!({}),
        translated(src, "not_found"),
    )
}

/// 201 with the localized operation-succeeded message. Keeps `success: false`.
pub fn success<S: LocaleSource + ?Sized>(src: &S) -> Response {
    custom(
        StatusCode::CREATED,
        false,
        Value::Null,
        translated(src, "successfull_operation"),
    )
}

/// 201 wrapping `data` in the envelope, with no message field.
pub fn success_with_payload(data: Value) -> Response {
    custom(StatusCode::CREATED, true, data, None)
}

/// 500 carrying the raw error text.
///
/// Awaits one best-effort error notification first; the notifier never
/// fails, so the 500 is emitted unconditionally.
pub async fn error(notifier: &Notifier, err: impl std::fmt::Display) -> Response {
    let detail = err.to_string();

    notifier
        .notify_error(&error_blocks(notifier.environment(), &detail))
        .await;

    custom(
        StatusCode::INTERNAL_SERVER_ERROR,
        false,
        Value::Null,
        Some(detail),
    )
}

/// 403 with the localized forbidden message.
pub fn forbidden<S: LocaleSource + ?Sized>(src: &S) -> Response {
    custom(
        StatusCode::FORBIDDEN,
        false,
        Value::Null,
        translated(src, "forbidden"),
    )
}

/// 401 with the localized unauthorized message.
pub fn unauthorized<S: LocaleSource + ?Sized>(src: &S) -> Response {
    custom(
        StatusCode::UNAUTHORIZED,
        false,
        Value::Null,
        translated(src, "unauthorized"),
    )
}

/// 422 with the localized message as a plain-text body, no JSON envelope.
pub fn unprocessable_content<S: LocaleSource + ?Sized>(src: &S) -> Response {
    let text = translate(src, "422_error").unwrap_or_default().to_string();
    (StatusCode::UNPROCESSABLE_ENTITY, text).into_response()
}

/// 200 with `data` as the raw JSON body, no envelope.
pub fn success_with_data(data: Value) -> Response {
    (StatusCode::OK, Json(data)).into_response()
}

/// 200 wrapping `data` under a `data` key.
pub fn success_with_data_list(data: Value) -> Response {
    (StatusCode::OK, Json(json!({ "data": data }))).into_response()
}

/// 400 carrying the raw validation error list, or `None` when the
/// collector found nothing wrong.
pub fn validation_failure<T: Serialize>(errors: &[T]) -> Option<Response> {
    if errors.is_empty() {
        return None;
    }

    Some((StatusCode::BAD_REQUEST, Json(json!({ "errors": errors }))).into_response())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn no_lang() -> HashMap<String, String> {
        HashMap::new()
    }

    fn with_lang(lang: &str) -> HashMap<String, String> {
        let mut map = HashMap::new();
        map.insert("lang".to_string(), lang.to_string());
        map
    }

    async fn body_json(response: Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        serde_json::from_slice(&bytes).expect("valid JSON body")
    }

    async fn body_text(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        String::from_utf8(bytes.to_vec()).expect("utf-8 body")
    }

    // ==================== Envelope Responses ====================

    #[tokio::test]
    async fn test_bad_request() {
        let response = bad_request(&no_lang());
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["data"], Value::Null);
        assert_eq!(body["message"], "Some required parameters are missing");
    }

    #[tokio::test]
    async fn test_bad_request_is_localized() {
        let body = body_json(bad_request(&with_lang("fra"))).await;
        assert_eq!(body["message"], "Certains paramètres requis sont manquants");
    }

    #[tokio::test]
    async fn test_bad_request_with_message_is_not_translated() {
        let response = bad_request_with_message("missing field: user_id");
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["data"], Value::Null);
        assert_eq!(body["message"], "missing field: user_id");
    }

    #[tokio::test]
    async fn test_conflict() {
        let response = conflict(&no_lang());
        assert_eq!(response.status(), StatusCode::CONFLICT);

        let body = body_json(response).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "This resource already exists");
    }

    #[tokio::test]
    async fn test_not_found_keeps_success_true() {
        let response = not_found(&no_lang());
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = body_json(response).await;
        // Historical contract: 404 answers success=true with an empty object
        assert_eq!(body["success"], true);
        assert_eq!(body["data"], json!({}));
        assert_eq!(body["message"], "The requested resource was not found");
    }

    #[tokio::test]
    async fn test_success_keeps_success_false() {
        let response = success(&no_lang());
        assert_eq!(response.status(), StatusCode::CREATED);

        let body = body_json(response).await;
        // Historical contract: 201 answers success=false
        assert_eq!(body["success"], false);
        assert_eq!(body["data"], Value::Null);
        assert_eq!(body["message"], "Operation completed successfully");
    }

    #[tokio::test]
    async fn test_success_with_payload_omits_message() {
        let response = success_with_payload(json!({"id": 42}));
        assert_eq!(response.status(), StatusCode::CREATED);

        let body = body_json(response).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["data"], json!({"id": 42}));
        assert!(body.get("message").is_none());
    }

    #[tokio::test]
    async fn test_forbidden() {
        let response = forbidden(&no_lang());
        assert_eq!(response.status(), StatusCode::FORBIDDEN);

        let body = body_json(response).await;
        assert_eq!(body["success"], false);
        assert_eq!(
            body["message"],
            "You are not allowed to perform this operation"
        );
    }

    #[tokio::test]
    async fn test_unauthorized() {
        let response = unauthorized(&no_lang());
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let body = body_json(response).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "Authentication is required");
    }

    #[tokio::test]
    async fn test_custom() {
        let response = custom(
            StatusCode::IM_A_TEAPOT,
            true,
            json!(["a", "b"]),
            Some("short and stout".to_string()),
        );
        assert_eq!(response.status(), StatusCode::IM_A_TEAPOT);

        let body = body_json(response).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["data"], json!(["a", "b"]));
        assert_eq!(body["message"], "short and stout");
    }

    // ==================== Non-Envelope Responses ====================

    #[tokio::test]
    async fn test_unprocessable_content_is_plain_text() {
        let response = unprocessable_content(&no_lang());
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let text = body_text(response).await;
        assert_eq!(text, "The request could not be processed");
    }

    #[tokio::test]
    async fn test_unprocessable_content_localized() {
        let text = body_text(unprocessable_content(&with_lang("fra"))).await;
        assert_eq!(text, "La requête n'a pas pu être traitée");
    }

    #[tokio::test]
    async fn test_success_with_data_has_no_envelope() {
        let response = success_with_data(json!({"name": "alpha"}));
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body, json!({"name": "alpha"}));
    }

    #[tokio::test]
    async fn test_success_with_data_list_wraps_under_data() {
        let response = success_with_data_list(json!([1, 2, 3]));
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body, json!({"data": [1, 2, 3]}));
    }

    // ==================== Validation Hook ====================

    #[tokio::test]
    async fn test_validation_failure_with_errors() {
        let errors = vec![
            json!({"field": "email", "msg": "invalid"}),
            json!({"field": "age", "msg": "required"}),
        ];

        let response = validation_failure(&errors).expect("non-empty list yields a response");
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(body["errors"].as_array().unwrap().len(), 2);
        assert_eq!(body["errors"][0]["field"], "email");
    }

    #[test]
    fn test_validation_failure_empty_list_is_none() {
        let errors: Vec<Value> = Vec::new();
        assert!(validation_failure(&errors).is_none());
    }

    // ==================== Partial Locale Fallback ====================

    #[tokio::test]
    async fn test_forbidden_falls_back_for_partial_locale() {
        // "spa" has no "forbidden" entry; the default text applies
        let body = body_json(forbidden(&with_lang("spa"))).await;
        assert_eq!(
            body["message"],
            "You are not allowed to perform this operation"
        );
    }
}
