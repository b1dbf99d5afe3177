use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

/// Error body used for every non-purchase failure: `{"error", "message"}`.
pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}

/// Unreadable purchase body. Keeps the extractor's status (400, 415 or 422).
pub fn rejection_to_response(rejection: JsonRejection) -> axum::response::Response {
    let code = match &rejection {
        JsonRejection::JsonSyntaxError(_) => "malformed_json",
        JsonRejection::JsonDataError(_) => "invalid_request",
        JsonRejection::MissingJsonContentType(_) => "unsupported_media_type",
        _ => "unreadable_body",
    };
    tracing::warn!(code, "rejected request body: {}", rejection.body_text());
    json_error(rejection.status(), code, rejection.body_text())
}
