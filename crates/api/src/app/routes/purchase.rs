use std::sync::Arc;

use axum::{
    Json,
    extract::{Extension, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
};

use crate::app::{dto::PurchaseRequest, errors, services::AppServices};

/// `POST /V1/purchase`
///
/// Purchase outcomes, failures included, are reported in the JSON payload
/// with `200 OK`. Only unreadable request bodies get an HTTP error.
pub async fn post_purchase(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<PurchaseRequest>, JsonRejection>,
) -> axum::response::Response {
    let Json(req) = match body {
        Ok(body) => body,
        Err(rejection) => return errors::rejection_to_response(rejection),
    };

    let outcome = tokio::task::spawn_blocking(move || {
        services
            .purchases
            .post_purchase(&services.store, &req.customer_data, &req.product_data)
    })
    .await;

    match outcome {
        Ok(json) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            json,
        )
            .into_response(),
        Err(e) => {
            tracing::error!("purchase task failed: {e}");
            errors::json_error(StatusCode::INTERNAL_SERVER_ERROR, "internal_error", "purchase failed")
        }
    }
}
