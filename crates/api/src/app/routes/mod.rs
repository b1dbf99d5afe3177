use axum::{Router, routing::post};

pub mod purchase;
pub mod system;

/// Router for the purchase web API.
pub fn router() -> Router {
    Router::new().route("/V1/purchase", post(purchase::post_purchase))
}
