pub mod payment;

pub use payment::*;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, TraceLayer},
};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/create-quickpay-link", post(create_quickpay_link))
        .route("/verify-payment/", get(verify_payment_without_order))
        .route("/verify-payment/:order_id", get(verify_payment))
        .with_state(state)
        .layer(TraceLayer::new_for_http().make_span_with(DefaultMakeSpan::default()))
        .layer(CorsLayer::permissive())
}
