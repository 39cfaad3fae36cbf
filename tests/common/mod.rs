#![allow(dead_code)]

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use mockito::ServerGuard;
use quickpay_relay::{
    config::Config,
    handlers::{build_router, AppState},
    services::{PaymentService, QuickPayClient},
};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

pub const SECRET: &str = "abc";
/// `"Basic " + base64(":abc")`
pub const AUTH_HEADER: &str = "Basic OmFiYw==";

pub fn config_for(server: &ServerGuard) -> Config {
    Config::new(SECRET, format!("{}/payments", server.url()))
}

pub fn relay_for(server: &ServerGuard) -> Router {
    let gateway = Arc::new(QuickPayClient::new(&config_for(server)).expect("client"));
    build_router(AppState {
        payments: Arc::new(PaymentService::new(gateway)),
    })
}

pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.expect("response");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("json body")
    };
    (status, body)
}

pub fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("request")
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("request")
}
