//! BDD step definitions for the dashboard feature

use std::sync::Arc;

use axum::body::Body;
use axum::http::Request;
use cucumber::{given, then, when};
use tower::ServiceExt;

use logdash::dashboard::build_router;
use logdash::source::StaticSource;
use logdash::Config;

use crate::world::LogdashWorld;

#[given("the default configuration")]
fn default_configuration(world: &mut LogdashWorld) {
    world.config = Config::default();
}

#[given("charting is disabled in the configuration")]
fn charting_disabled(world: &mut LogdashWorld) {
    world.config.charting.enabled = false;
}

#[given(expr = "the dashboard title is {string}")]
fn dashboard_title(world: &mut LogdashWorld, title: String) {
    world.config.title = title;
}

#[when(expr = "{string} is requested")]
async fn request_path(world: &mut LogdashWorld, uri: String) {
    let app = build_router(Arc::new(world.config.clone()), Arc::new(StaticSource));
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    world.response_status = Some(response.status().as_u16());
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    world.response_body = Some(String::from_utf8(body.to_vec()).unwrap());
}

#[then(expr = "the response status should be {int}")]
fn response_status(world: &mut LogdashWorld, expected: u16) {
    assert_eq!(world.response_status, Some(expected));
}

#[then(expr = "the response should contain {string}")]
fn response_contains(world: &mut LogdashWorld, expected: String) {
    let body = world.response_body.as_ref().expect("no response body");
    assert!(
        body.contains(&expected),
        "Expected response to contain '{}', but it didn't.\nResponse body:\n{}",
        expected,
        body
    );
}

#[then(expr = "the response should not contain {string}")]
fn response_not_contains(world: &mut LogdashWorld, unexpected: String) {
    let body = world.response_body.as_ref().expect("no response body");
    assert!(
        !body.contains(&unexpected),
        "Expected response not to contain '{}'.\nResponse body:\n{}",
        unexpected,
        body
    );
}

#[then(expr = "the JSON field {string} should be {int}")]
fn json_field_equals(world: &mut LogdashWorld, pointer: String, expected: u64) {
    let body = world.response_body.as_ref().expect("no response body");
    let json: serde_json::Value = serde_json::from_str(body).expect("response is not JSON");
    assert_eq!(
        json.pointer(&pointer).and_then(|v| v.as_u64()),
        Some(expected),
        "field {} in {}",
        pointer,
        body
    );
}
