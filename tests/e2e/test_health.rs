use crate::e2e::helpers;

use helpers::TestContext;
use hyper::StatusCode;
use voxclone_server::infrastructure::engine::EngineStatus;

#[tokio::test]
async fn it_should_report_loaded_model_and_device() {
    let ctx = TestContext::new().await.unwrap();

    let response = ctx.client.get("/health").await.unwrap();

    response.assert_status(StatusCode::OK);

    let body = response.body.as_ref().unwrap();
    assert_eq!(body.get("status").and_then(|v| v.as_str()), Some("ok"));
    assert_eq!(body.get("model_loaded").and_then(|v| v.as_bool()), Some(true));
    assert_eq!(body.get("device").and_then(|v| v.as_str()), Some("cpu"));
}

#[tokio::test]
async fn it_should_not_fail_before_model_load() {
    let ctx = TestContext::with_unloaded_model().await.unwrap();

    let response = ctx.client.get("/health").await.unwrap();

    response.assert_status(StatusCode::OK);

    let body = response.body.as_ref().unwrap();
    assert_eq!(body.get("status").and_then(|v| v.as_str()), Some("ok"));
    assert_eq!(
        body.get("model_loaded").and_then(|v| v.as_bool()),
        Some(false)
    );
    assert!(body.get("device").unwrap().is_null());
}

#[tokio::test]
async fn it_should_report_not_loaded_while_loading() {
    let ctx = TestContext::with_unloaded_model().await.unwrap();
    ctx.engine.set_status(EngineStatus::Loading);

    let response = ctx.client.get("/health").await.unwrap();

    response.assert_status(StatusCode::OK);
    let body = response.body.as_ref().unwrap();
    assert_eq!(
        body.get("model_loaded").and_then(|v| v.as_bool()),
        Some(false)
    );
}

#[tokio::test]
async fn it_should_include_request_id_in_responses() {
    let ctx = TestContext::new().await.unwrap();

    let response = ctx.client.get("/health").await.unwrap();
    response.assert_header_exists("x-request-id");

    let response = ctx.client.get("/speakers").await.unwrap();
    response.assert_header_exists("x-request-id");
}
