use crate::e2e::helpers;

use helpers::{write_reference_wav, TestContext};
use hyper::StatusCode;
use serde_json::json;
use std::io::Cursor;

#[tokio::test]
async fn it_should_return_wav_in_the_fixed_output_format() {
    let ctx = TestContext::new().await.unwrap();

    let response = ctx
        .client
        .post("/synthesize", &json!({ "text": "test" }))
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    assert_eq!(
        response.header("content-type").map(String::as_str),
        Some("audio/wav")
    );
    assert_eq!(
        response.header("content-disposition").map(String::as_str),
        Some("attachment; filename=output.wav")
    );

    // The body must declare mono, 22050 Hz, 16-bit samples
    let reader = hound::WavReader::new(Cursor::new(&response.body_bytes)).unwrap();
    let spec = reader.spec();
    assert_eq!(spec.channels, 1);
    assert_eq!(spec.sample_rate, 22050);
    assert_eq!(spec.bits_per_sample, 16);
    assert!(reader.len() > 0);
}

#[tokio::test]
async fn it_should_apply_speaker_and_language_defaults() {
    let ctx = TestContext::new().await.unwrap();

    // Only text supplied; speaker defaults to speaker.wav, language to ru
    let response = ctx
        .client
        .post("/synthesize", &json!({ "text": "Привет, как дела?" }))
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    assert_eq!(ctx.engine.call_count(), 1);
}

#[tokio::test]
async fn it_should_resolve_speaker_from_subdirectory() {
    let ctx = TestContext::new().await.unwrap();
    write_reference_wav(&ctx.data_dir.path().join("voices/ru/boris.wav"), 10.0);

    let response = ctx
        .client
        .post(
            "/synthesize",
            &json!({ "text": "test", "speaker": "boris.wav", "language": "ru" }),
        )
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
}

#[tokio::test]
async fn it_should_return_404_for_unknown_speaker() {
    let ctx = TestContext::new().await.unwrap();

    let response = ctx
        .client
        .post(
            "/synthesize",
            &json!({ "text": "test", "speaker": "ghost.wav" }),
        )
        .await
        .unwrap();

    response.assert_status(StatusCode::NOT_FOUND);
    let message = response
        .body
        .as_ref()
        .unwrap()
        .get("message")
        .and_then(|v| v.as_str())
        .unwrap();
    assert!(message.contains("ghost.wav"));
}

#[tokio::test]
async fn it_should_return_503_before_model_is_loaded() {
    let ctx = TestContext::with_unloaded_model().await.unwrap();

    let response = ctx
        .client
        .post("/synthesize", &json!({ "text": "test" }))
        .await
        .unwrap();

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn it_should_reject_empty_text() {
    let ctx = TestContext::new().await.unwrap();

    let response = ctx
        .client
        .post("/synthesize", &json!({ "text": "" }))
        .await
        .unwrap();

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn it_should_serve_concurrent_requests_from_one_model() {
    let ctx = TestContext::new().await.unwrap();

    let mut requests = Vec::new();
    for _ in 0..8 {
        let client = ctx.client.clone();
        requests.push(async move {
            client
                .post("/synthesize", &json!({ "text": "test" }))
                .await
                .unwrap()
        });
    }

    let responses = futures::future::join_all(requests).await;
    for response in responses {
        response.assert_status(StatusCode::OK);
    }
    assert_eq!(ctx.engine.call_count(), 8);
}
