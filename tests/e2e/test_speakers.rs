use crate::e2e::helpers;

use helpers::{write_placeholder, write_reference_wav, TestContext};
use hyper::StatusCode;

fn speaker_names(body: &serde_json::Value) -> Vec<String> {
    body.get("speakers")
        .and_then(|v| v.as_array())
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn it_should_list_speakers_including_subdirectories() {
    let ctx = TestContext::new().await.unwrap();
    write_reference_wav(&ctx.data_dir.path().join("voices/anna.wav"), 8.0);
    write_placeholder(&ctx.data_dir.path().join("voices/ru/boris.mp3"));

    let response = ctx.client.get("/speakers").await.unwrap();

    response.assert_status(StatusCode::OK);
    let speakers = speaker_names(response.body.as_ref().unwrap());
    assert_eq!(
        speakers,
        vec!["speaker.wav", "voices/anna.wav", "voices/ru/boris.mp3"]
    );
}

#[tokio::test]
async fn it_should_only_list_audio_files() {
    let ctx = TestContext::new().await.unwrap();
    std::fs::write(ctx.data_dir.path().join("notes.txt"), b"not audio").unwrap();
    write_placeholder(&ctx.data_dir.path().join("sample.opus"));
    write_placeholder(&ctx.data_dir.path().join("sample.flac"));

    let response = ctx.client.get("/speakers").await.unwrap();

    response.assert_status(StatusCode::OK);
    let speakers = speaker_names(response.body.as_ref().unwrap());
    assert_eq!(speakers, vec!["sample.flac", "sample.opus", "speaker.wav"]);
}

#[tokio::test]
async fn it_should_return_empty_list_for_empty_library() {
    let ctx = TestContext::with_empty_library().await.unwrap();

    let response = ctx.client.get("/speakers").await.unwrap();

    response.assert_status(StatusCode::OK);
    assert!(speaker_names(response.body.as_ref().unwrap()).is_empty());
}
