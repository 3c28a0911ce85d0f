use super::helpers::{
    assert_status, expect_status, multipart_file_body, read_text, send, session_cookie,
    spawn_app, spawn_model_server, start_session, tiny_png_bytes, upload, workspace,
};
use axum::{
    body::Body,
    extract::DefaultBodyLimit,
    http::{Request, StatusCode, header},
};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde_json::Value;

#[tokio::test]
async fn new_content_upload_replaces_preview_and_keeps_style() {
    let model = spawn_model_server(StatusCode::OK, b"").await;
    let app = spawn_app(&model.base_url);
    let cookie = start_session(&app.app).await;

    let style = tiny_png_bytes();
    let second_content = tiny_png_bytes();
    upload(&app.app, &cookie, "content", Some("image/png"), &tiny_png_bytes()).await;
    upload(&app.app, &cookie, "style", Some("image/png"), &style).await;
    upload(&app.app, &cookie, "content", Some("image/png"), &second_content).await;

    let state = workspace(&app.app, &cookie).await;
    assert_eq!(
        state["content_image"],
        format!("data:image/png;base64,{}", BASE64.encode(&second_content))
    );
    assert_eq!(
        state["style_image"],
        format!("data:image/png;base64,{}", BASE64.encode(&style))
    );
    assert_eq!(state["stylized_image"], Value::Null);
}

#[tokio::test]
async fn missing_content_type_is_sniffed_from_bytes() {
    let model = spawn_model_server(StatusCode::OK, b"").await;
    let app = spawn_app(&model.base_url);
    let cookie = start_session(&app.app).await;

    upload(&app.app, &cookie, "style", None, &tiny_png_bytes()).await;

    let state = workspace(&app.app, &cookie).await;
    let style = state["style_image"].as_str().expect("style preview missing");
    assert!(style.starts_with("data:image/png;base64,"), "got {style}");
}

#[tokio::test]
async fn first_upload_issues_session_cookie() {
    let model = spawn_model_server(StatusCode::OK, b"").await;
    let app = spawn_app(&model.base_url);

    let (boundary, body) = multipart_file_body("cat.png", Some("image/png"), &tiny_png_bytes());
    let req = Request::builder()
        .method("POST")
        .uri("/upload/content")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={}", boundary),
        )
        .body(Body::from(body))
        .expect("failed to build upload request");

    let res = expect_status(send(&app.app, req).await, StatusCode::SEE_OTHER).await;
    let cookie = session_cookie(&res);
    assert!(cookie.starts_with("nst_session="));

    let state = workspace(&app.app, &cookie).await;
    assert!(state["content_image"].is_string());
}

#[tokio::test]
async fn upload_without_file_part_changes_nothing() {
    let model = spawn_model_server(StatusCode::OK, b"").await;
    let app = spawn_app(&model.base_url);
    let cookie = start_session(&app.app).await;

    let boundary = "----nst-boundary-no-file";
    let body = format!(
        "--{b}\r\nContent-Disposition: form-data; name=\"comment\"\r\n\r\nhello\r\n--{b}--\r\n",
        b = boundary
    );
    let req = Request::builder()
        .method("POST")
        .uri("/upload/style")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={}", boundary),
        )
        .header(header::COOKIE, &cookie)
        .body(Body::from(body))
        .expect("failed to build upload request");

    let res = send(&app.app, req).await;
    assert_status(res.status(), StatusCode::SEE_OTHER);

    let state = workspace(&app.app, &cookie).await;
    assert_eq!(state["style_image"], Value::Null);
    assert_eq!(state["content_image"], Value::Null);
}

#[tokio::test]
async fn oversized_upload_is_rejected() {
    let model = spawn_model_server(StatusCode::OK, b"").await;
    let app = spawn_app(&model.base_url);
    let limited = app.app.clone().layer(DefaultBodyLimit::max(1024));

    let (boundary, body) = multipart_file_body("big.bin", None, &vec![7u8; 64 * 1024]);
    let req = Request::builder()
        .method("POST")
        .uri("/upload/content")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={}", boundary),
        )
        .body(Body::from(body))
        .expect("failed to build upload request");

    let res = send(&limited, req).await;
    assert_status(res.status(), StatusCode::PAYLOAD_TOO_LARGE);
    assert!(read_text(res).await.contains("too large"));
}
