use crate::helpers::{MultipartPart, app::json_body, make_test_app, make_test_app_with_limit};
use axum::http::StatusCode;

#[tokio::test]
async fn upload_stores_file_under_encoded_name() {
    let app = make_test_app();

    let response = app
        .post_multipart(
            "/api/upload",
            &[
                MultipartPart::Text("name", "  陈曦 "),
                MultipartPart::File {
                    field: "file",
                    filename: "作业.pdf",
                    content: b"homework",
                },
            ],
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = json_body(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["message"], "文件上传成功！");
    assert_eq!(json["name"], "陈曦");

    let file = json["file"].as_str().unwrap();
    assert!(file.starts_with("陈曦_"));
    assert!(file.ends_with(".pdf"));
    assert_eq!(json["uploadPath"], format!("/uploads/{file}"));

    let stored = std::fs::read(app.storage.uploads_dir().join(file)).unwrap();
    assert_eq!(stored, b"homework");
}

#[tokio::test]
async fn upload_sanitizes_punctuation_in_name() {
    let app = make_test_app();

    let response = app
        .post_multipart(
            "/api/upload",
            &[
                MultipartPart::Text("name", "Li Lei"),
                MultipartPart::File {
                    field: "file",
                    filename: "hw.docx",
                    content: b"x",
                },
            ],
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = json_body(response).await;
    assert!(json["file"].as_str().unwrap().starts_with("Li_Lei_"));
}

#[tokio::test]
async fn upload_without_file_is_rejected() {
    let app = make_test_app();

    let response = app
        .post_multipart("/api/upload", &[MultipartPart::Text("name", "陈曦")])
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = json_body(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["message"], "未选择文件");
}

#[tokio::test]
async fn upload_with_unchosen_file_input_is_rejected() {
    let app = make_test_app();

    let response = app
        .post_multipart(
            "/api/upload",
            &[
                MultipartPart::Text("name", "陈曦"),
                MultipartPart::File {
                    field: "file",
                    filename: "",
                    content: b"",
                },
            ],
        )
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(response).await["message"], "未选择文件");
}

#[tokio::test]
async fn upload_with_blank_name_is_rejected() {
    let app = make_test_app();

    let response = app
        .post_multipart(
            "/api/upload",
            &[
                MultipartPart::Text("name", "   "),
                MultipartPart::File {
                    field: "file",
                    filename: "a.pdf",
                    content: b"x",
                },
            ],
        )
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = json_body(response).await;
    assert_eq!(json["message"], "请输入姓名");
    assert!(!app.storage.uploads_dir().exists());
}

#[tokio::test]
async fn uploaded_file_is_served_from_uploads_path() {
    let app = make_test_app();

    let response = app
        .post_multipart(
            "/api/upload",
            &[
                MultipartPart::Text("name", "LiLei"),
                MultipartPart::File {
                    field: "file",
                    filename: "hw.txt",
                    content: b"plain text",
                },
            ],
        )
        .await;
    let json = json_body(response).await;
    let path = json["uploadPath"].as_str().unwrap().to_string();

    let response = app.get(&path).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        crate::helpers::app::body_bytes(response).await,
        b"plain text"
    );
}

#[tokio::test]
async fn oversized_upload_is_payload_too_large() {
    let app = make_test_app_with_limit(1024);
    let content = vec![b'x'; 8 * 1024];

    let response = app
        .post_multipart(
            "/api/upload",
            &[
                MultipartPart::Text("name", "陈曦"),
                MultipartPart::File {
                    field: "file",
                    filename: "big.pdf",
                    content: &content,
                },
            ],
        )
        .await;
    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);

    let json = json_body(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["message"], "文件过大");
    assert!(app.storage.list_submissions().await.unwrap().is_empty());
}
