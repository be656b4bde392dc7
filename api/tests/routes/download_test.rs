use crate::helpers::{
    MultipartPart,
    app::{TestApp, body_bytes, json_body},
    make_test_app,
};
use axum::http::{StatusCode, header};

async fn upload_result(app: &TestApp, student: &str, filename: &str, content: &[u8]) {
    let response = app
        .post_multipart(
            "/api/upload-result",
            &[
                MultipartPart::Text("studentName", student),
                MultipartPart::File {
                    field: "file",
                    filename,
                    content,
                },
            ],
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn download_returns_uploaded_bytes_with_pdf_headers() {
    let app = make_test_app();
    let payload: &[u8] = b"%PDF-1.4\n\x00\x01binary result";
    upload_result(&app, "薛舒文", "graded.pdf", payload).await;

    let response = app.download("薛舒文").await;
    assert_eq!(response.status(), StatusCode::OK);

    let headers = response.headers().clone();
    assert_eq!(headers[header::CONTENT_TYPE], "application/pdf");
    assert_eq!(headers[header::CACHE_CONTROL], "no-cache");
    let disposition = headers[header::CONTENT_DISPOSITION].to_str().unwrap();
    assert!(disposition.starts_with("attachment; filename*=UTF-8''"));
    assert!(disposition.ends_with(".pdf"));

    assert_eq!(body_bytes(response).await, payload);
}

#[tokio::test]
async fn second_result_upload_replaces_first() {
    let app = make_test_app();
    upload_result(&app, "薛舒文", "v1.pdf", b"first version").await;
    upload_result(&app, "薛舒文", "v2.pdf", b"second version").await;

    let response = app.download("薛舒文").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_bytes(response).await, b"second version");
}

#[tokio::test]
async fn text_results_are_sent_as_utf8_text() {
    let app = make_test_app();
    upload_result(&app, "黄玉婷", "comments.txt", "评语：很好".as_bytes()).await;

    let response = app.download("黄玉婷").await;
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "text/plain; charset=utf-8"
    );
}

#[tokio::test]
async fn download_without_student_is_bad_request() {
    let app = make_test_app();

    let response = app.get("/api/download").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(response).await["message"], "请提供学生姓名参数");
}

#[tokio::test]
async fn download_for_student_without_result_is_not_found() {
    let app = make_test_app();

    let response = app.download("茅懋").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = json_body(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["message"], "未找到 茅懋 的批改结果文件");
}

#[tokio::test]
async fn download_rejects_traversal() {
    let app = make_test_app();

    let response = app.download("../secret").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn uppercase_extension_result_is_downloadable() {
    let app = make_test_app();
    upload_result(&app, "薛舒文", "SCAN.PDF", b"%PDF-1.4 scanned").await;

    let response = app.download("薛舒文").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::CONTENT_TYPE], "application/pdf");
    assert_eq!(body_bytes(response).await, b"%PDF-1.4 scanned");

    let stats = app.stats().await;
    let students = stats["students"].as_array().unwrap();
    let entry = students.iter().find(|s| s["name"] == "薛舒文").unwrap();
    assert_eq!(entry["hasResult"], true);
    assert_eq!(entry["resultFileName"], "薛舒文_批改结果.pdf");
}
