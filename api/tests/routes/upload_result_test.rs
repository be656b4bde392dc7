use crate::helpers::{MultipartPart, app::json_body, make_test_app};
use axum::http::StatusCode;

#[tokio::test]
async fn result_upload_uses_fixed_name() {
    let app = make_test_app();

    let response = app
        .post_multipart(
            "/api/upload-result",
            &[
                MultipartPart::Text("studentName", "薛舒文"),
                MultipartPart::File {
                    field: "file",
                    filename: "graded.pdf",
                    content: b"%PDF-1.4 graded",
                },
            ],
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = json_body(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["message"], "批改结果上传成功！");
    assert_eq!(json["studentName"], "薛舒文");
    assert_eq!(json["fileName"], "薛舒文_批改结果.pdf");
    assert_eq!(json["filePath"], "/results/薛舒文_批改结果.pdf");

    assert!(app.storage.results_dir().join("薛舒文_批改结果.pdf").is_file());
}

#[tokio::test]
async fn result_upload_without_student_is_rejected() {
    let app = make_test_app();

    let response = app
        .post_multipart(
            "/api/upload-result",
            &[MultipartPart::File {
                field: "file",
                filename: "graded.pdf",
                content: b"x",
            }],
        )
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(response).await["message"], "请选择学生");
}

#[tokio::test]
async fn result_upload_without_file_is_rejected() {
    let app = make_test_app();

    let response = app
        .post_multipart(
            "/api/upload-result",
            &[MultipartPart::Text("studentName", "薛舒文")],
        )
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(response).await["message"], "未选择文件");
}

#[tokio::test]
async fn result_upload_rejects_path_components() {
    let app = make_test_app();

    let response = app
        .post_multipart(
            "/api/upload-result",
            &[
                MultipartPart::Text("studentName", "../../etc/passwd"),
                MultipartPart::File {
                    field: "file",
                    filename: "x.txt",
                    content: b"x",
                },
            ],
        )
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(response).await["message"], "姓名包含非法字符");
}
