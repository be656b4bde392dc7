use crate::helpers::{
    app::{body_bytes, json_body},
    make_test_app,
};
use axum::http::{StatusCode, header};

#[tokio::test]
async fn views_are_served_as_html() {
    let app = make_test_app();

    for (path, marker) in [
        ("/", "/api/upload"),
        ("/admin", "/api/upload-result"),
        ("/stats", "/api/stats"),
    ] {
        let response = app.get(path).await;
        assert_eq!(response.status(), StatusCode::OK, "{path}");
        assert!(
            response.headers()[header::CONTENT_TYPE]
                .to_str()
                .unwrap()
                .starts_with("text/html")
        );
        let html = String::from_utf8(body_bytes(response).await).unwrap();
        assert!(html.contains(marker), "{path} should reference {marker}");
    }
}

#[tokio::test]
async fn unknown_route_is_json_not_found() {
    let app = make_test_app();

    let response = app.get("/nope").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(json_body(response).await["success"], false);
}
