use crate::helpers::{app::json_body, make_test_app};
use axum::http::StatusCode;

#[tokio::test]
async fn health_check_returns_ok_json() {
    let app = make_test_app();

    let response = app.get("/api/health").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = json_body(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["data"], "OK");
    assert_eq!(json["message"], "Health check passed");
}
