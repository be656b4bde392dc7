use crate::helpers::{app::json_body, make_test_app};
use axum::http::StatusCode;

#[tokio::test]
async fn roster_lists_students_in_order_with_variants() {
    let app = make_test_app();

    let response = app.get("/api/roster").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = json_body(response).await;
    let students = json["data"]["students"].as_array().unwrap();
    assert_eq!(students.len(), 23);
    assert_eq!(students[0], "薛舒文");
    assert_eq!(students[22], "姚奕晨");
    assert_eq!(json["data"]["variants"]["周騫騫"][0], "周骞骞");
}
