use actix_web::{test, App};
use serde_json::json;

mod common;

#[actix_rt::test]
async fn test_save_returns_receipt_with_snapshot() {
    let (manager, proximity) = common::app_data();
    let app = test::init_service(
        App::new()
            .app_data(manager)
            .app_data(proximity)
            .configure(driftwood_api::app_config),
    )
    .await;

    let req = test::TestRequest::post().uri("/api/sessions").to_request();
    let body: serde_json::Value = test::read_body_json(test::call_service(&app, req).await).await;
    let id = body["session_id"].as_str().unwrap().to_string();

    let req = test::TestRequest::post()
        .uri(&format!("/api/sessions/{}/supply-box/toggle", id))
        .to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::post()
        .uri(&format!("/api/sessions/{}/save", id))
        .set_json(&json!({ "email": "guest@example.com" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["email"], "guest@example.com");
    assert_eq!(body["itinerary"]["total"], 675);
    assert!(body["receipt_id"].as_str().is_some());
    assert!(body["saved_at"].as_str().is_some());
}

#[actix_rt::test]
async fn test_save_with_unknown_session() {
    let (manager, proximity) = common::app_data();
    let app = test::init_service(
        App::new()
            .app_data(manager)
            .app_data(proximity)
            .configure(driftwood_api::app_config),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/sessions/00000000-0000-0000-0000-000000000000/save")
        .set_json(&json!({ "email": "guest@example.com" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);
}
