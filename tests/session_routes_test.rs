use actix_web::{test, App};

mod common;

#[actix_rt::test]
async fn test_session_lifecycle() {
    let (manager, proximity) = common::app_data();
    let app = test::init_service(
        App::new()
            .app_data(manager)
            .app_data(proximity)
            .configure(driftwood_api::app_config),
    )
    .await;

    // Create: default selection, one of two sets included, so $300.
    let req = test::TestRequest::post().uri("/api/sessions").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());
    let body: serde_json::Value = test::read_body_json(resp).await;
    let session_id = body["session_id"].as_str().expect("session id").to_string();
    assert_eq!(body["selection"]["chair_set_count"], 2);
    assert_eq!(body["selection"]["supply_box_included"], false);
    assert_eq!(body["itinerary"]["paid_chair_sets"], 1);
    assert_eq!(body["itinerary"]["total"], 300);

    // Read it back.
    let req = test::TestRequest::get()
        .uri(&format!("/api/sessions/{}", session_id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["itinerary"]["total"], 300);

    // Tear down, then the session is gone.
    let req = test::TestRequest::delete()
        .uri(&format!("/api/sessions/{}", session_id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let req = test::TestRequest::get()
        .uri(&format!("/api/sessions/{}", session_id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);

    let req = test::TestRequest::delete()
        .uri(&format!("/api/sessions/{}", session_id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);
}

#[actix_rt::test]
async fn test_invalid_session_id_is_rejected() {
    let (manager, proximity) = common::app_data();
    let app = test::init_service(
        App::new()
            .app_data(manager)
            .app_data(proximity)
            .configure(driftwood_api::app_config),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/api/sessions/not-a-uuid")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}

#[actix_rt::test]
async fn test_unknown_session_is_not_found() {
    let (manager, proximity) = common::app_data();
    let app = test::init_service(
        App::new()
            .app_data(manager)
            .app_data(proximity)
            .configure(driftwood_api::app_config),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/api/sessions/00000000-0000-0000-0000-000000000000")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);
}

#[actix_rt::test]
async fn test_sessions_do_not_share_state() {
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
    let first = body["session_id"].as_str().unwrap().to_string();

    let req = test::TestRequest::post().uri("/api/sessions").to_request();
    let body: serde_json::Value = test::read_body_json(test::call_service(&app, req).await).await;
    let second = body["session_id"].as_str().unwrap().to_string();

    let req = test::TestRequest::post()
        .uri(&format!("/api/sessions/{}/supply-box/toggle", first))
        .to_request();
    let body: serde_json::Value = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(body["itinerary"]["total"], 675);

    let req = test::TestRequest::get()
        .uri(&format!("/api/sessions/{}", second))
        .to_request();
    let body: serde_json::Value = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(body["itinerary"]["total"], 300);
}
