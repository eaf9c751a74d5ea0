use actix_web::{web, HttpResponse, Responder};
use serde::Serialize;

use crate::routes::session::parse_session_id;
use crate::services::proximity_service::{ProximityService, RouteGeometry, RouteRequest};
use crate::session::SessionManager;

#[derive(Serialize)]
struct ProximityResponse {
    distance_miles: f64,
    formatted_label: String,
    route_request: RouteRequest,
}

#[derive(Serialize)]
struct MapState {
    route_geometry: RouteGeometry,
    camera_bearing: f64,
}

/*
    GET /api/proximity

    Distance is computed locally on every call; it never depends on the
    routing collaborator.
*/
pub async fn get_proximity(manager: web::Data<SessionManager>) -> impl Responder {
    let property = manager.property();
    let distance_miles =
        ProximityService::distance_miles(property.location, property.beach_access);

    HttpResponse::Ok().json(ProximityResponse {
        distance_miles,
        formatted_label: ProximityService::format_distance(distance_miles),
        route_request: ProximityService::build_route_request(
            property.location,
            property.beach_access,
        ),
    })
}

/*
    GET /api/sessions/{id}/map

    Polled by the map renderer: the fetched route geometry (or the empty
    fallback) plus the current camera bearing.
*/
pub async fn get_map_state(
    path: web::Path<String>,
    manager: web::Data<SessionManager>,
) -> impl Responder {
    let session_id = match parse_session_id(&path.into_inner()) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match manager.with_session(session_id, |session| MapState {
        route_geometry: session.route_geometry(),
        camera_bearing: session.camera_bearing(),
    }) {
        Some(state) => HttpResponse::Ok().json(state),
        None => HttpResponse::NotFound().body("Session not found"),
    }
}
