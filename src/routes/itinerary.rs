use actix_web::{web, HttpResponse, Responder};
use serde::Deserialize;

use crate::routes::session::parse_session_id;
use crate::services::save_service::SaveService;
use crate::session::SessionManager;

#[derive(Deserialize)]
pub struct SaveBody {
    /// Deliberately unvalidated; the delivery collaborator owns the address.
    pub email: String,
}

/*
    GET /api/sessions/{id}/itinerary
*/
pub async fn get_itinerary(
    path: web::Path<String>,
    manager: web::Data<SessionManager>,
) -> impl Responder {
    let session_id = match parse_session_id(&path.into_inner()) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match manager.with_session(session_id, |session| session.engine.compute_itinerary()) {
        Some(itinerary) => HttpResponse::Ok().json(itinerary),
        None => HttpResponse::NotFound().body("Session not found"),
    }
}

/*
    POST /api/sessions/{id}/save
*/
pub async fn save(
    path: web::Path<String>,
    body: web::Json<SaveBody>,
    manager: web::Data<SessionManager>,
) -> impl Responder {
    let session_id = match parse_session_id(&path.into_inner()) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let snapshot = manager.with_session(session_id, |session| session.engine.compute_itinerary());

    match snapshot {
        Some(itinerary) => {
            let receipt = SaveService::save(&body.email, itinerary);
            HttpResponse::Ok().json(receipt)
        }
        None => HttpResponse::NotFound().body("Session not found"),
    }
}
