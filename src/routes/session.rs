use actix_web::{web, HttpResponse, Responder};
use serde::Serialize;
use uuid::Uuid;

use crate::models::itinerary::Itinerary;
use crate::models::selection::SelectionState;
use crate::services::itinerary_engine::ItineraryEngine;
use crate::session::SessionManager;

/// Selection plus its derived itinerary, the shape every session-scoped
/// route responds with so the caller never sees a stale total.
#[derive(Serialize)]
pub struct SessionSnapshot {
    pub selection: SelectionState,
    pub itinerary: Itinerary,
}

impl SessionSnapshot {
    pub fn of(engine: &ItineraryEngine) -> Self {
        Self {
            selection: engine.selection().clone(),
            itinerary: engine.compute_itinerary(),
        }
    }
}

#[derive(Serialize)]
struct CreatedSession {
    session_id: Uuid,
    #[serde(flatten)]
    snapshot: SessionSnapshot,
}

pub fn parse_session_id(raw: &str) -> Result<Uuid, HttpResponse> {
    Uuid::parse_str(raw).map_err(|_| HttpResponse::BadRequest().body("Invalid session id"))
}

/*
    POST /api/sessions
*/
pub async fn create(manager: web::Data<SessionManager>) -> impl Responder {
    let session_id = manager.create();

    match manager.with_session(session_id, |session| SessionSnapshot::of(&session.engine)) {
        Some(snapshot) => HttpResponse::Ok().json(CreatedSession {
            session_id,
            snapshot,
        }),
        None => {
            eprintln!("Session {} vanished right after creation", session_id);
            HttpResponse::InternalServerError().body("Failed to create session")
        }
    }
}

/*
    GET /api/sessions/{id}
*/
pub async fn get_by_id(path: web::Path<String>, manager: web::Data<SessionManager>) -> impl Responder {
    let session_id = match parse_session_id(&path.into_inner()) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match manager.with_session(session_id, |session| SessionSnapshot::of(&session.engine)) {
        Some(snapshot) => HttpResponse::Ok().json(snapshot),
        None => HttpResponse::NotFound().body("Session not found"),
    }
}

/*
    DELETE /api/sessions/{id}
*/
pub async fn close(path: web::Path<String>, manager: web::Data<SessionManager>) -> impl Responder {
    let session_id = match parse_session_id(&path.into_inner()) {
        Ok(id) => id,
        Err(response) => return response,
    };

    if manager.close(session_id) {
        HttpResponse::Ok().json(serde_json::json!({ "closed": true }))
    } else {
        HttpResponse::NotFound().body("Session not found")
    }
}
