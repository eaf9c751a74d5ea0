use actix_web::{web, HttpResponse, Responder};
use serde::Deserialize;

use crate::models::selection::DayChip;
use crate::routes::session::{parse_session_id, SessionSnapshot};
use crate::services::itinerary_engine::ItineraryEngine;
use crate::session::SessionManager;

#[derive(Deserialize)]
pub struct ChairSetBody {
    pub count: i64,
}

#[derive(Deserialize)]
pub struct ToggleBody {
    pub day: Option<DayChip>,
}

#[derive(Deserialize)]
pub struct DayBody {
    pub day: DayChip,
}

/// Applies one engine operation and answers with the recomputed snapshot.
/// Mutations never fail; the only error paths are a bad or unknown id.
fn mutate(
    manager: &SessionManager,
    raw_id: &str,
    operation: impl FnOnce(&mut ItineraryEngine),
) -> HttpResponse {
    let session_id = match parse_session_id(raw_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match manager.with_session(session_id, |session| {
        operation(&mut session.engine);
        SessionSnapshot::of(&session.engine)
    }) {
        Some(snapshot) => HttpResponse::Ok().json(snapshot),
        None => HttpResponse::NotFound().body("Session not found"),
    }
}

/*
    PUT /api/sessions/{id}/chair-sets
*/
pub async fn set_chair_sets(
    path: web::Path<String>,
    body: web::Json<ChairSetBody>,
    manager: web::Data<SessionManager>,
) -> impl Responder {
    mutate(&manager, &path.into_inner(), |engine| {
        engine.set_chair_set_count(body.count)
    })
}

/*
    POST /api/sessions/{id}/chair-sets/increment
*/
pub async fn increment_chair_sets(
    path: web::Path<String>,
    manager: web::Data<SessionManager>,
) -> impl Responder {
    mutate(&manager, &path.into_inner(), ItineraryEngine::increment_chair_sets)
}

/*
    POST /api/sessions/{id}/chair-sets/decrement
*/
pub async fn decrement_chair_sets(
    path: web::Path<String>,
    manager: web::Data<SessionManager>,
) -> impl Responder {
    mutate(&manager, &path.into_inner(), ItineraryEngine::decrement_chair_sets)
}

/*
    POST /api/sessions/{id}/supply-box/toggle
*/
pub async fn toggle_supply_box(
    path: web::Path<String>,
    manager: web::Data<SessionManager>,
) -> impl Responder {
    mutate(&manager, &path.into_inner(), ItineraryEngine::toggle_supply_box)
}

/*
    POST /api/sessions/{id}/bonfire/toggle

    The body is optional; without an explicit day the engine falls back to
    its default chip.
*/
pub async fn toggle_bonfire(
    path: web::Path<String>,
    body: Option<web::Json<ToggleBody>>,
    manager: web::Data<SessionManager>,
) -> impl Responder {
    let day = body.and_then(|body| body.day);
    mutate(&manager, &path.into_inner(), |engine| engine.toggle_bonfire(day))
}

/*
    PUT /api/sessions/{id}/bonfire/day
*/
pub async fn set_bonfire_day(
    path: web::Path<String>,
    body: web::Json<DayBody>,
    manager: web::Data<SessionManager>,
) -> impl Responder {
    mutate(&manager, &path.into_inner(), |engine| {
        engine.set_bonfire_day(body.day)
    })
}

/*
    POST /api/sessions/{id}/photo-session/toggle
*/
pub async fn toggle_photo_session(
    path: web::Path<String>,
    body: Option<web::Json<ToggleBody>>,
    manager: web::Data<SessionManager>,
) -> impl Responder {
    let day = body.and_then(|body| body.day);
    mutate(&manager, &path.into_inner(), |engine| {
        engine.toggle_photo_session(day)
    })
}

/*
    PUT /api/sessions/{id}/photo-session/day
*/
pub async fn set_photo_day(
    path: web::Path<String>,
    body: web::Json<DayBody>,
    manager: web::Data<SessionManager>,
) -> impl Responder {
    mutate(&manager, &path.into_inner(), |engine| {
        engine.set_photo_day(body.day)
    })
}
