use actix_web::{web, HttpResponse, Responder};
use serde::Serialize;

use crate::models::addon::AddOnCatalog;
use crate::models::property::PropertyConfig;
use crate::session::SessionManager;

#[derive(Serialize)]
struct PropertyResponse<'a> {
    property: &'a PropertyConfig,
    catalog: &'a AddOnCatalog,
}

/*
    /api/property
*/
pub async fn get_property(manager: web::Data<SessionManager>) -> impl Responder {
    HttpResponse::Ok().json(PropertyResponse {
        property: manager.property(),
        catalog: manager.catalog(),
    })
}
