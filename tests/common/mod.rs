use actix_web::web;

use driftwood_api::models::addon::AddOnCatalog;
use driftwood_api::models::property::PropertyConfig;
use driftwood_api::services::proximity_service::ProximityService;
use driftwood_api::session::SessionManager;

/// App data pointed at an unreachable routing collaborator, so tests exercise
/// the empty-geometry fallback instead of the live network.
pub fn app_data() -> (web::Data<SessionManager>, web::Data<ProximityService>) {
    let proximity =
        ProximityService::new(Some("http://127.0.0.1:9".to_string())).expect("http client");

    let manager = web::Data::new(SessionManager::new(
        AddOnCatalog::default(),
        PropertyConfig::driftwood_cottage(),
        proximity.clone(),
    ));

    (manager, web::Data::new(proximity))
}
