use std::collections::HashMap;

use actix_web::{web, HttpResponse, Responder};
use serde::Serialize;

use crate::services::proximity_service::ProximityService;

#[derive(Serialize)]
struct HealthStatus {
    status: String,
    services: HashMap<String, ServiceStatus>,
    version: String,
}

#[derive(Serialize, Clone)]
struct ServiceStatus {
    status: String,
    details: Option<String>,
}

pub async fn health_check(proximity: web::Data<ProximityService>) -> impl Responder {
    let mut health = HealthStatus {
        status: "ok".to_string(),
        services: HashMap::new(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    // The routing collaborator is cosmetic, so a bad configuration degrades
    // the report but the service itself stays up.
    let routing = check_routing(&proximity);
    if routing.status != "ok" {
        health.status = "degraded".to_string();
    }
    health.services.insert("routing".to_string(), routing);

    HttpResponse::Ok().json(health)
}

fn check_routing(proximity: &ProximityService) -> ServiceStatus {
    let url = proximity.routing_url();
    if url.starts_with("http://") || url.starts_with("https://") {
        ServiceStatus {
            status: "ok".to_string(),
            details: Some(format!("Routing collaborator configured at {}", url)),
        }
    } else {
        ServiceStatus {
            status: "error".to_string(),
            details: Some(format!("Routing URL is not an http endpoint: {}", url)),
        }
    }
}
