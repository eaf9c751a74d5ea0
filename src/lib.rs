use actix_web::web;

pub mod models;
pub mod routes;
pub mod services;
pub mod session;

/// Full route table, shared between the binary and the integration tests so
/// both exercise the same surface.
pub fn app_config(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(routes::health::health_check))
        .service(
            web::scope("/api")
                .route("/property", web::get().to(routes::property::get_property))
                .route("/proximity", web::get().to(routes::proximity::get_proximity))
                .service(
                    web::scope("/sessions")
                        .route("", web::post().to(routes::session::create))
                        .route("/{id}", web::get().to(routes::session::get_by_id))
                        .route("/{id}", web::delete().to(routes::session::close))
                        .route(
                            "/{id}/itinerary",
                            web::get().to(routes::itinerary::get_itinerary),
                        )
                        .route("/{id}/save", web::post().to(routes::itinerary::save))
                        .route("/{id}/map", web::get().to(routes::proximity::get_map_state))
                        .route(
                            "/{id}/chair-sets",
                            web::put().to(routes::selection::set_chair_sets),
                        )
                        .route(
                            "/{id}/chair-sets/increment",
                            web::post().to(routes::selection::increment_chair_sets),
                        )
                        .route(
                            "/{id}/chair-sets/decrement",
                            web::post().to(routes::selection::decrement_chair_sets),
                        )
                        .route(
                            "/{id}/supply-box/toggle",
                            web::post().to(routes::selection::toggle_supply_box),
                        )
                        .route(
                            "/{id}/bonfire/toggle",
                            web::post().to(routes::selection::toggle_bonfire),
                        )
                        .route(
                            "/{id}/bonfire/day",
                            web::put().to(routes::selection::set_bonfire_day),
                        )
                        .route(
                            "/{id}/photo-session/toggle",
                            web::post().to(routes::selection::toggle_photo_session),
                        )
                        .route(
                            "/{id}/photo-session/day",
                            web::put().to(routes::selection::set_photo_day),
                        ),
                ),
        );
}
