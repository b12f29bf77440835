use actix_web::web;

use crate::handlers::profiles;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/profiles")
            .service(
                web::resource("")
                    .route(web::get().to(profiles::list_profiles))
                    .route(web::post().to(profiles::create_profile))
            )
            // Must be registered before the `{profile_id}` matcher.
            .service(
                web::resource("/search")
                    .route(web::get().to(profiles::search_profiles))
            )
            .service(
                web::resource("/{profile_id}")
                    .route(web::get().to(profiles::get_profile_by_id))
                    .route(web::put().to(profiles::update_profile))
                    .route(web::delete().to(profiles::delete_profile))
            )
    );
}
