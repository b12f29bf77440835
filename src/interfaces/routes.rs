use actix_web::web;

use crate::handlers::{home::home, system};

mod json_error;
mod profiles;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(home);

    cfg.service(
        web::scope("/api")
            .service(system::health_check)
            .service(system::status)
            .configure(profiles::config_routes)
    );

    cfg.configure(json_error::config_routes);
}
