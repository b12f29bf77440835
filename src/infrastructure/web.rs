use actix_cors::Cors;

use crate::settings::AppConfig;

/// CORS policy from config. Config validation already rejects a wildcard
/// origin in production, so `permissive` here only ever runs in dev/test.
pub fn build_cors(config: &AppConfig) -> Cors {
    let origins = config.cors_origins();

    if origins.iter().any(|o| o == "*") {
        return Cors::permissive();
    }

    let mut cors = Cors::default()
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE"])
        .allow_any_header()
        .max_age(3600);

    for origin in &origins {
        cors = cors.allowed_origin(origin);
    }

    cors
}
