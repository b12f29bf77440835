use actix_web::{get, HttpResponse, Responder};

#[get("/")]
pub async fn home() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "message": "Developer Directory API",
        "status": "Ok",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "profiles": "/api/profiles",
            "search": "/api/profiles/search",
            "health": "/api/health",
            "status": "/api/status"
        }
    }))
}
