use actix_web::{Responder, get};

#[get("/health")]
async fn get_health_route() -> impl Responder {
    "ok"
}
