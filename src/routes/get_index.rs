#![deny(clippy::unwrap_used)]

use actix_web::{HttpResponse, Responder, get, web};

use crate::{SharedState, errors::AppError, render};

#[get("/")]
async fn get_index_route(shared_state: web::Data<SharedState>) -> Result<impl Responder, AppError> {
    let state = shared_state.into_inner();
    let page = web::block(move || render::render_page(&state.settings, &state.content))
        .await
        .map_err(|_| AppError::ServerError)??;
    Ok(HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(page.html))
}
