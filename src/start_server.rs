use actix_web::http::header::{CacheControl, CacheDirective};
use actix_web::middleware::DefaultHeaders;
use actix_web::{web, App, HttpServer};
use std::net::TcpListener;

use crate::{routes, PageContent, Settings, SharedState};

pub async fn start_server(
    listener: TcpListener,
    settings: Settings,
    content: PageContent,
) -> std::io::Result<()> {
    let shared_state = web::Data::new(SharedState { settings, content });
    let server = HttpServer::new(move || {
        App::new()
            .app_data(shared_state.clone())
            .wrap(DefaultHeaders::new().add(CacheControl(vec![CacheDirective::NoCache])))
            .service(routes::get_index_route)
            .service(routes::get_health_route)
    })
    .workers(1)
    .listen(listener)?;
    server.run().await
}
