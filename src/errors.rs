use actix_web::{
    http::{header::ContentType, StatusCode},
    HttpResponse,
};
use derive_more::derive::{Display, Error};

#[derive(Debug, Display, Error)]
pub enum AppError {
    #[display("Page content not found")]
    ContentNotFound,
    #[display("Page content is malformed")]
    BadContent,
    #[display("Internal server error")]
    ServerError,
}

impl actix_web::error::ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .insert_header(ContentType::html())
            .body(self.to_string())
    }

    fn status_code(&self) -> actix_web::http::StatusCode {
        match *self {
            AppError::ContentNotFound => StatusCode::NOT_FOUND,
            AppError::BadContent => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::ServerError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
