use crate::helpers::JsonResponse;
use actix_web::{get, http::StatusCode, HttpResponse};

/// Assets are served by the static file handler, anything reaching the app is missing.
#[get("/assets/{path:.*}")]
pub async fn assets() -> HttpResponse {
    JsonResponse::build().failure("Asset not found", StatusCode::NOT_FOUND)
}

pub async fn not_found() -> HttpResponse {
    JsonResponse::build().failure("Not found", StatusCode::NOT_FOUND)
}
