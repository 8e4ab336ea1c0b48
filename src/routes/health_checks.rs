use crate::helpers::JsonResponse;
use actix_web::{get, HttpResponse};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;

#[derive(Serialize)]
struct HealthStatus {
    status: &'static str,
    timestamp: String,
}

#[tracing::instrument(name = "Health check.")]
#[get("/health")]
pub async fn health_check() -> HttpResponse {
    JsonResponse::build()
        .set_data(HealthStatus {
            status: "ok",
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, false),
        })
        .ok()
}
