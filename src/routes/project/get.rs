use crate::db::ProjectStore;
use crate::helpers::JsonResponse;
use actix_web::{get, web, Responder, Result};
use serde::Serialize;
use serde_json::Value;

#[derive(Serialize)]
struct ProjectList {
    projects: Vec<Value>,
}

#[tracing::instrument(name = "Get project list.", skip(store))]
#[get("")]
pub async fn list(store: web::Data<ProjectStore>) -> Result<impl Responder> {
    store
        .all()
        .await
        .map(|projects| JsonResponse::build().set_data(ProjectList { projects }).ok())
        .map_err(|err| {
            tracing::error!("Failed to read projects, error: {:?}", err);
            JsonResponse::build().internal_server_error("Could not load projects")
        })
}
