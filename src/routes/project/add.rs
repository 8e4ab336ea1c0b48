use crate::db::ProjectStore;
use crate::forms;
use crate::helpers::JsonResponse;
use crate::models;
use actix_web::{post, web, web::Bytes, Responder, Result};
use serde::Serialize;

#[derive(Serialize)]
struct ProjectCreated {
    project: models::Project,
}

#[tracing::instrument(name = "Add project.", skip(body, store))]
#[post("")]
pub async fn add(body: Bytes, store: web::Data<ProjectStore>) -> Result<impl Responder> {
    let form: forms::ProjectForm = forms::body_into_form(&body, forms::ProjectForm::REQUIRED)?;
    let project: models::Project = form.into();

    store
        .append(project.clone())
        .await
        .map(|_| JsonResponse::build().set_data(ProjectCreated { project }).created())
        .map_err(|err| {
            tracing::error!("Failed to save project, error: {:?}", err);
            JsonResponse::build().internal_server_error("Could not save project")
        })
}
