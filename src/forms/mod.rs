pub mod ask;
mod fields;
pub mod project;

pub use ask::AskForm;
pub use project::ProjectForm;

use crate::helpers::{require_fields, JsonResponse};
use actix_web::{web::Bytes, Error};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// Decode a request body into a typed form.
///
/// Required fields are checked on the raw object first so a client learns
/// about every missing field at once; only then is the typed form built.
/// A body that is valid JSON but not an object counts as `{}`.
pub fn body_into_form<T: DeserializeOwned>(body: &Bytes, required: &[&str]) -> Result<T, Error> {
    let payload: Value = serde_json::from_slice(body).map_err(|err| {
        tracing::debug!("Request body is not JSON: {}", err);
        JsonResponse::build().bad_request("Request body must be valid JSON")
    })?;

    let payload = match payload {
        Value::Object(map) => map,
        _ => Map::new(),
    };

    require_fields(required, &payload).map_err(|err| {
        tracing::debug!(missing = ?err.missing, "Invalid data received");
        JsonResponse::build()
            .set_errors(err.missing.clone())
            .form_error(err.to_string())
    })?;

    serde_path_to_error::deserialize(Value::Object(payload)).map_err(|err| {
        let path = err.path().to_string();
        let msg = format!("{}: {}", path, err.inner());
        tracing::debug!("{}", msg);
        JsonResponse::build().set_errors(vec![path]).form_error(msg)
    })
}
