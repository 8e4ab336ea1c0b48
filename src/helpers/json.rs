use actix_web::error::InternalError;
use actix_web::http::StatusCode;
use actix_web::{Error, HttpResponse};
use serde::Serialize;

#[derive(Serialize)]
struct SuccessBody<T> {
    success: bool,
    data: T,
}

#[derive(Serialize)]
struct FailureBody {
    success: bool,
    message: String,
    errors: Vec<String>,
}

/// `{"success": true, "data": data}` with the given status.
pub fn success<T: Serialize>(data: T, status: StatusCode) -> HttpResponse {
    HttpResponse::build(status).json(SuccessBody {
        success: true,
        data,
    })
}

/// `{"success": false, "message": message, "errors": errors}` with the given status.
pub fn failure(message: impl Into<String>, status: StatusCode, errors: Vec<String>) -> HttpResponse {
    HttpResponse::build(status).json(FailureBody {
        success: false,
        message: message.into(),
        errors,
    })
}

/// Builder over the response envelope.
///
/// ```ignore
/// JsonResponse::build().set_data(json!({"projects": list})).ok()
/// JsonResponse::build().set_errors(missing).form_error("Missing required fields: title")
/// ```
pub struct JsonResponse<T = ()> {
    data: Option<T>,
    errors: Vec<String>,
}

impl JsonResponse<()> {
    pub fn build() -> Self {
        JsonResponse {
            data: None,
            errors: vec![],
        }
    }
}

impl<T: Serialize> JsonResponse<T> {
    pub fn set_data<U: Serialize>(self, data: U) -> JsonResponse<U> {
        JsonResponse {
            data: Some(data),
            errors: self.errors,
        }
    }

    pub fn set_errors(mut self, errors: Vec<String>) -> Self {
        self.errors = errors;
        self
    }

    pub fn ok(self) -> HttpResponse {
        self.success(StatusCode::OK)
    }

    pub fn created(self) -> HttpResponse {
        self.success(StatusCode::CREATED)
    }

    pub fn success(self, status: StatusCode) -> HttpResponse {
        success(self.data, status)
    }

    pub fn failure(self, message: impl Into<String>, status: StatusCode) -> HttpResponse {
        failure(message, status, self.errors)
    }

    fn into_error(self, message: impl Into<String>, status: StatusCode) -> Error {
        let message = message.into();
        let response = failure(message.clone(), status, self.errors);
        InternalError::from_response(message, response).into()
    }

    pub fn bad_request(self, message: impl Into<String>) -> Error {
        self.into_error(message, StatusCode::BAD_REQUEST)
    }

    pub fn not_found(self, message: impl Into<String>) -> Error {
        self.into_error(message, StatusCode::NOT_FOUND)
    }

    pub fn form_error(self, message: impl Into<String>) -> Error {
        self.into_error(message, StatusCode::UNPROCESSABLE_ENTITY)
    }

    pub fn internal_server_error(self, message: impl Into<String>) -> Error {
        self.into_error(message, StatusCode::INTERNAL_SERVER_ERROR)
    }

    pub fn bad_gateway(self, message: impl Into<String>) -> Error {
        self.into_error(message, StatusCode::BAD_GATEWAY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use serde_json::{json, Value};

    async fn body_json(response: HttpResponse) -> Value {
        let bytes = to_bytes(response.into_body()).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[actix_web::test]
    async fn success_wraps_data() {
        let response = JsonResponse::build()
            .set_data(json!({"status": "ok"}))
            .created();

        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(
            response.headers().get("content-type").unwrap(),
            "application/json"
        );
        let body = body_json(response).await;
        assert_eq!(body, json!({"success": true, "data": {"status": "ok"}}));
    }

    #[actix_web::test]
    async fn failure_carries_message_and_errors() {
        let response = JsonResponse::build()
            .set_errors(vec!["title".to_string()])
            .failure("Missing required fields: title", StatusCode::UNPROCESSABLE_ENTITY);

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = body_json(response).await;
        assert_eq!(
            body,
            json!({
                "success": false,
                "message": "Missing required fields: title",
                "errors": ["title"]
            })
        );
    }

    #[actix_web::test]
    async fn error_renders_envelope() {
        let err = JsonResponse::build().bad_gateway("Unable to reach AI provider.");
        let response = err.error_response();

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        let body = body_json(response).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "Unable to reach AI provider.");
        assert_eq!(body["errors"], json!([]));
    }
}
