use crate::connectors::ChatConnector;
use crate::forms;
use crate::helpers::JsonResponse;
use actix_web::{post, web, web::Bytes, Error, Responder};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

#[derive(Serialize)]
struct AskResponse {
    response: Value,
}

#[tracing::instrument(name = "Ask AI.", skip(body, connector))]
#[post("/ask")]
pub async fn ask(
    body: Bytes,
    connector: web::Data<Arc<dyn ChatConnector>>,
) -> Result<impl Responder, Error> {
    let form: forms::AskForm = forms::body_into_form(&body, forms::AskForm::REQUIRED)?;

    connector
        .chat(&form.messages())
        .await
        .map(|response| JsonResponse::build().set_data(AskResponse { response }).ok())
        .map_err(Error::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connectors::openai::mock::MockChatConnector;
    use crate::forms::ask::DEFAULT_SYSTEM_PROMPT;
    use crate::models::ChatMessage;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::json;

    macro_rules! app_with {
        ($connector:expr) => {{
            let connector: Arc<dyn ChatConnector> = $connector.clone();
            test::init_service(
                App::new()
                    .app_data(web::Data::new(connector))
                    .service(ask),
            )
            .await
        }};
    }

    #[actix_web::test]
    async fn provider_payload_is_returned_untouched() {
        let reply = json!({"choices": [{"message": {"role": "assistant", "content": "Hi!"}}]});
        let mock = Arc::new(MockChatConnector::replying(reply.clone()));
        let app = app_with!(mock);

        let req = test::TestRequest::post()
            .uri("/ask")
            .set_json(json!({"prompt": " hello "}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["response"], reply);
        assert_eq!(
            mock.last_messages(),
            vec![
                ChatMessage::system(DEFAULT_SYSTEM_PROMPT),
                ChatMessage::user("hello")
            ]
        );
    }

    #[actix_web::test]
    async fn empty_prompt_never_reaches_provider() {
        let mock = Arc::new(MockChatConnector::replying(json!({})));
        let app = app_with!(mock);

        for payload in [json!({"prompt": ""}), json!({}), json!({"prompt": null})] {
            let req = test::TestRequest::post()
                .uri("/ask")
                .set_json(payload)
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

            let body: Value = test::read_body_json(resp).await;
            assert_eq!(body["success"], false);
            assert!(body["message"].as_str().unwrap().contains("prompt"));
        }
        assert_eq!(mock.calls(), 0);
    }

    #[actix_web::test]
    async fn unreachable_provider_gives_generic_error() {
        let mock = Arc::new(MockChatConnector::unreachable());
        let app = app_with!(mock);

        let req = test::TestRequest::post()
            .uri("/ask")
            .set_json(json!({"prompt": "hello", "systemPrompt": "Be terse."}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], false);
        assert!(!body["message"].as_str().unwrap().contains("mock"));
        assert_eq!(mock.last_messages()[0].content, "Be terse.");
    }
}
