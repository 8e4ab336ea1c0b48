use crate::connectors::ContentConnector;
use crate::helpers::JsonResponse;
use actix_web::{get, web, Error, Responder};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

#[derive(Serialize)]
struct ArticleList {
    articles: Vec<Value>,
}

#[tracing::instrument(name = "List articles.", skip(connector))]
#[get("/articles")]
pub async fn list(
    connector: web::Data<Arc<dyn ContentConnector>>,
) -> Result<impl Responder, Error> {
    connector
        .fetch_articles()
        .await
        .map(|articles| JsonResponse::build().set_data(ArticleList { articles }).ok())
        .map_err(Error::from)
}
