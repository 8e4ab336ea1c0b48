use crate::configuration::Settings;
use crate::connectors;
use crate::db::ProjectStore;
use crate::routes;
use actix_cors::Cors;
use actix_web::{dev::Server, middleware, web, App, HttpServer};
use std::net::TcpListener;
use std::time::Duration;
use tracing_actix_web::TracingLogger;

fn io_error(err: impl std::fmt::Display) -> std::io::Error {
    std::io::Error::new(std::io::ErrorKind::Other, err.to_string())
}

pub async fn run(listener: TcpListener, settings: Settings) -> Result<Server, std::io::Error> {
    let timeout = Duration::from_secs(settings.http_timeout_secs.max(1));

    let store = ProjectStore::new(settings.data_file.clone());
    store.ensure_exists().await.map_err(io_error)?;
    let store = web::Data::new(store);

    let chat_connector = connectors::init_chat(&settings.connectors, timeout).map_err(io_error)?;
    let chat_connector = web::Data::new(chat_connector);

    let content_connector =
        connectors::init_content(&settings.connectors, timeout).map_err(io_error)?;
    let content_connector = web::Data::new(content_connector);

    let static_dir = settings.static_dir.clone();
    let serve_front_end = static_dir.is_dir();
    if !serve_front_end {
        tracing::warn!("Static directory {:?} not found, front-end disabled", static_dir);
    }

    let server = HttpServer::new(move || {
        let app = App::new()
            .wrap(TracingLogger::default())
            .wrap(middleware::Compress::default())
            .wrap(Cors::permissive())
            .app_data(store.clone())
            .app_data(chat_connector.clone())
            .app_data(content_connector.clone())
            .service(
                web::scope("/api")
                    .service(routes::health_check)
                    .service(
                        web::scope("/projects")
                            .service(routes::project::get::list)
                            .service(routes::project::add::add),
                    )
                    .service(routes::ask::ask)
                    .service(routes::articles::list),
            )
            .service(routes::fallback::assets)
            .default_service(web::to(routes::fallback::not_found));

        if serve_front_end {
            app.service(
                actix_files::Files::new("/", &static_dir)
                    .index_file("index.html")
                    .default_handler(web::to(routes::fallback::not_found)),
            )
        } else {
            app
        }
    })
    .listen(listener)?
    .run();

    Ok(server)
}
