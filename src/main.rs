use actix_web::{web, App, HttpServer};
use comment_section::settings::ServerConfig;
use comment_section::openapi::ApiDoc;
use comment_section::{config, cors, AppState, InMemRepo};
use std::sync::Arc;
use tracing::{info, Level};
use tracing_actix_web::TracingLogger;
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi; // bring trait into scope for ApiDoc::openapi()
use utoipa_swagger_ui::SwaggerUi;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load .env automatically only in debug builds.
    if cfg!(debug_assertions) {
        let _ = dotenv::dotenv();
    }

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .init();

    let settings = ServerConfig::from_env()?;
    info!(?settings, "Bootstrapping comment section server");

    // one store for every worker
    let state = AppState { repo: Arc::new(InMemRepo::new()) };
    let openapi = ApiDoc::openapi();
    let enable_docs = settings.enable_docs;

    let server = HttpServer::new(move || {
        let mut app = App::new()
            .wrap(TracingLogger::default())
            .wrap(cors::any_origin())
            .app_data(web::Data::new(state.clone()))
            .configure(config);
        if enable_docs {
            app = app.service(SwaggerUi::new("/docs/{_:.*}").url("/docs/openapi.json", openapi.clone()));
        }
        app
    })
    .bind(settings.bind_addr())?;

    info!("Listening on http://{}:{}", settings.host, settings.port);

    server.run().await?;
    Ok(())
}
