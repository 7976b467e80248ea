use dotenvy::dotenv;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{CorsLayer, Any};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::{TraceLayer, DefaultMakeSpan, DefaultOnResponse};
use tracing::Level;
use tracing_subscriber::EnvFilter;
use std::path::Path;
use std::sync::Arc;

mod config {
    pub mod app_config;
}
mod api {
    pub mod sanity;
}
mod handlers {
    pub mod contact_handlers;
    pub mod project_handlers;
}
mod utils {
    pub mod lead_mailer;
}

use api::sanity::{ContentSource, SanityClient};
use config::app_config::AppConfig;
use handlers::contact_handlers;
use handlers::project_handlers;
use utils::lead_mailer::{LeadNotifier, ResendNotifier};

async fn health_check() -> &'static str {
    "OK"
}

pub struct AppState {
    content: Arc<dyn ContentSource>,
    notifier: Arc<dyn LeadNotifier>,
}

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/health", get(health_check))
        .route("/api/contact", post(contact_handlers::submit_lead))
        .route("/api/projects", get(project_handlers::list_projects))
        .route("/api/projects/slugs", get(project_handlers::list_slugs))
        .route("/api/projects/{slug}", get(project_handlers::get_project))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO))
        )
        .layer(
            CorsLayer::new()
                .allow_methods([
                    axum::http::Method::GET,
                    axum::http::Method::POST,
                    axum::http::Method::OPTIONS,
                ])
                .allow_origin(Any)
                .allow_headers([axum::http::header::CONTENT_TYPE])
                .expose_headers([axum::http::header::CONTENT_TYPE])
        )
        .with_state(state)
}

/// Static files from the built frontend. Any other path gets `index.html`
/// with a 200 so client-side routes survive a reload.
pub fn with_spa_fallback(router: Router, dist: &Path) -> Router {
    let index = dist.join("index.html");
    router.fallback_service(ServeDir::new(dist).fallback(ServeFile::new(index)))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    let config = AppConfig::from_env()?;

    let _guard = config.sentry_dsn.as_deref().map(|dsn| {
        sentry::init((dsn, sentry::ClientOptions {
            release: sentry::release_name!(),
            ..Default::default()
        }))
    });

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let content = SanityClient::new(&config.sanity);
    tracing::info!("Reading projects from {}", content.query_url());
    let state = Arc::new(AppState {
        content: Arc::new(content),
        notifier: Arc::new(ResendNotifier::new(&config.mail)),
    });

    let app = with_spa_fallback(build_router(state), &config.frontend_dist);

    use tokio::net::TcpListener;

    let listener = TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Listening on {}", config.bind_addr);
    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::sanity::MockContentSource;
    use crate::utils::lead_mailer::MockLeadNotifier;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    const SHELL: &str = "<!DOCTYPE html><html><body>shell</body></html>";

    fn app(dist: &Path) -> Router {
        let state = Arc::new(AppState {
            content: Arc::new(MockContentSource::new()),
            notifier: Arc::new(MockLeadNotifier::new()),
        });
        with_spa_fallback(build_router(state), dist)
    }

    async fn get(router: Router, uri: &str) -> (StatusCode, String) {
        let response = router
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn client_routes_get_the_shell_with_200() {
        let dist = tempfile::TempDir::new().unwrap();
        std::fs::write(dist.path().join("index.html"), SHELL).unwrap();

        for uri in ["/projects/south-beach", "/about", "/contact"] {
            let (status, body) = get(app(dist.path()), uri).await;
            assert_eq!(status, StatusCode::OK, "{}", uri);
            assert_eq!(body, SHELL);
        }
    }

    #[tokio::test]
    async fn built_assets_are_served_as_files() {
        let dist = tempfile::TempDir::new().unwrap();
        std::fs::write(dist.path().join("index.html"), SHELL).unwrap();
        std::fs::write(dist.path().join("app.js"), "console.log(1);").unwrap();

        let (status, body) = get(app(dist.path()), "/app.js").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "console.log(1);");
    }

    #[tokio::test]
    async fn api_routes_are_not_shadowed_by_the_shell() {
        let dist = tempfile::TempDir::new().unwrap();
        std::fs::write(dist.path().join("index.html"), SHELL).unwrap();

        let (status, body) = get(app(dist.path()), "/api/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "OK");
    }
}
