use axum::{
    routing::{get, post},
    Router,
};
use dotenvy::dotenv;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

mod config;
mod handlers {
    pub mod contact_dtos;
    pub mod contact_handlers;
}
mod api {
    pub mod mailer;
}

use api::mailer::{MailRelay, SmtpMailer};
use config::MailConfig;
use handlers::contact_handlers;

async fn health_check() -> &'static str {
    "OK"
}

pub struct AppState {
    mail_config: MailConfig,
    mailer: Arc<dyn MailRelay>,
}

#[tokio::main]
async fn main() {
    dotenv().ok();

    let _guard = sentry::init(sentry::ClientOptions {
        dsn: std::env::var("SENTRY_DSN")
            .ok()
            .and_then(|dsn| dsn.parse().ok()),
        release: sentry::release_name!(),
        ..Default::default()
    });

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    let mail_config = MailConfig::from_env();
    if mail_config.credentials().is_none() {
        tracing::warn!(
            "GMAIL_USER/GMAIL_APP_PASSWORD not set, contact submissions will be rejected"
        );
    }
    if mail_config.recipient().is_none() {
        tracing::warn!("CONTACT_EMAIL not set, lead emails have no recipient");
    }

    let state = Arc::new(AppState {
        mail_config,
        mailer: Arc::new(SmtpMailer),
    });

    // Create router with CORS
    let app = Router::new()
        .route("/api/health", get(health_check))
        .route("/api/contact", post(contact_handlers::submit_contact))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(
            CorsLayer::new()
                .allow_methods([
                    axum::http::Method::GET,
                    axum::http::Method::POST,
                    axum::http::Method::OPTIONS,
                ])
                .allow_origin(Any) // Be cautious with `Any` in production; restrict to your frontend origin
                .allow_headers([axum::http::header::CONTENT_TYPE]),
        )
        .with_state(state);

    use tokio::net::TcpListener;

    let listener = TcpListener::bind("127.0.0.1:3000").await.unwrap();
    tracing::info!("Listening on 127.0.0.1:3000");
    axum::serve(listener, app.into_make_service()).await.unwrap();
}
