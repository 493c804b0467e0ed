//! Pixel Pets backend.
//!
//! A small REST API behind the Pixel Pets UI: accounts, pets, and the lazy
//! stat simulation that makes pets hungry and tired while nobody is looking.
//!
//! Layers, from the inside out:
//! - [`domain`]: entities, decay rules, wire types
//! - [`repository`]: SQLite persistence
//! - [`handlers`]: axum endpoints mapping requests onto the repositories
//!
//! [`build_router`] assembles the HTTP surface; [`run`] binds and serves it
//! until Ctrl+C or SIGTERM.

use std::time::Duration;

use anyhow::Context;
use axum::{
    http::{HeaderValue, Method},
    routing::{get, post},
    Router,
};
use tokio::{net::TcpListener, signal};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};
use tracing::{info, warn};

pub mod config;
pub mod domain;
pub mod error;
pub mod handlers;
pub mod password;
pub mod repository;
pub mod state;
pub mod validation;

use config::Config;
use handlers::{auth, health, pets, users};
use password::PasswordHasher;
use repository::init_db;
use state::AppState;

/// Exact origins, or `scheme://*.domain` matching any subdomain of `domain`
fn origin_allowed(patterns: &[String], origin: &str) -> bool {
    patterns.iter().any(|pattern| match pattern.split_once("*.") {
        Some((scheme, domain)) => origin
            .strip_prefix(scheme)
            .and_then(|host| host.strip_suffix(domain))
            .and_then(|sub| sub.strip_suffix('.'))
            .is_some_and(|sub| !sub.is_empty() && !sub.contains(['/', ':'])),
        None => pattern == origin,
    })
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    for origin in origins {
        if HeaderValue::from_str(origin).is_err() {
            warn!("CORS origin {origin:?} can never match a request");
        }
    }
    let patterns = origins.to_vec();
    let allow_origin = AllowOrigin::predicate(move |origin: &HeaderValue, _| {
        origin
            .to_str()
            .is_ok_and(|origin| origin_allowed(&patterns, origin))
    });

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(Any)
        .max_age(Duration::from_secs(60 * 60))
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health))
        .route("/auth/login", post(auth::login))
        .route("/auth/register", post(auth::register))
        .route("/users", get(users::list_users).post(users::create_user))
        .route(
            "/users/{id}",
            get(users::get_user)
                .put(users::update_user)
                .delete(users::delete_user),
        )
        .route("/pets", get(pets::list_pets).post(pets::create_pet))
        .route("/pets/adopt", post(pets::adopt_pet))
        .route("/pets/user/{user_id}", get(pets::list_user_pets))
        .route(
            "/pets/{id}",
            get(pets::get_pet)
                .put(pets::update_pet)
                .delete(pets::delete_pet),
        )
        .route("/pets/{id}/feed", post(pets::feed_pet))
        .route("/pets/{id}/play", post(pets::play_with_pet))
        .route("/pets/{id}/rest", post(pets::rest_pet))
}

/// Build the full application router.
pub fn build_router(state: AppState, config: &Config) -> Router {
    let mut app = Router::new()
        .route("/", get(health::root))
        .nest("/api", api_routes());

    if let Some(dir) = &config.static_dir {
        let index = ServeFile::new(dir.join("index.html"));
        app = app.fallback_service(ServeDir::new(dir).not_found_service(index));
    }

    app.layer(cors_layer(&config.cors_origins))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Open the database, bind the port, and serve until a shutdown signal.
pub async fn run(config: Config) -> anyhow::Result<()> {
    info!("Initializing database...");
    let db = init_db(&config.db_path)
        .await
        .with_context(|| format!("Failed to open database {}", config.db_path.display()))?;

    let state = AppState::new(&db, PasswordHasher::new(config.pbkdf2_rounds));
    let app = build_router(state, &config);

    let address = format!("0.0.0.0:{}", config.port);
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {address}"))?;
    info!("Server running on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl+C: {e}");
            std::future::pending::<()>().await;
        }
        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn patterns() -> Vec<String> {
        vec![
            "http://localhost:5173".to_string(),
            "https://*.netlify.app".to_string(),
        ]
    }

    #[test]
    fn test_exact_origin() {
        assert!(origin_allowed(&patterns(), "http://localhost:5173"));
        assert!(!origin_allowed(&patterns(), "http://localhost:3000"));
    }

    #[test]
    fn test_wildcard_origin() {
        assert!(origin_allowed(&patterns(), "https://pixelpets.netlify.app"));
        assert!(origin_allowed(&patterns(), "https://deploy-preview-3--pixelpets.netlify.app"));
        assert!(!origin_allowed(&patterns(), "https://netlify.app"));
        assert!(!origin_allowed(&patterns(), "http://pixelpets.netlify.app"));
        assert!(!origin_allowed(&patterns(), "https://evil.com/.netlify.app"));
        assert!(!origin_allowed(&patterns(), "https://pixelpets.netlify.app.evil.com"));
    }
}
