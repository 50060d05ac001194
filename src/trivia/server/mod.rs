//! # HTTP Layer
//!
//! Maps routes onto [`TriviaApi`] calls and command results onto JSON bodies.
//! This is the only place that knows about status codes, CORS, or request
//! decoding.
//!
//! | Method | Path                          | Operation             |
//! |--------|-------------------------------|-----------------------|
//! | GET    | `/categories`                 | category mapping      |
//! | GET    | `/questions?page=N`           | paginated listing     |
//! | POST   | `/questions`                  | create a question     |
//! | DELETE | `/questions/{id}`             | delete a question     |
//! | POST   | `/questions/search?page=N`    | substring search      |
//! | GET    | `/categories/{id}/questions`  | listing by category   |
//! | POST   | `/quizzes`                    | next quiz question    |
//!
//! The store sits behind one async mutex. Each handler holds it only while
//! its store call runs on the blocking thread pool.

use crate::api::TriviaApi;
use crate::error::{Result, TriviaError};
use crate::store::DataStore;
use axum::http::{header, Method};
use axum::routing::{delete, get, post};
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Mutex;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub mod error;
pub mod handlers;
pub mod payload;

pub struct AppState<S: DataStore> {
    api: Arc<Mutex<TriviaApi<S>>>,
}

impl<S: DataStore> AppState<S> {
    pub fn new(api: TriviaApi<S>) -> Self {
        Self {
            api: Arc::new(Mutex::new(api)),
        }
    }
}

impl<S: DataStore> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            api: Arc::clone(&self.api),
        }
    }
}

fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .allow_methods([
            Method::GET,
            Method::PUT,
            Method::POST,
            Method::DELETE,
            Method::OPTIONS,
        ])
}

pub fn router<S: DataStore + Send + 'static>(api: TriviaApi<S>) -> Router {
    Router::new()
        .route("/categories", get(handlers::categories::<S>))
        .route(
            "/categories/{id}/questions",
            get(handlers::questions_by_category::<S>),
        )
        .route(
            "/questions",
            get(handlers::list_questions::<S>).post(handlers::create_question::<S>),
        )
        .route("/questions/search", post(handlers::search_questions::<S>))
        .route("/questions/{id}", delete(handlers::delete_question::<S>))
        .route("/quizzes", post(handlers::next_quiz_question::<S>))
        .fallback(handlers::not_found)
        .method_not_allowed_fallback(handlers::method_not_allowed)
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
        .with_state(AppState::new(api))
}

/// Serves the API on `bind` until Ctrl-C.
pub async fn serve<S: DataStore + Send + 'static>(api: TriviaApi<S>, bind: &str) -> Result<()> {
    let listener = TcpListener::bind(bind).await.map_err(TriviaError::Io)?;
    let addr = listener.local_addr().map_err(TriviaError::Io)?;
    tracing::info!("Trivia API listening on http://{}", addr);

    axum::serve(listener, router(api))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(TriviaError::Io)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Trivia API shutting down");
}
