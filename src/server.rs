//! HTTP surface: routes, file delivery, and error mapping around the blocking core.

use anyhow::Context;
use axum::body::Body;
use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use tokio_util::io::ReaderStream;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use crate::config::GalleryConfig;
use crate::error::{GalleryError, Result as GalleryResult};
use crate::gallery::{parent_path, GalleryService};
use crate::links::folder_href;
use crate::render::{render_error, render_folder};

/// Shared, read-only state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<GalleryService>,
    pub config: Arc<GalleryConfig>,
}

impl AppState {
    pub fn new(config: GalleryConfig) -> GalleryResult<Self> {
        let service = GalleryService::new(&config.root)?;
        Ok(Self {
            service: Arc::new(service),
            config: Arc::new(config),
        })
    }
}

/// Errors a handler can end with, rendered as an HTML error page.
#[derive(Debug)]
pub enum AppError {
    Gallery(GalleryError),
    Task(tokio::task::JoinError),
}

impl From<GalleryError> for AppError {
    fn from(e: GalleryError) -> Self {
        AppError::Gallery(e)
    }
}

impl From<tokio::task::JoinError> for AppError {
    fn from(e: tokio::task::JoinError) -> Self {
        AppError::Task(e)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Escapes look exactly like missing paths to the client.
        let (status, message) = match &self {
            AppError::Gallery(e) if e.is_not_found() => (StatusCode::NOT_FOUND, "Not found"),
            AppError::Gallery(e) => {
                error!("request failed: {e}");
                (StatusCode::INTERNAL_SERVER_ERROR, "Error reading the gallery")
            }
            AppError::Task(e) => {
                error!("blocking task failed: {e}");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal error")
            }
        };
        (status, Html(render_error(message).into_string())).into_response()
    }
}

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root_folder))
        .route("/thumb/{*path}", get(deliver_file))
        .route("/view/{*path}", get(deliver_file))
        .route("/delete/{*path}", post(delete_file))
        .route("/{*path}", get(folder))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind the configured address and serve until Ctrl-C.
pub async fn serve(config: GalleryConfig) -> anyhow::Result<()> {
    let addr = config.addr;
    let root = config.root.clone();
    let state = AppState::new(config).context("failed to open gallery root")?;

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!(%addr, root = %root.display(), "serving gallery");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server terminated unexpectedly")
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("failed to listen for shutdown signal: {e}");
    }
    info!("shutting down");
}

/// Run a core operation on the blocking pool.
async fn blocking<T, F>(state: &AppState, op: F) -> Result<T, AppError>
where
    F: FnOnce(&GalleryService) -> GalleryResult<T> + Send + 'static,
    T: Send + 'static,
{
    let service = Arc::clone(&state.service);
    Ok(tokio::task::spawn_blocking(move || op(&service)).await??)
}

async fn root_folder(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    folder_page(state, String::new()).await
}

async fn folder(
    State(state): State<AppState>,
    Path(path): Path<String>,
) -> Result<Html<String>, AppError> {
    folder_page(state, path).await
}

async fn folder_page(state: AppState, relative: String) -> Result<Html<String>, AppError> {
    let view = blocking(&state, move |service| service.view_folder(&relative)).await?;
    Ok(Html(render_folder(&view, &state.config).into_string()))
}

/// Stream the original file; thumbnails and full views are the same bytes.
async fn deliver_file(
    State(state): State<AppState>,
    Path(path): Path<String>,
) -> Result<Response, AppError> {
    let file_path = blocking(&state, move |service| service.resolve_file(&path)).await?;
    let file = tokio::fs::File::open(&file_path)
        .await
        .map_err(|e| GalleryError::from_io(&file_path, e))?;
    let len = file
        .metadata()
        .await
        .map_err(|e| GalleryError::from_io(&file_path, e))?
        .len();
    let mime = mime_guess::from_path(&file_path)
        .first_or_octet_stream()
        .to_string();

    let body = Body::from_stream(ReaderStream::new(file));
    Ok((
        [
            (header::CONTENT_TYPE, mime),
            (header::CONTENT_LENGTH, len.to_string()),
        ],
        body,
    )
        .into_response())
}

/// Delete, then send the browser back to the folder that held the file.
async fn delete_file(
    State(state): State<AppState>,
    Path(path): Path<String>,
) -> Result<Redirect, AppError> {
    let target = folder_href(&parent_path(&path));
    blocking(&state, move |service| service.delete_image(&path)).await?;
    Ok(Redirect::to(&target))
}
