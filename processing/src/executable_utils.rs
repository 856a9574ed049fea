use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use clap::Parser;
use common::config::{BackendConfig, Config};
use http::{HeaderValue, StatusCode};
use metrics_exporter_prometheus::PrometheusBuilder;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use std::error::Error;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::EnvFilter;

use crate::{
    error::ProcessingError,
    importer::Importer,
    model::{Importable, ModelId, Points, ScoreCard},
    scorers::Scorer,
};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to config file
    #[arg(short, long, default_value = "receipts/config/dev.yaml")]
    pub config: String,
}

pub fn initialize_executable() -> Result<Config, Box<dyn Error + Send + Sync>> {
    if let Ok(path) = dotenvy::dotenv() {
        println!("Loaded environment from {:?}", path);
    }

    let args = Args::parse();
    println!("Loading config from: {}", args.config);
    let config = Config::load(&args.config)?;
    println!("Loaded config: {:#?}", config);

    Ok(config)
}

/// Install the global fmt subscriber. `RUST_LOG` takes precedence over `log_level`.
pub fn initialize_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    if tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .is_err()
    {
        eprintln!("Tracing subscriber already initialized");
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct IdResponse {
    pub id: ModelId,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PointsResponse {
    pub points: Points,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl IntoResponse for ProcessingError {
    fn into_response(self) -> Response {
        let status = match &self {
            ProcessingError::Scoring(_) => StatusCode::BAD_REQUEST,
            ProcessingError::NotFound { .. } => StatusCode::NOT_FOUND,
            ProcessingError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}

pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK").into_response()
}

pub async fn process_model<T, S>(
    State(importer): State<Importer<T, S>>,
    payload: Result<Json<T>, JsonRejection>,
) -> Response
where
    T: Importable + DeserializeOwned + 'static,
    S: Scorer<T> + 'static,
{
    let Json(model) = match payload {
        Ok(json) => json,
        Err(rejection) => {
            tracing::warn!(
                error = %rejection.body_text(),
                collection = T::COLLECTION,
                "Rejected malformed payload"
            );
            let message = format!("Invalid {} data: {}", T::COLLECTION, rejection.body_text());
            return (StatusCode::BAD_REQUEST, Json(ErrorResponse::new(message))).into_response();
        }
    };

    match importer.import(model).await {
        Ok(id) => (StatusCode::OK, Json(IdResponse { id })).into_response(),
        Err(e) => e.into_response(),
    }
}

pub async fn get_points<T, S>(
    State(importer): State<Importer<T, S>>,
    Path(id): Path<String>,
) -> Result<Json<PointsResponse>, ProcessingError>
where
    T: Importable + 'static,
    S: Scorer<T> + 'static,
{
    let id = parse_id(&id)?;
    let points = importer.points(&id).await?;
    Ok(Json(PointsResponse { points }))
}

pub async fn get_breakdown<T, S>(
    State(importer): State<Importer<T, S>>,
    Path(id): Path<String>,
) -> Result<Json<ScoreCard>, ProcessingError>
where
    T: Importable + 'static,
    S: Scorer<T> + 'static,
{
    let id = parse_id(&id)?;
    Ok(Json(importer.score_card(&id).await?))
}

// An id we could never have issued is simply unknown.
fn parse_id(raw: &str) -> Result<ModelId, ProcessingError> {
    raw.parse().map_err(|_| ProcessingError::not_found(raw))
}

pub fn create_router<T, S>(importer: Importer<T, S>, cors_origin: Option<HeaderValue>) -> Router
where
    T: Importable + DeserializeOwned + 'static,
    S: Scorer<T> + 'static,
{
    let collection = T::COLLECTION;
    let mut app = Router::new()
        .route(&format!("/{collection}/process"), post(process_model::<T, S>))
        .route(&format!("/{collection}/{{id}}/points"), get(get_points::<T, S>))
        .route(&format!("/{collection}/{{id}}/breakdown"), get(get_breakdown::<T, S>))
        .route("/health", get(health_check))
        .layer(TraceLayer::new_for_http());

    if let Some(origin) = cors_origin {
        app = app.layer(
            CorsLayer::new()
                .allow_origin(origin)
                .allow_methods(Any)
                .allow_headers(Any),
        );
    }

    app.with_state(importer)
}

pub async fn run_backend<T, S>(
    config: BackendConfig,
    importer: Importer<T, S>,
) -> Result<(), Box<dyn Error + Send + Sync>>
where
    T: Importable + DeserializeOwned + 'static,
    S: Scorer<T> + 'static,
{
    let cors_origin = config
        .cors_origin
        .as_deref()
        .map(str::parse::<HeaderValue>)
        .transpose()?;

    let metrics_handle = PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| format!("failed to install metrics recorder: {e}"))?;
    let app = create_router(importer, cors_origin).route(
        "/metrics",
        get(move || std::future::ready(metrics_handle.render())),
    );

    tracing::info!("Starting backend service at {}", config.server_address);
    let listener = tokio::net::TcpListener::bind(&config.server_address).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Backend service stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
