use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use std::sync::{Arc, OnceLock};
use tower_http::cors::CorsLayer;
use tracing::info;

use shimaore_mt::{
    AppConfig, InitState, Startup, TranslationOutcome, TranslationPipeline, initialize,
};

#[derive(Serialize, Deserialize)]
pub struct TranslateRequest {
    pub sentence: Option<String>,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub state: String,
    pub progress: u8,
}

#[derive(Clone)]
pub struct AppState {
    pub startup: Arc<Startup>,
    pub pipeline: Arc<OnceLock<TranslationPipeline>>,
    pub max_sentence_chars: usize,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("info".parse().unwrap()),
        )
        .init();

    let config = AppConfig::from_env().map_err(|e| format!("Failed to read configuration: {}", e))?;
    let state = AppState {
        startup: Arc::new(Startup::new()),
        pipeline: Arc::new(OnceLock::new()),
        max_sentence_chars: config.max_sentence_chars,
    };

    info!("🌴 Starting shimaore-mt web server");

    // Startup runs in the background so the server can bind immediately
    // and answer 503 (and health probes) while the dataset and the
    // translation capabilities are still loading.
    {
        let startup = state.startup.clone();
        let pipeline_cell = state.pipeline.clone();
        let startup_config = config.clone();
        tokio::spawn(async move {
            if let Ok(pipeline) = initialize(&startup_config, &startup).await {
                // The handler re-checks the cell, so the instant between
                // Ready and this set still answers 503.
                let _ = pipeline_cell.set(pipeline);
            }
        });
    }

    // Build router
    let app = Router::new()
        .route("/api/translate", post(translate_sentence))
        .route("/api/health", get(health))
        .layer(CorsLayer::permissive())
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    info!("🚀 Server running at http://{}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}

async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        state: state.startup.state().to_string(),
        progress: state.startup.progress(),
    })
}

async fn translate_sentence(
    State(state): State<AppState>,
    Json(request): Json<TranslateRequest>,
) -> Result<Json<TranslationOutcome>, (StatusCode, Json<ErrorResponse>)> {
    let sentence = validate_sentence(request.sentence.as_deref(), state.max_sentence_chars)
        .map_err(|msg| {
            (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse { error: msg }),
            )
        })?;

    match state.startup.state() {
        InitState::Ready => {}
        InitState::Failed(reason) => {
            return Err(service_unavailable(format!(
                "translation service failed to start: {}",
                reason
            )));
        }
        _ => {
            return Err(service_unavailable(
                "translation service is still starting".to_string(),
            ));
        }
    }
    let Some(pipeline) = state.pipeline.get() else {
        return Err(service_unavailable(
            "translation service is still starting".to_string(),
        ));
    };

    info!("translating {:?}", sentence.trim());
    let outcome = pipeline.translate_input(sentence).await;

    // Every processed request is a 200 — "word not found", "unsupported
    // language" and "error: …" are results, not transport failures.
    Ok(Json(outcome))
}

fn service_unavailable(message: String) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::SERVICE_UNAVAILABLE,
        Json(ErrorResponse { error: message }),
    )
}

/// Request validation: `sentence` must be present, non-empty after
/// trimming, and within the length cap. Returns the raw sentence — the
/// pipeline does its own trimming and lower-casing.
fn validate_sentence(sentence: Option<&str>, max_chars: usize) -> Result<&str, String> {
    let Some(sentence) = sentence else {
        return Err("Missing 'sentence' in request body".to_string());
    };
    let trimmed = sentence.trim();
    if trimmed.is_empty() {
        return Err("'sentence' must not be empty".to_string());
    }
    if trimmed.chars().count() > max_chars {
        return Err(format!("'sentence' exceeds {} characters", max_chars));
    }
    Ok(sentence)
}
