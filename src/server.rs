use anyhow::Context;
use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use std::{net::SocketAddr, sync::Arc};
use tower_http::services::{ServeDir, ServeFile};

use crate::api::{
    category_options, weekday_options, ApiCategory, ApiEngagementRequest, ApiEngagementResponse,
    ApiPredictionRequest, ApiPredictionResponse, ApiWeekday,
};
use crate::scoring::ViewPredictor;
use crate::{estimate, prediction_rng};

#[derive(Clone)]
struct AppState {
    predictor: Arc<ViewPredictor>,
}

pub struct ServeOptions {
    pub host: String,
    pub port: u16,
    pub web_root: Option<String>,
}

pub fn router(predictor: Arc<ViewPredictor>) -> Router {
    let state = AppState { predictor };

    Router::new()
        .route("/api/health", get(health))
        .route("/api/engagement", post(engagement_handler))
        .route("/api/predict", post(predict_handler))
        .route("/api/categories", get(categories_handler))
        .route("/api/weekdays", get(weekdays_handler))
        .with_state(state)
}

pub async fn serve(options: ServeOptions, predictor: ViewPredictor) -> anyhow::Result<()> {
    let mut app = router(Arc::new(predictor));

    if let Some(web_root) = options.web_root {
        let index_path = format!("{}/index.html", web_root.trim_end_matches('/'));
        tracing::info!(web_root = %web_root, "serving static files");
        app = app.fallback_service(
            ServeDir::new(web_root).not_found_service(ServeFile::new(index_path)),
        );
    }

    let addr: SocketAddr = format!("{}:{}", options.host, options.port)
        .parse()
        .context("invalid bind address")?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind server on {}", addr))?;

    tracing::info!(%addr, "views predictor listening");
    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}

async fn health() -> impl IntoResponse {
    StatusCode::OK
}

async fn engagement_handler(
    Json(request): Json<ApiEngagementRequest>,
) -> Json<ApiEngagementResponse> {
    let metrics = request.into_metrics();
    Json(ApiEngagementResponse::from_score(metrics.engagement()))
}

async fn predict_handler(
    State(state): State<AppState>,
    Json(request): Json<ApiPredictionRequest>,
) -> Result<Json<ApiPredictionResponse>, (StatusCode, String)> {
    let (metrics, context, seed) = request.into_input().map_err(|err| {
        tracing::debug!(error = %err, "rejected prediction request");
        (StatusCode::BAD_REQUEST, err)
    })?;
    let mut rng = prediction_rng(seed.as_deref());

    let output = estimate(&state.predictor, metrics, context, &mut rng);
    tracing::info!(
        category = %output.category_name,
        engagement = output.engagement.value(),
        prediction = output.prediction.value,
        timing = output.timing.label(),
        "prediction computed"
    );

    Ok(Json(ApiPredictionResponse::from_estimate(output)))
}

async fn categories_handler(State(state): State<AppState>) -> Json<Vec<ApiCategory>> {
    Json(category_options(state.predictor.tables()))
}

async fn weekdays_handler(State(state): State<AppState>) -> Json<Vec<ApiWeekday>> {
    Json(weekday_options(state.predictor.tables()))
}
