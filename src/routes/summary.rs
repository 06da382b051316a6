use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::pipeline::batch;
use crate::state::AppState;
use crate::types::summary::TrainingSummary;
use crate::types::workout::WorkoutPackage;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/summary", post(summary))
        .route("/api/summary/batch", post(summary_batch))
}

#[derive(Serialize, Deserialize)]
pub(crate) struct SummaryResponse {
    #[serde(flatten)]
    pub summary: TrainingSummary,
    pub message: String,
}

impl From<TrainingSummary> for SummaryResponse {
    fn from(summary: TrainingSummary) -> Self {
        let message = summary.message();
        Self { summary, message }
    }
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct BatchRequest {
    packages: Vec<WorkoutPackage>,
}

#[derive(Serialize)]
struct BatchResponse {
    results: Vec<BatchItem>,
}

#[derive(Serialize)]
struct BatchItem {
    workout_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    summary: Option<SummaryResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

async fn summary(Json(package): Json<WorkoutPackage>) -> Result<Json<SummaryResponse>, AppError> {
    let summary = batch::summarize(&package).inspect_err(|err| {
        tracing::warn!("Rejected {} package: {}", package.workout_type, err);
    })?;

    tracing::info!(
        "Computed {} summary ({:.3} km, {:.3} kcal)",
        summary.training_type,
        summary.distance,
        summary.spent_calories
    );

    Ok(Json(summary.into()))
}

async fn summary_batch(
    State(state): State<AppState>,
    Json(req): Json<BatchRequest>,
) -> Result<Json<BatchResponse>, AppError> {
    let max_batch_size = state.config().max_batch_size;
    if req.packages.is_empty() {
        return Err(AppError::BadRequest("No packages provided".to_string()));
    }
    if req.packages.len() > max_batch_size {
        return Err(AppError::BadRequest(format!(
            "Too many packages: {}. Max allowed is {}",
            req.packages.len(),
            max_batch_size
        )));
    }

    let outcomes = batch::summarize_all(&req.packages);
    let failed = outcomes.iter().filter(|outcome| outcome.is_err()).count();

    let results = req
        .packages
        .into_iter()
        .zip(outcomes)
        .map(|(package, outcome)| match outcome {
            Ok(summary) => BatchItem {
                workout_type: package.workout_type,
                summary: Some(summary.into()),
                error: None,
            },
            Err(err) => BatchItem {
                workout_type: package.workout_type,
                summary: None,
                error: Some(err.to_string()),
            },
        })
        .collect::<Vec<_>>();

    tracing::info!(
        "Processed batch of {} packages ({} rejected)",
        results.len(),
        failed
    );

    Ok(Json(BatchResponse { results }))
}
