use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::error::AppError;
use crate::pipeline::{batch, samples};
use crate::routes::summary::SummaryResponse;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/api/samples", get(sample_summaries))
}

#[derive(Serialize)]
struct SamplesResponse {
    summaries: Vec<SummaryResponse>,
}

async fn sample_summaries() -> Result<Json<SamplesResponse>, AppError> {
    let summaries = samples::sample_packages()
        .iter()
        .map(|package| batch::summarize(package).map(SummaryResponse::from))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Json(SamplesResponse { summaries }))
}
