use axum::{
    extract::{Path, Query},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;

use super::domain::{AssessmentInput, BusinessSize};
use super::insights;
use super::pricing::{quote, PricingPolicy};
use super::scoring::score;

/// Stateless scoring, pricing, and insight endpoints.
pub fn assessment_router() -> Router {
    Router::new()
        .route("/api/v1/assessments/score", post(score_handler))
        .route("/api/v1/assessments/price", post(price_handler))
        .route(
            "/api/v1/insights/:industry/:category",
            get(insight_handler),
        )
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct PriceParams {
    #[serde(default)]
    policy: PricingPolicy,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct InsightParams {
    size: Option<String>,
}

pub(crate) async fn score_handler(axum::Json(input): axum::Json<AssessmentInput>) -> Response {
    (StatusCode::OK, axum::Json(score(&input))).into_response()
}

pub(crate) async fn price_handler(
    Query(params): Query<PriceParams>,
    axum::Json(input): axum::Json<AssessmentInput>,
) -> Response {
    (StatusCode::OK, axum::Json(quote(&input, params.policy))).into_response()
}

pub(crate) async fn insight_handler(
    Path((industry, category)): Path<(String, String)>,
    Query(params): Query<InsightParams>,
) -> Response {
    let bucket = params
        .size
        .as_deref()
        .map(BusinessSize::parse)
        .unwrap_or_default()
        .bucket();
    let insights = insights::lookup_by_key(&industry, &category, bucket);
    (StatusCode::OK, axum::Json(insights)).into_response()
}
