//! Axum route handlers for the policy endpoints.

use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;

use crate::errors::AppError;
use crate::policy::category::Category;
use crate::policy::generator::{
    generate_category_policy, generate_general_policy, CategoryPolicy, GeneralPolicy,
};
use crate::state::AppState;

/// Query parameters shared by every policy endpoint.
#[derive(Debug, Deserialize)]
pub struct PolicyParams {
    pub customer_id: String,
    /// Trustworthiness score, intended 0-100. Accepted as-is; leniency
    /// calibration is left to the model.
    pub customer_score: f64,
}

/// POST /general
///
/// Storewide 3-field return policy, personalized by trustworthiness score.
pub async fn handle_general(
    State(state): State<AppState>,
    Query(params): Query<PolicyParams>,
) -> Result<Json<GeneralPolicy>, AppError> {
    let policy = generate_general_policy(
        state.model.as_ref(),
        &params.customer_id,
        params.customer_score,
    )
    .await?;

    Ok(Json(policy))
}

async fn category_policy(
    state: &AppState,
    category: Category,
    params: PolicyParams,
) -> Result<Json<CategoryPolicy>, AppError> {
    let policy = generate_category_policy(
        state.model.as_ref(),
        category,
        &params.customer_id,
        params.customer_score,
    )
    .await?;

    Ok(Json(policy))
}

/// POST /tv
pub async fn handle_electronics(
    State(state): State<AppState>,
    Query(params): Query<PolicyParams>,
) -> Result<Json<CategoryPolicy>, AppError> {
    category_policy(&state, Category::Electronics, params).await
}

/// POST /fashion
pub async fn handle_fashion(
    State(state): State<AppState>,
    Query(params): Query<PolicyParams>,
) -> Result<Json<CategoryPolicy>, AppError> {
    category_policy(&state, Category::Fashion, params).await
}

/// POST /medicine
pub async fn handle_medicine(
    State(state): State<AppState>,
    Query(params): Query<PolicyParams>,
) -> Result<Json<CategoryPolicy>, AppError> {
    category_policy(&state, Category::Medicine, params).await
}

/// POST /beauty
pub async fn handle_beauty(
    State(state): State<AppState>,
    Query(params): Query<PolicyParams>,
) -> Result<Json<CategoryPolicy>, AppError> {
    category_policy(&state, Category::Beauty, params).await
}

/// POST /toy
pub async fn handle_toys(
    State(state): State<AppState>,
    Query(params): Query<PolicyParams>,
) -> Result<Json<CategoryPolicy>, AppError> {
    category_policy(&state, Category::Toys, params).await
}

/// POST /sports
pub async fn handle_sports(
    State(state): State<AppState>,
    Query(params): Query<PolicyParams>,
) -> Result<Json<CategoryPolicy>, AppError> {
    category_policy(&state, Category::Sports, params).await
}
