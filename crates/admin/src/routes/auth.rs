//! Login handler.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::post,
};
use serde::{Deserialize, Serialize};

use crate::services::{LoginOutcome, check_credentials};
use crate::state::AppState;

/// Build the auth router.
pub fn router() -> Router<AppState> {
    Router::new().route("/api/login", post(login))
}

/// Login form.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub outcome: LoginOutcome,
    pub message: &'static str,
}

/// Check credentials. Rejections answer 401 with the reason.
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> (StatusCode, Json<LoginResponse>) {
    let outcome = check_credentials(state.credentials(), &body.email, &body.password);
    let status = if outcome.is_success() {
        StatusCode::OK
    } else {
        StatusCode::UNAUTHORIZED
    };

    (
        status,
        Json(LoginResponse {
            outcome,
            message: outcome.message(),
        }),
    )
}
