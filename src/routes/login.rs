use axum::{extract::State, http::StatusCode, Json};
use color_eyre::eyre::eyre;
use secrecy::Secret;
use serde::{Deserialize, Serialize};

use crate::{
    domain::{ScheduleAPIError, UserRole},
    AppState,
};

/// An unknown code is still a 200; callers read `success`.
#[tracing::instrument(name = "Login route handler", skip_all)]
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<(StatusCode, Json<LoginResponse>), ScheduleAPIError> {
    let config = state
        .config_store
        .write()
        .await
        .get_config()
        .await
        .map_err(|e| ScheduleAPIError::UnexpectedError(eyre!(e)))?;

    let response = match config.role_for(&request.code) {
        Some(UserRole::Admin) => {
            LoginResponse::success(UserRole::Admin, "Login admin successful")
        }
        Some(UserRole::User) => {
            LoginResponse::success(UserRole::User, "Login utente successful")
        }
        None => {
            tracing::debug!("Login attempted with an unknown code");
            LoginResponse {
                success: false,
                user_type: String::new(),
                message: "Codice non valido".to_owned(),
            }
        }
    };

    Ok((StatusCode::OK, Json(response)))
}

#[derive(Deserialize)]
pub struct LoginRequest {
    pub code: Secret<String>,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub success: bool,
    pub user_type: String,
    pub message: String,
}

impl LoginResponse {
    fn success(role: UserRole, message: &str) -> Self {
        let user_type = match role {
            UserRole::Admin => "admin",
            UserRole::User => "user",
        };
        Self {
            success: true,
            user_type: user_type.to_owned(),
            message: message.to_owned(),
        }
    }
}
