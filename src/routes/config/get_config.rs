use axum::{extract::State, http::StatusCode, Json};
use color_eyre::eyre::eyre;

use crate::{
    domain::{AppConfig, ScheduleAPIError},
    AppState,
};

#[tracing::instrument(name = "Get configuration route handler", skip_all)]
pub async fn get_config(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<AppConfig>), ScheduleAPIError> {
    let config = state
        .config_store
        .write()
        .await
        .get_config()
        .await
        .map_err(|e| ScheduleAPIError::UnexpectedError(eyre!(e)))?;

    Ok((StatusCode::OK, Json(config)))
}
