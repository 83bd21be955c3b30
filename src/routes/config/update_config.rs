use axum::{extract::State, http::StatusCode, Json};
use color_eyre::eyre::eyre;

use crate::{
    domain::{ConfigStoreError, ConfigUpdate, ScheduleAPIError},
    routes::MessageResponse,
    AppState,
};

#[tracing::instrument(name = "Update configuration route handler", skip_all)]
pub async fn update_config(
    State(state): State<AppState>,
    Json(update): Json<ConfigUpdate>,
) -> Result<(StatusCode, Json<MessageResponse>), ScheduleAPIError> {
    state
        .config_store
        .write()
        .await
        .update_config(update)
        .await
        .map_err(|e| match e {
            ConfigStoreError::InvalidConfig(e) => {
                ScheduleAPIError::ValidationError(e)
            }
            e => ScheduleAPIError::UnexpectedError(eyre!(e)),
        })?;

    tracing::info!("Configuration updated");

    Ok((
        StatusCode::OK,
        Json(MessageResponse::new("Configurazione aggiornata")),
    ))
}
