use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use color_eyre::eyre::eyre;
use uuid::Uuid;

use crate::{
    domain::{ScheduleAPIError, WeekId, WeekStoreError},
    routes::MessageResponse,
    AppState,
};

#[tracing::instrument(name = "Delete week route handler", skip_all)]
pub async fn delete_week(
    State(state): State<AppState>,
    Path(week_id): Path<Uuid>,
) -> Result<(StatusCode, Json<MessageResponse>), ScheduleAPIError> {
    state
        .week_store
        .write()
        .await
        .delete_week(&WeekId::new(week_id))
        .await
        .map_err(|e| match e {
            WeekStoreError::WeekNotFound => {
                ScheduleAPIError::WeekNotFound(week_id)
            }
            e => ScheduleAPIError::UnexpectedError(eyre!(e)),
        })?;

    Ok((
        StatusCode::OK,
        Json(MessageResponse::new("Settimana eliminata")),
    ))
}
