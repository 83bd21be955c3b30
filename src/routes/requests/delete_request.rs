use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use color_eyre::eyre::eyre;
use uuid::Uuid;

use crate::{
    domain::{DayRequestId, DayRequestStoreError, ScheduleAPIError},
    routes::MessageResponse,
    AppState,
};

#[tracing::instrument(name = "Delete day request route handler", skip_all)]
pub async fn delete_request(
    State(state): State<AppState>,
    Path(request_id): Path<Uuid>,
) -> Result<(StatusCode, Json<MessageResponse>), ScheduleAPIError> {
    state
        .day_request_store
        .write()
        .await
        .delete_request(&DayRequestId::new(request_id))
        .await
        .map_err(|e| match e {
            DayRequestStoreError::RequestNotFound => {
                ScheduleAPIError::RequestNotFound(request_id)
            }
            e => ScheduleAPIError::UnexpectedError(eyre!(e)),
        })?;

    Ok((
        StatusCode::OK,
        Json(MessageResponse::new("Richiesta eliminata")),
    ))
}
