use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use color_eyre::eyre::eyre;
use uuid::Uuid;

use crate::{
    domain::{GuideId, GuideStoreError, ScheduleAPIError},
    routes::MessageResponse,
    AppState,
};

#[tracing::instrument(name = "Delete guide route handler", skip_all)]
pub async fn delete_guide(
    State(state): State<AppState>,
    Path(guide_id): Path<Uuid>,
) -> Result<(StatusCode, Json<MessageResponse>), ScheduleAPIError> {
    state
        .guide_store
        .write()
        .await
        .delete_guide(&GuideId::new(guide_id))
        .await
        .map_err(|e| match e {
            GuideStoreError::GuideNotFound => {
                ScheduleAPIError::GuideNotFound(guide_id)
            }
            e => ScheduleAPIError::UnexpectedError(eyre!(e)),
        })?;

    Ok((StatusCode::OK, Json(MessageResponse::new("Guida eliminata"))))
}
