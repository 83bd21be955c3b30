use axum::{extract::State, http::StatusCode, Json};
use color_eyre::eyre::eyre;

use crate::{
    domain::{Guide, ScheduleAPIError},
    AppState,
};

#[tracing::instrument(name = "List guides route handler", skip_all)]
pub async fn list_guides(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<Vec<Guide>>), ScheduleAPIError> {
    let guides = state
        .guide_store
        .read()
        .await
        .list_guides()
        .await
        .map_err(|e| ScheduleAPIError::UnexpectedError(eyre!(e)))?;

    Ok((StatusCode::OK, Json(guides)))
}
