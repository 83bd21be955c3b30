use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use color_eyre::eyre::eyre;

use crate::{
    domain::{Guide, GuideCategory, ScheduleAPIError},
    AppState,
};

#[tracing::instrument(name = "List guides by category route handler", skip_all)]
pub async fn list_guides_by_category(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> Result<(StatusCode, Json<Vec<Guide>>), ScheduleAPIError> {
    // No guide can belong to an unknown category.
    let Ok(category) = category.parse::<GuideCategory>() else {
        return Ok((StatusCode::OK, Json(Vec::new())));
    };

    let guides = state
        .guide_store
        .read()
        .await
        .list_guides_by_category(category)
        .await
        .map_err(|e| ScheduleAPIError::UnexpectedError(eyre!(e)))?;

    Ok((StatusCode::OK, Json(guides)))
}
