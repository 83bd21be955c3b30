use axum::{extract::State, http::StatusCode, Json};
use color_eyre::eyre::eyre;
use serde::Deserialize;
use validator::Validate;

use crate::{
    domain::{Guide, GuideCategory, ScheduleAPIError, ValidationError},
    AppState,
};

#[tracing::instrument(name = "Create guide route handler", skip_all)]
pub async fn create_guide(
    State(state): State<AppState>,
    Json(request): Json<GuideRequest>,
) -> Result<(StatusCode, Json<Guide>), ScheduleAPIError> {
    request
        .validate()
        .map_err(|e| ValidationError::new(e.to_string()))?;

    let guide = Guide::new(
        request.title,
        request.content,
        request.category,
    );

    state
        .guide_store
        .write()
        .await
        .add_guide(&guide)
        .await
        .map_err(|e| ScheduleAPIError::UnexpectedError(eyre!(e)))?;

    Ok((StatusCode::CREATED, Json(guide)))
}

#[derive(Debug, PartialEq, Deserialize, Validate)]
pub struct GuideRequest {
    #[serde(rename = "titolo")]
    #[validate(length(min = 1, max = 255))]
    pub title: String,
    #[serde(rename = "contenuto")]
    #[validate(length(min = 1))]
    pub content: String,
    #[serde(rename = "categoria")]
    pub category: GuideCategory,
}
