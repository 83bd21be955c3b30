use axum::{http::StatusCode, Json};
use std::collections::BTreeMap;

use crate::domain::GuideCategory;

#[tracing::instrument(name = "List guide categories route handler", skip_all)]
pub async fn list_categories(
) -> (StatusCode, Json<BTreeMap<&'static str, &'static str>>) {
    let categories = GuideCategory::ALL
        .iter()
        .map(|category| (category.key(), category.label()))
        .collect();

    (StatusCode::OK, Json(categories))
}
