use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::projects::use_cases::list_projects::query::ListProjects;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct ListProjectsParams {
    pub department: Option<String>,
    pub search: Option<String>,
}

pub async fn handle(
    State(state): State<AppState>,
    Query(params): Query<ListProjectsParams>,
) -> impl IntoResponse {
    let query = ListProjects {
        department: params.department,
        search: params.search,
    };
    match state.list_projects_handler.handle(query).await {
        Ok(projects) => Json(projects).into_response(),
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}
