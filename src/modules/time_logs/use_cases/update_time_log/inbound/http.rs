use axum::{
    Json,
    extract::rejection::JsonRejection,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::time_logs::use_cases::update_time_log::command::UpdateTimeLog;
use crate::shared::application::ApplicationError;
use crate::shell::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTimeLogBody {
    pub project_id: Option<String>,
    pub worker_name: Option<String>,
    pub content: Option<String>,
    pub hours: Option<f64>,
    pub week_of: Option<String>,
}

pub async fn handle(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<UpdateTimeLogBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let command = UpdateTimeLog {
        id,
        project_id: body.project_id,
        worker_name: body.worker_name,
        content: body.content,
        hours: body.hours,
        week_of: body.week_of,
    };

    match state.update_handler.handle(command).await {
        Ok(log) => (StatusCode::OK, Json(log)).into_response(),
        Err(ApplicationError::Domain(reason)) => (StatusCode::BAD_REQUEST, reason).into_response(),
        Err(ApplicationError::NotFound(_)) => StatusCode::NOT_FOUND.into_response(),
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}
