use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::time_logs::use_cases::register_time_log::command::RegisterTimeLog;
use crate::shared::application::ApplicationError;
use crate::shell::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterTimeLogBody {
    pub project_id: String,
    pub worker_name: String,
    pub content: String,
    pub hours: f64,
    pub week_of: String,
    pub created_by: Option<String>,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<RegisterTimeLogBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let command = RegisterTimeLog {
        project_id: body.project_id,
        worker_name: body.worker_name,
        content: body.content,
        hours: body.hours,
        week_of: body.week_of,
        created_by: body.created_by,
    };

    match state.register_handler.handle(command).await {
        Ok(log) => (StatusCode::CREATED, Json(log)).into_response(),
        Err(ApplicationError::Domain(reason)) => (StatusCode::BAD_REQUEST, reason).into_response(),
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}
