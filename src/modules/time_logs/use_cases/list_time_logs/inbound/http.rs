use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::time_logs::use_cases::list_time_logs::query::ListTimeLogs;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct ListTimeLogsParams {
    pub week: Option<String>,
    pub worker: Option<String>,
}

pub async fn handle(
    State(state): State<AppState>,
    Query(params): Query<ListTimeLogsParams>,
) -> impl IntoResponse {
    let query = ListTimeLogs {
        week_of: params.week,
        worker: params.worker,
    };
    match state.list_handler.handle(query).await {
        Ok(logs) => Json(logs).into_response(),
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}
