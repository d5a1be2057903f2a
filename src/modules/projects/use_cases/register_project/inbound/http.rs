use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::projects::use_cases::register_project::command::RegisterProject;
use crate::shared::application::ApplicationError;
use crate::shell::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterProjectBody {
    pub name: String,
    pub level: String,
    pub details: String,
    #[serde(rename = "type")]
    pub project_type: String,
    pub sub_type: Option<String>,
    pub stage: String,
    pub platform: String,
    pub start_time: String,
    pub attribute: String,
    pub department: String,
    #[serde(default)]
    pub owner: Vec<String>,
    #[serde(default)]
    pub contact: String,
    pub created_by: Option<String>,
}

impl From<RegisterProjectBody> for RegisterProject {
    fn from(body: RegisterProjectBody) -> Self {
        Self {
            name: body.name,
            level: body.level,
            details: body.details,
            project_type: body.project_type,
            sub_type: body.sub_type,
            stage: body.stage,
            platform: body.platform,
            start_time: body.start_time,
            attribute: body.attribute,
            department: body.department,
            owner: body.owner,
            contact: body.contact,
            created_by: body.created_by,
        }
    }
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<RegisterProjectBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    match state.register_project_handler.handle(body.into()).await {
        Ok(project) => (StatusCode::CREATED, Json(project)).into_response(),
        Err(ApplicationError::Domain(reason)) => (StatusCode::BAD_REQUEST, reason).into_response(),
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}
