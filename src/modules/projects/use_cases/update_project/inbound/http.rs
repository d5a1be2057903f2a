use axum::{
    Json,
    extract::rejection::JsonRejection,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::projects::use_cases::update_project::command::UpdateProject;
use crate::shared::application::ApplicationError;
use crate::shell::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProjectBody {
    pub name: Option<String>,
    pub level: Option<String>,
    pub details: Option<String>,
    #[serde(rename = "type")]
    pub project_type: Option<String>,
    pub sub_type: Option<String>,
    pub stage: Option<String>,
    pub platform: Option<String>,
    pub start_time: Option<String>,
    pub attribute: Option<String>,
    pub department: Option<String>,
    pub owner: Option<Vec<String>>,
    pub contact: Option<String>,
}

impl UpdateProjectBody {
    fn into_command(self, id: String) -> UpdateProject {
        UpdateProject {
            id,
            name: self.name,
            level: self.level,
            details: self.details,
            project_type: self.project_type,
            sub_type: self.sub_type,
            stage: self.stage,
            platform: self.platform,
            start_time: self.start_time,
            attribute: self.attribute,
            department: self.department,
            owner: self.owner,
            contact: self.contact,
        }
    }
}

pub async fn handle(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<UpdateProjectBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    match state.update_project_handler.handle(body.into_command(id)).await {
        Ok(project) => (StatusCode::OK, Json(project)).into_response(),
        Err(ApplicationError::Domain(reason)) => (StatusCode::BAD_REQUEST, reason).into_response(),
        Err(ApplicationError::NotFound(_)) => StatusCode::NOT_FOUND.into_response(),
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}

#[cfg(test)]
mod update_project_http_inbound_tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        routing::patch,
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use crate::shell::state::AppState;
    use crate::tests::fixtures::state::{make_offline_state, make_test_state};

    use super::handle;

    fn app(state: AppState) -> Router {
        Router::new()
            .route("/projects/{id}", patch(handle))
            .with_state(state)
    }

    fn patch_json(id: &str, body: &str) -> Request<Body> {
        Request::patch(format!("/projects/{id}"))
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn it_should_return_200_with_the_updated_project() {
        let response = app(make_test_state())
            .oneshot(patch_json("p_004", r#"{"stage":"paused","owner":["u1","u2"]}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["id"], "p_004");
        assert_eq!(json["stage"], "paused");
        assert_eq!(json["owner"], serde_json::json!(["u1", "u2"]));
        assert_eq!(json["department"], "marketing");
    }

    #[tokio::test]
    async fn it_should_return_404_for_an_unknown_project() {
        let response = app(make_test_state())
            .oneshot(patch_json("p_404", r#"{"stage":"paused"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn it_should_return_400_when_the_owners_are_cleared() {
        let response = app(make_test_state())
            .oneshot(patch_json("p_004", r#"{"owner":[]}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn it_should_return_422_on_invalid_json() {
        let response = app(make_test_state())
            .oneshot(patch_json("p_004", r#"{"owner":"u1"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn it_should_return_500_when_storage_is_offline() {
        let response = app(make_offline_state())
            .oneshot(patch_json("p_004", r#"{"stage":"paused"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
