use async_graphql::{Context, ID, InputObject, Object, Result as GqlResult};

use crate::modules::projects::use_cases::list_projects::inbound::graphql::GqlProject;
use crate::modules::projects::use_cases::update_project::command::UpdateProject;
use crate::shell::state::AppState;

#[derive(InputObject, Default)]
pub struct UpdateProjectInput {
    pub name: Option<String>,
    pub level: Option<String>,
    pub details: Option<String>,
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

#[derive(Default)]
pub struct UpdateProjectMutation;

#[Object]
impl UpdateProjectMutation {
    async fn update_project(
        &self,
        context: &Context<'_>,
        id: ID,
        input: UpdateProjectInput,
    ) -> GqlResult<GqlProject> {
        let state = context.data_unchecked::<AppState>();

        let command = UpdateProject {
            id: id.to_string(),
            name: input.name,
            level: input.level,
            details: input.details,
            project_type: input.project_type,
            sub_type: input.sub_type,
            stage: input.stage,
            platform: input.platform,
            start_time: input.start_time,
            attribute: input.attribute,
            department: input.department,
            owner: input.owner,
            contact: input.contact,
        };

        let saved = state
            .update_project_handler
            .handle(command)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;

        Ok(saved.into())
    }
}
