use async_graphql::{Context, InputObject, Object, Result as GqlResult};

use crate::modules::projects::use_cases::list_projects::inbound::graphql::GqlProject;
use crate::modules::projects::use_cases::register_project::command::RegisterProject;
use crate::shell::state::AppState;

#[derive(InputObject)]
pub struct RegisterProjectInput {
    pub name: String,
    pub level: String,
    pub details: String,
    pub project_type: String,
    pub sub_type: Option<String>,
    pub stage: String,
    pub platform: String,
    pub start_time: String,
    pub attribute: String,
    pub department: String,
    pub owner: Vec<String>,
    #[graphql(default)]
    pub contact: String,
    pub created_by: Option<String>,
}

#[derive(Default)]
pub struct RegisterProjectMutation;

#[Object]
impl RegisterProjectMutation {
    async fn register_project(
        &self,
        context: &Context<'_>,
        input: RegisterProjectInput,
    ) -> GqlResult<GqlProject> {
        let state = context.data_unchecked::<AppState>();

        let command = RegisterProject {
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
            created_by: input.created_by,
        };

        let saved = state
            .register_project_handler
            .handle(command)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;

        Ok(saved.into())
    }
}
