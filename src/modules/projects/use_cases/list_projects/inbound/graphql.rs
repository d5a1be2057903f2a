use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::projects::use_cases::list_projects::query::ListProjects;
use crate::shared::core::project::Project;
use crate::shell::state::AppState;

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlProject {
    pub id: String,
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
    pub contact: String,
    pub created_by: Option<String>,
}

impl From<Project> for GqlProject {
    fn from(v: Project) -> Self {
        Self {
            id: v.id,
            name: v.name,
            level: v.level,
            details: v.details,
            project_type: v.project_type,
            sub_type: v.sub_type,
            stage: v.stage,
            platform: v.platform,
            start_time: v.start_time,
            attribute: v.attribute,
            department: v.department,
            owner: v.owner,
            contact: v.contact,
            created_by: v.created_by,
        }
    }
}

#[derive(Default)]
pub struct ProjectsQuery;

#[Object]
impl ProjectsQuery {
    async fn projects(
        &self,
        context: &Context<'_>,
        department: Option<String>,
        search: Option<String>,
    ) -> GqlResult<Vec<GqlProject>> {
        let state = context.data_unchecked::<AppState>();
        let list = state
            .list_projects_handler
            .handle(ListProjects { department, search })
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(list.into_iter().map(Into::into).collect())
    }
}
