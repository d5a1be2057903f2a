use async_graphql::{EmptySubscription, MergedObject, Schema};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::Extension;
use axum::response::Html;

use crate::modules::projects::use_cases::delete_project::inbound::graphql::DeleteProjectMutation;
use crate::modules::projects::use_cases::list_projects::inbound::graphql::ProjectsQuery;
use crate::modules::projects::use_cases::register_project::inbound::graphql::RegisterProjectMutation;
use crate::modules::projects::use_cases::update_project::inbound::graphql::UpdateProjectMutation;
use crate::modules::reports::use_cases::generate_report::inbound::graphql::ReportsQuery;
use crate::modules::time_logs::use_cases::delete_time_log::inbound::graphql::DeleteTimeLogMutation;
use crate::modules::time_logs::use_cases::list_time_logs::inbound::graphql::TimeLogsQuery;
use crate::modules::time_logs::use_cases::register_time_log::inbound::graphql::RegisterTimeLogMutation;
use crate::modules::time_logs::use_cases::update_time_log::inbound::graphql::UpdateTimeLogMutation;
pub use crate::shell::state::AppState;

pub const GRAPHQL_PATH: &str = "/gql";

#[derive(MergedObject, Default)]
pub struct QueryRoot(ReportsQuery, TimeLogsQuery, ProjectsQuery);

#[derive(MergedObject, Default)]
pub struct MutationRoot(
    RegisterTimeLogMutation,
    UpdateTimeLogMutation,
    DeleteTimeLogMutation,
    RegisterProjectMutation,
    UpdateProjectMutation,
    DeleteProjectMutation,
);

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn schema(state: AppState) -> AppSchema {
    Schema::build(QueryRoot::default(), MutationRoot::default(), EmptySubscription)
        .data(state)
        .finish()
}

pub async fn graphql(Extension(schema): Extension<AppSchema>, req: GraphQLRequest) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

pub async fn graphiql() -> Html<String> {
    use async_graphql::http::GraphiQLSource;
    Html(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish())
}
