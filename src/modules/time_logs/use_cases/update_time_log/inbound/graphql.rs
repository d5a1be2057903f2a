use async_graphql::{Context, ID, Object, Result as GqlResult};

use crate::modules::time_logs::use_cases::list_time_logs::inbound::graphql::GqlTimeLog;
use crate::modules::time_logs::use_cases::update_time_log::command::UpdateTimeLog;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct UpdateTimeLogMutation;

#[Object]
impl UpdateTimeLogMutation {
    async fn update_time_log(
        &self,
        context: &Context<'_>,
        id: ID,
        project_id: Option<String>,
        worker_name: Option<String>,
        content: Option<String>,
        hours: Option<f64>,
        week_of: Option<String>,
    ) -> GqlResult<GqlTimeLog> {
        let state = context.data_unchecked::<AppState>();

        let command = UpdateTimeLog {
            id: id.to_string(),
            project_id,
            worker_name,
            content,
            hours,
            week_of,
        };

        let saved = state
            .update_handler
            .handle(command)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;

        Ok(saved.into())
    }
}
