use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::time_logs::use_cases::list_time_logs::inbound::graphql::GqlTimeLog;
use crate::modules::time_logs::use_cases::register_time_log::command::RegisterTimeLog;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct RegisterTimeLogMutation;

#[Object]
impl RegisterTimeLogMutation {
    async fn register_time_log(
        &self,
        context: &Context<'_>,
        project_id: String,
        worker_name: String,
        content: String,
        hours: f64,
        week_of: String,
        created_by: Option<String>,
    ) -> GqlResult<GqlTimeLog> {
        let state = context.data_unchecked::<AppState>();

        let command = RegisterTimeLog {
            project_id,
            worker_name,
            content,
            hours,
            week_of,
            created_by,
        };

        let saved = state
            .register_handler
            .handle(command)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;

        Ok(saved.into())
    }
}
