use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::time_logs::use_cases::list_time_logs::query::ListTimeLogs;
use crate::shared::core::time_log::TimeLogEntry;
use crate::shell::state::AppState;

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlTimeLog {
    pub id: String,
    pub project_id: String,
    pub project_name: Option<String>,
    pub project_dept: Option<String>,
    pub project_type: Option<String>,
    pub project_sub_type: Option<String>,
    pub project_platform: Option<String>,
    pub worker_name: String,
    pub content: String,
    pub hours: f64,
    pub week_start_date: String,
    pub created: String,
    pub created_by: Option<String>,
}

impl From<TimeLogEntry> for GqlTimeLog {
    fn from(v: TimeLogEntry) -> Self {
        Self {
            id: v.id,
            project_id: v.project_id,
            project_name: v.snapshot.project_name,
            project_dept: v.snapshot.project_dept,
            project_type: v.snapshot.project_type,
            project_sub_type: v.snapshot.project_sub_type,
            project_platform: v.snapshot.project_platform,
            worker_name: v.worker_name,
            content: v.content,
            hours: v.hours,
            week_start_date: v.week_start_date,
            created: v.created,
            created_by: v.created_by,
        }
    }
}

#[derive(Default)]
pub struct TimeLogsQuery;

#[Object]
impl TimeLogsQuery {
    async fn time_logs(
        &self,
        context: &Context<'_>,
        week_of: Option<String>,
        worker: Option<String>,
    ) -> GqlResult<Vec<GqlTimeLog>> {
        let state = context.data_unchecked::<AppState>();
        let list = state
            .list_handler
            .handle(ListTimeLogs { week_of, worker })
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(list.into_iter().map(Into::into).collect())
    }
}
