use async_graphql::{Context, ID, Object, Result as GqlResult};

use crate::shell::state::AppState;

#[derive(Default)]
pub struct DeleteTimeLogMutation;

#[Object]
impl DeleteTimeLogMutation {
    async fn delete_time_log(&self, context: &Context<'_>, id: ID) -> GqlResult<bool> {
        let state = context.data_unchecked::<AppState>();
        state
            .delete_handler
            .handle(&id)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(true)
    }
}
