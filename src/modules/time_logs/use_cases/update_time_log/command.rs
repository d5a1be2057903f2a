/// Changes to an existing log. Absent fields keep their stored value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateTimeLog {
    pub id: String,
    pub project_id: Option<String>,
    pub worker_name: Option<String>,
    pub content: Option<String>,
    pub hours: Option<f64>,
    pub week_of: Option<String>,
}

impl UpdateTimeLog {
    /// Project the updated log will point at.
    pub fn target_project_id<'a>(&'a self, stored_project_id: &'a str) -> &'a str {
        self.project_id.as_deref().unwrap_or(stored_project_id)
    }
}
