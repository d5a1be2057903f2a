#[derive(Debug, Clone, PartialEq)]
pub struct RegisterTimeLog {
    pub project_id: String,
    pub worker_name: String,
    pub content: String,
    pub hours: f64,
    /// Any date or datetime inside the week being reported.
    pub week_of: String,
    pub created_by: Option<String>,
}
