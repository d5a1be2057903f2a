#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterProject {
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
