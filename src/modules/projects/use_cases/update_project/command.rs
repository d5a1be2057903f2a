use crate::shared::core::project::Project;

/// Changes to a stored project. Absent fields keep their stored value; an empty `sub_type`
/// clears it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateProject {
    pub id: String,
    pub name: Option<String>,
    pub level: Option<String>,
    pub details: Option<String>,
    pub project_type: Option<String>,
    pub sub_type: Option<String>,
    pub stage: Option<String>,
    pub platform: Option<String>,
    pub start_time: Option<String>,
    pub attribute: Option<String>,
    pub department: Option<String>,
    pub owner: Option<Vec<String>>,
    pub contact: Option<String>,
}

impl UpdateProject {
    /// `stored` with the changes applied. Id and author are never changed.
    pub fn apply(self, stored: Project) -> Project {
        Project {
            name: self.name.unwrap_or(stored.name),
            level: self.level.unwrap_or(stored.level),
            details: self.details.unwrap_or(stored.details),
            project_type: self.project_type.unwrap_or(stored.project_type),
            sub_type: self.sub_type.or(stored.sub_type),
            stage: self.stage.unwrap_or(stored.stage),
            platform: self.platform.unwrap_or(stored.platform),
            start_time: self.start_time.unwrap_or(stored.start_time),
            attribute: self.attribute.unwrap_or(stored.attribute),
            department: self.department.unwrap_or(stored.department),
            owner: self.owner.unwrap_or(stored.owner),
            contact: self.contact.unwrap_or(stored.contact),
            id: stored.id,
            created_by: stored.created_by,
        }
    }
}
