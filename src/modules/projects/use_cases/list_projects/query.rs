use crate::shared::core::project::Project;

/// Both filters are optional. `search` matches name or details, ignoring case.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListProjects {
    pub department: Option<String>,
    pub search: Option<String>,
}

impl ListProjects {
    pub fn matches(&self, project: &Project) -> bool {
        let department_matches = match self.department.as_deref().map(str::trim) {
            Some(department) if !department.is_empty() => project.department == department,
            _ => true,
        };
        let search_matches = match self.search.as_deref().map(str::trim) {
            Some(term) if !term.is_empty() => {
                let term = term.to_lowercase();
                project.name.to_lowercase().contains(&term)
                    || project.details.to_lowercase().contains(&term)
            }
            _ => true,
        };
        department_matches && search_matches
    }
}
