use crate::shared::core::project::Project;

pub struct ProjectBuilder {
    inner: Project,
}

impl Default for ProjectBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl ProjectBuilder {
    pub fn new() -> Self {
        Self {
            inner: Project {
                id: "p-fixed-0001".to_string(),
                name: "Fixture project".to_string(),
                stage: "ongoing".to_string(),
                start_time: "2024-01-01".to_string(),
                owner: vec!["user-fixed-0001".to_string()],
                created_by: Some("user-fixed-0001".to_string()),
                ..Project::default()
            },
        }
    }

    pub fn id(mut self, v: impl Into<String>) -> Self {
        self.inner.id = v.into();
        self
    }

    pub fn name(mut self, v: impl Into<String>) -> Self {
        self.inner.name = v.into();
        self
    }

    pub fn department(mut self, v: impl Into<String>) -> Self {
        self.inner.department = v.into();
        self
    }

    pub fn project_type(mut self, v: impl Into<String>) -> Self {
        self.inner.project_type = v.into();
        self
    }

    pub fn sub_type(mut self, v: impl Into<String>) -> Self {
        self.inner.sub_type = Some(v.into());
        self
    }

    pub fn level(mut self, v: impl Into<String>) -> Self {
        self.inner.level = v.into();
        self
    }

    pub fn attribute(mut self, v: impl Into<String>) -> Self {
        self.inner.attribute = v.into();
        self
    }

    pub fn platform(mut self, v: impl Into<String>) -> Self {
        self.inner.platform = v.into();
        self
    }

    pub fn details(mut self, v: impl Into<String>) -> Self {
        self.inner.details = v.into();
        self
    }

    pub fn owner(mut self, v: Vec<String>) -> Self {
        self.inner.owner = v;
        self
    }

    pub fn build(self) -> Project {
        self.inner
    }
}
