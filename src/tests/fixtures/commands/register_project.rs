// Shared test fixture for the RegisterProject command, seeded from a JSON file.

use crate::modules::projects::use_cases::register_project::command::RegisterProject;
use serde::Deserialize;
use std::fs;

#[derive(Debug, Clone, Deserialize)]
pub struct RegisterProjectDto {
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
}

pub struct RegisterProjectBuilder {
    inner: RegisterProject,
}

impl Default for RegisterProjectBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl RegisterProjectBuilder {
    pub fn new() -> Self {
        let json_str =
            fs::read_to_string("./src/tests/fixtures/commands/json/register_project.json").unwrap();
        let dto: RegisterProjectDto = serde_json::from_str(&json_str).unwrap();

        Self {
            inner: RegisterProject {
                name: dto.name,
                level: dto.level,
                details: dto.details,
                project_type: dto.project_type,
                sub_type: dto.sub_type,
                stage: dto.stage,
                platform: dto.platform,
                start_time: dto.start_time,
                attribute: dto.attribute,
                department: dto.department,
                owner: dto.owner,
                contact: dto.contact,
                created_by: Some("user-fixed-0001".to_string()),
            },
        }
    }

    pub fn name(mut self, v: impl Into<String>) -> Self {
        self.inner.name = v.into();
        self
    }

    pub fn details(mut self, v: impl Into<String>) -> Self {
        self.inner.details = v.into();
        self
    }

    pub fn project_type(mut self, v: impl Into<String>) -> Self {
        self.inner.project_type = v.into();
        self
    }

    pub fn sub_type(mut self, v: Option<String>) -> Self {
        self.inner.sub_type = v;
        self
    }

    pub fn department(mut self, v: impl Into<String>) -> Self {
        self.inner.department = v.into();
        self
    }

    pub fn start_time(mut self, v: impl Into<String>) -> Self {
        self.inner.start_time = v.into();
        self
    }

    pub fn owner(mut self, v: Vec<String>) -> Self {
        self.inner.owner = v;
        self
    }

    pub fn build(self) -> RegisterProject {
        self.inner
    }
}
