// Shared test fixture for the RegisterTimeLog command, seeded from a JSON file.

use crate::modules::time_logs::use_cases::register_time_log::command::RegisterTimeLog;
use serde::Deserialize;
use std::fs;

// JSON -> DTO (transport shape)
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterTimeLogDto {
    pub project_id: String,
    pub worker_name: String,
    pub content: String,
    pub hours: f64,
    pub week_of: String,
}

pub struct RegisterTimeLogBuilder {
    inner: RegisterTimeLog,
}

impl Default for RegisterTimeLogBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl RegisterTimeLogBuilder {
    pub fn new() -> Self {
        let json_str =
            fs::read_to_string("./src/tests/fixtures/commands/json/register_time_log.json").unwrap();
        let dto: RegisterTimeLogDto = serde_json::from_str(&json_str).unwrap();

        Self {
            inner: RegisterTimeLog {
                project_id: dto.project_id,
                worker_name: dto.worker_name,
                content: dto.content,
                hours: dto.hours,
                week_of: dto.week_of,
                created_by: Some("user-fixed-0001".to_string()),
            },
        }
    }

    pub fn project_id(mut self, v: impl Into<String>) -> Self {
        self.inner.project_id = v.into();
        self
    }

    pub fn worker_name(mut self, v: impl Into<String>) -> Self {
        self.inner.worker_name = v.into();
        self
    }

    pub fn content(mut self, v: impl Into<String>) -> Self {
        self.inner.content = v.into();
        self
    }

    pub fn hours(mut self, v: f64) -> Self {
        self.inner.hours = v;
        self
    }

    pub fn week_of(mut self, v: impl Into<String>) -> Self {
        self.inner.week_of = v.into();
        self
    }

    pub fn created_by(mut self, v: Option<String>) -> Self {
        self.inner.created_by = v;
        self
    }

    pub fn build(self) -> RegisterTimeLog {
        self.inner
    }
}

#[cfg(test)]
mod register_time_log_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new_and_parses_json() {
        let built = RegisterTimeLogBuilder::default().build();
        assert_eq!(built.project_id, "p_001");
        assert_eq!(built.worker_name, "Zhang");
        assert_eq!(built.content, "Component library audit");
        assert_eq!(built.hours, 6.5);
        assert_eq!(built.week_of, "2024-03-06");
        assert_eq!(built.created_by.as_deref(), Some("user-fixed-0001"));
    }

    #[rstest]
    fn setters_override_all_fields_and_build_returns_inner() {
        let custom = RegisterTimeLogBuilder::new()
            .project_id("p_9")
            .worker_name("Li")
            .content("desc")
            .hours(1.25)
            .week_of("2024-01-01")
            .created_by(None)
            .build();

        assert_eq!(custom.project_id, "p_9");
        assert_eq!(custom.worker_name, "Li");
        assert_eq!(custom.content, "desc");
        assert_eq!(custom.hours, 1.25);
        assert_eq!(custom.week_of, "2024-01-01");
        assert_eq!(custom.created_by, None);
    }
}
