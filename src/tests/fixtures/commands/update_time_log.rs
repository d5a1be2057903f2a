use crate::modules::time_logs::use_cases::update_time_log::command::UpdateTimeLog;

/// Targets seeded log `l_001` and changes nothing until told to.
pub struct UpdateTimeLogBuilder {
    inner: UpdateTimeLog,
}

impl Default for UpdateTimeLogBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl UpdateTimeLogBuilder {
    pub fn new() -> Self {
        Self {
            inner: UpdateTimeLog {
                id: "l_001".to_string(),
                ..UpdateTimeLog::default()
            },
        }
    }

    pub fn id(mut self, v: impl Into<String>) -> Self {
        self.inner.id = v.into();
        self
    }

    pub fn project_id(mut self, v: impl Into<String>) -> Self {
        self.inner.project_id = Some(v.into());
        self
    }

    pub fn worker_name(mut self, v: impl Into<String>) -> Self {
        self.inner.worker_name = Some(v.into());
        self
    }

    pub fn content(mut self, v: impl Into<String>) -> Self {
        self.inner.content = Some(v.into());
        self
    }

    pub fn hours(mut self, v: f64) -> Self {
        self.inner.hours = Some(v);
        self
    }

    pub fn week_of(mut self, v: impl Into<String>) -> Self {
        self.inner.week_of = Some(v.into());
        self
    }

    pub fn build(self) -> UpdateTimeLog {
        self.inner
    }
}
