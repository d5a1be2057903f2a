use crate::shared::core::time_log::TimeLogEntry;

pub struct TimeLogBuilder {
    inner: TimeLogEntry,
}

impl Default for TimeLogBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Starts without a snapshot or expansion, so classification comes only from what a test sets.
#[allow(dead_code)]
impl TimeLogBuilder {
    pub fn new() -> Self {
        Self {
            inner: TimeLogEntry {
                id: "l-fixed-0001".to_string(),
                project_id: "p-fixed-0001".to_string(),
                worker_name: "worker-fixed-0001".to_string(),
                content: "Fixture work".to_string(),
                hours: 1.0,
                week_start_date: "2024-03-04".to_string(),
                created: "2024-03-05 10:00:00.000Z".to_string(),
                ..TimeLogEntry::default()
            },
        }
    }

    pub fn id(mut self, v: impl Into<String>) -> Self {
        self.inner.id = v.into();
        self
    }

    pub fn project_id(mut self, v: impl Into<String>) -> Self {
        self.inner.project_id = v.into();
        self
    }

    pub fn worker(mut self, v: impl Into<String>) -> Self {
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

    pub fn week_start_date(mut self, v: impl Into<String>) -> Self {
        self.inner.week_start_date = v.into();
        self
    }

    pub fn created(mut self, v: impl Into<String>) -> Self {
        self.inner.created = v.into();
        self
    }

    pub fn created_by(mut self, v: impl Into<String>) -> Self {
        self.inner.created_by = Some(v.into());
        self
    }

    pub fn snapshot_name(mut self, v: impl Into<String>) -> Self {
        self.inner.snapshot.project_name = Some(v.into());
        self
    }

    pub fn snapshot_department(mut self, v: impl Into<String>) -> Self {
        self.inner.snapshot.project_dept = Some(v.into());
        self
    }

    pub fn snapshot_type(mut self, v: impl Into<String>) -> Self {
        self.inner.snapshot.project_type = Some(v.into());
        self
    }

    pub fn snapshot_sub_type(mut self, v: impl Into<String>) -> Self {
        self.inner.snapshot.project_sub_type = Some(v.into());
        self
    }

    pub fn snapshot_platform(mut self, v: impl Into<String>) -> Self {
        self.inner.snapshot.project_platform = Some(v.into());
        self
    }

    pub fn build(self) -> TimeLogEntry {
        self.inner
    }
}
