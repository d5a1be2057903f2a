use crate::shared::core::time_log::TimeLogEntry;
use crate::shared::core::week::week_key;

/// Both filters are optional; a present filter must match exactly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListTimeLogs {
    /// Any date inside the wanted week.
    pub week_of: Option<String>,
    pub worker: Option<String>,
}

impl ListTimeLogs {
    pub fn matches(&self, log: &TimeLogEntry) -> bool {
        let week_matches = match self.week_of.as_deref().filter(|raw| !raw.trim().is_empty()) {
            Some(raw) => week_key(raw).is_some_and(|week| week == log.week_start_date),
            None => true,
        };
        let worker_matches = match self.worker.as_deref().map(str::trim) {
            Some(worker) if !worker.is_empty() => log.worker_name == worker,
            _ => true,
        };
        week_matches && worker_matches
    }
}
