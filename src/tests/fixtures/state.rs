use crate::modules::reports::use_cases::generate_report::handler::ReportSettings;
use crate::shared::infrastructure::storage::in_memory::InMemoryStorage;
use crate::shell::state::AppState;
use chrono::NaiveDate;
use std::sync::Arc;

/// Monday 2024-03-04 is the demo week.
pub fn demo_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 7).unwrap()
}

pub fn test_settings() -> ReportSettings {
    ReportSettings {
        sort_locale: "en".to_string(),
        report_weeks: 4,
    }
}

pub fn make_test_state() -> AppState {
    AppState::new(Arc::new(InMemoryStorage::seeded(demo_today())), test_settings())
}

pub fn make_offline_state() -> AppState {
    let mut storage = InMemoryStorage::seeded(demo_today());
    storage.toggle_offline();
    AppState::new(Arc::new(storage), test_settings())
}
