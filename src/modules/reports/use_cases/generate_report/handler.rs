use crate::modules::reports::core::aggregate::{Report, ReportSnapshot, build_report};
use crate::modules::reports::use_cases::generate_report::query::ReportQuery;
use crate::shared::application::ApplicationError;
use crate::shared::core::dictionary::Dictionaries;
use crate::shared::infrastructure::storage::StorageBackend;
use chrono::NaiveDate;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportSettings {
    /// BCP-47 locale for collation.
    pub sort_locale: String,
    /// Window length used when a request omits its dates.
    pub report_weeks: u32,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            sort_locale: "zh".to_string(),
            report_weeks: 4,
        }
    }
}

/// A report together with the dictionaries it was built against.
#[derive(Debug, Clone)]
pub struct GeneratedReport {
    pub report: Report,
    pub dictionaries: Dictionaries,
}

pub struct GenerateReportHandler<TStorage>
where
    TStorage: StorageBackend + ?Sized,
{
    storage: Arc<TStorage>,
    settings: ReportSettings,
}

impl<TStorage> GenerateReportHandler<TStorage>
where
    TStorage: StorageBackend + ?Sized,
{
    pub fn new(storage: Arc<TStorage>, settings: ReportSettings) -> Self {
        Self { storage, settings }
    }

    pub fn settings(&self) -> &ReportSettings {
        &self.settings
    }

    async fn fetch(&self) -> Result<ReportSnapshot, ApplicationError> {
        let (logs, projects, dictionaries) = tokio::try_join!(
            self.storage.get_logs(),
            self.storage.get_projects(),
            self.storage.get_dictionaries(),
        )
        .inspect_err(|error| tracing::warn!(%error, "fetching report data failed"))?;
        Ok(ReportSnapshot {
            logs,
            projects,
            dictionaries,
        })
    }

    #[tracing::instrument(skip(self))]
    pub async fn handle(
        &self,
        query: ReportQuery,
        today: NaiveDate,
    ) -> Result<GeneratedReport, ApplicationError> {
        let snapshot = self.fetch().await?;
        let range = query.range(today, self.settings.report_weeks);
        let report = build_report(
            &snapshot,
            range.as_ref(),
            query.sort_state(),
            &self.settings.sort_locale,
        )?;
        tracing::debug!(
            merged_rows = report.merged.len(),
            departments = report.departments.departments.len(),
            "report generated"
        );
        Ok(GeneratedReport {
            report,
            dictionaries: snapshot.dictionaries,
        })
    }
}
