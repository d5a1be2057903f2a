use crate::modules::reports::core::export::{
    ExportTable, ReportView, department_table, export_filename, merged_table,
};
use crate::modules::reports::use_cases::generate_report::handler::GenerateReportHandler;
use crate::modules::reports::use_cases::generate_report::query::ReportQuery;
use crate::shared::application::ApplicationError;
use crate::shared::infrastructure::storage::StorageBackend;
use chrono::NaiveDate;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedReport {
    pub filename: String,
    pub table: ExportTable,
}

pub struct ExportReportHandler<TStorage>
where
    TStorage: StorageBackend + ?Sized,
{
    reports: Arc<GenerateReportHandler<TStorage>>,
}

impl<TStorage> ExportReportHandler<TStorage>
where
    TStorage: StorageBackend + ?Sized,
{
    pub fn new(reports: Arc<GenerateReportHandler<TStorage>>) -> Self {
        Self { reports }
    }

    #[tracing::instrument(skip(self))]
    pub async fn handle(
        &self,
        view: ReportView,
        query: ReportQuery,
        today: NaiveDate,
    ) -> Result<ExportedReport, ApplicationError> {
        let generated = self.reports.handle(query, today).await?;
        let report = &generated.report;
        let table = match view {
            ReportView::Merged => merged_table(&report.merged, &generated.dictionaries),
            ReportView::Departments => department_table(&report.departments, &generated.dictionaries),
        };
        tracing::debug!(rows = table.rows.len(), "report exported");
        Ok(ExportedReport {
            filename: export_filename(view, report.range.as_ref()),
            table,
        })
    }
}
