use crate::modules::projects::use_cases::update_project::command::UpdateProject;
use crate::modules::projects::use_cases::update_project::handler::UpdateProjectHandler;
use crate::modules::reports::core::export::ReportView;
use crate::modules::reports::core::sort::{SortDirection, SortField};
use crate::modules::reports::use_cases::export_report::handler::ExportReportHandler;
use crate::modules::reports::use_cases::generate_report::handler::GenerateReportHandler;
use crate::modules::reports::use_cases::generate_report::query::ReportQuery;
use crate::modules::time_logs::use_cases::delete_time_log::handler::DeleteTimeLogHandler;
use crate::modules::time_logs::use_cases::register_time_log::handler::RegisterTimeLogHandler;
use crate::shared::infrastructure::storage::in_memory::InMemoryStorage;
use crate::tests::fixtures::commands::register_time_log::RegisterTimeLogBuilder;
use crate::tests::fixtures::state::{demo_today, test_settings};
use std::sync::Arc;

#[tokio::test]
async fn registered_logs_flow_into_reports_and_exports() {
    let storage = Arc::new(InMemoryStorage::seeded(demo_today()));
    let register = RegisterTimeLogHandler::new(storage.clone());
    let delete = DeleteTimeLogHandler::new(storage.clone());
    let update_project = UpdateProjectHandler::new(storage.clone());
    let reports = Arc::new(GenerateReportHandler::new(storage.clone(), test_settings()));
    let export = ExportReportHandler::new(reports.clone());

    let saved = register
        .handle(
            RegisterTimeLogBuilder::new()
                .project_id("p_003")
                .worker_name("Zhao")
                .content("Texture pass")
                .hours(2.5)
                .build(),
        )
        .await
        .unwrap();
    assert_eq!(saved.week_start_date, "2024-03-04");

    let generated = reports
        .handle(ReportQuery::default(), demo_today())
        .await
        .unwrap();
    let mascot = generated
        .report
        .merged
        .iter()
        .find(|row| row.project_id == "p_003")
        .unwrap();
    assert_eq!(mascot.total_hours, 7.5);
    assert!(mascot.participants.contains("Zhao"));
    assert_eq!(
        generated.report.departments.get("marketing").unwrap().total_hours,
        14.5
    );

    // Moving a project to another department moves its past hours with it.
    update_project
        .handle(UpdateProject {
            id: "p_003".into(),
            department: Some("brand".into()),
            ..UpdateProject::default()
        })
        .await
        .unwrap();

    let sorted = ReportQuery {
        sort: Some(SortField::Hours),
        direction: Some(SortDirection::Desc),
        ..ReportQuery::default()
    };
    let generated = reports.handle(sorted.clone(), demo_today()).await.unwrap();
    let departments = &generated.report.departments;
    assert_eq!(departments.get("marketing").unwrap().total_hours, 7.0);
    assert_eq!(departments.get("brand").unwrap().total_hours, 15.5);
    let total: f64 = departments.departments.values().map(|d| d.total_hours).sum();
    assert_eq!(total, 32.5);

    let exported = export
        .handle(ReportView::Departments, sorted, demo_today())
        .await
        .unwrap();
    let csv = exported.table.to_csv();
    assert!(csv.starts_with('\u{feff}'));
    assert!(csv.contains("\"15.5\""));
    assert!(csv.contains("Zhao"));
    assert_eq!(exported.filename, "departments-hours_2024-02-12_2024-03-04.csv");

    delete.handle(&saved.id).await.unwrap();
    let generated = reports
        .handle(ReportQuery::default(), demo_today())
        .await
        .unwrap();
    let total: f64 = generated
        .report
        .departments
        .departments
        .values()
        .map(|d| d.total_hours)
        .sum();
    assert_eq!(total, 30.0);
}
