use crate::modules::projects::use_cases::delete_project::handler::DeleteProjectHandler;
use crate::modules::projects::use_cases::list_projects::handler::ListProjectsHandler;
use crate::modules::projects::use_cases::register_project::handler::RegisterProjectHandler;
use crate::modules::projects::use_cases::update_project::handler::UpdateProjectHandler;
use crate::modules::reports::use_cases::export_report::handler::ExportReportHandler;
use crate::modules::reports::use_cases::generate_report::handler::{
    GenerateReportHandler, ReportSettings,
};
use crate::modules::time_logs::use_cases::delete_time_log::handler::DeleteTimeLogHandler;
use crate::modules::time_logs::use_cases::list_time_logs::handler::ListTimeLogsHandler;
use crate::modules::time_logs::use_cases::register_time_log::handler::RegisterTimeLogHandler;
use crate::modules::time_logs::use_cases::update_time_log::handler::UpdateTimeLogHandler;
use crate::shared::infrastructure::storage::StorageBackend;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub report_handler: Arc<GenerateReportHandler<dyn StorageBackend>>,
    pub export_handler: Arc<ExportReportHandler<dyn StorageBackend>>,
    pub register_handler: Arc<RegisterTimeLogHandler<dyn StorageBackend>>,
    pub update_handler: Arc<UpdateTimeLogHandler<dyn StorageBackend>>,
    pub list_handler: Arc<ListTimeLogsHandler<dyn StorageBackend>>,
    pub delete_handler: Arc<DeleteTimeLogHandler<dyn StorageBackend>>,
    pub register_project_handler: Arc<RegisterProjectHandler<dyn StorageBackend>>,
    pub update_project_handler: Arc<UpdateProjectHandler<dyn StorageBackend>>,
    pub list_projects_handler: Arc<ListProjectsHandler<dyn StorageBackend>>,
    pub delete_project_handler: Arc<DeleteProjectHandler<dyn StorageBackend>>,
}

impl AppState {
    pub fn new(storage: Arc<dyn StorageBackend>, settings: ReportSettings) -> Self {
        let report_handler = Arc::new(GenerateReportHandler::new(storage.clone(), settings));
        Self {
            export_handler: Arc::new(ExportReportHandler::new(report_handler.clone())),
            register_handler: Arc::new(RegisterTimeLogHandler::new(storage.clone())),
            update_handler: Arc::new(UpdateTimeLogHandler::new(storage.clone())),
            list_handler: Arc::new(ListTimeLogsHandler::new(storage.clone())),
            delete_handler: Arc::new(DeleteTimeLogHandler::new(storage.clone())),
            register_project_handler: Arc::new(RegisterProjectHandler::new(storage.clone())),
            update_project_handler: Arc::new(UpdateProjectHandler::new(storage.clone())),
            list_projects_handler: Arc::new(ListProjectsHandler::new(storage.clone())),
            delete_project_handler: Arc::new(DeleteProjectHandler::new(storage)),
            report_handler,
        }
    }
}
