use axum::{
    Router,
    routing::{get, patch, post},
};

use crate::modules::projects::use_cases::delete_project::inbound::http as delete_project_http;
use crate::modules::projects::use_cases::list_projects::inbound::http as list_projects_http;
use crate::modules::projects::use_cases::register_project::inbound::http as register_project_http;
use crate::modules::projects::use_cases::update_project::inbound::http as update_project_http;
use crate::modules::reports::use_cases::export_report::inbound::http as export_http;
use crate::modules::reports::use_cases::generate_report::inbound::http as report_http;
use crate::modules::time_logs::use_cases::delete_time_log::inbound::http as delete_http;
use crate::modules::time_logs::use_cases::list_time_logs::inbound::http as list_http;
use crate::modules::time_logs::use_cases::register_time_log::inbound::http as register_http;
use crate::modules::time_logs::use_cases::update_time_log::inbound::http as update_http;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/reports/merged", get(report_http::merged))
        .route("/reports/departments", get(report_http::departments))
        .route("/reports/export", get(export_http::handle))
        .route(
            "/time-logs",
            post(register_http::handle).get(list_http::handle),
        )
        .route(
            "/time-logs/{id}",
            patch(update_http::handle).delete(delete_http::handle),
        )
        .route(
            "/projects",
            post(register_project_http::handle).get(list_projects_http::handle),
        )
        .route(
            "/projects/{id}",
            patch(update_project_http::handle).delete(delete_project_http::handle),
        )
        .with_state(state)
}
