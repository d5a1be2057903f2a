use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::modules::reports::core::date_range::WeekRange;
use crate::modules::reports::core::department_report::{DepartmentReport, ProjectStats};
use crate::modules::reports::core::merged_report::MergedProjectRow;
use crate::modules::reports::core::sort::{SortDirection, SortField};
use crate::modules::reports::use_cases::generate_report::query::ReportQuery;
use crate::shared::core::week::today;
use crate::shell::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct ReportParams {
    pub start: Option<String>,
    pub end: Option<String>,
    pub sort: Option<SortField>,
    pub direction: Option<SortDirection>,
}

impl From<ReportParams> for ReportQuery {
    fn from(params: ReportParams) -> Self {
        Self {
            start: params.start,
            end: params.end,
            sort: params.sort,
            direction: params.direction,
        }
    }
}

#[derive(Serialize)]
pub struct MergedReportResponse {
    pub range: Option<WeekRange>,
    pub rows: Vec<MergedProjectRow>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeView<'a> {
    pub row_span: usize,
    pub projects: &'a IndexMap<String, ProjectStats>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentView<'a> {
    pub total_hours: f64,
    pub row_span: usize,
    pub types: IndexMap<&'a str, TypeView<'a>>,
}

#[derive(Serialize)]
pub struct DepartmentReportResponse<'a> {
    pub range: Option<&'a WeekRange>,
    pub departments: IndexMap<&'a str, DepartmentView<'a>>,
}

impl<'a> DepartmentReportResponse<'a> {
    pub fn new(range: Option<&'a WeekRange>, report: &'a DepartmentReport) -> Self {
        let departments = report
            .departments
            .iter()
            .map(|(key, department)| {
                let types = department
                    .types
                    .iter()
                    .map(|(type_key, stats)| {
                        (
                            type_key.as_str(),
                            TypeView {
                                row_span: stats.row_span(),
                                projects: &stats.projects,
                            },
                        )
                    })
                    .collect();
                (
                    key.as_str(),
                    DepartmentView {
                        total_hours: department.total_hours,
                        row_span: department.row_span(),
                        types,
                    },
                )
            })
            .collect();
        Self { range, departments }
    }
}

pub async fn merged(
    State(state): State<AppState>,
    Query(params): Query<ReportParams>,
) -> impl IntoResponse {
    match state.report_handler.handle(params.into(), today()).await {
        Ok(generated) => Json(MergedReportResponse {
            range: generated.report.range,
            rows: generated.report.merged,
        })
        .into_response(),
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}

pub async fn departments(
    State(state): State<AppState>,
    Query(params): Query<ReportParams>,
) -> impl IntoResponse {
    match state.report_handler.handle(params.into(), today()).await {
        Ok(generated) => {
            let report = &generated.report;
            Json(DepartmentReportResponse::new(
                report.range.as_ref(),
                &report.departments,
            ))
            .into_response()
        }
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}
