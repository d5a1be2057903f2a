use axum::{
    extract::{Query, State},
    http::{StatusCode, header},
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::reports::core::export::ReportView;
use crate::modules::reports::core::sort::{SortDirection, SortField};
use crate::modules::reports::use_cases::generate_report::query::ReportQuery;
use crate::shared::core::week::today;
use crate::shell::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct ExportParams {
    #[serde(default)]
    pub view: ReportView,
    pub start: Option<String>,
    pub end: Option<String>,
    pub sort: Option<SortField>,
    pub direction: Option<SortDirection>,
}

pub async fn handle(
    State(state): State<AppState>,
    Query(params): Query<ExportParams>,
) -> impl IntoResponse {
    let query = ReportQuery {
        start: params.start,
        end: params.end,
        sort: params.sort,
        direction: params.direction,
    };
    match state.export_handler.handle(params.view, query, today()).await {
        Ok(exported) => (
            [
                (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
                (
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{}\"", exported.filename),
                ),
            ],
            exported.table.to_csv(),
        )
            .into_response(),
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}

#[cfg(test)]
mod export_report_http_inbound_tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode, header},
        routing::get,
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use crate::shell::state::AppState;
    use crate::tests::fixtures::state::{make_offline_state, make_test_state};

    use super::handle;

    fn app(state: AppState) -> Router {
        Router::new()
            .route("/reports/export", get(handle))
            .with_state(state)
    }

    #[tokio::test]
    async fn it_should_return_the_merged_view_as_a_csv_download() {
        let response = app(make_test_state())
            .oneshot(
                Request::get("/reports/export?view=merged&start=2024-03-04&end=2024-03-10")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_DISPOSITION],
            "attachment; filename=\"merged-hours_2024-03-04_2024-03-04.csv\""
        );
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let csv = String::from_utf8(bytes.to_vec()).unwrap();
        let lines: Vec<&str> = csv.split('\n').collect();
        assert_eq!(lines.len(), 5);
        assert!(lines[0].starts_with("\u{feff}\"Attribute\",\"Level\""));
    }

    #[tokio::test]
    async fn it_should_return_the_department_view_when_asked() {
        let response = app(make_test_state())
            .oneshot(
                Request::get("/reports/export?view=departments&start=2024-03-04&end=2024-03-10")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let csv = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(csv.contains("\"Department total\""));
        assert!(csv.contains("\"12\""));
    }

    #[tokio::test]
    async fn it_should_export_an_empty_table_for_dates_before_the_earliest_week() {
        let response = app(make_test_state())
            .oneshot(
                Request::get("/reports/export?view=merged&start=-262143-01-01")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_DISPOSITION],
            "attachment; filename=\"merged-hours.csv\""
        );
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let csv = String::from_utf8(bytes.to_vec()).unwrap();
        assert_eq!(csv.split('\n').count(), 1);
    }

    #[tokio::test]
    async fn it_should_return_400_for_an_unknown_view() {
        let response = app(make_test_state())
            .oneshot(
                Request::get("/reports/export?view=pie")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn it_should_return_500_when_storage_is_offline() {
        let response = app(make_offline_state())
            .oneshot(Request::get("/reports/export").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
