use async_graphql::{Context, Enum, Object, Result as GqlResult, SimpleObject};

use crate::modules::reports::core::date_range::WeekRange;
use crate::modules::reports::core::department_report::DepartmentReport;
use crate::modules::reports::core::merged_report::MergedProjectRow;
use crate::modules::reports::use_cases::generate_report::handler::GeneratedReport;
use crate::modules::reports::use_cases::generate_report::query::ReportQuery;
use crate::shared::core::dictionary::{Dictionaries, DictionaryKind};
use crate::shared::core::week::today;
use crate::shell::state::AppState;

#[derive(Enum, Copy, Clone, Eq, PartialEq)]
#[graphql(remote = "crate::modules::reports::core::sort::SortField")]
pub enum GqlSortField {
    Department,
    Type,
    Level,
    Attribute,
    Platform,
    ProjectName,
    Hours,
    Participants,
}

#[derive(Enum, Copy, Clone, Eq, PartialEq)]
#[graphql(remote = "crate::modules::reports::core::sort::SortDirection")]
pub enum GqlSortDirection {
    Asc,
    Desc,
}

#[derive(SimpleObject, Clone)]
pub struct GqlWeekRange {
    pub start_week: String,
    pub end_week: String,
}

impl From<WeekRange> for GqlWeekRange {
    fn from(v: WeekRange) -> Self {
        Self {
            start_week: v.start_week,
            end_week: v.end_week,
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct GqlMergedRow {
    pub project_id: String,
    pub project_name: String,
    pub department: String,
    pub department_label: String,
    pub level: String,
    pub level_label: String,
    pub attribute: String,
    pub attribute_label: String,
    pub project_type: String,
    pub type_label: String,
    pub sub_type: Option<String>,
    pub platform: String,
    pub platform_label: String,
    pub contents: Vec<String>,
    pub participants: Vec<String>,
    pub total_hours: f64,
}

impl GqlMergedRow {
    fn labelled(v: MergedProjectRow, dictionaries: &Dictionaries) -> Self {
        let label = |kind, value: &str| dictionaries.translate(kind, value).to_string();
        Self {
            department_label: label(DictionaryKind::Departments, &v.department_key),
            level_label: label(DictionaryKind::Levels, &v.level_key),
            attribute_label: label(DictionaryKind::Attributes, &v.attribute_key),
            type_label: label(DictionaryKind::Types, &v.type_key),
            platform_label: label(DictionaryKind::Platforms, &v.platform_key),
            project_id: v.project_id,
            project_name: v.project_name,
            department: v.department_key,
            level: v.level_key,
            attribute: v.attribute_key,
            project_type: v.type_key,
            sub_type: v.sub_type_key,
            platform: v.platform_key,
            contents: v.contents,
            participants: v.participants.into_iter().collect(),
            total_hours: v.total_hours,
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct GqlMergedReport {
    pub range: Option<GqlWeekRange>,
    pub rows: Vec<GqlMergedRow>,
}

#[derive(SimpleObject, Clone)]
pub struct GqlProjectStats {
    pub project_id: String,
    pub name: String,
    pub hours: f64,
    pub people: Vec<String>,
}

#[derive(SimpleObject, Clone)]
pub struct GqlTypeStats {
    pub key: String,
    pub label: String,
    pub row_span: usize,
    pub projects: Vec<GqlProjectStats>,
}

#[derive(SimpleObject, Clone)]
pub struct GqlDepartmentStats {
    pub key: String,
    pub label: String,
    pub total_hours: f64,
    pub row_span: usize,
    pub types: Vec<GqlTypeStats>,
}

#[derive(SimpleObject, Clone)]
pub struct GqlDepartmentReport {
    pub range: Option<GqlWeekRange>,
    pub departments: Vec<GqlDepartmentStats>,
}

fn department_list(report: DepartmentReport, dictionaries: &Dictionaries) -> Vec<GqlDepartmentStats> {
    report
        .departments
        .into_iter()
        .map(|(key, department)| GqlDepartmentStats {
            label: dictionaries
                .translate(DictionaryKind::Departments, &key)
                .to_string(),
            row_span: department.row_span(),
            total_hours: department.total_hours,
            types: department
                .types
                .into_iter()
                .map(|(type_key, stats)| GqlTypeStats {
                    label: dictionaries
                        .translate(DictionaryKind::Types, &type_key)
                        .to_string(),
                    row_span: stats.row_span(),
                    projects: stats
                        .projects
                        .into_iter()
                        .map(|(project_id, project)| GqlProjectStats {
                            project_id,
                            name: project.name,
                            hours: project.hours,
                            people: project.people.into_iter().collect(),
                        })
                        .collect(),
                    key: type_key,
                })
                .collect(),
            key,
        })
        .collect()
}

async fn generate(
    context: &Context<'_>,
    start: Option<String>,
    end: Option<String>,
    sort: Option<GqlSortField>,
    direction: Option<GqlSortDirection>,
) -> GqlResult<GeneratedReport> {
    let state = context.data_unchecked::<AppState>();
    let query = ReportQuery {
        start,
        end,
        sort: sort.map(Into::into),
        direction: direction.map(Into::into),
    };
    state
        .report_handler
        .handle(query, today())
        .await
        .map_err(|e| async_graphql::Error::new(e.to_string()))
}

#[derive(Default)]
pub struct ReportsQuery;

#[Object]
impl ReportsQuery {
    async fn merged_report(
        &self,
        context: &Context<'_>,
        start: Option<String>,
        end: Option<String>,
        sort: Option<GqlSortField>,
        direction: Option<GqlSortDirection>,
    ) -> GqlResult<GqlMergedReport> {
        let GeneratedReport {
            report,
            dictionaries,
        } = generate(context, start, end, sort, direction).await?;
        Ok(GqlMergedReport {
            range: report.range.map(Into::into),
            rows: report
                .merged
                .into_iter()
                .map(|row| GqlMergedRow::labelled(row, &dictionaries))
                .collect(),
        })
    }

    async fn department_report(
        &self,
        context: &Context<'_>,
        start: Option<String>,
        end: Option<String>,
        sort: Option<GqlSortField>,
        direction: Option<GqlSortDirection>,
    ) -> GqlResult<GqlDepartmentReport> {
        let GeneratedReport {
            report,
            dictionaries,
        } = generate(context, start, end, sort, direction).await?;
        Ok(GqlDepartmentReport {
            range: report.range.map(Into::into),
            departments: department_list(report.departments, &dictionaries),
        })
    }
}
