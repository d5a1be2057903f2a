// In memory implementation of the StorageBackend port.
//
// Purpose
// - Run the dashboard without a database: demos, tests and local development.
//
// Responsibilities
// - Keep projects, logs and dictionaries in memory.
// - Attach the live project to every log on read, like the remote backend's expand.
// - Optionally seed a demo dataset anchored on the current week.

use crate::shared::core::dictionary::Dictionaries;
use crate::shared::core::project::Project;
use crate::shared::core::time_log::{LogExpand, ProjectSnapshot, TimeLogEntry};
use crate::shared::core::week::{format_date, week_start};
use crate::shared::infrastructure::storage::{
    LOGS_COLLECTION, PROJECTS_COLLECTION, StorageBackend, StorageError,
};
use chrono::{NaiveDate, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

pub const CREATED_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3fZ";

#[derive(Default)]
pub struct InMemoryStorage {
    projects: RwLock<Vec<Project>>,
    logs: RwLock<Vec<TimeLogEntry>>,
    dictionaries: RwLock<Dictionaries>,
    is_offline: bool,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(
        projects: Vec<Project>,
        logs: Vec<TimeLogEntry>,
        dictionaries: Dictionaries,
    ) -> Self {
        Self {
            projects: RwLock::new(projects),
            logs: RwLock::new(logs),
            dictionaries: RwLock::new(dictionaries),
            is_offline: false,
        }
    }

    /// Demo dataset: five projects across three departments and a week of logs for `today`.
    pub fn seeded(today: NaiveDate) -> Self {
        let (projects, logs) = demo_records(today);
        Self::with_records(projects, logs, Dictionaries::default())
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn ensure_online(&self) -> Result<(), StorageError> {
        if self.is_offline {
            return Err(StorageError::Unavailable("in-memory storage offline".into()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl StorageBackend for InMemoryStorage {
    async fn get_logs(&self) -> Result<Vec<TimeLogEntry>, StorageError> {
        self.ensure_online()?;
        let projects = self.projects.read().await;
        let mut logs: Vec<TimeLogEntry> = self
            .logs
            .read()
            .await
            .iter()
            .cloned()
            .map(|mut log| {
                log.expand = projects
                    .iter()
                    .find(|project| project.id == log.project_id)
                    .map(|project| LogExpand {
                        project: Some(project.clone()),
                    });
                log
            })
            .collect();
        logs.sort_by(|a, b| b.created.cmp(&a.created));
        Ok(logs)
    }

    async fn get_projects(&self) -> Result<Vec<Project>, StorageError> {
        self.ensure_online()?;
        Ok(self.projects.read().await.clone())
    }

    async fn get_dictionaries(&self) -> Result<Dictionaries, StorageError> {
        self.ensure_online()?;
        Ok(self.dictionaries.read().await.clone())
    }

    async fn save_log(&self, mut log: TimeLogEntry) -> Result<TimeLogEntry, StorageError> {
        self.ensure_online()?;
        log.expand = None;
        let mut logs = self.logs.write().await;
        if log.id.is_empty() {
            log.id = Uuid::now_v7().to_string();
            log.created = Utc::now().format(CREATED_FORMAT).to_string();
            logs.push(log.clone());
            return Ok(log);
        }
        match logs.iter_mut().find(|stored| stored.id == log.id) {
            Some(stored) => {
                if log.created.is_empty() {
                    log.created = stored.created.clone();
                }
                *stored = log.clone();
                Ok(log)
            }
            None => Err(StorageError::NotFound {
                collection: LOGS_COLLECTION.to_string(),
                id: log.id,
            }),
        }
    }

    async fn delete_log(&self, id: &str) -> Result<(), StorageError> {
        self.ensure_online()?;
        let mut logs = self.logs.write().await;
        let before = logs.len();
        logs.retain(|log| log.id != id);
        if logs.len() == before {
            return Err(StorageError::NotFound {
                collection: LOGS_COLLECTION.to_string(),
                id: id.to_string(),
            });
        }
        Ok(())
    }

    async fn save_project(&self, mut project: Project) -> Result<Project, StorageError> {
        self.ensure_online()?;
        let mut projects = self.projects.write().await;
        if project.id.is_empty() {
            project.id = Uuid::now_v7().to_string();
            projects.push(project.clone());
            return Ok(project);
        }
        match projects.iter_mut().find(|stored| stored.id == project.id) {
            Some(stored) => {
                *stored = project.clone();
                Ok(project)
            }
            None => Err(StorageError::NotFound {
                collection: PROJECTS_COLLECTION.to_string(),
                id: project.id,
            }),
        }
    }

    async fn delete_project(&self, id: &str) -> Result<(), StorageError> {
        self.ensure_online()?;
        let mut projects = self.projects.write().await;
        let before = projects.len();
        projects.retain(|project| project.id != id);
        if projects.len() == before {
            return Err(StorageError::NotFound {
                collection: PROJECTS_COLLECTION.to_string(),
                id: id.to_string(),
            });
        }
        Ok(())
    }
}

fn demo_records(today: NaiveDate) -> (Vec<Project>, Vec<TimeLogEntry>) {
    let monday = format_date(week_start(today).unwrap_or(today));
    let project = |id: &str, name: &str, level: &str, project_type: &str, sub_type: Option<&str>| {
        Project {
            id: id.to_string(),
            name: name.to_string(),
            level: level.to_string(),
            project_type: project_type.to_string(),
            sub_type: sub_type.map(str::to_string),
            stage: "ongoing".to_string(),
            platform: "web".to_string(),
            owner: vec!["demo-manager".to_string()],
            contact: "Chen".to_string(),
            created_by: Some("demo-manager".to_string()),
            ..Project::default()
        }
    };
    let projects = vec![
        Project {
            details: "Unified asset and request tracking for the design team".into(),
            department: "rd_center".into(),
            attribute: "strategic".into(),
            start_time: "2024-01-15".into(),
            ..project("p_001", "DesignOps platform 2.0", "S", "internal_build", None)
        },
        Project {
            details: "Campaign venue pages and presale banners".into(),
            department: "brand".into(),
            attribute: "routine".into(),
            start_time: "2024-03-01".into(),
            ..project("p_002", "Shopping festival UI refresh", "A", "ui_design", Some("iterative"))
        },
        Project {
            details: "Mascot model for the spring campaign".into(),
            department: "marketing".into(),
            attribute: "strategic".into(),
            platform: "pc".into(),
            stage: "testing".into(),
            start_time: "2024-02-10".into(),
            ..project("p_003", "Brand mascot 3D model", "B", "3d_modeling", None)
        },
        Project {
            details: "Responsive rebuild of the marketing site".into(),
            department: "marketing".into(),
            attribute: "strategic".into(),
            start_time: "2024-03-15".into(),
            ..project("p_004", "Marketing site rebuild", "S", "interaction_design", None)
        },
        Project {
            details: "Shared icon set for internal tools".into(),
            department: "rd_center".into(),
            attribute: "routine".into(),
            stage: "published".into(),
            start_time: "2024-01-05".into(),
            ..project("p_005", "Internal icon library", "C", "ui_design", Some("expansion"))
        },
    ];

    let entries: [(&str, &str, &str, &str, f64); 8] = [
        ("l_001", "p_001", "Zhang", "Router refactor and state cleanup", 4.0),
        ("l_002", "p_001", "Zhang", "API conventions with the frontend team", 2.0),
        ("l_003", "p_002", "Wang", "Main venue background and first layout", 6.0),
        ("l_004", "p_002", "Wang", "Second presale banner variants", 2.0),
        ("l_005", "p_003", "Li", "Head model detailing and topology", 5.0),
        ("l_006", "p_004", "Li", "Homepage motion prototype review", 3.0),
        ("l_007", "p_004", "Wang", "Interaction logic implementation", 4.0),
        ("l_008", "p_001", "Wang", "Live sync for the statistics module", 4.0),
    ];
    let logs = entries
        .iter()
        .enumerate()
        .filter_map(|(index, (id, project_id, worker, content, hours))| {
            let owner = projects.iter().find(|project| project.id == *project_id)?;
            Some(TimeLogEntry {
                id: id.to_string(),
                project_id: project_id.to_string(),
                snapshot: ProjectSnapshot::of(owner),
                worker_name: worker.to_string(),
                content: content.to_string(),
                hours: *hours,
                week_start_date: monday.clone(),
                created: format!("{monday} 09:{index:02}:00.000Z"),
                created_by: None,
                expand: None,
            })
        })
        .collect();
    (projects, logs)
}
