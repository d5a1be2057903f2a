// REST client implementation of the StorageBackend port.
//
// Purpose
// - Read and write records through the document database's collection API.
//
// Responsibilities
// - Page through list endpoints until every record is fetched.
// - Ask the backend to expand the project reference of every log.
// - Overlay the stored dictionaries on the built-in defaults.

use crate::shared::core::dictionary::Dictionaries;
use crate::shared::core::project::Project;
use crate::shared::core::time_log::TimeLogEntry;
use crate::shared::infrastructure::storage::{
    CONFIG_COLLECTION, LOGS_COLLECTION, PROJECTS_COLLECTION, StorageBackend, StorageError,
};
use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

const PAGE_SIZE: u32 = 200;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListPage<T> {
    page: u32,
    total_pages: u32,
    items: Vec<T>,
}

#[derive(Deserialize)]
struct ConfigRecord {
    #[serde(default)]
    data: Value,
}

#[derive(Debug, Clone)]
pub struct RemoteStorage {
    client: Client,
    base_url: String,
}

impl RemoteStorage {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: normalize_base_url(base_url),
        }
    }

    fn records_url(&self, collection: &str) -> String {
        format!("{}/api/collections/{collection}/records", self.base_url)
    }

    fn record_url(&self, collection: &str, id: &str) -> String {
        format!("{}/{id}", self.records_url(collection))
    }

    async fn full_list<T: DeserializeOwned>(
        &self,
        collection: &str,
        sort: Option<&str>,
        expand: Option<&str>,
    ) -> Result<Vec<T>, StorageError> {
        let mut items = Vec::new();
        let mut page = 1u32;
        loop {
            let mut query = vec![
                ("page", page.to_string()),
                ("perPage", PAGE_SIZE.to_string()),
            ];
            if let Some(sort) = sort {
                query.push(("sort", sort.to_string()));
            }
            if let Some(expand) = expand {
                query.push(("expand", expand.to_string()));
            }
            let response = self
                .client
                .get(self.records_url(collection))
                .query(&query)
                .send()
                .await?;
            let body: ListPage<T> = decode(response).await?;
            items.extend(body.items);
            if body.page >= body.total_pages {
                break;
            }
            page = body.page + 1;
        }
        tracing::debug!(collection, count = items.len(), "fetched collection");
        Ok(items)
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, StorageError> {
    let response = ensure_success(response).await?;
    let bytes = response.bytes().await?;
    Ok(serde_json::from_slice(&bytes)?)
}

async fn ensure_success(response: Response) -> Result<Response, StorageError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(StorageError::Backend {
        status: status.as_u16(),
        body,
    })
}

/// Prepends `http://` when no scheme is given and drops trailing slashes.
pub fn normalize_base_url(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("http://{trimmed}")
    }
}

/// Record body for a project write: no id, owners as a JSON-encoded list.
pub fn project_payload(project: &Project) -> Result<Value, StorageError> {
    let mut payload = serde_json::to_value(project)?;
    if let Value::Object(fields) = &mut payload {
        fields.remove("id");
        fields.insert(
            "owner".to_string(),
            Value::String(serde_json::to_string(&project.owner)?),
        );
    }
    Ok(payload)
}

/// Stored dictionary keys replace the defaults one by one; absent keys keep the default.
pub fn overlay_dictionaries(stored: &Value) -> Result<Dictionaries, StorageError> {
    let mut merged = serde_json::to_value(Dictionaries::default())?;
    if let (Value::Object(target), Value::Object(source)) = (&mut merged, stored) {
        for (key, value) in source {
            if target.contains_key(key) && !value.is_null() {
                target.insert(key.clone(), value.clone());
            }
        }
    }
    Ok(serde_json::from_value(merged)?)
}

#[async_trait]
impl StorageBackend for RemoteStorage {
    async fn get_logs(&self) -> Result<Vec<TimeLogEntry>, StorageError> {
        self.full_list(LOGS_COLLECTION, Some("-created"), Some("projectId"))
            .await
    }

    async fn get_projects(&self) -> Result<Vec<Project>, StorageError> {
        self.full_list(PROJECTS_COLLECTION, Some("-created"), None)
            .await
    }

    async fn get_dictionaries(&self) -> Result<Dictionaries, StorageError> {
        let records: Vec<ConfigRecord> = self.full_list(CONFIG_COLLECTION, None, None).await?;
        match records.first() {
            Some(record) => overlay_dictionaries(&record.data),
            None => Ok(Dictionaries::default()),
        }
    }

    async fn save_log(&self, log: TimeLogEntry) -> Result<TimeLogEntry, StorageError> {
        let mut payload = serde_json::to_value(&log)?;
        if let Value::Object(fields) = &mut payload {
            for generated in ["id", "created", "expand"] {
                fields.remove(generated);
            }
        }
        let request = if log.id.is_empty() {
            self.client.post(self.records_url(LOGS_COLLECTION))
        } else {
            self.client.patch(self.record_url(LOGS_COLLECTION, &log.id))
        };
        let response = request.json(&payload).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(StorageError::NotFound {
                collection: LOGS_COLLECTION.to_string(),
                id: log.id,
            });
        }
        decode(response).await
    }

    async fn delete_log(&self, id: &str) -> Result<(), StorageError> {
        let response = self
            .client
            .delete(self.record_url(LOGS_COLLECTION, id))
            .send()
            .await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(StorageError::NotFound {
                collection: LOGS_COLLECTION.to_string(),
                id: id.to_string(),
            });
        }
        ensure_success(response).await?;
        Ok(())
    }

    async fn save_project(&self, project: Project) -> Result<Project, StorageError> {
        let payload = project_payload(&project)?;
        let request = if project.id.is_empty() {
            self.client.post(self.records_url(PROJECTS_COLLECTION))
        } else {
            self.client
                .patch(self.record_url(PROJECTS_COLLECTION, &project.id))
        };
        let response = request.json(&payload).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(StorageError::NotFound {
                collection: PROJECTS_COLLECTION.to_string(),
                id: project.id,
            });
        }
        decode(response).await
    }

    async fn delete_project(&self, id: &str) -> Result<(), StorageError> {
        let response = self
            .client
            .delete(self.record_url(PROJECTS_COLLECTION, id))
            .send()
            .await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(StorageError::NotFound {
                collection: PROJECTS_COLLECTION.to_string(),
                id: id.to_string(),
            });
        }
        ensure_success(response).await?;
        Ok(())
    }

    async fn get_log(&self, id: &str) -> Result<Option<TimeLogEntry>, StorageError> {
        let response = self
            .client
            .get(self.record_url(LOGS_COLLECTION, id))
            .query(&[("expand", "projectId")])
            .send()
            .await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        decode(response).await.map(Some)
    }

    async fn get_project(&self, id: &str) -> Result<Option<Project>, StorageError> {
        let response = self
            .client
            .get(self.record_url(PROJECTS_COLLECTION, id))
            .send()
            .await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        decode(response).await.map(Some)
    }
}
