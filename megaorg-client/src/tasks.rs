/// Task store
///
/// Maps task CRUD intents onto `/tasks`. Task bodies are always JSON.
/// The trait exists so the console can run against an in-memory double in
/// tests; `ApiTaskStore` is the real thing.

use async_trait::async_trait;

use megaorg_shared::models::task::{CreateTask, Task, UpdateTask};

use crate::error::ClientError;
use crate::http::ApiClient;

/// CRUD operations over the task collection
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Fetches the full task collection
    async fn list(&self) -> Result<Vec<Task>, ClientError>;

    /// Fetches one task by id
    async fn get(&self, id: i64) -> Result<Task, ClientError>;

    /// Creates a task and returns the server's record
    async fn create(&self, payload: CreateTask) -> Result<Task, ClientError>;

    /// Updates a task; absent payload fields mean "unchanged"
    async fn update(&self, id: i64, payload: UpdateTask) -> Result<Task, ClientError>;

    /// Deletes a task. Irreversible.
    async fn delete(&self, id: i64) -> Result<(), ClientError>;
}

/// HTTP-backed task store
#[derive(Debug, Clone)]
pub struct ApiTaskStore {
    api: ApiClient,
}

impl ApiTaskStore {
    pub fn new(api: ApiClient) -> Self {
        ApiTaskStore { api }
    }
}

#[async_trait]
impl TaskStore for ApiTaskStore {
    async fn list(&self) -> Result<Vec<Task>, ClientError> {
        self.api.get_json("/tasks").await
    }

    async fn get(&self, id: i64) -> Result<Task, ClientError> {
        self.api.get_json(&format!("/tasks/{id}")).await
    }

    async fn create(&self, payload: CreateTask) -> Result<Task, ClientError> {
        self.api.post_json("/tasks", &payload).await
    }

    async fn update(&self, id: i64, payload: UpdateTask) -> Result<Task, ClientError> {
        self.api.put_json(&format!("/tasks/{id}"), &payload).await
    }

    async fn delete(&self, id: i64) -> Result<(), ClientError> {
        self.api.delete(&format!("/tasks/{id}")).await
    }
}
