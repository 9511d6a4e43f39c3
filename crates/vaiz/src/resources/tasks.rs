//! Tasks API endpoint

use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use super::{Resource, endpoints};
use crate::error::{Error, Result};
use crate::http::BaseClient;
use crate::types::{
    CreateTaskRequest, EditTaskRequest, GetHistoryRequest, GetTasksRequest, HistoryResponse,
    Task, TaskResponse, TasksResponse,
};

/// Page size used by [`Tasks::get_all_tasks`]; also the server's cap.
pub const TASKS_PAGE_SIZE: u32 = 50;

/// Upper bound accepted for `max_tasks` in [`Tasks::get_all_tasks`].
pub const MAX_ALL_TASKS: usize = 10_000;

/// Default `max_tasks` callers can pass to [`Tasks::get_all_tasks`].
pub const DEFAULT_MAX_TASKS: usize = 500;

/// Tasks API resource.
#[derive(Debug, Clone)]
pub struct Tasks {
    base: Arc<BaseClient>,
}

#[derive(Serialize)]
struct SlugBody<'a> {
    slug: &'a str,
}

impl Tasks {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    /// Create a task. The request is sent verbatim.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// # use vaiz::{Client, CreateTaskRequest};
    /// # async fn example(client: Client) -> Result<(), Box<dyn std::error::Error>> {
    /// let request = CreateTaskRequest::builder()
    ///     .name("Fix login redirect")
    ///     .group("group-id")
    ///     .board("board-id")
    ///     .project("project-id")
    ///     .build()?;
    ///
    /// let created = client.tasks().create_task(&request).await?;
    /// println!("Created {}", created.task.id);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn create_task(&self, request: &CreateTaskRequest) -> Result<TaskResponse> {
        self.base.request(endpoints::CREATE_TASK, request).await
    }

    /// Fetch a task by its slug (e.g. `PRJ-12`).
    pub async fn get_task(&self, slug: &str) -> Result<TaskResponse> {
        self.base
            .request(endpoints::GET_TASK, &SlugBody { slug })
            .await
    }

    /// Edit a task. Only the fields set on the request are sent.
    pub async fn edit_task(&self, request: &EditTaskRequest) -> Result<TaskResponse> {
        self.base.request(endpoints::EDIT_TASK, request).await
    }

    /// Fetch one page of tasks. The server returns at most 50 per page.
    pub async fn get_tasks(&self, request: &GetTasksRequest) -> Result<TasksResponse> {
        self.base.request(endpoints::GET_TASKS, request).await
    }

    /// Fetch every task matching `filter`, following pages of
    /// [`TASKS_PAGE_SIZE`] until a short or empty page or `max_tasks` tasks.
    ///
    /// `limit` and `skip` on `filter` are ignored. Each page is one request;
    /// the first failure is returned and already-fetched pages are dropped.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRequest`] without any I/O if `max_tasks`
    /// exceeds [`MAX_ALL_TASKS`].
    pub async fn get_all_tasks(
        &self,
        filter: Option<&GetTasksRequest>,
        max_tasks: usize,
    ) -> Result<Vec<Task>> {
        if max_tasks > MAX_ALL_TASKS {
            return Err(Error::InvalidRequest(format!(
                "max_tasks cannot exceed {}, got {}",
                MAX_ALL_TASKS, max_tasks
            )));
        }

        let mut request = filter.cloned().unwrap_or_default();
        request.limit = Some(TASKS_PAGE_SIZE);

        let mut tasks = Vec::new();
        let mut page: u32 = 0;

        while tasks.len() < max_tasks {
            request.skip = Some(page * TASKS_PAGE_SIZE);

            let batch = self.get_tasks(&request).await?.tasks;
            let fetched = batch.len();
            debug!(
                page,
                fetched,
                total = tasks.len() + fetched,
                "Fetched task page"
            );

            tasks.extend(batch);

            if fetched < TASKS_PAGE_SIZE as usize {
                break;
            }
            page += 1;
        }

        tasks.truncate(max_tasks);
        Ok(tasks)
    }

    /// Fetch the activity history of a task (or any other [`Kind`] of entity).
    ///
    /// [`Kind`]: crate::types::Kind
    pub async fn get_history(&self, request: &GetHistoryRequest) -> Result<HistoryResponse> {
        self.base.request(endpoints::GET_HISTORY, request).await
    }
}

impl Resource for Tasks {
    fn base(&self) -> &BaseClient {
        &self.base
    }
}
