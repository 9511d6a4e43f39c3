//! Projects API endpoint

use std::sync::Arc;

use serde::Serialize;

use super::{EmptyBody, Resource, endpoints};
use crate::error::Result;
use crate::http::BaseClient;
use crate::types::{ProjectResponse, ProjectsResponse};

/// Projects API resource.
#[derive(Debug, Clone)]
pub struct Projects {
    base: Arc<BaseClient>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ProjectIdBody<'a> {
    project_id: &'a str,
}

impl Projects {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    /// List every project in the space.
    pub async fn get_projects(&self) -> Result<ProjectsResponse> {
        self.base.request(endpoints::GET_PROJECTS, &EmptyBody {}).await
    }

    /// Fetch a single project by id.
    pub async fn get_project(&self, project_id: &str) -> Result<ProjectResponse> {
        self.base
            .request(endpoints::GET_PROJECT, &ProjectIdBody { project_id })
            .await
    }
}

impl Resource for Projects {
    fn base(&self) -> &BaseClient {
        &self.base
    }
}
