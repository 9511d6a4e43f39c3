//! Milestones API endpoint

use std::sync::Arc;

use serde::Serialize;

use super::{EmptyBody, Resource, endpoints};
use crate::error::Result;
use crate::http::BaseClient;
use crate::types::{
    CreateMilestoneRequest, EditMilestoneRequest, MilestoneResponse, MilestonesResponse,
    TaskResponse, ToggleMilestoneRequest,
};

/// Milestones API resource.
#[derive(Debug, Clone)]
pub struct Milestones {
    base: Arc<BaseClient>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct MilestoneIdBody<'a> {
    milestone_id: &'a str,
}

impl Milestones {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    /// List every milestone in the space.
    pub async fn get_milestones(&self) -> Result<MilestonesResponse> {
        self.base
            .request(endpoints::GET_MILESTONES, &EmptyBody {})
            .await
    }

    /// Create a milestone on a board.
    pub async fn create_milestone(
        &self,
        request: &CreateMilestoneRequest,
    ) -> Result<MilestoneResponse> {
        self.base.request(endpoints::CREATE_MILESTONE, request).await
    }

    /// Fetch a single milestone.
    pub async fn get_milestone(&self, milestone_id: &str) -> Result<MilestoneResponse> {
        self.base
            .request(endpoints::GET_MILESTONE, &MilestoneIdBody { milestone_id })
            .await
    }

    /// Edit a milestone. Only the fields set on the request are sent.
    pub async fn edit_milestone(
        &self,
        request: &EditMilestoneRequest,
    ) -> Result<MilestoneResponse> {
        self.base.request(endpoints::EDIT_MILESTONE, request).await
    }

    /// Attach or detach milestones on a task; returns the updated task.
    pub async fn toggle_milestone(
        &self,
        request: &ToggleMilestoneRequest,
    ) -> Result<TaskResponse> {
        self.base.request(endpoints::TOGGLE_MILESTONE, request).await
    }
}

impl Resource for Milestones {
    fn base(&self) -> &BaseClient {
        &self.base
    }
}
