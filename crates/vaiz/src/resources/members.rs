//! Space members API endpoint

use std::sync::Arc;

use super::{EmptyBody, Resource, endpoints};
use crate::error::Result;
use crate::http::BaseClient;
use crate::types::MembersResponse;

/// Members API resource.
#[derive(Debug, Clone)]
pub struct Members {
    base: Arc<BaseClient>,
}

impl Members {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    /// List every member of the current space.
    pub async fn get_space_members(&self) -> Result<MembersResponse> {
        self.base
            .request(endpoints::GET_SPACE_MEMBERS, &EmptyBody {})
            .await
    }
}

impl Resource for Members {
    fn base(&self) -> &BaseClient {
        &self.base
    }
}
