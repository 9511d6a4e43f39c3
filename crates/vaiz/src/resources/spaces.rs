//! Spaces API endpoint

use std::sync::Arc;

use serde::Serialize;

use super::{Resource, endpoints};
use crate::error::Result;
use crate::http::BaseClient;
use crate::types::SpaceResponse;

/// Spaces API resource.
#[derive(Debug, Clone)]
pub struct Spaces {
    base: Arc<BaseClient>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SpaceIdBody<'a> {
    space_id: &'a str,
}

impl Spaces {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    /// Fetch a space by id.
    pub async fn get_space(&self, space_id: &str) -> Result<SpaceResponse> {
        self.base
            .request(endpoints::GET_SPACE, &SpaceIdBody { space_id })
            .await
    }

    /// Fetch the space this client is scoped to.
    pub async fn get_current_space(&self) -> Result<SpaceResponse> {
        self.get_space(self.base.space_id()).await
    }
}

impl Resource for Spaces {
    fn base(&self) -> &BaseClient {
        &self.base
    }
}
