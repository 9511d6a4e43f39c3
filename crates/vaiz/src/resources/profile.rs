//! Profile API endpoint

use std::sync::Arc;

use super::{EmptyBody, Resource, endpoints};
use crate::error::Result;
use crate::http::BaseClient;
use crate::types::ProfileResponse;

/// Profile API resource.
#[derive(Debug, Clone)]
pub struct Profiles {
    base: Arc<BaseClient>,
}

impl Profiles {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    /// Fetch the profile of the user that owns the API key.
    pub async fn get_profile(&self) -> Result<ProfileResponse> {
        self.base.request(endpoints::GET_PROFILE, &EmptyBody {}).await
    }
}

impl Resource for Profiles {
    fn base(&self) -> &BaseClient {
        &self.base
    }
}
