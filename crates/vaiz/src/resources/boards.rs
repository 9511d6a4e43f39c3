//! Boards API endpoint

use std::sync::Arc;

use serde::Serialize;

use super::{EmptyBody, Resource, endpoints};
use crate::error::Result;
use crate::http::BaseClient;
use crate::types::{
    BoardCustomFieldResponse, BoardGroupsResponse, BoardResponse, BoardTypeResponse,
    BoardsResponse, CreateBoardCustomFieldRequest, CreateBoardGroupRequest,
    CreateBoardTypeRequest, EditBoardCustomFieldRequest, EditBoardGroupRequest,
    EditBoardTypeRequest,
};

/// Boards API resource.
#[derive(Debug, Clone)]
pub struct Boards {
    base: Arc<BaseClient>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct BoardIdBody<'a> {
    board_id: &'a str,
}

impl Boards {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    /// List every board in the space. An empty space yields an empty list.
    pub async fn get_boards(&self) -> Result<BoardsResponse> {
        self.base.request(endpoints::GET_BOARDS, &EmptyBody {}).await
    }

    /// Fetch a single board, including its groups, types and custom fields.
    pub async fn get_board(&self, board_id: &str) -> Result<BoardResponse> {
        self.base
            .request(endpoints::GET_BOARD, &BoardIdBody { board_id })
            .await
    }

    /// Add a task type to a board.
    pub async fn create_board_type(
        &self,
        request: &CreateBoardTypeRequest,
    ) -> Result<BoardTypeResponse> {
        self.base.request(endpoints::CREATE_BOARD_TYPE, request).await
    }

    /// Edit a board task type.
    pub async fn edit_board_type(
        &self,
        request: &EditBoardTypeRequest,
    ) -> Result<BoardTypeResponse> {
        self.base.request(endpoints::EDIT_BOARD_TYPE, request).await
    }

    /// Add a group (column) to a board. The payload lists every group of the
    /// board, including the new one.
    pub async fn create_board_group(
        &self,
        request: &CreateBoardGroupRequest,
    ) -> Result<BoardGroupsResponse> {
        self.base.request(endpoints::CREATE_BOARD_GROUP, request).await
    }

    /// Edit a board group.
    pub async fn edit_board_group(
        &self,
        request: &EditBoardGroupRequest,
    ) -> Result<BoardGroupsResponse> {
        self.base.request(endpoints::EDIT_BOARD_GROUP, request).await
    }

    /// Add a custom field to a board.
    pub async fn create_board_custom_field(
        &self,
        request: &CreateBoardCustomFieldRequest,
    ) -> Result<BoardCustomFieldResponse> {
        self.base
            .request(endpoints::CREATE_BOARD_CUSTOM_FIELD, request)
            .await
    }

    /// Edit a board custom field.
    pub async fn edit_board_custom_field(
        &self,
        request: &EditBoardCustomFieldRequest,
    ) -> Result<BoardCustomFieldResponse> {
        self.base
            .request(endpoints::EDIT_BOARD_CUSTOM_FIELD, request)
            .await
    }
}

impl Resource for Boards {
    fn base(&self) -> &BaseClient {
        &self.base
    }
}
