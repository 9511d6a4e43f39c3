//! Integration tests for the resource endpoints using wiremock

mod common;

use pretty_assertions::assert_eq;
use serde_json::json;
use chrono::{TimeZone, Utc};
use vaiz::{
    Client, CommentReactionType, CreateBoardCustomFieldRequest, CreateBoardGroupRequest,
    CreateBoardTypeRequest, CreateDocumentRequest, CreateMilestoneRequest, CustomFieldType,
    EditBoardCustomFieldRequest, EditBoardGroupRequest, EditBoardTypeRequest, EditCommentRequest,
    EditDocumentRequest, EditMilestoneRequest, GetDocumentsRequest, GetHistoryRequest, Kind,
    PostCommentRequest, ToggleMilestoneRequest,
};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> Client {
    Client::new(common::test_config(&server.uri())).expect("Failed to build client")
}

async fn mount_ok(
    server: &MockServer,
    endpoint: &str,
    body: serde_json::Value,
    payload: serde_json::Value,
) {
    Mock::given(method("POST"))
        .and(path(format!("/{}", endpoint)))
        .and(header("current-space-id", common::TEST_SPACE_ID))
        .and(body_json(body))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"type": "ok", "payload": payload})),
        )
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_get_projects() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/getProjects"))
        .and(body_json(json!({})))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(common::load_response_fixture("projects_success")),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let response = client_for(&mock_server)
        .projects()
        .get_projects()
        .await
        .expect("Request failed");

    assert_eq!(response.projects.len(), 1);
    let project = &response.projects[0];
    assert_eq!(project.name, "Product");
    assert_eq!(project.slug.as_deref(), Some("PRJ"));
    assert!(project.created_at.is_some());
}

#[tokio::test]
async fn test_get_project() {
    let mock_server = MockServer::start().await;
    mount_ok(
        &mock_server,
        "getProject",
        json!({"projectId": "p1"}),
        json!({"project": {"_id": "p1", "name": "Product", "team": []}}),
    )
    .await;

    let response = client_for(&mock_server)
        .projects()
        .get_project("p1")
        .await
        .expect("Request failed");

    assert_eq!(response.project.id, "p1");
}

#[tokio::test]
async fn test_get_boards() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/getBoards"))
        .and(body_json(json!({})))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(common::load_response_fixture("boards_success")),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let response = client_for(&mock_server)
        .boards()
        .get_boards()
        .await
        .expect("Request failed");

    let board = &response.boards[0];
    assert_eq!(board.groups.len(), 3);
    assert_eq!(
        board.group_named("Done").map(|g| g.id.as_str()),
        Some("6850a1f2c3d4e5f6000000g3")
    );
    assert_eq!(board.custom_fields[0].r#type, "Number");
}

#[tokio::test]
async fn test_get_boards_empty_is_not_an_error() {
    let mock_server = MockServer::start().await;
    mount_ok(&mock_server, "getBoards", json!({}), json!({"boards": []})).await;

    let response = client_for(&mock_server)
        .boards()
        .get_boards()
        .await
        .expect("Empty list should decode");

    assert!(response.boards.is_empty());
}

#[tokio::test]
async fn test_get_boards_wrong_payload_shape() {
    let mock_server = MockServer::start().await;
    mount_ok(&mock_server, "getBoards", json!({}), json!({"boards": {"_id": "b1"}})).await;

    let err = client_for(&mock_server)
        .boards()
        .get_boards()
        .await
        .unwrap_err();

    assert!(err.is_schema());
}

#[tokio::test]
async fn test_get_board() {
    let mock_server = MockServer::start().await;
    mount_ok(
        &mock_server,
        "getBoard",
        json!({"boardId": "b1"}),
        json!({"board": {
            "_id": "b1",
            "name": "Product",
            "groups": [{"_id": "g1", "name": "Backlog"}]
        }}),
    )
    .await;

    let response = client_for(&mock_server)
        .boards()
        .get_board("b1")
        .await
        .expect("Request failed");

    assert_eq!(response.board.groups[0].name, "Backlog");
}

#[tokio::test]
async fn test_get_milestones() {
    let mock_server = MockServer::start().await;
    mount_ok(
        &mock_server,
        "getMilestones",
        json!({}),
        json!({"milestones": [{"_id": "ms1", "name": "Beta", "total": 10, "completed": 5}]}),
    )
    .await;

    let response = client_for(&mock_server)
        .milestones()
        .get_milestones()
        .await
        .expect("Request failed");

    assert_eq!(response.milestones[0].progress(), 0.5);
}

#[tokio::test]
async fn test_get_space_members() {
    let mock_server = MockServer::start().await;
    mount_ok(
        &mock_server,
        "getSpaceMembers",
        json!({}),
        json!({"members": [
            {"_id": "m1", "fullName": "Ana Example", "email": "ana@example.com", "status": "Active"},
            {"_id": "m2", "nickName": "bo"}
        ]}),
    )
    .await;

    let response = client_for(&mock_server)
        .members()
        .get_space_members()
        .await
        .expect("Request failed");

    let names: Vec<_> = response
        .members
        .iter()
        .filter_map(|m| m.display_name())
        .collect();
    assert_eq!(names, vec!["Ana Example", "bo"]);
}

#[tokio::test]
async fn test_get_profile() {
    let mock_server = MockServer::start().await;
    mount_ok(
        &mock_server,
        "getProfile",
        json!({}),
        json!({"profile": {"_id": "u1", "email": "ana@example.com", "memberId": "m1"}}),
    )
    .await;

    let response = client_for(&mock_server)
        .profile()
        .get_profile()
        .await
        .expect("Request failed");

    assert_eq!(response.profile.email.as_deref(), Some("ana@example.com"));
}

#[tokio::test]
async fn test_get_space() {
    let mock_server = MockServer::start().await;
    mount_ok(
        &mock_server,
        "getSpace",
        json!({"spaceId": common::TEST_SPACE_ID}),
        json!({"space": {"_id": common::TEST_SPACE_ID, "name": "Acme", "plan": "Team"}}),
    )
    .await;

    let response = client_for(&mock_server)
        .spaces()
        .get_current_space()
        .await
        .expect("Request failed");

    assert_eq!(response.space.name, "Acme");
}

#[tokio::test]
async fn test_raw_request_passthrough() {
    let mock_server = MockServer::start().await;
    mount_ok(
        &mock_server,
        "getHistory",
        json!({"kind": "Task", "kindId": "t1"}),
        json!({"histories": []}),
    )
    .await;

    let payload: serde_json::Value = client_for(&mock_server)
        .request("getHistory", &json!({"kind": "Task", "kindId": "t1"}))
        .await
        .expect("Request failed");

    assert_eq!(payload, json!({"histories": []}));
}

fn milestone_json(name: &str) -> serde_json::Value {
    json!({
        "_id": "ms1",
        "name": name,
        "description": "",
        "board": "b1",
        "project": "p1",
        "document": "d9",
        "total": 0,
        "completed": 0,
        "followers": {"m1": "creator"},
        "creator": "m1",
        "createdAt": "2025-03-01T09:00:00.000Z",
        "updatedAt": "2025-03-01T09:00:00.000Z"
    })
}

fn comment_json(content: &str) -> serde_json::Value {
    json!({
        "_id": "c1",
        "documentId": "d1",
        "authorId": "m1",
        "content": content,
        "files": [],
        "reactions": [],
        "createdAt": "2025-05-01T10:00:00.000Z",
        "updatedAt": "2025-05-01T10:00:00.000Z"
    })
}

#[tokio::test]
async fn test_create_milestone() {
    let mock_server = MockServer::start().await;
    mount_ok(
        &mock_server,
        "createMilestone",
        json!({
            "name": "Q1",
            "board": "b1",
            "project": "p1",
            "dueStart": "2025-03-01T09:00:00Z",
            "color": "#4CAF50"
        }),
        json!({"milestone": milestone_json("Q1")}),
    )
    .await;

    let request = CreateMilestoneRequest::builder()
        .name("Q1")
        .board("b1")
        .project("p1")
        .due_start(Utc.with_ymd_and_hms(2025, 3, 1, 9, 0, 0).unwrap())
        .color("#4CAF50")
        .build()
        .unwrap();

    let response = client_for(&mock_server)
        .milestones()
        .create_milestone(&request)
        .await
        .expect("Request failed");

    assert_eq!(response.milestone.name, "Q1");
    assert_eq!(response.milestone.total, 0);
    assert!(response.milestone.due_end.is_none());
}

#[tokio::test]
async fn test_get_milestone() {
    let mock_server = MockServer::start().await;
    mount_ok(
        &mock_server,
        "getMilestone",
        json!({"milestoneId": "ms1"}),
        json!({"milestone": milestone_json("Beta")}),
    )
    .await;

    let response = client_for(&mock_server)
        .milestones()
        .get_milestone("ms1")
        .await
        .expect("Request failed");

    assert_eq!(response.milestone.id, "ms1");
    assert_eq!(response.milestone.document.as_deref(), Some("d9"));
}

#[tokio::test]
async fn test_edit_milestone() {
    let mock_server = MockServer::start().await;
    let mut edited = milestone_json("Renamed");
    edited["dueEnd"] = json!("2025-12-31T23:59:59.000Z");
    edited["editor"] = json!("m2");
    mount_ok(
        &mock_server,
        "editMilestone",
        json!({
            "milestoneId": "ms1",
            "name": "Renamed",
            "dueEnd": "2025-12-31T23:59:59Z"
        }),
        json!({"milestone": edited}),
    )
    .await;

    let request = EditMilestoneRequest::builder()
        .milestone_id("ms1")
        .name("Renamed")
        .due_end(Utc.with_ymd_and_hms(2025, 12, 31, 23, 59, 59).unwrap())
        .build()
        .unwrap();

    let response = client_for(&mock_server)
        .milestones()
        .edit_milestone(&request)
        .await
        .expect("Request failed");

    assert_eq!(response.milestone.editor.as_deref(), Some("m2"));
    assert_eq!(
        response.milestone.due_end,
        Some(Utc.with_ymd_and_hms(2025, 12, 31, 23, 59, 59).unwrap())
    );
}

#[tokio::test]
async fn test_toggle_milestone() {
    let mock_server = MockServer::start().await;
    mount_ok(
        &mock_server,
        "toggleMilestone",
        json!({"taskId": "t1", "milestoneIds": ["ms1"]}),
        json!({"task": {
            "_id": "t1",
            "name": "Ship",
            "milestones": ["ms1"],
            "milestone": "ms1",
            "priority": 2,
            "updatedAt": "2025-03-02T00:00:00.000Z"
        }}),
    )
    .await;

    let response = client_for(&mock_server)
        .milestones()
        .toggle_milestone(&ToggleMilestoneRequest::new("t1", ["ms1"]))
        .await
        .expect("Request failed");

    assert_eq!(response.task.milestones, vec!["ms1"]);
    assert_eq!(response.task.milestone.as_deref(), Some("ms1"));
}

#[tokio::test]
async fn test_post_comment() {
    let mock_server = MockServer::start().await;
    mount_ok(
        &mock_server,
        "postComment",
        json!({
            "content": "<p>Reply</p>",
            "fileIds": ["f1"],
            "documentId": "d1",
            "replyTo": "c0"
        }),
        json!({"comment": comment_json("<p>Reply</p>")}),
    )
    .await;

    let request = PostCommentRequest::builder()
        .document_id("d1")
        .content("<p>Reply</p>")
        .file_ids(vec!["f1".to_string()])
        .reply_to("c0")
        .build()
        .unwrap();

    let response = client_for(&mock_server)
        .comments()
        .post_comment(&request)
        .await
        .expect("Request failed");

    assert_eq!(response.comment.id, "c1");
    assert_eq!(response.comment.author_id.as_deref(), Some("m1"));
}

#[tokio::test]
async fn test_edit_comment() {
    let mock_server = MockServer::start().await;
    let mut edited = comment_json("<p>Edited</p>");
    edited["editedAt"] = json!("2025-05-01T11:00:00.000Z");
    mount_ok(
        &mock_server,
        "editComment",
        json!({
            "content": "<p>Edited</p>",
            "commentId": "c1",
            "addFileIds": [],
            "orderFileIds": ["f1"],
            "removeFileIds": []
        }),
        json!({"comment": edited}),
    )
    .await;

    let request = EditCommentRequest::builder()
        .comment_id("c1")
        .content("<p>Edited</p>")
        .order_file_ids(vec!["f1".to_string()])
        .build()
        .unwrap();

    let response = client_for(&mock_server)
        .comments()
        .edit_comment(&request)
        .await
        .expect("Request failed");

    assert_eq!(response.comment.content, "<p>Edited</p>");
    assert!(response.comment.edited_at.is_some());
}

#[tokio::test]
async fn test_delete_comment() {
    let mock_server = MockServer::start().await;
    let mut deleted = comment_json("<p>gone</p>");
    deleted["deletedAt"] = json!("2025-05-02T00:00:00.000Z");
    mount_ok(
        &mock_server,
        "deleteComment",
        json!({"commentId": "c1"}),
        json!({"comment": deleted}),
    )
    .await;

    let response = client_for(&mock_server)
        .comments()
        .delete_comment("c1")
        .await
        .expect("Request failed");

    assert!(response.comment.is_deleted());
}

#[tokio::test]
async fn test_get_comments() {
    let mock_server = MockServer::start().await;
    mount_ok(
        &mock_server,
        "getComments",
        json!({"documentId": "d1"}),
        json!({"comments": [comment_json("<p>one</p>"), comment_json("<p>two</p>")]}),
    )
    .await;

    let response = client_for(&mock_server)
        .comments()
        .get_comments("d1")
        .await
        .expect("Request failed");

    assert_eq!(response.comments.len(), 2);
    assert_eq!(response.comments[1].content, "<p>two</p>");
}

#[tokio::test]
async fn test_add_reaction() {
    let mock_server = MockServer::start().await;
    let expected = serde_json::to_value(CommentReactionType::ThumbsUp.request_for("c1")).unwrap();
    mount_ok(
        &mock_server,
        "reactToComment",
        expected,
        json!({"reactions": [
            {"_id": "r1", "id": "1f44d", "native": "\u{1f44d}", "memberIds": ["m1", "m2"]}
        ]}),
    )
    .await;

    let response = client_for(&mock_server)
        .comments()
        .add_reaction("c1", CommentReactionType::ThumbsUp)
        .await
        .expect("Request failed");

    assert_eq!(response.reactions[0].emoji_id, "1f44d");
    assert_eq!(response.reactions[0].member_ids.len(), 2);
}

#[tokio::test]
async fn test_get_history() {
    let mock_server = MockServer::start().await;
    mount_ok(
        &mock_server,
        "getHistory",
        json!({
            "kind": "Task",
            "kindId": "t1",
            "excludeKeys": ["TASK_COMMENTED", "MILESTONE_COMMENTED", "DOCUMENT_COMMENTED"],
            "lastLoadedDate": 0
        }),
        json!({"histories": [{
            "_id": "h1",
            "key": "TASK_CREATED",
            "kind": "Task",
            "kindId": "t1",
            "creatorId": "m1",
            "data": {"name": "Ship"},
            "createdAt": "2025-06-16T21:37:22.125Z"
        }]}),
    )
    .await;

    let request = GetHistoryRequest::builder()
        .kind(Kind::Task)
        .kind_id("t1")
        .exclude_keys(vec![
            "TASK_COMMENTED".to_string(),
            "MILESTONE_COMMENTED".to_string(),
            "DOCUMENT_COMMENTED".to_string(),
        ])
        .build()
        .unwrap();

    let response = client_for(&mock_server)
        .tasks()
        .get_history(&request)
        .await
        .expect("Request failed");

    assert_eq!(response.histories.len(), 1);
    assert_eq!(response.histories[0].key, "TASK_CREATED");
    assert_eq!(response.histories[0].data["name"], "Ship");
}

#[tokio::test]
async fn test_create_board_type() {
    let mock_server = MockServer::start().await;
    mount_ok(
        &mock_server,
        "createBoardType",
        json!({"boardId": "b1", "label": "Spike", "icon": "Cursor", "color": "silver"}),
        json!({"boardType": {"_id": "bt1", "label": "Spike", "icon": "Cursor", "color": "silver"}}),
    )
    .await;

    let request = CreateBoardTypeRequest::builder()
        .board_id("b1")
        .label("Spike")
        .icon("Cursor")
        .color("silver")
        .build()
        .unwrap();

    let response = client_for(&mock_server)
        .boards()
        .create_board_type(&request)
        .await
        .expect("Request failed");

    assert_eq!(response.board_type.id, "bt1");
    assert!(!response.board_type.hidden);
}

#[tokio::test]
async fn test_edit_board_type() {
    let mock_server = MockServer::start().await;
    mount_ok(
        &mock_server,
        "editBoardType",
        json!({"boardTypeId": "bt1", "boardId": "b1", "color": "green", "hidden": true}),
        json!({"boardType": {
            "_id": "bt1", "label": "Spike", "icon": "Cursor", "color": "green", "hidden": true
        }}),
    )
    .await;

    let request = EditBoardTypeRequest::builder()
        .board_type_id("bt1")
        .board_id("b1")
        .color("green")
        .hidden(true)
        .build()
        .unwrap();

    let response = client_for(&mock_server)
        .boards()
        .edit_board_type(&request)
        .await
        .expect("Request failed");

    assert_eq!(response.board_type.color.as_deref(), Some("green"));
    assert!(response.board_type.hidden);
}

#[tokio::test]
async fn test_create_board_group() {
    let mock_server = MockServer::start().await;
    mount_ok(
        &mock_server,
        "createBoardGroup",
        json!({"boardId": "b1", "name": "QA", "description": "Testing"}),
        json!({"boardGroups": [
            {"_id": "g1", "name": "Backlog"},
            {"_id": "g2", "name": "QA", "description": "Testing"}
        ]}),
    )
    .await;

    let request = CreateBoardGroupRequest::builder()
        .board_id("b1")
        .name("QA")
        .description("Testing")
        .build()
        .unwrap();

    let response = client_for(&mock_server)
        .boards()
        .create_board_group(&request)
        .await
        .expect("Request failed");

    let created = response
        .board_groups
        .iter()
        .find(|group| group.name == "QA")
        .expect("new group listed");
    assert_eq!(created.id, "g2");
}

#[tokio::test]
async fn test_edit_board_group() {
    let mock_server = MockServer::start().await;
    mount_ok(
        &mock_server,
        "editBoardGroup",
        json!({
            "boardGroupId": "g2",
            "boardId": "b1",
            "name": "Review",
            "limit": 20,
            "hidden": false
        }),
        json!({"boardGroups": [{"_id": "g2", "name": "Review", "limit": 20, "hidden": false}]}),
    )
    .await;

    let request = EditBoardGroupRequest::builder()
        .board_group_id("g2")
        .board_id("b1")
        .name("Review")
        .limit(20u32)
        .hidden(false)
        .build()
        .unwrap();

    let response = client_for(&mock_server)
        .boards()
        .edit_board_group(&request)
        .await
        .expect("Request failed");

    assert_eq!(response.board_groups[0].limit, Some(20));
}

#[tokio::test]
async fn test_create_board_custom_field() {
    let mock_server = MockServer::start().await;
    mount_ok(
        &mock_server,
        "createBoardCustomField",
        json!({
            "boardId": "b1",
            "name": "Deadline",
            "type": "Date",
            "description": "Date field for tracking deadlines",
            "hidden": false
        }),
        json!({"customField": {"_id": "f9", "name": "Deadline", "type": "Date", "hidden": false}}),
    )
    .await;

    let request = CreateBoardCustomFieldRequest::builder()
        .board_id("b1")
        .name("Deadline")
        .field_type(CustomFieldType::Date)
        .description("Date field for tracking deadlines")
        .hidden(false)
        .build()
        .unwrap();

    let response = client_for(&mock_server)
        .boards()
        .create_board_custom_field(&request)
        .await
        .expect("Request failed");

    assert_eq!(response.custom_field.id, "f9");
    assert_eq!(response.custom_field.r#type, "Date");
}

#[tokio::test]
async fn test_edit_board_custom_field() {
    let mock_server = MockServer::start().await;
    mount_ok(
        &mock_server,
        "editBoardCustomField",
        json!({
            "fieldId": "f9",
            "boardId": "b1",
            "description": "Updated field description",
            "hidden": true
        }),
        json!({"customField": {
            "_id": "f9",
            "name": "Deadline",
            "type": "Date",
            "description": "Updated field description",
            "hidden": true
        }}),
    )
    .await;

    let request = EditBoardCustomFieldRequest::builder()
        .field_id("f9")
        .board_id("b1")
        .description("Updated field description")
        .hidden(true)
        .build()
        .unwrap();

    let response = client_for(&mock_server)
        .boards()
        .edit_board_custom_field(&request)
        .await
        .expect("Request failed");

    assert!(response.custom_field.hidden);
}

#[tokio::test]
async fn test_get_documents() {
    let mock_server = MockServer::start().await;
    mount_ok(
        &mock_server,
        "getDocuments",
        json!({"kind": "Project", "kindId": "p1"}),
        json!({"documents": [{
            "_id": "d1",
            "title": "Spec",
            "kind": "Project",
            "kindId": "p1",
            "size": 512,
            "creator": "m1",
            "followers": {"m1": "creator"},
            "createdAt": "2025-04-01T08:30:00.000Z"
        }]}),
    )
    .await;

    let response = client_for(&mock_server)
        .documents()
        .get_documents(&GetDocumentsRequest::new(Kind::Project, "p1"))
        .await
        .expect("Request failed");

    assert_eq!(response.documents.len(), 1);
    assert_eq!(response.documents[0].title, "Spec");
    assert_eq!(response.documents[0].size, 512);
}

#[tokio::test]
async fn test_create_document() {
    let mock_server = MockServer::start().await;
    mount_ok(
        &mock_server,
        "createDocument",
        json!({"kind": "Space", "kindId": common::TEST_SPACE_ID, "title": "Notes", "index": 0}),
        json!({"document": {"_id": "d2", "title": "Notes", "kind": "Space", "size": 0}}),
    )
    .await;

    let request = CreateDocumentRequest::builder()
        .kind(Kind::Space)
        .kind_id(common::TEST_SPACE_ID)
        .title("Notes")
        .build()
        .unwrap();

    let response = client_for(&mock_server)
        .documents()
        .create_document(&request)
        .await
        .expect("Request failed");

    assert_eq!(response.document.id, "d2");
    assert_eq!(response.document.kind, Some(Kind::Space));
}

#[tokio::test]
async fn test_edit_document() {
    let mock_server = MockServer::start().await;
    mount_ok(
        &mock_server,
        "editDocument",
        json!({"documentId": "d2", "title": "Renamed"}),
        json!({"document": {"_id": "d2", "title": "Renamed"}}),
    )
    .await;

    let request = EditDocumentRequest {
        document_id: "d2".into(),
        title: "Renamed".into(),
    };

    let response = client_for(&mock_server)
        .documents()
        .edit_document(&request)
        .await
        .expect("Request failed");

    assert_eq!(response.document.title, "Renamed");
}

#[tokio::test]
async fn test_replace_document() {
    let mock_server = MockServer::start().await;
    mount_ok(
        &mock_server,
        "replaceDocument",
        json!({"documentId": "d1", "description": "Plain replacement"}),
        json!({}),
    )
    .await;

    client_for(&mock_server)
        .documents()
        .replace_document("d1", "Plain replacement")
        .await
        .expect("Request failed");
}

#[tokio::test]
async fn test_get_document_body() {
    let mock_server = MockServer::start().await;
    let body = json!({"default": {"type": "doc", "content": [
        {"type": "paragraph", "content": [{"type": "text", "text": "Hello"}]}
    ]}});
    mount_ok(
        &mock_server,
        "getJSONDocument",
        json!({"documentId": "d1"}),
        json!({"json": body.to_string()}),
    )
    .await;

    let parsed = client_for(&mock_server)
        .documents()
        .get_document_body("d1")
        .await
        .expect("Request failed");

    assert_eq!(parsed, body);
    assert_eq!(parsed["default"]["content"][0]["content"][0]["text"], "Hello");
}
