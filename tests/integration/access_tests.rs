//! Capability resolution through the public facade
//!
//! Covers the resolver contract: typed errors that keep "no task" and
//! "no access" distinguishable, and the additive role lattice.

use crate::common::fixtures::WorkspaceFixture;
use taskforge_rs::core::models::User;
use taskforge_rs::CoreError;
use uuid::Uuid;

#[tokio::test]
async fn test_assignee_capabilities() {
    let fixture = WorkspaceFixture::new().await;
    let caps = fixture
        .core
        .resolve_capabilities(fixture.assignee.id(), fixture.task.id())
        .await
        .unwrap();

    assert!(caps.is_assignee);
    assert!(!caps.is_creator);
    assert!(!caps.is_global_admin);
    assert!(!caps.is_category_lead);
    assert!(caps.can_comment());
    assert!(caps.can_open_thread());
}

#[tokio::test]
async fn test_creator_has_flag_but_no_comment_capability() {
    let fixture = WorkspaceFixture::new().await;
    let caps = fixture
        .core
        .resolve_capabilities(fixture.creator.id(), fixture.task.id())
        .await
        .unwrap();

    assert!(caps.is_creator);
    assert!(!caps.can_comment());
}

#[tokio::test]
async fn test_lead_and_admin_capabilities() {
    let fixture = WorkspaceFixture::new().await;

    let lead = fixture
        .core
        .resolve_capabilities(fixture.lead.id(), fixture.task.id())
        .await
        .unwrap();
    assert!(lead.is_category_lead);
    assert!(lead.can_comment());
    assert!(!lead.can_open_thread());

    let admin = fixture
        .core
        .resolve_capabilities(fixture.admin.id(), fixture.task.id())
        .await
        .unwrap();
    assert!(admin.is_global_admin);
    assert!(admin.can_comment());
    assert!(!admin.can_open_thread());
}

#[tokio::test]
async fn test_missing_task_vs_no_access() {
    let fixture = WorkspaceFixture::new().await;

    // Unknown task: NotFound, regardless of who asks.
    let err = fixture
        .core
        .resolve_capabilities(fixture.assignee.id(), Uuid::new_v4())
        .await
        .unwrap_err();
    assert!(matches!(err, CoreError::NotFound(_)));

    // Existing task, user with no standing in the workspace: Forbidden,
    // never a silent zero-capability snapshot.
    let outsider = User::new("outsider", "outsider@example.com");
    fixture.store.put_user(outsider.clone());
    let err = fixture
        .core
        .resolve_capabilities(outsider.id(), fixture.task.id())
        .await
        .unwrap_err();
    assert!(matches!(err, CoreError::Forbidden(_)));
}

#[tokio::test]
async fn test_resolution_is_read_only() {
    let fixture = WorkspaceFixture::new().await;

    fixture
        .core
        .resolve_capabilities(fixture.lead.id(), fixture.task.id())
        .await
        .unwrap();

    // Resolution left no trace: thread still empty, no notifications.
    assert!(fixture
        .core
        .list_root_comments(fixture.task.id())
        .await
        .unwrap()
        .is_empty());
}
