//! Notification fan-out through the public facade
//!
//! Dispatch is detached from the mutation, so these tests poll the store
//! briefly instead of assuming synchronous delivery.

use crate::common::fixtures::WorkspaceFixture;
use std::time::Duration;
use taskforge_rs::core::models::{Notification, NotificationKind, RelatedEntities, Task};
use taskforge_rs::storage::{MemoryStore, NotificationStore};
use taskforge_rs::NewComment;
use uuid::Uuid;

async fn wait_for_notifications(
    store: &MemoryStore,
    recipient: Uuid,
    expected: usize,
) -> Vec<Notification> {
    for _ in 0..100 {
        let list = store.list_for_recipient(recipient).await.unwrap();
        if list.len() >= expected {
            return list;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    panic!(
        "timed out waiting for {} notification(s) for {}",
        expected, recipient
    );
}

#[tokio::test]
async fn test_root_comment_notifies_task_creator() {
    let fixture = WorkspaceFixture::new().await;

    fixture
        .core
        .create_comment(
            fixture.assignee.id(),
            fixture.task.id(),
            NewComment::root("kicking off"),
        )
        .await
        .unwrap();

    let list = wait_for_notifications(&fixture.store, fixture.creator.id(), 1).await;
    assert_eq!(list[0].kind, NotificationKind::CommentAdded);
    assert_eq!(list[0].related.task_id, Some(fixture.task.id()));
    assert!(list[0].related.comment_id.is_some());

    // The author is never notified about their own comment.
    assert!(fixture
        .store
        .list_for_recipient(fixture.assignee.id())
        .await
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn test_reply_notifies_parent_author_and_creator() {
    let fixture = WorkspaceFixture::new().await;
    let root = fixture
        .core
        .create_comment(
            fixture.assignee.id(),
            fixture.task.id(),
            NewComment::root("opening"),
        )
        .await
        .unwrap();

    fixture
        .core
        .create_comment(
            fixture.lead.id(),
            fixture.task.id(),
            NewComment::reply(root.id(), "on it"),
        )
        .await
        .unwrap();

    let assignee_list = wait_for_notifications(&fixture.store, fixture.assignee.id(), 1).await;
    assert_eq!(assignee_list[0].kind, NotificationKind::CommentReply);

    // Creator got the root-comment notification and the reply notification.
    let creator_list = wait_for_notifications(&fixture.store, fixture.creator.id(), 2).await;
    assert_eq!(creator_list.len(), 2);
}

#[tokio::test]
async fn test_recipients_are_deduplicated() {
    let fixture = WorkspaceFixture::new().await;

    // Task whose assignee is also its creator: one mutation, one recipient
    // entry, one notification.
    let task = Task::new(
        fixture.project.id(),
        "backend",
        "self-assigned",
        fixture.assignee.id(),
        fixture.assignee.id(),
    );
    fixture.store.put_task(task.clone());

    fixture
        .core
        .create_comment(fixture.assignee.id(), task.id(), NewComment::root("opening"))
        .await
        .unwrap();
    fixture
        .core
        .create_comment(fixture.lead.id(), task.id(), NewComment::root("noted"))
        .await
        .unwrap();

    wait_for_notifications(&fixture.store, fixture.assignee.id(), 1).await;

    // Give a hypothetical duplicate time to land before asserting.
    tokio::time::sleep(Duration::from_millis(50)).await;
    let list = fixture
        .store
        .list_for_recipient(fixture.assignee.id())
        .await
        .unwrap();
    assert_eq!(list.len(), 1);
}

#[tokio::test]
async fn test_embedder_can_fire_custom_notifications() {
    let fixture = WorkspaceFixture::new().await;

    let notification = fixture
        .core
        .notifications()
        .notify(
            fixture.member.id(),
            NotificationKind::WorkspaceInvite,
            "You were invited",
            "Join the acme workspace",
            RelatedEntities {
                workspace_id: Some(fixture.workspace.id()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert!(!notification.read);
    let list = fixture
        .store
        .list_for_recipient(fixture.member.id())
        .await
        .unwrap();
    assert_eq!(list.len(), 1);

    fixture.store.mark_read(notification.id()).await.unwrap();
    let list = fixture
        .store
        .list_for_recipient(fixture.member.id())
        .await
        .unwrap();
    assert!(list[0].read);
}
