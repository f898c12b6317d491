//! Attachment lifecycle through the public facade
//!
//! Files are stored before the comment is created (upload happens outside
//! the core); deleting the comment removes them best-effort.

use crate::common::fixtures::WorkspaceFixture;
use taskforge_rs::core::models::Attachment;
use taskforge_rs::storage::AttachmentStore;
use taskforge_rs::NewComment;

#[tokio::test]
async fn test_delete_comment_removes_stored_files() {
    let fixture = WorkspaceFixture::new().await;
    let attachments = fixture.attachments();

    let stored = attachments
        .store("spec.pdf", b"%PDF-1.7 payload")
        .await
        .unwrap();
    let descriptor = Attachment {
        file_id: stored.id.clone(),
        filename: stored.filename.clone(),
        content_type: stored.content_type.clone(),
        size: stored.size,
    };

    let comment = fixture
        .core
        .create_comment(
            fixture.assignee.id(),
            fixture.task.id(),
            NewComment::root("see attached").with_attachments(vec![descriptor]),
        )
        .await
        .unwrap();
    assert!(attachments.exists(&stored.id).await.unwrap());

    fixture
        .core
        .delete_comment(fixture.assignee.id(), comment.id())
        .await
        .unwrap();
    assert!(!attachments.exists(&stored.id).await.unwrap());
}

#[tokio::test]
async fn test_attachments_survive_edits() {
    let fixture = WorkspaceFixture::new().await;
    let attachments = fixture.attachments();

    let stored = attachments.store("notes.txt", b"hello").await.unwrap();
    let descriptor = Attachment {
        file_id: stored.id.clone(),
        filename: stored.filename.clone(),
        content_type: stored.content_type.clone(),
        size: stored.size,
    };

    let comment = fixture
        .core
        .create_comment(
            fixture.assignee.id(),
            fixture.task.id(),
            NewComment::root("v1").with_attachments(vec![descriptor]),
        )
        .await
        .unwrap();

    let edited = fixture
        .core
        .edit_comment(fixture.assignee.id(), comment.id(), "v2")
        .await
        .unwrap();

    assert_eq!(edited.attachments.len(), 1);
    assert!(attachments.exists(&stored.id).await.unwrap());
}
