//! Comment thread state machine through the public facade
//!
//! Scenario-level coverage: the assignee-only first comment, the open-state
//! gate, author-only mutation, soft-delete visibility, live reply counts,
//! and the concurrent root-create race.

use crate::common::fixtures::WorkspaceFixture;
use taskforge_rs::{CoreError, NewComment};

#[tokio::test]
async fn test_scenario_a_first_comment_gate() {
    let fixture = WorkspaceFixture::new().await;

    // U2 (plain member, same category) on an Empty thread: rejected.
    let err = fixture
        .core
        .create_comment(fixture.member.id(), fixture.task.id(), NewComment::root("hi"))
        .await
        .unwrap_err();
    assert!(matches!(err, CoreError::PermissionDenied(_)));

    // U1 (assignee): succeeds, thread now Open.
    fixture
        .core
        .create_comment(fixture.assignee.id(), fixture.task.id(), NewComment::root("hi"))
        .await
        .unwrap();

    let roots = fixture
        .core
        .list_root_comments(fixture.task.id())
        .await
        .unwrap();
    assert_eq!(roots.len(), 1);
    assert_eq!(roots[0].comment.author_id, fixture.assignee.id());
}

#[tokio::test]
async fn test_scenario_b_reply_gate() {
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

    // U3 (category Lead) replies successfully.
    fixture
        .core
        .create_comment(
            fixture.lead.id(),
            fixture.task.id(),
            NewComment::reply(root.id(), "reply"),
        )
        .await
        .unwrap();

    // U2 (plain member) is rejected on the same call.
    let err = fixture
        .core
        .create_comment(
            fixture.member.id(),
            fixture.task.id(),
            NewComment::reply(root.id(), "reply"),
        )
        .await
        .unwrap_err();
    assert!(matches!(err, CoreError::PermissionDenied(_)));
}

#[tokio::test]
async fn test_scenario_c_author_only_edit() {
    let fixture = WorkspaceFixture::new().await;
    let root = fixture
        .core
        .create_comment(
            fixture.assignee.id(),
            fixture.task.id(),
            NewComment::root("draft"),
        )
        .await
        .unwrap();

    // U1 edits their own comment.
    let edited = fixture
        .core
        .edit_comment(fixture.assignee.id(), root.id(), "draft, edited")
        .await
        .unwrap();
    assert!(edited.is_edited);

    // U3 (Lead) can reply but cannot edit U1's comment.
    let err = fixture
        .core
        .edit_comment(fixture.lead.id(), root.id(), "hijack")
        .await
        .unwrap_err();
    assert!(matches!(err, CoreError::PermissionDenied(_)));

    // The admin cannot either: no escalation through edit.
    let err = fixture
        .core
        .edit_comment(fixture.admin.id(), root.id(), "hijack")
        .await
        .unwrap_err();
    assert!(matches!(err, CoreError::PermissionDenied(_)));
}

#[tokio::test]
async fn test_scenario_d_concurrent_root_creates_are_serialized() {
    let fixture = WorkspaceFixture::new().await;

    // Two concurrent assignee root-creates against an Empty thread: the
    // store serializes them; both land, exactly one opened the thread.
    let core_a = fixture.core.clone();
    let core_b = fixture.core.clone();
    let (user, task) = (fixture.assignee.id(), fixture.task.id());

    let a = tokio::spawn(async move {
        core_a.create_comment(user, task, NewComment::root("first?")).await
    });
    let b = tokio::spawn(async move {
        core_b.create_comment(user, task, NewComment::root("first?")).await
    });

    a.await.unwrap().unwrap();
    b.await.unwrap().unwrap();

    let roots = fixture
        .core
        .list_root_comments(fixture.task.id())
        .await
        .unwrap();
    assert_eq!(roots.len(), 2);
    assert!(roots
        .iter()
        .all(|view| view.comment.author_id == fixture.assignee.id()));
}

#[tokio::test]
async fn test_concurrent_non_assignee_never_opens_a_thread() {
    let fixture = WorkspaceFixture::new().await;

    // A Lead racing the assignee for the first root: whichever way the
    // store serializes the pair, a Lead comment can only land in an Open
    // thread, so the Empty->Open transition stays assignee-only.
    let core_a = fixture.core.clone();
    let core_l = fixture.core.clone();
    let task = fixture.task.id();
    let (assignee, lead) = (fixture.assignee.id(), fixture.lead.id());

    let a = tokio::spawn(
        async move { core_a.create_comment(assignee, task, NewComment::root("go")).await },
    );
    let l = tokio::spawn(
        async move { core_l.create_comment(lead, task, NewComment::root("go")).await },
    );

    a.await.unwrap().unwrap();
    let lead_result = l.await.unwrap();

    let roots = fixture.core.list_root_comments(task).await.unwrap();
    match lead_result {
        Ok(comment) => {
            // Lead serialized after the assignee's open.
            assert_eq!(roots.len(), 2);
            assert!(roots.iter().any(|v| v.comment.id() == comment.id()));
        }
        Err(err) => {
            // Lead serialized first, against an Empty thread.
            assert!(matches!(err, CoreError::PermissionDenied(_)));
            assert_eq!(roots.len(), 1);
        }
    }
    assert!(roots
        .iter()
        .any(|v| v.comment.author_id == fixture.assignee.id()));
}

#[tokio::test]
async fn test_soft_delete_visibility_and_parent_resolution() {
    let fixture = WorkspaceFixture::new().await;
    let root = fixture
        .core
        .create_comment(
            fixture.assignee.id(),
            fixture.task.id(),
            NewComment::root("root"),
        )
        .await
        .unwrap();
    let reply = fixture
        .core
        .create_comment(
            fixture.lead.id(),
            fixture.task.id(),
            NewComment::reply(root.id(), "kept"),
        )
        .await
        .unwrap();

    fixture
        .core
        .delete_comment(fixture.assignee.id(), root.id())
        .await
        .unwrap();

    // Excluded from listings and counts, but the id still resolves as a
    // parent: the reply stays visible with a dangling reference.
    assert!(fixture
        .core
        .list_root_comments(fixture.task.id())
        .await
        .unwrap()
        .is_empty());
    let replies = fixture.core.list_replies(root.id()).await.unwrap();
    assert_eq!(replies.len(), 1);
    assert_eq!(replies[0].id(), reply.id());

    // And the thread is Empty again: assignee-only gate re-arms.
    let err = fixture
        .core
        .create_comment(fixture.lead.id(), fixture.task.id(), NewComment::root("root"))
        .await
        .unwrap_err();
    assert!(matches!(err, CoreError::PermissionDenied(_)));
}

#[tokio::test]
async fn test_reply_counts_stay_live() {
    let fixture = WorkspaceFixture::new().await;
    let root = fixture
        .core
        .create_comment(
            fixture.assignee.id(),
            fixture.task.id(),
            NewComment::root("root"),
        )
        .await
        .unwrap();

    let mut reply_ids = Vec::new();
    for body in ["r1", "r2", "r3"] {
        let reply = fixture
            .core
            .create_comment(
                fixture.lead.id(),
                fixture.task.id(),
                NewComment::reply(root.id(), body),
            )
            .await
            .unwrap();
        reply_ids.push(reply.id());
    }

    let roots = fixture
        .core
        .list_root_comments(fixture.task.id())
        .await
        .unwrap();
    assert_eq!(roots[0].reply_count, 3);

    fixture
        .core
        .delete_comment(fixture.lead.id(), reply_ids[1])
        .await
        .unwrap();

    let roots = fixture
        .core
        .list_root_comments(fixture.task.id())
        .await
        .unwrap();
    assert_eq!(roots[0].reply_count, 2);
    assert!(roots[0].has_replies);

    let replies = fixture.core.list_replies(root.id()).await.unwrap();
    assert_eq!(replies.len(), 2);
    assert_eq!(replies[0].id(), reply_ids[0]);
    assert_eq!(replies[1].id(), reply_ids[2]);
}

#[tokio::test]
async fn test_threads_are_independent_per_task() {
    let fixture = WorkspaceFixture::new().await;
    let second = fixture.second_task();

    fixture
        .core
        .create_comment(
            fixture.assignee.id(),
            fixture.task.id(),
            NewComment::root("opening the first"),
        )
        .await
        .unwrap();

    // The second task's thread is still Empty: the Lead is rejected there.
    let err = fixture
        .core
        .create_comment(fixture.lead.id(), second.id(), NewComment::root("hello"))
        .await
        .unwrap_err();
    assert!(matches!(err, CoreError::PermissionDenied(_)));
}
