use std::sync::Arc;

use comment_section::{
    models::{Comment, EditContent, Reply},
    repo::{inmem::InMemRepo, CommentRepo, RepoError},
    seed,
};

/// Fresh store holding the sample section.
fn repo() -> InMemRepo {
    InMemRepo::new()
}

fn comment(id: &str) -> Comment {
    Comment {
        id: id.into(),
        content: format!("comment {id}"),
        created_at: "just now".into(),
        score: 0,
        user: seed::juliusomo(),
        replies: Vec::new(),
    }
}

fn reply(id: &str) -> Reply {
    Reply {
        id: id.into(),
        content: format!("reply {id}"),
        created_at: "just now".into(),
        score: 0,
        replying_to: Some("amyrobson".into()),
        user: seed::juliusomo(),
    }
}

#[tokio::test]
async fn seeded_section() {
    let r = repo();
    let comments = r.list_comments().await.unwrap();
    let ids: Vec<_> = comments.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, ["1", "2"]);
    assert_eq!(comments[0].score, 12);
    assert!(comments[0].replies.is_empty());
    assert_eq!(comments[1].replies.len(), 2);

    assert_eq!(r.current_user().await.unwrap().username, "juliusomo");
    let section = r.comment_section().await.unwrap();
    assert_eq!(section.current_user, seed::juliusomo());
    assert_eq!(section.comments, comments);
}

#[tokio::test]
async fn lookups_distinguish_missing_comment_and_reply() {
    let r = repo();
    assert_eq!(r.get_comment("2").await.unwrap().score, 5);
    assert_eq!(r.get_reply("2", "4").await.unwrap().score, 2);

    assert_eq!(r.get_comment("99").await.unwrap_err(), RepoError::CommentNotFound("99".into()));
    assert_eq!(r.get_reply("99", "3").await.unwrap_err(), RepoError::CommentNotFound("99".into()));
    assert_eq!(
        r.get_reply("1", "3").await.unwrap_err(),
        RepoError::ReplyNotFound { comment_id: "1".into(), reply_id: "3".into() }
    );
}

#[tokio::test]
async fn unknown_comment_is_not_found_everywhere() {
    let r = repo();
    let missing = || RepoError::CommentNotFound("nope".into());
    assert_eq!(r.create_reply("nope", reply("9")).await.unwrap_err(), missing());
    assert_eq!(r.edit_comment("nope", EditContent { content: Some("x".into()) }).await.unwrap_err(), missing());
    assert_eq!(r.edit_reply("nope", "3", EditContent { content: Some("x".into()) }).await.unwrap_err(), missing());
    assert_eq!(r.increment_score("nope").await.unwrap_err(), missing());
    assert_eq!(r.decrement_score("nope").await.unwrap_err(), missing());
    assert_eq!(r.increment_reply_score("nope", "3").await.unwrap_err(), missing());
    assert_eq!(r.decrement_reply_score("nope", "3").await.unwrap_err(), missing());
    assert_eq!(r.delete_comment("nope").await.unwrap_err(), missing());
    assert_eq!(r.delete_reply("nope", "3").await.unwrap_err(), missing());

    // nothing changed
    assert_eq!(r.list_comments().await.unwrap(), seed::sample_comments());
}

#[tokio::test]
async fn create_comment_appends_and_is_retrievable() {
    let r = repo();
    let created = r.create_comment(comment("5")).await.unwrap();
    assert_eq!(created.id, "5");

    let comments = r.list_comments().await.unwrap();
    assert_eq!(comments.len(), 3);
    assert_eq!(comments.last().unwrap().id, "5");
    assert_eq!(r.get_comment("5").await.unwrap(), created);
}

#[tokio::test]
async fn create_reply_appends_to_parent_only() {
    let r = repo();
    let parent = r.create_reply("2", reply("5")).await.unwrap();
    let ids: Vec<_> = parent.replies.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, ["3", "4", "5"]);
    assert!(r.get_comment("1").await.unwrap().replies.is_empty());
    assert_eq!(r.get_reply("2", "5").await.unwrap().content, "reply 5");
}

#[tokio::test]
async fn edits_only_touch_content() {
    let r = repo();
    let before = r.get_comment("1").await.unwrap();
    let edited = r.edit_comment("1", EditContent { content: Some("changed".into()) }).await.unwrap();
    assert_eq!(edited.content, "changed");
    assert_eq!(edited.score, before.score);
    assert_eq!(edited.user, before.user);
    assert_eq!(r.get_comment("1").await.unwrap().content, "changed");

    let reply = r.edit_reply("2", "3", EditContent { content: Some("better".into()) }).await.unwrap();
    assert_eq!(reply.content, "better");
    assert_eq!(reply.score, 4);
    assert_eq!(reply.replying_to.as_deref(), Some("maxblagun"));
}

#[tokio::test]
async fn score_floors_at_zero() {
    let r = InMemRepo::with_state(seed::juliusomo(), vec![Comment { replies: vec![reply("r")], ..comment("c") }]);

    assert_eq!(r.decrement_score("c").await.unwrap().score, 0);
    assert_eq!(r.decrement_score("c").await.unwrap().score, 0);
    assert_eq!(r.decrement_reply_score("c", "r").await.unwrap().score, 0);

    assert_eq!(r.increment_score("c").await.unwrap().score, 1);
    assert_eq!(r.increment_reply_score("c", "r").await.unwrap().score, 1);
}

#[tokio::test]
async fn increment_then_decrement_restores_score() {
    let r = repo();
    r.increment_score("1").await.unwrap();
    assert_eq!(r.decrement_score("1").await.unwrap().score, 12);

    r.increment_reply_score("2", "4").await.unwrap();
    assert_eq!(r.decrement_reply_score("2", "4").await.unwrap().score, 2);
}

#[tokio::test]
async fn delete_comment_keeps_order() {
    let r = repo();
    r.create_comment(comment("5")).await.unwrap();
    let remaining = r.delete_comment("2").await.unwrap();
    let ids: Vec<_> = remaining.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, ["1", "5"]);
    assert_eq!(r.get_reply("2", "3").await.unwrap_err(), RepoError::CommentNotFound("2".into()));
}

#[tokio::test]
async fn delete_reply_only_affects_parent() {
    let r = repo();
    r.create_reply("1", reply("3")).await.unwrap();

    let remaining = r.delete_reply("2", "3").await.unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, "4");
    // reply "3" under comment "1" shares the id but is untouched
    assert_eq!(r.get_comment("1").await.unwrap().replies.len(), 1);

    assert_eq!(
        r.delete_reply("2", "3").await.unwrap_err(),
        RepoError::ReplyNotFound { comment_id: "2".into(), reply_id: "3".into() }
    );
}

#[tokio::test]
async fn clones_share_state() {
    let a = repo();
    let b = a.clone();
    a.increment_score("2").await.unwrap();
    assert_eq!(b.get_comment("2").await.unwrap().score, 6);
}

#[tokio::test]
async fn edit_without_content_keeps_text() {
    let r = repo();
    let before = r.get_comment("1").await.unwrap();
    let edited = r.edit_comment("1", EditContent::default()).await.unwrap();
    assert_eq!(edited, before);

    let reply = r.edit_reply("2", "4", EditContent { content: None }).await.unwrap();
    assert!(reply.content.starts_with("I couldn't agree more"));
}

#[tokio::test]
async fn increment_saturates_at_max() {
    let r = InMemRepo::with_state(
        seed::juliusomo(),
        vec![Comment { score: u64::MAX, replies: vec![Reply { score: u64::MAX, ..reply("r") }], ..comment("c") }],
    );
    assert_eq!(r.increment_score("c").await.unwrap().score, u64::MAX);
    assert_eq!(r.increment_reply_score("c", "r").await.unwrap().score, u64::MAX);
    assert_eq!(r.decrement_score("c").await.unwrap().score, u64::MAX - 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_increments_are_not_lost() {
    let r = Arc::new(repo());
    let tasks: Vec<_> = (0..200)
        .map(|_| {
            let r = Arc::clone(&r);
            tokio::spawn(async move { r.increment_score("1").await.unwrap() })
        })
        .collect();
    for t in tasks {
        t.await.unwrap();
    }
    assert_eq!(r.get_comment("1").await.unwrap().score, 12 + 200);
}
