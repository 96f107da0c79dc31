use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;

use crate::models::*;

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum RepoError {
    #[error("comment {0} not found")] CommentNotFound(Id),
    #[error("reply {reply_id} not found under comment {comment_id}")]
    ReplyNotFound { comment_id: Id, reply_id: Id },
    #[error("internal: {0}")] Internal(String),
}

pub type RepoResult<T> = Result<T, RepoError>;

#[async_trait]
pub trait CommentRepo: Send + Sync {
    async fn current_user(&self) -> RepoResult<User>;
    async fn comment_section(&self) -> RepoResult<CommentSection>;
    async fn list_comments(&self) -> RepoResult<Vec<Comment>>;
    async fn get_comment(&self, id: &str) -> RepoResult<Comment>;
    async fn get_reply(&self, comment_id: &str, reply_id: &str) -> RepoResult<Reply>;
    async fn create_comment(&self, new: Comment) -> RepoResult<Comment>;
    async fn create_reply(&self, comment_id: &str, new: Reply) -> RepoResult<Comment>;
    async fn edit_comment(&self, id: &str, edit: EditContent) -> RepoResult<Comment>;
    async fn edit_reply(&self, comment_id: &str, reply_id: &str, edit: EditContent) -> RepoResult<Reply>;
    async fn increment_score(&self, id: &str) -> RepoResult<Comment>;
    async fn decrement_score(&self, id: &str) -> RepoResult<Comment>;
    async fn increment_reply_score(&self, comment_id: &str, reply_id: &str) -> RepoResult<Reply>;
    async fn decrement_reply_score(&self, comment_id: &str, reply_id: &str) -> RepoResult<Reply>;
    async fn delete_comment(&self, id: &str) -> RepoResult<Vec<Comment>>;
    async fn delete_reply(&self, comment_id: &str, reply_id: &str) -> RepoResult<Vec<Reply>>;
}

pub mod inmem {
    use super::*;
    use tracing::{debug, info};

    struct State {
        current_user: User,
        comments: Vec<Comment>,
    }

    impl State {
        fn comment_mut(&mut self, id: &str) -> RepoResult<&mut Comment> {
            self.comments
                .iter_mut()
                .find(|c| c.id == id)
                .ok_or_else(|| RepoError::CommentNotFound(id.to_string()))
        }

        fn reply_mut(&mut self, comment_id: &str, reply_id: &str) -> RepoResult<&mut Reply> {
            self.comment_mut(comment_id)?
                .replies
                .iter_mut()
                .find(|r| r.id == reply_id)
                .ok_or_else(|| RepoError::ReplyNotFound {
                    comment_id: comment_id.to_string(),
                    reply_id: reply_id.to_string(),
                })
        }
    }

    /// Process-local store. Clones share the same collection.
    #[derive(Clone)]
    pub struct InMemRepo {
        state: Arc<RwLock<State>>,
    }

    impl InMemRepo {
        /// Store seeded with the sample section.
        pub fn new() -> Self {
            Self::with_state(crate::seed::current_user(), crate::seed::sample_comments())
        }

        pub fn with_state(current_user: User, comments: Vec<Comment>) -> Self {
            info!(comments = comments.len(), "initialising in-memory comment store");
            Self { state: Arc::new(RwLock::new(State { current_user, comments })) }
        }

        fn read(&self) -> RepoResult<RwLockReadGuard<'_, State>> {
            self.state.read().map_err(|e| RepoError::Internal(e.to_string()))
        }

        fn write(&self) -> RepoResult<RwLockWriteGuard<'_, State>> {
            self.state.write().map_err(|e| RepoError::Internal(e.to_string()))
        }
    }

    impl Default for InMemRepo {
        fn default() -> Self { Self::new() }
    }

    #[async_trait]
    impl CommentRepo for InMemRepo {
        async fn current_user(&self) -> RepoResult<User> {
            Ok(self.read()?.current_user.clone())
        }

        async fn comment_section(&self) -> RepoResult<CommentSection> {
            let s = self.read()?;
            Ok(CommentSection { current_user: s.current_user.clone(), comments: s.comments.clone() })
        }

        async fn list_comments(&self) -> RepoResult<Vec<Comment>> {
            Ok(self.read()?.comments.clone())
        }

        async fn get_comment(&self, id: &str) -> RepoResult<Comment> {
            let s = self.read()?;
            s.comments
                .iter()
                .find(|c| c.id == id)
                .cloned()
                .ok_or_else(|| RepoError::CommentNotFound(id.to_string()))
        }

        async fn get_reply(&self, comment_id: &str, reply_id: &str) -> RepoResult<Reply> {
            let comment = self.get_comment(comment_id).await?;
            comment
                .replies
                .into_iter()
                .find(|r| r.id == reply_id)
                .ok_or_else(|| RepoError::ReplyNotFound {
                    comment_id: comment_id.to_string(),
                    reply_id: reply_id.to_string(),
                })
        }

        async fn create_comment(&self, new: Comment) -> RepoResult<Comment> {
            let mut s = self.write()?;
            debug!(id = %new.id, "appending comment");
            s.comments.push(new.clone());
            Ok(new)
        }

        async fn create_reply(&self, comment_id: &str, new: Reply) -> RepoResult<Comment> {
            let mut s = self.write()?;
            let comment = s.comment_mut(comment_id)?;
            debug!(comment_id, reply_id = %new.id, "appending reply");
            comment.replies.push(new);
            Ok(comment.clone())
        }

        async fn edit_comment(&self, id: &str, edit: EditContent) -> RepoResult<Comment> {
            let mut s = self.write()?;
            let comment = s.comment_mut(id)?;
            if let Some(content) = edit.content {
                comment.content = content;
            }
            debug!(id, "comment edited");
            Ok(comment.clone())
        }

        async fn edit_reply(&self, comment_id: &str, reply_id: &str, edit: EditContent) -> RepoResult<Reply> {
            let mut s = self.write()?;
            let reply = s.reply_mut(comment_id, reply_id)?;
            if let Some(content) = edit.content {
                reply.content = content;
            }
            debug!(comment_id, reply_id, "reply edited");
            Ok(reply.clone())
        }

        async fn increment_score(&self, id: &str) -> RepoResult<Comment> {
            let mut s = self.write()?;
            let comment = s.comment_mut(id)?;
            comment.score = comment.score.saturating_add(1);
            debug!(id, score = comment.score, "comment score changed");
            Ok(comment.clone())
        }

        async fn decrement_score(&self, id: &str) -> RepoResult<Comment> {
            let mut s = self.write()?;
            let comment = s.comment_mut(id)?;
            comment.score = comment.score.saturating_sub(1); // floor at zero
            debug!(id, score = comment.score, "comment score changed");
            Ok(comment.clone())
        }

        async fn increment_reply_score(&self, comment_id: &str, reply_id: &str) -> RepoResult<Reply> {
            let mut s = self.write()?;
            let reply = s.reply_mut(comment_id, reply_id)?;
            reply.score = reply.score.saturating_add(1);
            debug!(comment_id, reply_id, score = reply.score, "reply score changed");
            Ok(reply.clone())
        }

        async fn decrement_reply_score(&self, comment_id: &str, reply_id: &str) -> RepoResult<Reply> {
            let mut s = self.write()?;
            let reply = s.reply_mut(comment_id, reply_id)?;
            reply.score = reply.score.saturating_sub(1);
            debug!(comment_id, reply_id, score = reply.score, "reply score changed");
            Ok(reply.clone())
        }

        async fn delete_comment(&self, id: &str) -> RepoResult<Vec<Comment>> {
            let mut s = self.write()?;
            let idx = s
                .comments
                .iter()
                .position(|c| c.id == id)
                .ok_or_else(|| RepoError::CommentNotFound(id.to_string()))?;
            // Vec::remove shifts the tail, keeping display order
            s.comments.remove(idx);
            info!(id, "comment deleted");
            Ok(s.comments.clone())
        }

        async fn delete_reply(&self, comment_id: &str, reply_id: &str) -> RepoResult<Vec<Reply>> {
            let mut s = self.write()?;
            let comment = s.comment_mut(comment_id)?;
            let idx = comment
                .replies
                .iter()
                .position(|r| r.id == reply_id)
                .ok_or_else(|| RepoError::ReplyNotFound {
                    comment_id: comment_id.to_string(),
                    reply_id: reply_id.to_string(),
                })?;
            comment.replies.remove(idx);
            info!(comment_id, reply_id, "reply deleted");
            Ok(comment.replies.clone())
        }
    }
}
