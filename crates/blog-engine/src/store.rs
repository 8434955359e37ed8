use std::sync::Arc;

use async_graphql::ID;
use tokio::sync::RwLock;
use ulid::Ulid;

use crate::{
    error::StoreError,
    model::{Comment, Post, User},
};

/// Shared handle to the store, as injected into the schema context.
///
/// Queries take the read side; every mutation holds the write guard for its
/// whole run, so cascading deletes never interleave with other operations.
pub type SharedStore = Arc<RwLock<Store>>;

/// The in-memory collections backing the API.
///
/// Collections preserve insertion order and offer no other ordering
/// guarantee. All lookups are linear scans, which is fine at the
/// cardinalities this server is meant for.
#[derive(Debug, Default)]
pub struct Store {
    pub users: Vec<User>,
    pub posts: Vec<Post>,
    pub comments: Vec<Comment>,
}

fn fresh_id() -> ID {
    Ulid::new().to_string().into()
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_shared(self) -> SharedStore {
        Arc::new(RwLock::new(self))
    }

    /// The canned data set the server boots with.
    pub fn demo() -> Self {
        Store {
            users: vec![
                User {
                    id: "1".into(),
                    name: "Bharath".into(),
                    email: "bharath@ex.com".into(),
                    age: Some(24),
                },
                User {
                    id: "2".into(),
                    name: "Sara".into(),
                    email: "sara@gmail.com".into(),
                    age: None,
                },
                User {
                    id: "3".into(),
                    name: "Mike".into(),
                    email: "mike@gmail.com".into(),
                    age: None,
                },
            ],
            posts: vec![
                Post {
                    id: "11".into(),
                    title: "First Post".into(),
                    body: "body of first post".into(),
                    published: true,
                    author_id: "1".into(),
                },
                Post {
                    id: "12".into(),
                    title: "Some Post".into(),
                    body: "body of some post".into(),
                    published: true,
                    author_id: "1".into(),
                },
                Post {
                    id: "13".into(),
                    title: "Another Post".into(),
                    body: "body of another post".into(),
                    published: false,
                    author_id: "2".into(),
                },
            ],
            comments: vec![
                Comment {
                    id: "C1".into(),
                    text: "nice post there".into(),
                    author_id: "3".into(),
                    post_id: "11".into(),
                },
                Comment {
                    id: "C2".into(),
                    text: "well done".into(),
                    author_id: "1".into(),
                    post_id: "11".into(),
                },
                Comment {
                    id: "C3".into(),
                    text: "Could have been better".into(),
                    author_id: "2".into(),
                    post_id: "12".into(),
                },
                Comment {
                    id: "C4".into(),
                    text: "Waiting for your next post".into(),
                    author_id: "1".into(),
                    post_id: "13".into(),
                },
            ],
        }
    }

    pub fn user(&self, id: &str) -> Option<&User> {
        self.users.iter().find(|user| user.id.as_str() == id)
    }

    pub fn post(&self, id: &str) -> Option<&Post> {
        self.posts.iter().find(|post| post.id.as_str() == id)
    }

    /// Posts whose title or body contains `query`, case-insensitively.
    pub fn posts_matching(&self, query: &str) -> Vec<Post> {
        let query = query.to_lowercase();
        self.posts
            .iter()
            .filter(|post| {
                post.title.to_lowercase().contains(&query) || post.body.to_lowercase().contains(&query)
            })
            .cloned()
            .collect()
    }

    /// Users whose name contains `query`, case-insensitively.
    pub fn users_matching(&self, query: &str) -> Vec<User> {
        let query = query.to_lowercase();
        self.users
            .iter()
            .filter(|user| user.name.to_lowercase().contains(&query))
            .cloned()
            .collect()
    }

    pub fn posts_by_author(&self, author: &str) -> Vec<Post> {
        self.posts
            .iter()
            .filter(|post| post.author_id.as_str() == author)
            .cloned()
            .collect()
    }

    pub fn comments_by_author(&self, author: &str) -> Vec<Comment> {
        self.comments
            .iter()
            .filter(|comment| comment.author_id.as_str() == author)
            .cloned()
            .collect()
    }

    pub fn comments_on_post(&self, post: &str) -> Vec<Comment> {
        self.comments
            .iter()
            .filter(|comment| comment.post_id.as_str() == post)
            .cloned()
            .collect()
    }

    pub fn create_user(
        &mut self,
        name: String,
        email: String,
        age: Option<i32>,
    ) -> Result<User, StoreError> {
        if self.users.iter().any(|user| user.email == email) {
            return Err(StoreError::EmailTaken { email });
        }

        let user = User {
            id: fresh_id(),
            name,
            email,
            age,
        };
        self.users.push(user.clone());

        Ok(user)
    }

    /// Removes a user together with their posts, every comment on those
    /// posts, and every comment the user wrote elsewhere.
    pub fn delete_user(&mut self, id: &str) -> Result<User, StoreError> {
        let index = self
            .users
            .iter()
            .position(|user| user.id.as_str() == id)
            .ok_or_else(|| StoreError::UserNotFound { id: id.to_string() })?;

        let user = self.users.remove(index);

        let removed_posts: Vec<ID> = self
            .posts
            .iter()
            .filter(|post| post.author_id.as_str() == id)
            .map(|post| post.id.clone())
            .collect();

        self.posts.retain(|post| post.author_id.as_str() != id);
        self.comments
            .retain(|comment| comment.author_id.as_str() != id && !removed_posts.contains(&comment.post_id));

        Ok(user)
    }

    pub fn create_post(
        &mut self,
        title: String,
        body: String,
        published: bool,
        author: ID,
    ) -> Result<Post, StoreError> {
        if self.user(author.as_str()).is_none() {
            return Err(StoreError::UserNotFound {
                id: author.to_string(),
            });
        }

        let post = Post {
            id: fresh_id(),
            title,
            body,
            published,
            author_id: author,
        };
        self.posts.push(post.clone());

        Ok(post)
    }

    pub fn delete_post(&mut self, id: &str) -> Result<Post, StoreError> {
        let index = self
            .posts
            .iter()
            .position(|post| post.id.as_str() == id)
            .ok_or_else(|| StoreError::PostNotFound { id: id.to_string() })?;

        let post = self.posts.remove(index);
        self.comments.retain(|comment| comment.post_id.as_str() != id);

        Ok(post)
    }

    pub fn create_comment(&mut self, text: String, author: ID, post: ID) -> Result<Comment, StoreError> {
        if self.user(author.as_str()).is_none() {
            return Err(StoreError::UserNotFound {
                id: author.to_string(),
            });
        }

        // An unpublished post is invisible to commenters.
        let target_is_published = self.post(post.as_str()).is_some_and(|post| post.published);
        if !target_is_published {
            return Err(StoreError::PostNotFound { id: post.to_string() });
        }

        let comment = Comment {
            id: fresh_id(),
            text,
            author_id: author,
            post_id: post,
        };
        self.comments.push(comment.clone());

        Ok(comment)
    }

    pub fn delete_comment(&mut self, id: &str) -> Result<Comment, StoreError> {
        let index = self
            .comments
            .iter()
            .position(|comment| comment.id.as_str() == id)
            .ok_or_else(|| StoreError::CommentNotFound { id: id.to_string() })?;

        Ok(self.comments.remove(index))
    }
}
