use async_graphql::{Context, Object};

use crate::{
    model::{Comment, Post, User},
    store::SharedStore,
};

pub struct Query;

#[Object]
impl Query {
    /// All posts, or the ones whose title or body matches `query`.
    async fn posts(&self, ctx: &Context<'_>, query: Option<String>) -> Vec<Post> {
        let store = ctx.data_unchecked::<SharedStore>().read().await;
        match query {
            Some(query) => store.posts_matching(&query),
            None => store.posts.clone(),
        }
    }

    /// All users, or the ones whose name matches `query`.
    async fn users(&self, ctx: &Context<'_>, query: Option<String>) -> Vec<User> {
        let store = ctx.data_unchecked::<SharedStore>().read().await;
        match query {
            Some(query) => store.users_matching(&query),
            None => store.users.clone(),
        }
    }

    async fn comments(&self, ctx: &Context<'_>) -> Vec<Comment> {
        ctx.data_unchecked::<SharedStore>().read().await.comments.clone()
    }

    /// A canned user payload, not backed by the store.
    async fn me(&self) -> User {
        User {
            id: "121212".into(),
            name: "Mike".into(),
            email: "mike@example.com".into(),
            age: None,
        }
    }

    /// A canned post payload, not backed by the store.
    async fn post(&self) -> Post {
        Post {
            id: "F12121212".into(),
            title: "Hi there".into(),
            body: "How you doing!".into(),
            published: true,
            author_id: String::new().into(),
        }
    }
}
