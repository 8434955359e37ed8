use async_graphql::{ComplexObject, Context, ErrorExtensions, Result, SimpleObject, ID};

use crate::{error::StoreError, store::SharedStore};

#[derive(Clone, Debug, SimpleObject)]
#[graphql(complex)]
pub struct User {
    pub id: ID,
    pub name: String,
    pub email: String,
    pub age: Option<i32>,
}

#[ComplexObject]
impl User {
    /// Posts authored by this user.
    async fn posts(&self, ctx: &Context<'_>) -> Vec<Post> {
        let store = ctx.data_unchecked::<SharedStore>().read().await;
        store.posts_by_author(self.id.as_str())
    }

    /// Comments written by this user, on any post.
    async fn comments(&self, ctx: &Context<'_>) -> Vec<Comment> {
        let store = ctx.data_unchecked::<SharedStore>().read().await;
        store.comments_by_author(self.id.as_str())
    }
}

#[derive(Clone, Debug, SimpleObject)]
#[graphql(complex)]
pub struct Post {
    pub id: ID,
    pub title: String,
    pub body: String,
    pub published: bool,
    #[graphql(skip)]
    pub author_id: ID,
}

#[ComplexObject]
impl Post {
    async fn author(&self, ctx: &Context<'_>) -> Result<User> {
        let store = ctx.data_unchecked::<SharedStore>().read().await;
        store.user(self.author_id.as_str()).cloned().ok_or_else(|| {
            StoreError::UserNotFound {
                id: self.author_id.to_string(),
            }
            .extend()
        })
    }

    async fn comments(&self, ctx: &Context<'_>) -> Vec<Comment> {
        let store = ctx.data_unchecked::<SharedStore>().read().await;
        store.comments_on_post(self.id.as_str())
    }
}

#[derive(Clone, Debug, SimpleObject)]
#[graphql(complex)]
pub struct Comment {
    pub id: ID,
    pub text: String,
    #[graphql(skip)]
    pub author_id: ID,
    #[graphql(skip)]
    pub post_id: ID,
}

#[ComplexObject]
impl Comment {
    async fn author(&self, ctx: &Context<'_>) -> Result<User> {
        let store = ctx.data_unchecked::<SharedStore>().read().await;
        store.user(self.author_id.as_str()).cloned().ok_or_else(|| {
            StoreError::UserNotFound {
                id: self.author_id.to_string(),
            }
            .extend()
        })
    }

    async fn post(&self, ctx: &Context<'_>) -> Result<Post> {
        let store = ctx.data_unchecked::<SharedStore>().read().await;
        store.post(self.post_id.as_str()).cloned().ok_or_else(|| {
            StoreError::PostNotFound {
                id: self.post_id.to_string(),
            }
            .extend()
        })
    }
}
