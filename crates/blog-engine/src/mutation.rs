use async_graphql::{Context, ErrorExtensions, Object, Result, ID};

use crate::{
    model::{Comment, Post, User},
    store::SharedStore,
};

pub struct Mutation;

#[Object]
impl Mutation {
    /// Registers a new user. The email must not be taken.
    async fn create_user(
        &self,
        ctx: &Context<'_>,
        name: String,
        email: String,
        age: Option<i32>,
    ) -> Result<User> {
        let mut store = ctx.data_unchecked::<SharedStore>().write().await;
        store.create_user(name, email, age).map_err(|err| err.extend())
    }

    /// Removes a user and everything hanging off them: their posts, the
    /// comments on those posts, and their comments on other posts.
    async fn delete_user(&self, ctx: &Context<'_>, id: ID) -> Result<User> {
        let mut store = ctx.data_unchecked::<SharedStore>().write().await;
        store.delete_user(id.as_str()).map_err(|err| err.extend())
    }

    /// Publishes (or drafts) a new post for an existing author.
    async fn create_post(
        &self,
        ctx: &Context<'_>,
        title: String,
        body: String,
        published: bool,
        author: ID,
    ) -> Result<Post> {
        let mut store = ctx.data_unchecked::<SharedStore>().write().await;
        store
            .create_post(title, body, published, author)
            .map_err(|err| err.extend())
    }

    /// Removes a post and all comments referencing it.
    async fn delete_post(&self, ctx: &Context<'_>, id: ID) -> Result<Post> {
        let mut store = ctx.data_unchecked::<SharedStore>().write().await;
        store.delete_post(id.as_str()).map_err(|err| err.extend())
    }

    /// Adds a comment from an existing user to a published post.
    async fn create_comment(
        &self,
        ctx: &Context<'_>,
        text: String,
        author: ID,
        post: ID,
    ) -> Result<Comment> {
        let mut store = ctx.data_unchecked::<SharedStore>().write().await;
        store.create_comment(text, author, post).map_err(|err| err.extend())
    }

    /// Removes a single comment.
    async fn delete_comment(&self, ctx: &Context<'_>, id: ID) -> Result<Comment> {
        let mut store = ctx.data_unchecked::<SharedStore>().write().await;
        store.delete_comment(id.as_str()).map_err(|err| err.extend())
    }
}
