//! Core of the blog GraphQL API: the in-memory store, the entity types with
//! their lazily resolved relations, and the query/mutation roots.

use async_graphql::EmptySubscription;

mod error;
mod model;
mod mutation;
mod query;
mod store;

pub use error::StoreError;
pub use model::{Comment, Post, User};
pub use mutation::Mutation;
pub use query::Query;
pub use store::{SharedStore, Store};

pub type BlogSchema = async_graphql::Schema<Query, Mutation, EmptySubscription>;

/// Builds the executable schema over the given store.
///
/// The store handle is placed in the request context so field resolvers can
/// look up related entities on demand.
pub fn build_schema(store: SharedStore) -> BlogSchema {
    async_graphql::Schema::build(Query, Mutation, EmptySubscription)
        .data(store)
        .finish()
}
