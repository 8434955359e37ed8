#![allow(unused_crate_dependencies, clippy::panic)]

//! Helpers for end-to-end tests of the blog GraphQL API.

use std::sync::OnceLock;

use async_graphql::Variables;
use blog_engine::{BlogSchema, SharedStore, Store};
use tokio::runtime::Runtime;

pub fn runtime() -> &'static Runtime {
    static RUNTIME: OnceLock<Runtime> = OnceLock::new();
    RUNTIME.get_or_init(|| Runtime::new().unwrap())
}

/// A schema over its own fresh store, one per test.
pub struct TestApi {
    schema: BlogSchema,
    store: SharedStore,
}

impl TestApi {
    pub fn new(store: Store) -> Self {
        let store = store.into_shared();
        let schema = blog_engine::build_schema(store.clone());
        TestApi { schema, store }
    }

    /// Executes a GraphQL operation, returning the full response as JSON.
    pub async fn execute(&self, operation: &str) -> serde_json::Value {
        let response = self.schema.execute(operation).await;
        serde_json::to_value(response).unwrap()
    }

    /// Like [`execute`](Self::execute), with variables.
    pub async fn execute_with(&self, operation: &str, variables: serde_json::Value) -> serde_json::Value {
        let request = async_graphql::Request::new(operation).variables(Variables::from_json(variables));
        serde_json::to_value(self.schema.execute(request).await).unwrap()
    }

    pub fn store(&self) -> &SharedStore {
        &self.store
    }
}

impl Default for TestApi {
    fn default() -> Self {
        Self::new(Store::demo())
    }
}
