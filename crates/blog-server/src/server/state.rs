use std::sync::Arc;

use blog_engine::BlogSchema;

struct ServerStateInner {
    schema: BlogSchema,
}

#[derive(Clone)]
pub(super) struct ServerState {
    inner: Arc<ServerStateInner>,
}

impl ServerState {
    pub(super) fn new(schema: BlogSchema) -> Self {
        Self {
            inner: Arc::new(ServerStateInner { schema }),
        }
    }

    pub(super) fn schema(&self) -> &BlogSchema {
        &self.inner.schema
    }
}
