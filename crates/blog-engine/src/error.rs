use async_graphql::ErrorExtensions;

/// Mutation failures surfaced to API clients.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Another user already registered this address
    #[error("email `{email}` is already taken")]
    EmailTaken { email: String },
    /// No user with this id
    #[error("user `{id}` not found")]
    UserNotFound { id: String },
    /// No published post with this id
    #[error("post `{id}` not found")]
    PostNotFound { id: String },
    /// No comment with this id
    #[error("comment `{id}` not found")]
    CommentNotFound { id: String },
}

impl StoreError {
    /// Machine-readable code attached to the response extensions.
    pub fn code(&self) -> &'static str {
        match self {
            StoreError::EmailTaken { .. } => "CONFLICT",
            StoreError::UserNotFound { .. }
            | StoreError::PostNotFound { .. }
            | StoreError::CommentNotFound { .. } => "NOT_FOUND",
        }
    }
}

impl ErrorExtensions for StoreError {
    fn extend(&self) -> async_graphql::Error {
        async_graphql::Error::new(self.to_string()).extend_with(|_, e| e.set("code", self.code()))
    }
}
