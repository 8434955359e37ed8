use axum::{response::IntoResponse, Json};

#[derive(serde::Serialize)]
struct Health {
    status: &'static str,
}

pub(super) async fn health() -> impl IntoResponse {
    Json(Health { status: "up" })
}
