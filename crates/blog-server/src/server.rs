mod health;
mod state;

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{extract::State, routing::get, Router};
use blog_engine::SharedStore;
use tokio::signal;
use tower_http::cors::CorsLayer;

use crate::Error;
use state::ServerState;

const GRAPHQL_PATH: &str = "/graphql";

const DEFAULT_LISTEN_ADDRESS: SocketAddr = SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 4000);

/// Start parameters for the blog API.
pub struct ServerConfig {
    /// The GraphQL endpoint listen address.
    pub listen_addr: Option<SocketAddr>,
    /// The store served by this process.
    pub store: SharedStore,
}

/// Starts the server and listens for incoming requests until a termination
/// signal arrives.
pub async fn serve(ServerConfig { listen_addr, store }: ServerConfig) -> crate::Result<()> {
    let schema = blog_engine::build_schema(store);
    let router = router(ServerState::new(schema));

    let addr = listen_addr.unwrap_or(DEFAULT_LISTEN_ADDRESS);

    bind(addr, GRAPHQL_PATH, router).await
}

fn router(state: ServerState) -> Router {
    Router::new()
        .route(GRAPHQL_PATH, get(graphql_execute).post(graphql_execute))
        .route("/health", get(health::health))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn bind(addr: SocketAddr, path: &str, router: Router) -> crate::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await.map_err(Error::Bind)?;

    tracing::info!("GraphQL endpoint exposed at http://{addr}{path}");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(Error::Server)
}

/// Executes a GraphQL request against the schema held in the server state.
async fn graphql_execute(State(state): State<ServerState>, request: GraphQLRequest) -> GraphQLResponse {
    state.schema().execute(request.into_inner()).await.into()
}

/// Resolves once a termination signal arrives, letting in-flight requests
/// complete before the listener closes.
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c().await.expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutting down gracefully...");
}
