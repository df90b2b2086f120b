mod graphql;
mod health;
mod state;

use std::{net::SocketAddr, sync::Arc, time::Duration};

use axum::{routing::get, Router};
use pokeapi_client::HttpPokeApi;
use tokio::signal;
use tower_http::cors::CorsLayer;
use url::Url;

use crate::{
    config::{Config, DEFAULT_LISTEN_ADDRESS},
    schema::{self, PokedexSchema},
};

use self::state::ServerState;

/// Start parameters for the gateway.
pub struct ServerConfig {
    /// The GraphQL endpoint listen address, overriding the config file.
    pub listen_addr: Option<SocketAddr>,
    /// The gateway configuration.
    pub config: Config,
    /// The upstream base URL, overriding the config file.
    pub api_base_url: Option<Url>,
}

/// Starts the server and listens for incoming requests until a shutdown
/// signal arrives.
///
/// # Errors
///
/// Fails if the configuration has paths the router cannot mount, the
/// upstream client cannot be built from the configured base URL, or the
/// listener cannot be bound.
pub async fn serve(
    ServerConfig {
        listen_addr,
        config,
        api_base_url,
    }: ServerConfig,
) -> crate::Result<()> {
    config.validate()?;

    let base_url = api_base_url.unwrap_or_else(|| config.upstream.base_url.clone());
    tracing::info!(%base_url, "Using upstream API");

    let api = HttpPokeApi::new(base_url)?;
    let router = router(&config, schema::build(Arc::new(api)));

    let addr = listen_addr
        .or(config.network.listen_address)
        .unwrap_or(DEFAULT_LISTEN_ADDRESS);

    bind(addr, &config.graph.path, router).await
}

/// The HTTP routes of the gateway, without a listener attached. Expects a
/// configuration that passed [`Config::validate`].
pub fn router(config: &Config, schema: PokedexSchema) -> Router {
    let path = config.graph.path.as_str();
    let state = ServerState::new(schema, path.to_string(), config.graph.playground);

    let mut router = Router::new().route(
        path,
        get(graphql::execute_or_playground).post(graphql::execute),
    );

    if config.health.enabled {
        router = router.route(&config.health.path, get(health::health));
    }

    router.with_state(state).layer(CorsLayer::permissive())
}

async fn bind(addr: SocketAddr, path: &str, router: Router) -> crate::Result<()> {
    let handle = axum_server::Handle::new();

    // Spawn a task to gracefully shutdown server.
    tokio::spawn(graceful_shutdown(handle.clone()));

    tracing::info!("GraphQL endpoint exposed at http://{addr}{path}");

    axum_server::bind(addr)
        .handle(handle)
        .serve(router.into_make_service())
        .await
        .map_err(crate::Error::Server)?;

    Ok(())
}

/// Waits for Ctrl+C or SIGTERM, then lets in-flight requests finish.
async fn graceful_shutdown(handle: axum_server::Handle) {
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
    handle.graceful_shutdown(Some(Duration::from_secs(3)));
}
