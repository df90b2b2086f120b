/// The Pokédex gateway error type
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The configuration file could not be read
    #[error("reading configuration from {path}: {source}")]
    ConfigRead {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// The configuration file is not valid TOML or has unknown keys
    #[error("parsing configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),
    /// The configuration parses but cannot be served
    #[error("invalid configuration: {0}")]
    ConfigInvalid(String),
    /// The upstream client could not be created from the configuration
    #[error("upstream configuration: {0}")]
    Upstream(#[from] pokeapi_client::Error),
    /// Cannot start the HTTP server
    #[error("starting server: {0}")]
    Server(#[source] std::io::Error),
}
