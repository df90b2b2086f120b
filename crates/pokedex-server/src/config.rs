use std::{
    net::{IpAddr, Ipv4Addr, SocketAddr},
    path::Path,
};

use url::Url;

/// Used when neither the command line nor the config file sets an address.
pub const DEFAULT_LISTEN_ADDRESS: SocketAddr = SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 4000);

#[derive(Debug, Default, Clone, PartialEq, serde::Deserialize)]
#[serde(deny_unknown_fields)]
/// Configuration struct to define settings for the Pokédex gateway.
pub struct Config {
    /// GraphQL endpoint settings
    #[serde(default)]
    pub graph: GraphConfig,
    /// Server bind settings
    #[serde(default)]
    pub network: NetworkConfig,
    /// Where the upstream REST API lives
    #[serde(default)]
    pub upstream: UpstreamConfig,
    /// Health endpoint settings
    #[serde(default)]
    pub health: HealthConfig,
}

impl Config {
    /// Loads the configuration from a TOML file.
    ///
    /// Returns `Ok(None)` when no path is given or the file does not exist,
    /// so the caller can fall back to [`Config::default`].
    pub fn load(path: Option<&Path>) -> crate::Result<Option<Self>> {
        let Some(path) = path.filter(|path| path.exists()) else {
            return Ok(None);
        };

        let content = std::fs::read_to_string(path).map_err(|source| crate::Error::ConfigRead {
            path: path.display().to_string(),
            source,
        })?;

        Ok(Some(content.parse()?))
    }

    /// Checks the values the router cannot mount: paths must be absolute and
    /// the health endpoint cannot shadow the GraphQL endpoint.
    pub fn validate(&self) -> crate::Result<()> {
        if !self.graph.path.starts_with('/') {
            return Err(crate::Error::ConfigInvalid(format!(
                "graph.path must start with '/', got {:?}",
                self.graph.path
            )));
        }

        if !self.health.enabled {
            return Ok(());
        }

        if !self.health.path.starts_with('/') {
            return Err(crate::Error::ConfigInvalid(format!(
                "health.path must start with '/', got {:?}",
                self.health.path
            )));
        }

        if self.health.path == self.graph.path {
            return Err(crate::Error::ConfigInvalid(format!(
                "health.path and graph.path are both {:?}",
                self.graph.path
            )));
        }

        Ok(())
    }
}

impl std::str::FromStr for Config {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let config: Config = toml::from_str(s)?;
        config.validate()?;

        Ok(config)
    }
}

#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GraphConfig {
    /// The path of the GraphQL endpoint
    #[serde(default = "default_graph_path")]
    pub path: String,
    /// Serve GraphiQL to browsers on `GET`
    #[serde(default = "enabled")]
    pub playground: bool,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            path: default_graph_path(),
            playground: true,
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NetworkConfig {
    pub listen_address: Option<SocketAddr>,
}

#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpstreamConfig {
    #[serde(default = "default_base_url")]
    pub base_url: Url,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HealthConfig {
    #[serde(default = "enabled")]
    pub enabled: bool,
    #[serde(default = "default_health_path")]
    pub path: String,
}

impl Default for HealthConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            path: default_health_path(),
        }
    }
}

fn enabled() -> bool {
    true
}

fn default_graph_path() -> String {
    "/".to_string()
}

fn default_health_path() -> String {
    "/health".to_string()
}

fn default_base_url() -> Url {
    Url::parse(pokeapi_client::DEFAULT_BASE_URL).unwrap()
}
