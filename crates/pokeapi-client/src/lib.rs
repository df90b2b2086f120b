//! A thin client for the PokéAPI REST endpoints used by the gateway.
//!
//! Every call is a single `GET` with no retries and no caching. Failures are
//! returned as [`Error`] and left to the caller to report.

mod error;
pub mod model;

use serde::de::DeserializeOwned;
use url::Url;

pub use error::Error;
pub use model::{NamedResource, PokemonPage, PokemonResource, SpeciesRef, Sprites};

pub type Result<T> = std::result::Result<T, Error>;

/// The public PokéAPI, used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Read access to the upstream Pokémon data.
///
/// The gateway only talks to the upstream through this trait, so tests can
/// swap in a fake or point [`HttpPokeApi`] at a mock server.
#[async_trait::async_trait]
pub trait PokeApi: Send + Sync {
    /// `GET {base}/pokemon`, passing `limit` through when given.
    async fn list_pokemon(&self, limit: Option<u32>) -> Result<PokemonPage>;

    /// `GET {base}/pokemon/{id}`. The id is not validated.
    async fn pokemon(&self, id: &str) -> Result<PokemonResource>;
}

/// [`PokeApi`] over HTTP.
#[derive(Debug, Clone)]
pub struct HttpPokeApi {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpPokeApi {
    pub fn new(base_url: Url) -> Result<Self> {
        let client = reqwest::Client::builder().build()?;

        Self::with_client(client, base_url)
    }

    pub fn with_client(client: reqwest::Client, base_url: Url) -> Result<Self> {
        if base_url.cannot_be_a_base() {
            return Err(Error::InvalidBaseUrl(base_url));
        }

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();

        url.path_segments_mut()
            .map_err(|()| Error::InvalidBaseUrl(self.base_url.clone()))?
            .pop_if_empty()
            .extend(segments);

        Ok(url)
    }

    async fn get<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        tracing::debug!(%url, "sending upstream request");

        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(Error::Status {
                status: status.as_u16(),
                url,
            });
        }

        let body = response.bytes().await?;

        serde_json::from_slice(&body).map_err(|source| Error::Decode { url, source })
    }
}

#[async_trait::async_trait]
impl PokeApi for HttpPokeApi {
    async fn list_pokemon(&self, limit: Option<u32>) -> Result<PokemonPage> {
        let mut url = self.endpoint(&["pokemon"])?;

        if let Some(limit) = limit {
            url.query_pairs_mut().append_pair("limit", &limit.to_string());
        }

        self.get(url).await
    }

    async fn pokemon(&self, id: &str) -> Result<PokemonResource> {
        let url = self.endpoint(&["pokemon", id])?;

        self.get(url).await
    }
}
