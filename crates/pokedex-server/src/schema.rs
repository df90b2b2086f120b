mod types;

use std::sync::Arc;

use async_graphql::{EmptyMutation, EmptySubscription, ErrorExtensions, Object, ID};
use pokeapi_client::PokeApi;

pub use types::{Pokemon, PokemonEntry, PokemonList};

pub type PokedexSchema = async_graphql::Schema<Query, EmptyMutation, EmptySubscription>;

/// Builds the executable schema around an upstream client.
pub fn build(api: Arc<dyn PokeApi>) -> PokedexSchema {
    async_graphql::Schema::build(Query::new(api), EmptyMutation, EmptySubscription).finish()
}

/// The schema in SDL form.
pub fn sdl(schema: &PokedexSchema) -> String {
    schema.sdl_with_options(async_graphql::SDLExportOptions::new())
}

/// What a resolver returns when it cannot produce its value.
#[derive(Debug, thiserror::Error)]
pub enum ResolverError {
    #[error(transparent)]
    Upstream(#[from] pokeapi_client::Error),
    /// `pokemon` was queried without an id, so there is no upstream URL to call.
    #[error("no Pokémon id given")]
    MissingId,
}

impl ResolverError {
    /// Every resolver failure reports the same code.
    pub fn code(&self) -> &'static str {
        "UPSTREAM_ERROR"
    }

    pub fn upstream_status(&self) -> Option<u16> {
        match self {
            ResolverError::Upstream(error) => error.status(),
            ResolverError::MissingId => None,
        }
    }
}

impl ErrorExtensions for ResolverError {
    fn extend(&self) -> async_graphql::Error {
        async_graphql::Error::new(self.to_string()).extend_with(|_, extensions| {
            extensions.set("code", self.code());

            if let Some(status) = self.upstream_status() {
                extensions.set("upstreamStatus", status);
            }
        })
    }
}

pub struct Query {
    api: Arc<dyn PokeApi>,
}

impl Query {
    pub fn new(api: Arc<dyn PokeApi>) -> Self {
        Self { api }
    }

    /// `allPokemon`: the upstream list, unwrapped from its `results` key.
    pub async fn resolve_all_pokemon(&self, limit: Option<u32>) -> Result<PokemonList, ResolverError> {
        let page = self.api.list_pokemon(limit).await?;

        Ok(PokemonList::from(page))
    }

    /// `pokemon`: one upstream object reshaped to the schema's field names.
    pub async fn resolve_pokemon(&self, id: Option<ID>) -> Result<Pokemon, ResolverError> {
        let id = id.ok_or(ResolverError::MissingId)?;
        let resource = self.api.pokemon(id.as_str()).await?;

        Ok(Pokemon::from_upstream(id, resource))
    }
}

#[Object]
impl Query {
    /// Lists Pokémon names and their upstream URLs.
    async fn all_pokemon(&self, limit: Option<u32>) -> async_graphql::Result<Option<PokemonList>> {
        match self.resolve_all_pokemon(limit).await {
            Ok(list) => Ok(Some(list)),
            Err(error) => {
                tracing::warn!(%error, ?limit, "allPokemon failed");
                Err(error.extend())
            }
        }
    }

    /// Fetches a single Pokémon by id or name.
    async fn pokemon(&self, id: Option<ID>) -> async_graphql::Result<Option<Pokemon>> {
        let requested = id.as_ref().map(|id| id.as_str().to_owned());

        match self.resolve_pokemon(id).await {
            Ok(pokemon) => Ok(Some(pokemon)),
            Err(error) => {
                tracing::warn!(%error, id = ?requested, "pokemon failed");
                Err(error.extend())
            }
        }
    }
}
