use async_graphql::{SimpleObject, ID};
use pokeapi_client::{NamedResource, PokemonPage, PokemonResource};

/// A single Pokémon.
#[derive(Debug, Clone, PartialEq, SimpleObject)]
pub struct Pokemon {
    /// The id the Pokémon was requested with.
    pub id: ID,
    /// The species name.
    pub name: String,
    /// Height in decimetres.
    pub height: Option<i32>,
    /// Weight in hectograms.
    pub weight: Option<i32>,
    /// URL of the default back sprite.
    pub back_image: Option<String>,
    /// URL of the default front sprite.
    pub front_image: Option<String>,
}

impl Pokemon {
    /// The requested id is echoed back; the upstream's own `id` is ignored.
    pub fn from_upstream(id: ID, resource: PokemonResource) -> Self {
        let PokemonResource {
            height,
            weight,
            species,
            sprites,
            ..
        } = resource;

        Self {
            id,
            name: species.name,
            height,
            weight,
            back_image: sprites.back_default,
            front_image: sprites.front_default,
        }
    }
}

/// A page of Pokémon list entries.
#[derive(Debug, Clone, PartialEq, SimpleObject)]
pub struct PokemonList {
    pub pokemon: Vec<PokemonEntry>,
}

impl From<PokemonPage> for PokemonList {
    fn from(page: PokemonPage) -> Self {
        Self {
            pokemon: page.results.into_iter().map(PokemonEntry::from).collect(),
        }
    }
}

/// A list entry, as returned by the upstream.
#[derive(Debug, Clone, PartialEq, SimpleObject)]
pub struct PokemonEntry {
    pub name: String,
    /// Upstream URL of the full resource.
    pub url: String,
}

impl From<NamedResource> for PokemonEntry {
    fn from(NamedResource { name, url }: NamedResource) -> Self {
        Self { name, url }
    }
}
