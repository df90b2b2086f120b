//! GraphQL facade over the PokéAPI.
//!
//! Exposes `allPokemon` and `pokemon`, each resolved by exactly one upstream
//! `GET` whose JSON is reshaped into the schema's field names.

mod config;
mod error;
pub mod schema;
mod server;

pub use config::{Config, GraphConfig, HealthConfig, NetworkConfig, UpstreamConfig, DEFAULT_LISTEN_ADDRESS};
pub use error::Error;
pub use schema::{PokedexSchema, Pokemon, PokemonEntry, PokemonList, Query, ResolverError};
pub use server::{router, serve, ServerConfig};

pub type Result<T> = std::result::Result<T, Error>;
