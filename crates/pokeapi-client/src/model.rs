//! The subset of the PokéAPI payloads the gateway reads.
//!
//! Everything else the upstream sends is ignored during deserialization.

use serde::{Deserialize, Serialize};

/// A named link to another resource, as found in list results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedResource {
    pub name: String,
    pub url: String,
}

/// One page of `GET /pokemon`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonPage {
    #[serde(default)]
    pub count: Option<u64>,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    pub results: Vec<NamedResource>,
}

/// The body of `GET /pokemon/{id}`.
///
/// `species` and `sprites` are required: a payload without them is rejected
/// instead of being filled with nulls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonResource {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub height: Option<i32>,
    #[serde(default)]
    pub weight: Option<i32>,
    pub species: SpeciesRef,
    pub sprites: Sprites,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeciesRef {
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sprites {
    #[serde(default)]
    pub back_default: Option<String>,
    #[serde(default)]
    pub front_default: Option<String>,
}
