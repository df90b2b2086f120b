use std::sync::Arc;

use indoc::indoc;
use pokeapi_client::{HttpPokeApi, PokeApi, PokemonPage, PokemonResource};
use pokedex_server::{schema, PokedexSchema};
use serde_json::{json, Value};
use url::Url;
use wiremock::{
    matchers::{method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

fn schema_for(server: &MockServer) -> PokedexSchema {
    let api = HttpPokeApi::new(Url::parse(&server.uri()).unwrap()).unwrap();
    schema::build(Arc::new(api))
}

async fn mock_pokemon(server: &MockServer, id: &str, body: Value) {
    Mock::given(method("GET"))
        .and(path(format!("/pokemon/{id}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

fn charizard() -> Value {
    json!({
        "id": 6,
        "species": { "name": "charizard" },
        "height": 17,
        "weight": 905,
        "sprites": { "front_default": "a", "back_default": "b" }
    })
}

async fn run(schema: &PokedexSchema, query: &str) -> Value {
    serde_json::to_value(schema.execute(query).await).unwrap()
}

#[tokio::test]
async fn pokemon_is_reshaped() {
    let server = MockServer::start().await;
    mock_pokemon(&server, "6", charizard()).await;

    let query = indoc! {r#"
        query {
          pokemon(id: 6) {
            id
            name
            height
            weight
            frontImage
            backImage
          }
        }
    "#};

    let response = run(&schema_for(&server), query).await;

    insta::assert_json_snapshot!(response, @r#"
    {
      "data": {
        "pokemon": {
          "id": "6",
          "name": "charizard",
          "height": 17,
          "weight": 905,
          "frontImage": "a",
          "backImage": "b"
        }
      }
    }
    "#);
}

#[tokio::test]
async fn pokemon_echoes_requested_id() {
    let server = MockServer::start().await;
    mock_pokemon(&server, "charizard", charizard()).await;

    let query = r#"query { pokemon(id: "charizard") { id name } }"#;
    let response = run(&schema_for(&server), query).await;

    assert_eq!(
        response,
        json!({ "data": { "pokemon": { "id": "charizard", "name": "charizard" } } })
    );
}

#[tokio::test]
async fn all_pokemon_passes_the_list_through() {
    let server = MockServer::start().await;

    let results = json!([
        { "name": "bulbasaur", "url": "https://pokeapi.co/api/v2/pokemon/1/" },
        { "name": "ivysaur", "url": "https://pokeapi.co/api/v2/pokemon/2/" },
        { "name": "venusaur", "url": "https://pokeapi.co/api/v2/pokemon/3/" }
    ]);

    Mock::given(method("GET"))
        .and(path("/pokemon"))
        .and(query_param("limit", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "count": 1302,
            "next": "https://pokeapi.co/api/v2/pokemon?offset=3&limit=3",
            "previous": null,
            "results": results.clone()
        })))
        .expect(1)
        .mount(&server)
        .await;

    let query = "query { allPokemon(limit: 3) { pokemon { name url } } }";
    let response = run(&schema_for(&server), query).await;

    assert_eq!(response["data"]["allPokemon"]["pokemon"], results);
    assert!(response.get("errors").is_none());
}

#[tokio::test]
async fn negative_limit_never_reaches_upstream() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "results": [] })))
        .expect(0)
        .mount(&server)
        .await;

    let query = "query { allPokemon(limit: -1) { pokemon { name } } }";
    let response = run(&schema_for(&server), query).await;

    assert_eq!(response["data"], Value::Null);
    assert_eq!(response["errors"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn missing_sprites_fails_the_query() {
    let server = MockServer::start().await;
    mock_pokemon(
        &server,
        "6",
        json!({
            "species": { "name": "charizard" },
            "height": 17,
            "weight": 905
        }),
    )
    .await;

    let query = "query { pokemon(id: 6) { id name height weight } }";
    let response = run(&schema_for(&server), query).await;

    assert_eq!(response["data"], json!({ "pokemon": null }));

    let errors = response["errors"].as_array().unwrap();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0]["path"], json!(["pokemon"]));
    assert_eq!(errors[0]["extensions"]["code"], "UPSTREAM_ERROR");
    assert!(
        errors[0]["message"].as_str().unwrap().contains("sprites"),
        "{}",
        errors[0]["message"]
    );
}

#[tokio::test]
async fn upstream_status_is_reported() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/pokemon/9999"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Not Found"))
        .mount(&server)
        .await;

    let query = "query { pokemon(id: 9999) { id name } }";
    let response = run(&schema_for(&server), query).await;

    assert_eq!(response["data"], json!({ "pokemon": null }));
    assert_eq!(response["errors"][0]["extensions"]["code"], "UPSTREAM_ERROR");
    assert_eq!(response["errors"][0]["extensions"]["upstreamStatus"], 404);
}

#[tokio::test]
async fn unreachable_upstream_fails_the_query() {
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let api = HttpPokeApi::new(Url::parse(&format!("http://127.0.0.1:{port}")).unwrap()).unwrap();
    let schema = schema::build(Arc::new(api));

    let response = run(&schema, "query { pokemon(id: 6) { id name } }").await;

    assert_eq!(response["data"], json!({ "pokemon": null }));
    assert_eq!(response["errors"][0]["extensions"]["code"], "UPSTREAM_ERROR");
    assert!(response["errors"][0]["extensions"].get("upstreamStatus").is_none());
}

#[tokio::test]
async fn failed_field_keeps_its_siblings() {
    let server = MockServer::start().await;
    mock_pokemon(&server, "6", charizard()).await;

    Mock::given(method("GET"))
        .and(path("/pokemon/404"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Not Found"))
        .mount(&server)
        .await;

    let query = "query { a: pokemon(id: 6) { name } b: pokemon(id: 404) { name } }";
    let response = run(&schema_for(&server), query).await;

    assert_eq!(
        response["data"],
        json!({ "a": { "name": "charizard" }, "b": null })
    );

    let errors = response["errors"].as_array().unwrap();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0]["path"], json!(["b"]));
    assert_eq!(errors[0]["extensions"]["upstreamStatus"], 404);
}

#[tokio::test]
async fn missing_id_never_reaches_upstream() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(charizard()))
        .expect(0)
        .mount(&server)
        .await;

    let response = run(&schema_for(&server), "query { pokemon { id name } }").await;

    assert_eq!(response["data"], json!({ "pokemon": null }));
    assert_eq!(response["errors"][0]["path"], json!(["pokemon"]));
    assert_eq!(response["errors"][0]["extensions"]["code"], "UPSTREAM_ERROR");
    assert!(response["errors"][0]["extensions"].get("upstreamStatus").is_none());
}

#[tokio::test]
async fn concurrent_requests_do_not_mix() {
    let server = MockServer::start().await;

    mock_pokemon(
        &server,
        "1",
        json!({ "species": { "name": "bulbasaur" }, "sprites": {} }),
    )
    .await;
    mock_pokemon(
        &server,
        "4",
        json!({ "species": { "name": "charmander" }, "sprites": {} }),
    )
    .await;

    let schema = schema_for(&server);

    let (first, second) = tokio::join!(
        run(&schema, "query { pokemon(id: 1) { id name } }"),
        run(&schema, "query { pokemon(id: 4) { id name } }"),
    );

    assert_eq!(first, json!({ "data": { "pokemon": { "id": "1", "name": "bulbasaur" } } }));
    assert_eq!(second, json!({ "data": { "pokemon": { "id": "4", "name": "charmander" } } }));
}

struct FailingApi;

#[async_trait::async_trait]
impl PokeApi for FailingApi {
    async fn list_pokemon(&self, _limit: Option<u32>) -> pokeapi_client::Result<PokemonPage> {
        Err(pokeapi_client::Error::Status {
            status: 503,
            url: Url::parse("http://upstream.invalid/pokemon").unwrap(),
        })
    }

    async fn pokemon(&self, _id: &str) -> pokeapi_client::Result<PokemonResource> {
        Err(pokeapi_client::Error::Status {
            status: 503,
            url: Url::parse("http://upstream.invalid/pokemon/6").unwrap(),
        })
    }
}

#[tokio::test]
async fn resolvers_return_errors_instead_of_partial_objects() {
    let query = pokedex_server::Query::new(Arc::new(FailingApi));

    let error = query.resolve_pokemon(Some("6".into())).await.unwrap_err();
    assert_eq!(error.code(), "UPSTREAM_ERROR");
    assert_eq!(error.upstream_status(), Some(503));

    let error = query.resolve_pokemon(None).await.unwrap_err();
    assert!(matches!(error, pokedex_server::ResolverError::MissingId), "{error:?}");

    let error = query.resolve_all_pokemon(Some(10)).await.unwrap_err();
    assert!(error.to_string().contains("503"), "{error}");
}

#[test]
fn sdl_exposes_both_queries() {
    let sdl = schema::sdl(&schema::build(Arc::new(FailingApi)));

    let fields: Vec<&str> = sdl.lines().map(str::trim).collect();

    assert!(fields.contains(&"allPokemon(limit: Int): PokemonList"), "{sdl}");
    assert!(fields.contains(&"pokemon(id: ID): Pokemon"), "{sdl}");
    assert!(sdl.contains("frontImage: String"), "{sdl}");
    assert!(sdl.contains("backImage: String"), "{sdl}");
}
