use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    extract::{FromRequest, Request, State},
    response::{Html, IntoResponse, Response},
};
use http::{header, HeaderMap};

use super::state::ServerState;

/// Executes a GraphQL request sent as a JSON body.
pub(super) async fn execute(State(state): State<ServerState>, request: GraphQLRequest) -> GraphQLResponse {
    state.schema().execute(request.into_inner()).await.into()
}

/// Browsers get GraphiQL, everything else is a query in the URL parameters.
pub(super) async fn execute_or_playground(State(state): State<ServerState>, request: Request) -> Response {
    if state.playground() && accepts_html(request.headers()) {
        let source = GraphiQLSource::build().endpoint(state.graph_path()).finish();
        return Html(source).into_response();
    }

    match <GraphQLRequest as FromRequest<ServerState>>::from_request(request, &state).await {
        Ok(request) => execute(State(state), request).await.into_response(),
        Err(rejection) => rejection.into_response(),
    }
}

fn accepts_html(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.contains("text/html"))
}
