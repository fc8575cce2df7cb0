//! GraphQL route handlers

use super::schema::{build_schema, CatalogSchema};
use crate::state::SharedState;
use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    extract::State,
    response::{Html, IntoResponse},
    routing::get,
    Extension, Router,
};

/// Endpoint the GraphQL IDE posts to
pub const GRAPHQL_PATH: &str = "/graphql";

/// Creates routes for the GraphQL endpoint and its IDE
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route(GRAPHQL_PATH, get(handle_graphql).post(handle_graphql))
        .route("/playground", get(playground))
        .layer(Extension(build_schema()))
}

/// Endpoint: GET/POST /graphql
async fn handle_graphql(
    State(state): State<SharedState>,
    Extension(schema): Extension<CatalogSchema>,
    req: GraphQLRequest,
) -> GraphQLResponse {
    let request = req.into_inner();
    tracing::debug!(operation = ?request.operation_name, "graphql request");

    schema.execute(request.data(state)).await.into()
}

/// Endpoint: GET /playground
async fn playground() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish())
}
