//! GraphQL endpoint answering the `books` query

use crate::state::AppState;
use axum::{extract::State, Json};
use ello_core::catalog::wire::{GraphQlRequest, GraphQlResponse};

/// Serve the catalog to a query selecting `books`.
///
/// The full catalog is always returned; the client does its own filtering and paging.
pub async fn graphql(
    State(state): State<AppState>,
    Json(request): Json<GraphQlRequest>,
) -> Json<GraphQlResponse> {
    if !selects_books(&request.query) {
        tracing::warn!("Rejecting query without a books selection");
        return Json(GraphQlResponse::error(
            "Only the books query is supported",
        ));
    }

    tracing::debug!(
        operation = request.operation_name.as_deref().unwrap_or("anonymous"),
        "Serving {} books",
        state.catalog.len()
    );
    Json(GraphQlResponse::books(state.catalog.as_ref().clone()))
}

/// Token check for a `books` field anywhere in the query text. The query is
/// not parsed, so a nested `books` selection also passes.
fn selects_books(query: &str) -> bool {
    query
        .split(|c: char| !c.is_alphanumeric() && c != '_')
        .any(|word| word == "books")
}
