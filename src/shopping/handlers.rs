//! REST API handlers for shopping list operations
//!
//! This module implements the HTTP endpoints over the item store and the
//! page that drives them from the browser.

use super::{
    error::{Error, Result},
    models::*,
    state::SharedState,
};
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{Html, IntoResponse},
    routing::{get, patch},
    Json, Router,
};

/// Creates routes for shopping list operations
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/", get(index))
        .route("/api/items", get(list_items).post(add_item))
        .route("/api/items/:id", patch(toggle_item).delete(delete_item))
}

/// Parses the `{id}` path segment. Anything that is not an id names no item.
fn parse_item_id(raw: &str) -> Result<u64> {
    raw.parse::<u64>().map_err(|_| Error::InvalidId(raw.to_string()))
}

/// Endpoint: GET /
/// Serves the browser UI.
async fn index(State(state): State<SharedState>) -> Html<String> {
    Html(state.load_page_html().await)
}

/// Endpoint: GET /api/items
/// Returns the whole list in storage order.
async fn list_items(State(state): State<SharedState>) -> Result<Json<Vec<Item>>> {
    let items = state.store.list_items().await?;
    Ok(Json(items))
}

/// Endpoint: POST /api/items
/// Appends a new unchecked item.
async fn add_item(
    State(state): State<SharedState>,
    body: std::result::Result<Json<NewItemInput>, JsonRejection>,
) -> Result<impl IntoResponse> {
    let Json(input) = body.map_err(|e| Error::InvalidBody(e.body_text()))?;

    let item = state.store.add_item(&input.name).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// Endpoint: PATCH /api/items/{id}
/// Flips the checked flag of one item.
async fn toggle_item(
    State(state): State<SharedState>,
    Path(raw_id): Path<String>,
) -> Result<Json<Item>> {
    let id = parse_item_id(&raw_id)?;
    let item = state.store.toggle_item(id).await?;
    Ok(Json(item))
}

/// Endpoint: DELETE /api/items/{id}
async fn delete_item(
    State(state): State<SharedState>,
    Path(raw_id): Path<String>,
) -> Result<StatusCode> {
    let id = parse_item_id(&raw_id)?;
    state.store.delete_item(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
