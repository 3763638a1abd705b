//! Routes and handlers.
//!
//! Every handler reads its arguments from the query string, validates them,
//! calls into the shared [`Inventory`] and turns the outcome into JSON.
//! Create, update and delete accept both GET and POST. Queries are taken
//! as raw pairs so a repeated key resolves to its first value instead of
//! failing extraction.

use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use tokio::net::TcpListener;
use tracing::{debug, info};

use crate::error::InventoryError;
use crate::params::{CreateQuery, ItemQuery, QueryPairs, UpdateQuery};
use crate::store::Inventory;
use crate::types::{Item, Message};

pub type Db = Arc<Inventory>;

/// Router over a freshly seeded store.
pub fn app() -> Router {
    app_with(Inventory::seeded())
}

pub fn app_with(inventory: Inventory) -> Router {
    let db: Db = Arc::new(inventory);
    Router::new()
        .route("/", get(list_items))
        .route("/show", get(show_item))
        .route("/create", get(create_item).post(create_item))
        .route("/add-item", get(create_item).post(create_item))
        .route("/update", get(update_item).post(update_item))
        .route("/delete", get(delete_item).post(delete_item))
        .with_state(db)
}

pub async fn run(listener: TcpListener, inventory: Inventory) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with(inventory)).await
}

async fn list_items(State(db): State<Db>) -> Json<HashMap<String, Item>> {
    let items = db.list().await;
    debug!(count = items.len(), "listed items");
    Json(items)
}

async fn show_item(
    State(db): State<Db>,
    Query(pairs): Query<QueryPairs>,
) -> Result<Json<Item>, InventoryError> {
    let query = ItemQuery::from_pairs(&pairs);
    let item = db
        .show(&query.item)
        .await
        .inspect_err(|err| debug!(item = %query.item, %err, "show rejected"))?;
    Ok(Json(item))
}

async fn create_item(
    State(db): State<Db>,
    Query(pairs): Query<QueryPairs>,
) -> Result<impl IntoResponse, InventoryError> {
    let item = CreateQuery::from_pairs(&pairs)
        .into_item()
        .inspect_err(|err| debug!(%err, "create rejected"))?;
    let name = item.name.clone();
    db.create(item)
        .await
        .inspect_err(|err| debug!(item = %name, %err, "create rejected"))?;
    info!(item = %name, "item created");
    Ok((
        StatusCode::CREATED,
        [(header::CONTENT_TYPE, "application/json")],
    ))
}

async fn update_item(
    State(db): State<Db>,
    Query(pairs): Query<QueryPairs>,
) -> Result<Json<Item>, InventoryError> {
    let query = UpdateQuery::from_pairs(&pairs);
    let item = db
        .update_with(&query.item, || query.patch())
        .await
        .inspect_err(|err| debug!(item = %query.item, %err, "update rejected"))?;
    info!(item = %item.name, price = item.price, quantity = item.quantity, "item updated");
    Ok(Json(item))
}

async fn delete_item(
    State(db): State<Db>,
    Query(pairs): Query<QueryPairs>,
) -> Result<impl IntoResponse, InventoryError> {
    let query = ItemQuery::from_pairs(&pairs);
    let removed = db
        .delete(&query.item)
        .await
        .inspect_err(|err| debug!(item = %query.item, %err, "delete rejected"))?;
    info!(item = %removed.name, "item deleted");
    Ok((
        StatusCode::ACCEPTED,
        Json(Message::new("item deleted", StatusCode::ACCEPTED)),
    ))
}
