//! Item HTTP Routes
//!
//! Each handler decodes the request, calls exactly one gateway operation,
//! and encodes the result. Failures map to status codes via `ApiError`.

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};

use super::errors::ApiResult;
use super::extract::{ItemId, ItemJson};
use super::root_routes::MessageResponse;
use crate::model::{Item, ItemCreate};
use crate::store::ItemGateway;

/// Shared gateway handle
pub type ItemState = Arc<dyn ItemGateway>;

/// Create item routes
pub fn item_routes(gateway: ItemState) -> Router {
    Router::new()
        .route("/items/", get(list_items_handler).post(create_item_handler))
        .route(
            "/items/:id",
            get(get_item_handler)
                .put(update_item_handler)
                .delete(delete_item_handler),
        )
        .with_state(gateway)
}

// ==================
// Handlers
// ==================

async fn list_items_handler(State(gateway): State<ItemState>) -> ApiResult<Json<Vec<Item>>> {
    let items = gateway.list_all().await?;
    Ok(Json(items))
}

async fn create_item_handler(
    State(gateway): State<ItemState>,
    ItemJson(item): ItemJson<ItemCreate>,
) -> ApiResult<Json<Item>> {
    let created = gateway.insert(item).await?;
    Ok(Json(created))
}

async fn get_item_handler(
    State(gateway): State<ItemState>,
    ItemId(id): ItemId,
) -> ApiResult<Json<Item>> {
    let item = gateway.find_by_id(&id).await?;
    Ok(Json(item))
}

/// The body is a full record; its `id` is ignored in favour of the path.
async fn update_item_handler(
    State(gateway): State<ItemState>,
    ItemId(id): ItemId,
    ItemJson(item): ItemJson<Item>,
) -> ApiResult<Json<Item>> {
    let updated = gateway.update_by_id(&id, item).await?;
    Ok(Json(updated))
}

async fn delete_item_handler(
    State(gateway): State<ItemState>,
    ItemId(id): ItemId,
) -> ApiResult<Json<MessageResponse>> {
    gateway.delete_by_id(&id).await?;
    Ok(Json(MessageResponse::new("Item deleted successfully")))
}
