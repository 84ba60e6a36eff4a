use crate::error::{ApiError, ErrorResponse};
use crate::models::Item;
use crate::routes;
use crate::state::AppState;
use axum::{extract::Path, extract::State, http::StatusCode, Json};

/// GET /api/items/{id} handler - Retrieve one item
///
/// The id is read from its leading digits, so `/api/items/7abc` and
/// `/api/items/7.5` both look up item 7. An id without leading digits
/// can never match and yields 404.
#[utoipa::path(
    get,
    path = routes::ITEM,
    params(
        ("id" = u64, Path, description = "Numeric item id")
    ),
    responses(
        (status = 200, description = "Item found", body = Item),
        (status = 404, description = "Item not found", body = ErrorResponse),
        (status = 500, description = "Data file could not be read", body = ErrorResponse)
    ),
    tag = "items"
)]
pub async fn get_handler(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<(StatusCode, Json<Item>), ApiError> {
    let Some(id) = parse_item_id(&id_str) else {
        tracing::info!("Item lookup without a numeric id: {}", id_str);
        return Err(ApiError::ItemNotFound);
    };

    match state
        .catalog
        .get(id)
        .await
        .map_err(ApiError::storage("Failed to fetch item"))?
    {
        Some(item) => {
            tracing::info!("Successfully retrieved item with id: {}", id);
            Ok((StatusCode::OK, Json(item)))
        }
        None => {
            tracing::info!("Item not found with id: {}", id);
            Err(ApiError::ItemNotFound)
        }
    }
}

/// Leading-integer parse of a path id.
///
/// Skips leading whitespace and an optional `+`, then reads decimal digits
/// up to the first non-digit. Negative values never name an item.
fn parse_item_id(raw: &str) -> Option<u64> {
    let trimmed = raw.trim_start();
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let digits_end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());

    unsigned[..digits_end].parse::<u64>().ok()
}
