use crate::error::{ApiError, ErrorResponse};
use crate::models::{CreateItemRequest, Item};
use crate::routes;
use crate::state::AppState;
use axum::{extract::rejection::JsonRejection, extract::State, http::StatusCode, Json};

/// POST /api/items handler - Create an item
///
/// The id is assigned by the server. `inStock` and `rating` are always
/// `true` and `0` on a new item, whatever the body says.
#[utoipa::path(
    post,
    path = routes::ITEMS,
    request_body = CreateItemRequest,
    responses(
        (status = 201, description = "Item created", body = Item),
        (status = 400, description = "Missing required field or invalid JSON", body = ErrorResponse),
        (status = 500, description = "Data file could not be read or written", body = ErrorResponse)
    ),
    tag = "items"
)]
pub async fn create_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateItemRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Item>), ApiError> {
    let Json(request) = payload?;
    let new_item = request.validate().map_err(ApiError::Validation)?;

    let item = state
        .catalog
        .create(new_item)
        .await
        .map_err(ApiError::storage("Failed to create item"))?;

    tracing::info!("Successfully created item with id: {}", item.id);
    Ok((StatusCode::CREATED, Json(item)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::test_support::{send, setup_test_app};
    use crate::models::{NewItem, DEFAULT_CATEGORY, DEFAULT_IMAGE};
    use crate::store::{ItemStore, MemoryStore};
    use axum::{body::Body, http::Request};
    use serde_json::json;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn existing(id: u64) -> Item {
        Item::from_new(
            id,
            NewItem {
                name: format!("item {}", id),
                description: "seed".to_string(),
                price: 5.0,
                image: DEFAULT_IMAGE.to_string(),
                category: DEFAULT_CATEGORY.to_string(),
            },
        )
    }

    #[tokio::test]
    async fn test_create_endpoint_first_item_gets_id_one() {
        let app = setup_test_app(Arc::new(MemoryStore::default()));

        let (status, body) = send(
            &app,
            "POST",
            "/api/items",
            Some(json!({"name": "Pen", "description": "Blue ink", "price": 1.5})),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        let item: Item = serde_json::from_value(body).unwrap();
        assert_eq!(item.id, 1);
        assert_eq!(item.image, DEFAULT_IMAGE);
        assert_eq!(item.category, DEFAULT_CATEGORY);
        assert!(item.in_stock);
        assert_eq!(item.rating, 0.0);
    }

    #[tokio::test]
    async fn test_create_endpoint_uses_max_id_plus_one() {
        let store = Arc::new(MemoryStore::with_items(vec![existing(2), existing(9), existing(4)]));
        let app = setup_test_app(store.clone());

        let (status, body) = send(
            &app,
            "POST",
            "/api/items",
            Some(json!({
                "name": "Lamp",
                "description": "Desk lamp",
                "price": "24.99",
                "image": "https://example.com/lamp.png",
                "category": "Home",
                "inStock": false,
                "rating": 5
            })),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        let item: Item = serde_json::from_value(body).unwrap();
        assert_eq!(item.id, 10);
        assert_eq!(item.price, 24.99);
        assert_eq!(item.image, "https://example.com/lamp.png");
        assert_eq!(item.category, "Home");
        assert!(item.in_stock);
        assert_eq!(item.rating, 0.0);

        let (status, fetched) = send(&app, "GET", "/api/items/10", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(serde_json::from_value::<Item>(fetched).unwrap(), item);
        assert_eq!(store.read_all().await.unwrap().len(), 4);
    }

    #[tokio::test]
    async fn test_create_endpoint_missing_fields() {
        let store = Arc::new(MemoryStore::with_items(vec![existing(1)]));
        let app = setup_test_app(store.clone());

        for body in [
            json!({"description": "d", "price": 1}),
            json!({"name": "n", "price": 1}),
            json!({"name": "n", "description": "d"}),
            json!({"name": "n", "description": "d", "price": 0}),
            json!({}),
        ] {
            let (status, response) = send(&app, "POST", "/api/items", Some(body.clone())).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "body: {}", body);
            assert_eq!(
                response,
                json!({"error": "Name, description, and price are required"})
            );
        }

        assert_eq!(store.read_all().await.unwrap(), vec![existing(1)]);
    }

    #[tokio::test]
    async fn test_create_endpoint_invalid_json() {
        let app = setup_test_app(Arc::new(MemoryStore::default()));

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/items")
                    .header("content-type", "application/json")
                    .body(Body::from("{invalid json}"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error_response: ErrorResponse = serde_json::from_slice(&body).unwrap();
        assert!(error_response.error.contains("Invalid request body"));
    }

    #[tokio::test]
    async fn test_create_endpoint_wrong_field_type() {
        let app = setup_test_app(Arc::new(MemoryStore::default()));

        let (status, _) = send(
            &app,
            "POST",
            "/api/items",
            Some(json!({"name": 42, "description": "d", "price": 1})),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_create_endpoint_id_overflow() {
        let store = Arc::new(MemoryStore::with_items(vec![existing(u64::MAX)]));
        let app = setup_test_app(store.clone());

        let (status, body) = send(
            &app,
            "POST",
            "/api/items",
            Some(json!({"name": "Pen", "description": "Blue ink", "price": 1.5})),
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({"error": "Failed to create item"}));
        assert_eq!(store.read_all().await.unwrap(), vec![existing(u64::MAX)]);
    }

    #[tokio::test]
    async fn test_create_endpoint_write_failure() {
        let app = setup_test_app(Arc::new(MemoryStore::failing_writes()));

        let (status, body) = send(
            &app,
            "POST",
            "/api/items",
            Some(json!({"name": "Pen", "description": "Blue ink", "price": 1.5})),
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({"error": "Failed to create item"}));
    }
}
