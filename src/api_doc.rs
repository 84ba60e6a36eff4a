use utoipa::OpenApi;

use crate::error::ErrorResponse;
use crate::handlers;
use crate::models::{CreateItemRequest, HealthResponse, Item, PriceInput};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "rust-items-api",
        version = "1.0.0",
        description = "Item catalog API backed by a single JSON document"
    ),
    paths(
        handlers::health::health_handler,
        handlers::list::list_handler,
        handlers::get::get_handler,
        handlers::create::create_handler
    ),
    components(
        schemas(
            Item,
            CreateItemRequest,
            PriceInput,
            ErrorResponse,
            HealthResponse
        )
    ),
    tags(
        (name = "health", description = "Health check operations"),
        (name = "items", description = "Item catalog operations")
    )
)]
pub struct ApiDoc;
