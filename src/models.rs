use serde::{Deserialize, Serialize, Serializer};

/// Image used when a new item does not supply one
pub const DEFAULT_IMAGE: &str =
    "https://images.unsplash.com/photo-1505740420928-5e560c06d30e?w=400";

/// Category used when a new item does not supply one
pub const DEFAULT_CATEGORY: &str = "Electronics";

/// A persisted item record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: u64,
    pub name: String,
    pub description: String,
    #[serde(serialize_with = "serialize_number")]
    pub price: f64,
    pub image: String,
    pub category: String,
    pub in_stock: bool,
    #[serde(serialize_with = "serialize_number")]
    pub rating: f64,
}

/// Largest integer an f64 holds exactly (2^53)
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Write integral values as JSON integers (`0`, not `0.0`).
fn serialize_number<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.fract() == 0.0 && value.abs() <= MAX_EXACT_INTEGER {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}

impl Item {
    /// Materialize a validated payload under the given id.
    ///
    /// New items always start in stock with a zero rating.
    pub fn from_new(id: u64, new_item: NewItem) -> Self {
        Item {
            id,
            name: new_item.name,
            description: new_item.description,
            price: new_item.price,
            image: new_item.image,
            category: new_item.category,
            in_stock: true,
            rating: 0.0,
        }
    }
}

/// Price as sent by a client: either a JSON number or a numeric string
#[derive(Debug, Clone, PartialEq, Deserialize, utoipa::ToSchema)]
#[serde(untagged)]
pub enum PriceInput {
    Number(f64),
    Text(String),
}

impl PriceInput {
    /// Coerce to a float. Zero, non-finite and unparseable values yield `None`.
    fn to_price(&self) -> Option<f64> {
        let value = match self {
            PriceInput::Number(n) => *n,
            PriceInput::Text(s) => s.trim().parse::<f64>().ok()?,
        };
        (value.is_finite() && value != 0.0).then_some(value)
    }
}

/// Request body for POST /api/items
///
/// Every field is optional at the wire level so that missing required
/// fields surface as a validation error rather than a decode error.
/// `id`, `inStock` and `rating` are not accepted from callers.
#[derive(Debug, Default, Deserialize, utoipa::ToSchema)]
pub struct CreateItemRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<PriceInput>,
    pub image: Option<String>,
    pub category: Option<String>,
}

/// Creation payload after validation and defaulting
#[derive(Debug, Clone, PartialEq)]
pub struct NewItem {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub image: String,
    pub category: String,
}

/// Message returned when a required creation field is missing
pub const REQUIRED_FIELDS_MESSAGE: &str = "Name, description, and price are required";

impl CreateItemRequest {
    pub fn validate(self) -> Result<NewItem, &'static str> {
        let name = self.name.filter(|s| !s.is_empty());
        let description = self.description.filter(|s| !s.is_empty());
        let price = self.price.as_ref().and_then(PriceInput::to_price);

        let (Some(name), Some(description), Some(price)) = (name, description, price) else {
            return Err(REQUIRED_FIELDS_MESSAGE);
        };

        Ok(NewItem {
            name,
            description,
            price,
            image: non_empty_or(self.image, DEFAULT_IMAGE),
            category: non_empty_or(self.category, DEFAULT_CATEGORY),
        })
    }
}

fn non_empty_or(value: Option<String>, default: &str) -> String {
    value
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| default.to_string())
}

/// Response type for health check endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
}
