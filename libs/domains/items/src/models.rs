use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// A stored inventory item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Item {
    /// Identifier assigned by the store on creation
    #[schema(example = 1)]
    pub id: i64,
    /// Unique item name
    #[schema(example = "magic sword")]
    pub name: String,
    /// Free-form description
    #[schema(example = "a mighty sword")]
    pub description: Option<String>,
}

/// Request body for creating an item
///
/// Any `id` sent by the client is ignored.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateItem {
    #[validate(length(min = 1))]
    #[schema(example = "magic sword")]
    pub name: String,
    #[serde(default)]
    #[schema(example = "a mighty sword")]
    pub description: Option<String>,
}
