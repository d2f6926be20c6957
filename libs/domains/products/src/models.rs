use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Product entity - the persisted, server-owned representation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    /// Unique identifier, assigned by the repository on creation
    pub id: Uuid,
    /// Product name
    pub name: String,
    /// Product price
    pub price: f64,
}

/// DTO for creating a new product
///
/// Carries no identifier: the repository assigns one. Any id a client sends
/// is dropped during deserialization.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateProduct {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(range(min = 0.0))]
    pub price: f64,
}

/// DTO for updating an existing product
///
/// Replaces all mutable fields. The optional id, when present, must agree
/// with the path id; the service rejects a mismatch.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateProduct {
    pub id: Option<Uuid>,
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(range(min = 0.0))]
    pub price: f64,
}

impl Product {
    /// Create a new product from a CreateProduct DTO, assigning a fresh id
    pub fn new(input: CreateProduct) -> Self {
        Self {
            id: Uuid::now_v7(),
            name: input.name,
            price: input.price,
        }
    }

    /// Replace the mutable fields from an UpdateProduct DTO; id is immutable
    pub fn apply_update(&mut self, update: UpdateProduct) {
        self.name = update.name;
        self.price = update.price;
    }
}
