use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::shared::value_objects::ProductId;

use super::errors::CartError;

/// One row of the cart. Quantity is expressed by repeating rows.
#[derive(Debug, Clone, PartialEq)]
pub struct CartEntry {
    pub id: Uuid,
    pub product_id: ProductId,
    pub created_at: DateTime<Utc>,
}

impl CartEntry {
    pub fn new(product_id: ProductId) -> Result<Self, CartError> {
        if product_id.is_blank() {
            return Err(CartError::ProductIdEmpty);
        }

        Ok(Self {
            id: Uuid::new_v4(),
            product_id,
            created_at: Utc::now(),
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(id: Uuid, product_id: ProductId, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            product_id,
            created_at,
        }
    }
}
