use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::cart::model::CartEntry;
use business::domain::shared::value_objects::ProductId;

#[derive(Debug, FromRow)]
pub struct CartEntryEntity {
    pub id: Uuid,
    pub product_id: String,
    pub created_at: DateTime<Utc>,
}

impl CartEntryEntity {
    pub fn into_domain(self) -> CartEntry {
        CartEntry::from_repository(self.id, ProductId::new(self.product_id), self.created_at)
    }
}
