use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::cart::listing::{CartEntryDetail, CartLine};

use crate::api::product::dto::ProductResponse;

#[derive(Debug, Clone, Object)]
pub struct CartLineResponse {
    /// Cart entry identifier, used for the delete flow
    pub entry_id: String,
    pub product_id: String,
    pub created_at: DateTime<Utc>,
    /// Absent when the catalog no longer returns the product
    #[oai(skip_serializing_if_is_none)]
    pub product: Option<ProductResponse>,
}

impl From<CartLine> for CartLineResponse {
    fn from(line: CartLine) -> Self {
        Self {
            entry_id: line.entry.id.to_string(),
            product_id: line.entry.product_id.to_string(),
            created_at: line.entry.created_at,
            product: line.product.map(Into::into),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct CartResponse {
    pub lines: Vec<CartLineResponse>,
    /// Number of cart entries, repeated products included
    pub count: u64,
}

impl From<Vec<CartLine>> for CartResponse {
    fn from(lines: Vec<CartLine>) -> Self {
        Self {
            count: lines.len() as u64,
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }
}

/// Delete confirmation view of one cart entry.
#[derive(Debug, Clone, Object)]
pub struct CartEntryDetailResponse {
    pub entry_id: String,
    pub product_id: String,
    #[oai(skip_serializing_if_is_none)]
    pub product: Option<ProductResponse>,
    /// Full size product image
    #[oai(skip_serializing_if_is_none)]
    pub image_url: Option<String>,
}

impl From<CartEntryDetail> for CartEntryDetailResponse {
    fn from(detail: CartEntryDetail) -> Self {
        Self {
            entry_id: detail.entry.id.to_string(),
            product_id: detail.entry.product_id.to_string(),
            product: detail.product.map(Into::into),
            image_url: detail.image_url,
        }
    }
}
