use poem_openapi::Object;

use business::domain::checkout::pricing::OrderSummary;

use crate::api::product::dto::ProductResponse;

/// Priced order shown before confirmation.
#[derive(Debug, Clone, Object)]
pub struct OrderSummaryResponse {
    /// Billed products, one per cart entry
    pub products: Vec<ProductResponse>,
    /// Sum of item prices
    pub order_total: i64,
    pub shipping_fee: i64,
    /// Order total plus shipping fee
    pub total_price: i64,
    /// Cart entries left out because the catalog no longer has their product
    pub unresolved_entries: u64,
}

impl From<OrderSummary> for OrderSummaryResponse {
    fn from(summary: OrderSummary) -> Self {
        Self {
            products: summary.products.into_iter().map(Into::into).collect(),
            order_total: summary.order_total,
            shipping_fee: summary.shipping_fee,
            total_price: summary.total_price,
            unresolved_entries: summary.unresolved_entries as u64,
        }
    }
}
