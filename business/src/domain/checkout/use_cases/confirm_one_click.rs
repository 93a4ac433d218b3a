use async_trait::async_trait;

use crate::domain::checkout::errors::CheckoutError;
use crate::domain::checkout::pricing::OrderSummary;

use super::view_one_click::OneClickCheckoutParams;

/// Confirms a single-item purchase. The cart is never touched.
#[async_trait]
pub trait ConfirmOneClickCheckoutUseCase: Send + Sync {
    async fn execute(&self, params: OneClickCheckoutParams)
    -> Result<OrderSummary, CheckoutError>;
}
