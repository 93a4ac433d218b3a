use async_trait::async_trait;

use crate::domain::checkout::errors::CheckoutError;
use crate::domain::checkout::pricing::OrderSummary;

pub struct OneClickCheckoutParams {
    pub item_code: String,
}

#[async_trait]
pub trait ViewOneClickCheckoutUseCase: Send + Sync {
    async fn execute(&self, params: OneClickCheckoutParams)
    -> Result<OrderSummary, CheckoutError>;
}
