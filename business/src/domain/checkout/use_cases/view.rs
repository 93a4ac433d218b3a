use async_trait::async_trait;

use crate::domain::checkout::errors::CheckoutError;
use crate::domain::checkout::pricing::CheckoutView;

#[async_trait]
pub trait ViewCheckoutUseCase: Send + Sync {
    async fn execute(&self) -> Result<CheckoutView, CheckoutError>;
}
