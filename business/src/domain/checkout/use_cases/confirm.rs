use async_trait::async_trait;

use crate::domain::checkout::errors::CheckoutError;

/// Completes a cart checkout by emptying the cart. Returns the number of
/// entries removed.
#[async_trait]
pub trait ConfirmCheckoutUseCase: Send + Sync {
    async fn execute(&self) -> Result<u64, CheckoutError>;
}
