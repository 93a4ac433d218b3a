use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::delete::{DeleteCartEntryParams, DeleteCartEntryUseCase};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;

pub struct DeleteCartEntryUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteCartEntryUseCase for DeleteCartEntryUseCaseImpl {
    async fn execute(&self, params: DeleteCartEntryParams) -> Result<(), CartError> {
        self.logger
            .info(&format!("Deleting cart entry: {}", params.id));

        self.repository
            .delete(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => CartError::NotFound,
                other => CartError::Repository(other),
            })?;

        self.logger
            .info(&format!("Cart entry deleted: {}", params.id));
        Ok(())
    }
}
