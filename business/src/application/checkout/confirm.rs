use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::repository::CartRepository;
use crate::domain::checkout::errors::CheckoutError;
use crate::domain::checkout::use_cases::confirm::ConfirmCheckoutUseCase;
use crate::domain::logger::Logger;

pub struct ConfirmCheckoutUseCaseImpl {
    pub cart_repository: Arc<dyn CartRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ConfirmCheckoutUseCase for ConfirmCheckoutUseCaseImpl {
    async fn execute(&self) -> Result<u64, CheckoutError> {
        self.logger.info("Confirming checkout");

        let count = self.cart_repository.delete_all().await?;

        self.logger
            .info(&format!("Checkout complete, cleared {} cart entries", count));
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cart::model::CartEntry;
    use crate::domain::errors::RepositoryError;
    use mockall::mock;
    use uuid::Uuid;

    mock! {
        pub CartRepo {}

        #[async_trait]
        impl CartRepository for CartRepo {
            async fn get_all(&self) -> Result<Vec<CartEntry>, RepositoryError>;
            async fn get_by_id(&self, id: Uuid) -> Result<CartEntry, RepositoryError>;
            async fn count(&self) -> Result<u64, RepositoryError>;
            async fn save(&self, entry: &CartEntry) -> Result<(), RepositoryError>;
            async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
            async fn delete_all(&self) -> Result<u64, RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    #[tokio::test]
    async fn should_clear_whole_cart() {
        let mut mock_repo = MockCartRepo::new();
        mock_repo.expect_delete_all().times(1).returning(|| Ok(3));

        let use_case = ConfirmCheckoutUseCaseImpl {
            cart_repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        assert_eq!(use_case.execute().await.unwrap(), 3);
    }

    #[tokio::test]
    async fn should_succeed_when_cart_already_empty() {
        let mut mock_repo = MockCartRepo::new();
        mock_repo.expect_delete_all().returning(|| Ok(0));

        let use_case = ConfirmCheckoutUseCaseImpl {
            cart_repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        assert_eq!(use_case.execute().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn should_fail_when_cart_cannot_be_cleared() {
        let mut mock_repo = MockCartRepo::new();
        mock_repo
            .expect_delete_all()
            .returning(|| Err(RepositoryError::DatabaseError));

        let use_case = ConfirmCheckoutUseCaseImpl {
            cart_repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        assert!(matches!(
            use_case.execute().await.unwrap_err(),
            CheckoutError::Repository(RepositoryError::DatabaseError)
        ));
    }
}
