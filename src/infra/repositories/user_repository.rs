//! User repository: lookup used by the authentication layer.

use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Select};

use super::entities::user::{self, Entity as UserEntity};
use crate::domain::User;
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by exact email match. Absent user is `Ok(None)`, never an
    /// error. Case sensitivity follows the store's collation (Postgres
    /// default: case-sensitive).
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;
}

/// Concrete implementation of UserRepository
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn by_email_query(email: &str) -> Select<UserEntity> {
        UserEntity::find().filter(user::Column::Email.eq(email))
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let result = Self::by_email_query(email)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(User::from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::{AppError, OptionExt};
    use sea_orm::{DbBackend, QueryTrait};

    #[test]
    fn lookup_is_exact_equality_on_email() {
        let sql = UserStore::by_email_query("x@example.com")
            .build(DbBackend::Postgres)
            .to_string();

        assert!(sql.contains(r#""users"."email" = 'x@example.com'"#));
        // collation decides case sensitivity; no folding is applied here
        assert!(!sql.contains("LOWER"));
    }

    #[tokio::test]
    async fn absent_user_is_empty_until_the_caller_requires_one() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email().returning(|_| Ok(None));

        let repo: &dyn UserRepository = &repo;
        let found = repo.find_by_email("absent@example.com").await.unwrap();
        assert!(found.is_none());

        // the auth layer turns the empty result into NotFound itself
        let err = found.ok_or_not_found().unwrap_err();
        assert!(matches!(err, AppError::NotFound));
    }
}
