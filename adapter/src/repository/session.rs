use crate::database::{model::session::SessionRow, ConnectionPool};
use async_trait::async_trait;
use derive_new::new;
use kernel::model::session::{CurrentSession, SessionToken};
use kernel::repository::session::SessionRepository;
use shared::error::{AppError, AppResult};

#[derive(new)]
pub struct SessionRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl SessionRepository for SessionRepositoryImpl {
    async fn find_current(&self, token: &SessionToken) -> AppResult<Option<CurrentSession>> {
        sqlx::query_as::<_, SessionRow>(
            r#"
                SELECT
                    s.session_id,
                    s.expires_at,
                    u.user_id,
                    u.user_name,
                    u.email
                FROM sessions AS s
                INNER JOIN users AS u ON s.user_id = u.user_id
                WHERE s.token = $1
                  AND s.expires_at > CURRENT_TIMESTAMP
            "#,
        )
        .bind(token.as_str())
        .fetch_optional(self.db.inner_ref())
        .await
        .map(|row| row.map(CurrentSession::from))
        .map_err(AppError::SpecificOperationError)
    }

    async fn delete(&self, token: &SessionToken) -> AppResult<()> {
        let res = sqlx::query("DELETE FROM sessions WHERE token = $1")
            .bind(token.as_str())
            .execute(self.db.inner_ref())
            .await
            .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound("session not found".into()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kernel::model::id::UserId;

    async fn insert_session(
        pool: &sqlx::PgPool,
        token: &str,
        expires_in: &str,
    ) -> anyhow::Result<UserId> {
        let user_id = UserId::new();
        sqlx::query("INSERT INTO users (user_id, user_name, email) VALUES ($1, 'grace', $2)")
            .bind(user_id)
            .bind(format!("{token}@example.com"))
            .execute(pool)
            .await?;
        sqlx::query(
            "INSERT INTO sessions (token, user_id, expires_at)
             VALUES ($1, $2, CURRENT_TIMESTAMP + $3::interval)",
        )
        .bind(token)
        .bind(user_id)
        .bind(expires_in)
        .execute(pool)
        .await?;
        Ok(user_id)
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requires DATABASE_URL"]
    async fn test_find_and_delete_session(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let user_id = insert_session(&pool, "live-token", "1 hour").await?;
        let repo = SessionRepositoryImpl::new(ConnectionPool::new(pool));
        let token = SessionToken::new("live-token");

        let session = repo.find_current(&token).await?.unwrap();
        assert_eq!(session.user.user_id, user_id);
        assert_eq!(session.user.user_name, "grace");

        repo.delete(&token).await?;
        assert!(repo.find_current(&token).await?.is_none());
        assert!(matches!(
            repo.delete(&token).await,
            Err(AppError::EntityNotFound(_))
        ));

        Ok(())
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requires DATABASE_URL"]
    async fn test_expired_session_is_absent(pool: sqlx::PgPool) -> anyhow::Result<()> {
        insert_session(&pool, "stale-token", "-1 hour").await?;
        let repo = SessionRepositoryImpl::new(ConnectionPool::new(pool));

        assert!(repo
            .find_current(&SessionToken::new("stale-token"))
            .await?
            .is_none());

        Ok(())
    }
}
