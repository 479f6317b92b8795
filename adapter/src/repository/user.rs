use crate::database::{model::event::EventRow, ConnectionPool};
use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    event::{event::RegisterForEvent, Event},
    id::UserId,
};
use kernel::repository::user::UserRepository;
use shared::error::{AppError, AppResult};

#[derive(new)]
pub struct UserRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl UserRepository for UserRepositoryImpl {
    async fn find_registered_events(&self, user_id: UserId) -> AppResult<Option<Vec<Event>>> {
        let user = sqlx::query_scalar::<_, UserId>(
            r#"
                SELECT user_id FROM users WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        if user.is_none() {
            return Ok(None);
        }

        let events = sqlx::query_as::<_, EventRow>(
            r#"
                SELECT
                    e.event_id,
                    e.name,
                    e.event_date,
                    e.registrations_open,
                    e.event_url
                FROM user_registered_events AS ure
                INNER JOIN events AS e ON ure.event_id = e.event_id
                WHERE ure.user_id = $1
                ORDER BY ure.registered_seq ASC
            "#,
        )
        .bind(user_id)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?
        .into_iter()
        .map(Event::from)
        .collect();

        Ok(Some(events))
    }

    async fn connect_event(&self, event: RegisterForEvent) -> AppResult<()> {
        // An unknown user or event fails on the foreign keys. An existing
        // registration is left untouched.
        sqlx::query(
            r#"
                INSERT INTO user_registered_events (user_id, event_id)
                VALUES ($1, $2)
                ON CONFLICT (user_id, event_id) DO NOTHING
            "#,
        )
        .bind(event.user_id)
        .bind(event.event_id)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(())
    }
}
