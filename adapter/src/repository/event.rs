use crate::database::{model::event::EventRow, ConnectionPool};
use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    event::{
        event::{CreateEvent, UpdateEvent},
        Event,
    },
    id::EventId,
};
use kernel::repository::event::EventRepository;
use shared::error::{AppError, AppResult};

#[derive(new)]
pub struct EventRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl EventRepository for EventRepositoryImpl {
    async fn create(&self, event: CreateEvent) -> AppResult<EventId> {
        let event_id = EventId::new();
        let res = sqlx::query(
            r#"
                INSERT INTO events (event_id, name, event_date, registrations_open, event_url)
                VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(event_id)
        .bind(&event.name)
        .bind(event.event_date)
        .bind(event.registrations_open)
        .bind(&event.event_url)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "No event record has been created".into(),
            ));
        }

        Ok(event_id)
    }

    async fn update(&self, event: UpdateEvent) -> AppResult<()> {
        // NULL leaves the column as it is
        let res = sqlx::query(
            r#"
                UPDATE events
                SET
                    registrations_open = COALESCE($2, registrations_open),
                    event_url = COALESCE($3, event_url)
                WHERE event_id = $1
            "#,
        )
        .bind(event.event_id)
        .bind(event.registrations_open)
        .bind(&event.event_url)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound(format!(
                "event ({}) was not found",
                event.event_id
            )));
        }

        Ok(())
    }

    async fn find_all(&self) -> AppResult<Vec<Event>> {
        sqlx::query_as::<_, EventRow>(
            r#"
                SELECT
                    event_id,
                    name,
                    event_date,
                    registrations_open,
                    event_url
                FROM events
                ORDER BY created_at ASC, event_id ASC
            "#,
        )
        .fetch_all(self.db.inner_ref())
        .await
        .map(|rows| rows.into_iter().map(Event::from).collect())
        .map_err(AppError::SpecificOperationError)
    }

    async fn find_by_id(&self, event_id: EventId) -> AppResult<Option<Event>> {
        sqlx::query_as::<_, EventRow>(
            r#"
                SELECT
                    event_id,
                    name,
                    event_date,
                    registrations_open,
                    event_url
                FROM events
                WHERE event_id = $1
            "#,
        )
        .bind(event_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map(|row| row.map(Event::from))
        .map_err(AppError::SpecificOperationError)
    }
}
