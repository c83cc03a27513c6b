use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::{CreateWorkoutEvent, WorkoutEvent};
use crate::services::AnalyticsError;

/// Append-only store for workout events. Events are the primary record;
/// everything in the analytics summary can be rebuilt from them.
#[derive(Clone)]
pub struct WorkoutEventService {
    db: PgPool,
}

impl WorkoutEventService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Insert a validated event. The id and creation timestamp are assigned
    /// here; `created_at` doubles as the tie-break for events sharing an
    /// occurrence timestamp.
    pub async fn create_event(
        &self,
        event_data: CreateWorkoutEvent,
    ) -> Result<WorkoutEvent, AnalyticsError> {
        let event = WorkoutEvent {
            id: Uuid::new_v4(),
            user_id: event_data.user_id,
            occurred_at: event_data.occurred_at,
            duration_minutes: event_data.duration_minutes,
            calories_burned: event_data.calories_burned,
            workout_type: event_data.workout_type,
            notes: event_data.notes,
            created_at: Utc::now(),
        };

        sqlx::query(
            r#"
            INSERT INTO workout_events (id, user_id, occurred_at, duration_minutes, calories_burned, workout_type, notes, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(event.id)
        .bind(event.user_id)
        .bind(event.occurred_at)
        .bind(event.duration_minutes)
        .bind(event.calories_burned)
        .bind(&event.workout_type)
        .bind(&event.notes)
        .bind(event.created_at)
        .execute(&self.db)
        .await
        .map_err(|source| AnalyticsError::EventInsert {
            user_id: event.user_id,
            source,
        })?;

        Ok(event)
    }

    pub async fn get_event_by_id(
        &self,
        event_id: Uuid,
    ) -> Result<Option<WorkoutEvent>, AnalyticsError> {
        let event = sqlx::query_as::<_, WorkoutEvent>(
            "SELECT id, user_id, occurred_at, duration_minutes, calories_burned, workout_type, notes, created_at FROM workout_events WHERE id = $1",
        )
        .bind(event_id)
        .fetch_optional(&self.db)
        .await?;

        Ok(event)
    }

    /// Full per-user history in fold order: ascending occurrence timestamp,
    /// creation order breaking ties.
    pub async fn get_events_by_user_id(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<WorkoutEvent>, AnalyticsError> {
        let events = sqlx::query_as::<_, WorkoutEvent>(
            "SELECT id, user_id, occurred_at, duration_minutes, calories_burned, workout_type, notes, created_at FROM workout_events WHERE user_id = $1 ORDER BY occurred_at ASC, created_at ASC",
        )
        .bind(user_id)
        .fetch_all(&self.db)
        .await
        .map_err(|source| AnalyticsError::HistoryLoad { user_id, source })?;

        Ok(events)
    }

    pub async fn count_events_by_user_id(&self, user_id: Uuid) -> Result<i64, AnalyticsError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM workout_events WHERE user_id = $1")
            .bind(user_id)
            .fetch_one(&self.db)
            .await?;

        Ok(count)
    }
}
