use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A single recorded workout. Append-only: events are never mutated after
/// creation, and the aggregation core only ever reads them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct WorkoutEvent {
    pub id: Uuid,
    pub user_id: Uuid,
    /// When the workout happened, as recorded by the client.
    pub occurred_at: DateTime<Utc>,
    /// Duration in minutes. Non-negative, validated upstream.
    pub duration_minutes: i32,
    /// Calories burned, if the client reported them. Missing counts as 0.
    pub calories_burned: Option<i32>,
    pub workout_type: Option<String>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl WorkoutEvent {
    pub fn calories(&self) -> i32 {
        self.calories_burned.unwrap_or(0)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateWorkoutEvent {
    pub user_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub duration_minutes: i32,
    pub calories_burned: Option<i32>,
    pub workout_type: Option<String>,
    pub notes: Option<String>,
}
