use thiserror::Error;
use uuid::Uuid;

/// Storage-boundary failures surfaced by the analytics services. Every
/// variant means "aggregation failed, the stored summary was not updated";
/// callers choose between retrying, dropping the update (analytics is
/// best-effort relative to the primary workout record) and alerting.
#[derive(Error, Debug)]
pub enum AnalyticsError {
    #[error("Failed to load analytics summary for user {user_id}")]
    SummaryLoad {
        user_id: Uuid,
        #[source]
        source: sqlx::Error,
    },
    #[error("Failed to save analytics summary for user {user_id}")]
    SummarySave {
        user_id: Uuid,
        #[source]
        source: sqlx::Error,
    },
    #[error("Failed to load workout history for user {user_id}")]
    HistoryLoad {
        user_id: Uuid,
        #[source]
        source: sqlx::Error,
    },
    #[error("Failed to record workout event for user {user_id}")]
    EventInsert {
        user_id: Uuid,
        #[source]
        source: sqlx::Error,
    },
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}
