use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Running totals over every workout a user has ever logged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkoutTotals {
    pub workout_count: i64,
    pub total_duration_minutes: i64,
    pub total_calories_burned: i64,
}

/// Rollup of all workouts on one calendar day. Buckets are created the first
/// time an event lands on a day and are never removed afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyBucket {
    pub date: NaiveDate,
    pub workout_count: i64,
    pub total_duration_minutes: i64,
    pub total_calories_burned: i64,
    /// Contributing events in the order they were folded.
    pub event_ids: Vec<Uuid>,
}

/// Rollup of the Sunday-to-Saturday week containing the most recently folded
/// event. Only one window is kept; when an event lands in a different week the
/// window is replaced wholesale, not merged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyWindow {
    /// Always a Sunday.
    pub week_start: NaiveDate,
    /// The following Saturday at 23:59:59.999.
    pub week_end: NaiveDateTime,
    pub workout_count: i64,
    pub total_duration_minutes: i64,
    pub total_calories_burned: i64,
    pub event_ids: Vec<Uuid>,
}

/// Consecutive-day workout streak, tracked over calendar days rather than
/// events: any number of workouts on one day contributes exactly once.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StreakState {
    pub current_streak: u32,
    pub longest_streak: u32,
    pub last_counted_day: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyMeasurement {
    pub recorded_at: DateTime<Utc>,
    pub weight_kg: Option<f64>,
    pub body_fat_percent: Option<f64>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FitnessScore {
    pub recorded_at: DateTime<Utc>,
    pub score: f64,
    pub category: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AchievementCategory {
    FirstWorkout,
    ConsistencyMilestone,
    VolumeMilestone,
    PersonalBest,
    ChallengeCompleted,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Achievement {
    pub id: Uuid,
    pub category: AchievementCategory,
    pub title: String,
    pub description: Option<String>,
    pub awarded_at: DateTime<Utc>,
}

/// Per-user aggregate root. One summary exists per user, created lazily on the
/// first workout (or first reference) and persisted as a single document.
///
/// The fold path maintains `totals`, `streak`, `weekly_window` and
/// `daily_buckets`; the measurement/score/achievement collections are managed
/// by dedicated service operations and survive a rebuild untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsSummary {
    pub user_id: Uuid,
    pub totals: WorkoutTotals,
    pub streak: StreakState,
    pub weekly_window: Option<WeeklyWindow>,
    pub daily_buckets: Vec<DailyBucket>,
    #[serde(default)]
    pub body_measurements: Vec<BodyMeasurement>,
    #[serde(default)]
    pub fitness_scores: Vec<FitnessScore>,
    #[serde(default)]
    pub achievements: Vec<Achievement>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl AnalyticsSummary {
    /// Fresh summary with zeroed totals, no buckets, no window, streak unset.
    pub fn empty(user_id: Uuid) -> Self {
        let now = Utc::now();
        Self {
            user_id,
            totals: WorkoutTotals::default(),
            streak: StreakState::default(),
            weekly_window: None,
            daily_buckets: Vec::new(),
            body_measurements: Vec::new(),
            fitness_scores: Vec::new(),
            achievements: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn bucket_for_day(&self, date: NaiveDate) -> Option<&DailyBucket> {
        self.daily_buckets.iter().find(|b| b.date == date)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordBodyMeasurementRequest {
    pub user_id: Uuid,
    pub weight_kg: Option<f64>,
    pub body_fat_percent: Option<f64>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordFitnessScoreRequest {
    pub user_id: Uuid,
    pub score: f64,
    pub category: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AwardAchievementRequest {
    pub user_id: Uuid,
    pub category: AchievementCategory,
    pub title: String,
    pub description: Option<String>,
}

/// Compact read model for the dashboard: totals, streak, this week (only if
/// the stored window still covers today), and today's bucket.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsOverview {
    pub user_id: Uuid,
    pub totals: WorkoutTotals,
    pub current_streak: u32,
    pub longest_streak: u32,
    pub this_week: Option<WeeklyWindow>,
    pub today: Option<DailyBucket>,
}
