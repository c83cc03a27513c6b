//! Pure aggregation core: folds workout events into an [`AnalyticsSummary`].
//!
//! Everything here is synchronous, infallible and storage-free. The two entry
//! points, [`fold_event`] for one new event and [`rebuild`] for a full
//! history replay, share the exact same per-event fold, which is what makes
//! the incremental and batch paths observably equivalent.
//!
//! Precondition: callers fold events in ascending `occurred_at` order. The
//! streak result for out-of-order input is undefined (the tracker resets
//! rather than guessing); the repair path is a rebuild.

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveDateTime, Utc};
use uuid::Uuid;

use crate::models::{
    AnalyticsSummary, DailyBucket, StreakState, WeeklyWindow, WorkoutEvent, WorkoutTotals,
};

/// The one truncation rule used everywhere dates are compared.
pub fn calendar_day(ts: DateTime<Utc>) -> NaiveDate {
    ts.date_naive()
}

/// The Sunday starting the week that contains `day`.
pub fn week_start(day: NaiveDate) -> NaiveDate {
    day - Duration::days(day.weekday().num_days_from_sunday() as i64)
}

/// Saturday 23:59:59.999 closing the week that starts at `start`.
pub fn week_end(start: NaiveDate) -> NaiveDateTime {
    (start + Duration::days(6))
        .and_hms_milli_opt(23, 59, 59, 999)
        .expect("23:59:59.999 is a valid wall-clock time")
}

/// Fold one event through all four sub-components. Each reads only its own
/// slice of the summary, but all four must see the same event.
pub fn fold_event(summary: &mut AnalyticsSummary, event: &WorkoutEvent) {
    fold_totals(&mut summary.totals, event);
    fold_daily_buckets(&mut summary.daily_buckets, event);
    fold_weekly_window(&mut summary.weekly_window, event);
    fold_streak(&mut summary.streak, event);
}

/// Rebuild a summary from the complete event history, starting empty.
///
/// The sort is stable: events sharing an `occurred_at` keep their
/// `created_at` order, matching the order the event store returns them in.
pub fn rebuild(user_id: Uuid, mut history: Vec<WorkoutEvent>) -> AnalyticsSummary {
    history.sort_by(|a, b| {
        a.occurred_at
            .cmp(&b.occurred_at)
            .then_with(|| a.created_at.cmp(&b.created_at))
    });

    let mut summary = AnalyticsSummary::empty(user_id);
    for event in &history {
        fold_event(&mut summary, event);
    }
    summary
}

fn fold_totals(totals: &mut WorkoutTotals, event: &WorkoutEvent) {
    totals.workout_count += 1;
    totals.total_duration_minutes += i64::from(event.duration_minutes);
    totals.total_calories_burned += i64::from(event.calories());
}

fn fold_daily_buckets(buckets: &mut Vec<DailyBucket>, event: &WorkoutEvent) {
    let day = calendar_day(event.occurred_at);

    // Lookup is by exact calendar-day equality.
    if let Some(bucket) = buckets.iter_mut().find(|b| b.date == day) {
        bucket.workout_count += 1;
        bucket.total_duration_minutes += i64::from(event.duration_minutes);
        bucket.total_calories_burned += i64::from(event.calories());
        bucket.event_ids.push(event.id);
    } else {
        buckets.push(DailyBucket {
            date: day,
            workout_count: 1,
            total_duration_minutes: i64::from(event.duration_minutes),
            total_calories_burned: i64::from(event.calories()),
            event_ids: vec![event.id],
        });
    }
}

fn fold_weekly_window(window: &mut Option<WeeklyWindow>, event: &WorkoutEvent) {
    let start = week_start(calendar_day(event.occurred_at));

    match window {
        // Same week as the live window: accumulate.
        Some(current) if current.week_start == start => {
            current.workout_count += 1;
            current.total_duration_minutes += i64::from(event.duration_minutes);
            current.total_calories_burned += i64::from(event.calories());
            current.event_ids.push(event.id);
        }
        // No window yet, or the event's week differs: replace wholesale.
        // The old window's counts are never carried forward.
        _ => {
            *window = Some(WeeklyWindow {
                week_start: start,
                week_end: week_end(start),
                workout_count: 1,
                total_duration_minutes: i64::from(event.duration_minutes),
                total_calories_burned: i64::from(event.calories()),
                event_ids: vec![event.id],
            });
        }
    }
}

fn fold_streak(streak: &mut StreakState, event: &WorkoutEvent) {
    let day = calendar_day(event.occurred_at);

    match streak.last_counted_day {
        None => {
            streak.current_streak = 1;
            streak.last_counted_day = Some(day);
        }
        // Same-day repeat workout never increments the streak.
        Some(last) if day == last => {}
        Some(last) if day == last + Duration::days(1) => {
            streak.current_streak += 1;
            streak.last_counted_day = Some(day);
        }
        // Gap of two or more days, or an out-of-order earlier day.
        Some(_) => {
            streak.current_streak = 1;
            streak.last_counted_day = Some(day);
        }
    }

    streak.longest_streak = streak.longest_streak.max(streak.current_streak);
}
