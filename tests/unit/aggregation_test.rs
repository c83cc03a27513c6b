use chrono::{Duration, NaiveDate};
use fittrack_analytics::models::AnalyticsSummary;
use fittrack_analytics::services::aggregation::{
    calendar_day, fold_event, rebuild, week_start,
};
use pretty_assertions::assert_eq;
use uuid::Uuid;

use crate::common::{assert_derived_state_eq, moment, MockDataGenerator};

#[test]
fn month_boundary_does_not_break_streak() {
    let user_id = Uuid::new_v4();
    let mut summary = AnalyticsSummary::empty(user_id);

    // 2024-01-31 is day offset 24 from the 2024-01-07 base.
    for offset in [24, 25, 26] {
        let event = MockDataGenerator::workout_event(user_id, moment(offset, 7), 30, None);
        fold_event(&mut summary, &event);
    }

    assert_eq!(summary.streak.current_streak, 3);
    assert_eq!(
        summary.streak.last_counted_day,
        Some(NaiveDate::from_ymd_opt(2024, 2, 2).unwrap())
    );
}

#[test]
fn longest_streak_survives_multiple_resets() {
    let user_id = Uuid::new_v4();
    let mut summary = AnalyticsSummary::empty(user_id);

    // Five consecutive days, a gap, two days, a gap, one day.
    let offsets = [0, 1, 2, 3, 4, 10, 11, 20];
    for offset in offsets {
        let event = MockDataGenerator::workout_event(user_id, moment(offset, 9), 30, Some(100));
        fold_event(&mut summary, &event);
    }

    assert_eq!(summary.streak.current_streak, 1);
    assert_eq!(summary.streak.longest_streak, 5);
}

#[test]
fn weekly_window_tracks_only_latest_week() {
    let user_id = Uuid::new_v4();
    let mut summary = AnalyticsSummary::empty(user_id);

    // Three weeks of workouts; only the third week's window survives.
    for offset in [0, 2, 7, 9, 14] {
        let event = MockDataGenerator::workout_event(user_id, moment(offset, 18), 25, Some(200));
        fold_event(&mut summary, &event);
    }

    let window = summary.weekly_window.expect("window after folds");
    assert_eq!(window.week_start, calendar_day(moment(14, 0)));
    assert_eq!(window.workout_count, 1);
    // Daily buckets keep the whole history regardless.
    assert_eq!(summary.daily_buckets.len(), 5);
}

#[test]
fn buckets_preserve_first_seen_day_order() {
    let user_id = Uuid::new_v4();
    let mut summary = AnalyticsSummary::empty(user_id);

    for (offset, hour) in [(0, 8), (1, 8), (0, 20), (2, 8), (1, 21)] {
        let event = MockDataGenerator::workout_event(user_id, moment(offset, hour), 30, None);
        fold_event(&mut summary, &event);
    }

    let days: Vec<NaiveDate> = summary.daily_buckets.iter().map(|b| b.date).collect();
    assert_eq!(
        days,
        vec![
            calendar_day(moment(0, 0)),
            calendar_day(moment(1, 0)),
            calendar_day(moment(2, 0)),
        ]
    );
    assert_eq!(summary.daily_buckets[0].workout_count, 2);
    assert_eq!(summary.daily_buckets[1].workout_count, 2);
    assert_eq!(summary.daily_buckets[2].workout_count, 1);
}

#[test]
fn rebuild_equals_incremental_over_mixed_history() {
    let user_id = Uuid::new_v4();

    // Same-day repeats, a streak run, a gap and a week rollover.
    let events = vec![
        MockDataGenerator::workout_event(user_id, moment(0, 6), 20, Some(150)),
        MockDataGenerator::workout_event(user_id, moment(0, 19), 35, None),
        MockDataGenerator::workout_event(user_id, moment(1, 7), 45, Some(400)),
        MockDataGenerator::workout_event(user_id, moment(2, 7), 30, Some(250)),
        MockDataGenerator::workout_event(user_id, moment(6, 12), 60, Some(600)),
        MockDataGenerator::workout_event(user_id, moment(7, 12), 60, Some(600)),
        MockDataGenerator::workout_event(user_id, moment(13, 9), 15, None),
    ];

    let mut incremental = AnalyticsSummary::empty(user_id);
    for event in &events {
        fold_event(&mut incremental, event);
    }

    // Present the history to the rebuilder in reverse; it sorts internally.
    let mut reversed = events.clone();
    reversed.reverse();
    let rebuilt = rebuild(user_id, reversed);

    assert_derived_state_eq(&rebuilt, &incremental);
}

#[test]
fn equal_timestamps_fold_in_creation_order() {
    let user_id = Uuid::new_v4();
    let at = moment(3, 10);

    let mut first = MockDataGenerator::workout_event(user_id, at, 30, None);
    let mut second = MockDataGenerator::workout_event(user_id, at, 40, None);
    first.created_at = at;
    second.created_at = at + Duration::seconds(1);

    let rebuilt = rebuild(user_id, vec![second.clone(), first.clone()]);

    assert_eq!(rebuilt.daily_buckets[0].event_ids, vec![first.id, second.id]);
}

#[test]
fn week_start_handles_year_boundary() {
    // 2024-01-02 (Tuesday) belongs to the week starting Sunday 2023-12-31.
    let day = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
    assert_eq!(week_start(day), NaiveDate::from_ymd_opt(2023, 12, 31).unwrap());
}
