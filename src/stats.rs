use crate::models::{DailyPoint, Frequency, Habit, HabitStats, OverviewResponse, Store};
use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};
use std::collections::BTreeSet;

pub fn habit_stats(habit: &Habit, completions: &[DateTime<Utc>]) -> HabitStats {
    habit_stats_at(Utc::now().date_naive(), habit, completions)
}

pub fn habit_stats_at(today: NaiveDate, habit: &Habit, completions: &[DateTime<Utc>]) -> HabitStats {
    let mut stats = HabitStats {
        habit_id: habit.id.clone(),
        title: habit.title.clone(),
        total_completions: completions.len() as u64,
        current_streak: 0,
        longest_streak: 0,
        completion_rate: 0.0,
    };

    let dates: BTreeSet<NaiveDate> = completions.iter().map(|at| at.date_naive()).collect();
    let Some(first) = dates.first().copied() else {
        return stats;
    };

    let start = habit.created_at.date_naive().min(first);
    let days_since_start = ((today - start).num_days() + 1).max(1);

    let scheduled_days = match habit.custom_days.as_deref() {
        Some(days) if habit.frequency == Frequency::Custom && !days.is_empty() => Some(days),
        _ => None,
    };

    let (current, longest, rate) = match (habit.frequency, scheduled_days) {
        (Frequency::Weekly, _) => weekly(today, days_since_start, &dates),
        (Frequency::Custom, Some(days)) => custom(today, start, days, &dates),
        _ => daily(today, days_since_start, &dates),
    };

    stats.current_streak = current;
    stats.longest_streak = longest;
    stats.completion_rate = rate.min(100.0);
    stats
}

fn daily(today: NaiveDate, days_since_start: i64, dates: &BTreeSet<NaiveDate>) -> (u64, u64, f64) {
    let current = run_ending_at(today, 1, dates);
    let longest = longest_run(dates, 1);
    let rate = dates.len() as f64 / days_since_start as f64 * 100.0;
    (current, longest, rate)
}

fn weekly(today: NaiveDate, days_since_start: i64, dates: &BTreeSet<NaiveDate>) -> (u64, u64, f64) {
    let weeks: BTreeSet<NaiveDate> = dates.iter().map(|date| week_start(*date)).collect();
    let current = run_ending_at(week_start(today), 7, &weeks);
    let longest = longest_run(&weeks, 7);
    let total_weeks = days_since_start / 7 + 1;
    let rate = weeks.len() as f64 / total_weeks as f64 * 100.0;
    (current, longest, rate)
}

/// Walks every scheduled day from `start` through `today`; a missed one resets the run.
fn custom(today: NaiveDate, start: NaiveDate, days: &[u8], dates: &BTreeSet<NaiveDate>) -> (u64, u64, f64) {
    let mut scheduled = 0u64;
    let mut hit = 0u64;
    let mut run = 0u64;
    let mut longest = 0u64;

    let mut date = start;
    while date <= today {
        let weekday = date.weekday().num_days_from_sunday() as u8;
        if days.contains(&weekday) {
            scheduled += 1;
            if dates.contains(&date) {
                hit += 1;
                run += 1;
                longest = longest.max(run);
            } else {
                run = 0;
            }
        }
        date += Duration::days(1);
    }

    let rate = if scheduled == 0 {
        0.0
    } else {
        hit as f64 / scheduled as f64 * 100.0
    };
    (run, longest, rate)
}

fn run_ending_at(end: NaiveDate, step_days: i64, dates: &BTreeSet<NaiveDate>) -> u64 {
    let step = Duration::days(step_days);
    let mut count = 0;
    let mut cursor = end;
    while dates.contains(&cursor) {
        count += 1;
        cursor -= step;
    }
    count
}

fn longest_run(dates: &BTreeSet<NaiveDate>, step_days: i64) -> u64 {
    let mut longest = 0;
    let mut run = 0;
    let mut prev: Option<NaiveDate> = None;
    for date in dates {
        run = match prev {
            Some(prev) if (*date - prev).num_days() == step_days => run + 1,
            _ => 1,
        };
        longest = longest.max(run);
        prev = Some(*date);
    }
    longest
}

pub fn build_overview(store: &Store) -> OverviewResponse {
    build_overview_at(Utc::now().date_naive(), store)
}

pub fn build_overview_at(today: NaiveDate, store: &Store) -> OverviewResponse {
    let mut last_7_days = Vec::with_capacity(7);
    for offset in (0..7).rev() {
        let date = today - Duration::days(offset);
        let completions = store
            .habit_logs
            .iter()
            .filter(|log| log.completed_at.date_naive() == date)
            .count() as u64;
        last_7_days.push(DailyPoint {
            date: date.to_string(),
            completions,
        });
    }

    let habits = store
        .habits
        .iter()
        .map(|habit| habit_stats_at(today, habit, &completions_for(store, &habit.id)))
        .collect();

    OverviewResponse { last_7_days, habits }
}

pub fn completions_for(store: &Store, habit_id: &str) -> Vec<DateTime<Utc>> {
    store.logs_for(habit_id).map(|log| log.completed_at).collect()
}

fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_monday() as i64)
}
