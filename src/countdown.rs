use crate::models::{Countdown, CountdownStatus, Phase};
use crate::state::AppState;
use chrono::{DateTime, Utc};
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{error, info};

pub fn status_at(now: DateTime<Utc>, countdown: &Countdown) -> CountdownStatus {
    // Partial seconds round up: zero only once the target has passed.
    let millis = (countdown.target_date - now).num_milliseconds().max(0);
    let remaining = (millis + 999) / 1000;

    let phase = if countdown.is_completed {
        Phase::Completed
    } else if countdown.target_date <= now {
        Phase::Due
    } else if matches!(countdown.notify_before, Some(minutes) if remaining <= minutes.saturating_mul(60)) {
        Phase::Notify
    } else {
        Phase::Pending
    };

    CountdownStatus {
        countdown_id: countdown.id.clone(),
        title: countdown.title.clone(),
        target_date: countdown.target_date,
        remaining_seconds: remaining,
        days: remaining / 86_400,
        hours: remaining % 86_400 / 3_600,
        minutes: remaining % 3_600 / 60,
        seconds: remaining % 60,
        phase,
    }
}

/// Countdowns inside their notify window or past due, soonest first.
pub fn notifications_at(now: DateTime<Utc>, countdowns: &[Countdown]) -> Vec<CountdownStatus> {
    let mut pending: Vec<_> = countdowns
        .iter()
        .map(|countdown| status_at(now, countdown))
        .filter(|status| matches!(status.phase, Phase::Notify | Phase::Due))
        .collect();
    pending.sort_by_key(|status| status.target_date);
    pending
}

/// Flags every countdown whose target has passed. Returns the ids it changed.
pub fn complete_due(now: DateTime<Utc>, countdowns: &mut [Countdown]) -> Vec<String> {
    countdowns
        .iter_mut()
        .filter(|countdown| !countdown.is_completed && countdown.target_date <= now)
        .map(|countdown| {
            countdown.is_completed = true;
            countdown.id.clone()
        })
        .collect()
}

/// Completes due countdowns. The live store only changes once the result is
/// on disk, so a failed write is retried on the next sweep.
pub async fn sweep_once(state: &AppState) {
    let now = Utc::now();
    let mut data = state.data.lock().await;
    if !data
        .countdowns
        .iter()
        .any(|countdown| !countdown.is_completed && countdown.target_date <= now)
    {
        return;
    }

    let mut next = data.clone();
    let completed = complete_due(now, &mut next.countdowns);
    if completed.is_empty() {
        return;
    }

    if let Err(err) = state.commit(&mut data, next).await {
        error!("failed to persist {} completed countdowns: {err}", completed.len());
        return;
    }

    for id in &completed {
        if let Some(countdown) = data.countdown(id) {
            info!(countdown_id = %id, "countdown reached: {}", countdown.title);
        }
    }
}

pub fn spawn_sweeper(state: AppState, every: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(every);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
        loop {
            ticker.tick().await;
            sweep_once(&state).await;
        }
    })
}
