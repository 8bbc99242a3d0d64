use crate::errors::AppError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Every collection the service persists, in insertion order.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Store {
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub countdowns: Vec<Countdown>,
    #[serde(default)]
    pub habits: Vec<Habit>,
    #[serde(default)]
    pub habit_logs: Vec<HabitLog>,
}

impl Store {
    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|category| category.id == id)
    }

    pub fn countdown(&self, id: &str) -> Option<&Countdown> {
        self.countdowns.iter().find(|countdown| countdown.id == id)
    }

    pub fn countdown_mut(&mut self, id: &str) -> Option<&mut Countdown> {
        self.countdowns.iter_mut().find(|countdown| countdown.id == id)
    }

    pub fn habit(&self, id: &str) -> Option<&Habit> {
        self.habits.iter().find(|habit| habit.id == id)
    }

    pub fn logs_for<'a>(&'a self, habit_id: &'a str) -> impl Iterator<Item = &'a HabitLog> + 'a {
        self.habit_logs
            .iter()
            .filter(move |log| log.habit_id == habit_id)
    }

    /// Removes a habit and every log that points at it.
    pub fn remove_habit(&mut self, id: &str) -> bool {
        let before = self.habits.len();
        self.habits.retain(|habit| habit.id != id);
        if self.habits.len() == before {
            return false;
        }
        self.habit_logs.retain(|log| log.habit_id != id);
        true
    }

    /// Removes a category and detaches the habits filed under it.
    pub fn remove_category(&mut self, id: &str) -> bool {
        let before = self.categories.len();
        self.categories.retain(|category| category.id != id);
        if self.categories.len() == before {
            return false;
        }
        for habit in &mut self.habits {
            if habit.category_id.as_deref() == Some(id) {
                habit.category_id = None;
            }
        }
        true
    }
}

pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub color: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct CategoryInput {
    pub name: String,
    pub color: String,
}

impl CategoryInput {
    pub fn into_category(self, now: DateTime<Utc>) -> Result<Category, AppError> {
        let name = required(&self.name, "name")?;
        let color = required(&self.color, "color")?;
        Ok(Category {
            id: new_id(),
            name,
            color,
            created_at: now,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Countdown {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub target_date: DateTime<Utc>,
    pub notify_before: Option<i64>,
    pub is_timer: bool,
    pub is_completed: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct CountdownInput {
    pub title: String,
    pub description: Option<String>,
    #[serde(deserialize_with = "crate::dates::deserialize_timestamp")]
    pub target_date: DateTime<Utc>,
    pub notify_before: Option<i64>,
    #[serde(default)]
    pub is_timer: bool,
}

impl CountdownInput {
    pub fn into_countdown(self, now: DateTime<Utc>) -> Result<Countdown, AppError> {
        let mut countdown = Countdown {
            id: new_id(),
            title: String::new(),
            description: None,
            target_date: self.target_date,
            notify_before: None,
            is_timer: false,
            is_completed: false,
            created_at: now,
        };
        self.apply_to(&mut countdown, now)?;
        Ok(countdown)
    }

    /// Overwrites the editable fields of `countdown`. A target moved past `now`
    /// re-opens a completed countdown.
    pub fn apply_to(self, countdown: &mut Countdown, now: DateTime<Utc>) -> Result<(), AppError> {
        let title = required(&self.title, "title")?;
        if matches!(self.notify_before, Some(minutes) if minutes < 0) {
            return Err(AppError::bad_request("notify_before must not be negative"));
        }

        countdown.title = title;
        countdown.description = optional(self.description);
        countdown.target_date = self.target_date;
        countdown.notify_before = self.notify_before;
        countdown.is_timer = self.is_timer;
        if countdown.target_date > now {
            countdown.is_completed = false;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Daily,
    Weekly,
    Custom,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Habit {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub frequency: Frequency,
    pub custom_days: Option<Vec<u8>>,
    pub category_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct HabitInput {
    pub title: String,
    pub description: Option<String>,
    pub frequency: Frequency,
    pub custom_days: Option<Vec<u8>>,
    pub category_id: Option<String>,
}

impl HabitInput {
    pub fn into_habit(self, store: &Store, now: DateTime<Utc>) -> Result<Habit, AppError> {
        let mut habit = Habit {
            id: new_id(),
            title: String::new(),
            description: None,
            frequency: self.frequency,
            custom_days: None,
            category_id: None,
            created_at: now,
        };
        self.apply_to(&mut habit, store)?;
        Ok(habit)
    }

    pub fn apply_to(self, habit: &mut Habit, store: &Store) -> Result<(), AppError> {
        let title = required(&self.title, "title")?;
        let custom_days = normalize_days(self.frequency, self.custom_days)?;
        let category_id = optional(self.category_id);
        if let Some(id) = category_id.as_deref() {
            if store.category(id).is_none() {
                return Err(AppError::bad_request("Category not found"));
            }
        }

        habit.title = title;
        habit.description = optional(self.description);
        habit.frequency = self.frequency;
        habit.custom_days = custom_days;
        habit.category_id = category_id;
        Ok(())
    }
}

/// Days are 0 = Sunday through 6 = Saturday; stored sorted without repeats.
fn normalize_days(frequency: Frequency, days: Option<Vec<u8>>) -> Result<Option<Vec<u8>>, AppError> {
    let Some(mut days) = days else {
        if frequency == Frequency::Custom {
            return Err(AppError::bad_request("custom frequency requires custom_days"));
        }
        return Ok(None);
    };

    if days.iter().any(|day| *day > 6) {
        return Err(AppError::bad_request("custom_days must be between 0 and 6"));
    }
    days.sort_unstable();
    days.dedup();

    if frequency == Frequency::Custom && days.is_empty() {
        return Err(AppError::bad_request("custom frequency requires custom_days"));
    }
    Ok(Some(days))
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HabitLog {
    pub id: String,
    pub habit_id: String,
    pub completed_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct LogQuery {
    pub date: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LogRangeQuery {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct HabitFilter {
    pub category_id: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HabitStats {
    pub habit_id: String,
    pub title: String,
    pub total_completions: u64,
    pub current_streak: u64,
    pub longest_streak: u64,
    pub completion_rate: f64,
}

#[derive(Debug, Serialize)]
pub struct DailyPoint {
    pub date: String,
    pub completions: u64,
}

#[derive(Debug, Serialize)]
pub struct OverviewResponse {
    pub last_7_days: Vec<DailyPoint>,
    pub habits: Vec<HabitStats>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Pending,
    Notify,
    Due,
    Completed,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountdownStatus {
    pub countdown_id: String,
    pub title: String,
    pub target_date: DateTime<Utc>,
    pub remaining_seconds: i64,
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
    pub phase: Phase,
}

fn required(value: &str, field: &str) -> Result<String, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::bad_request(format!("{field} must not be empty")));
    }
    Ok(trimmed.to_string())
}

fn optional(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
