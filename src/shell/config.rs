use crate::modules::time_entries::core::pomodoro::PomodoroDurations;
use chrono::{FixedOffset, Offset, TimeDelta, Utc};
use config::ConfigError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub tracking: TrackingSettings,
    pub pomodoro: PomodoroSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackingSettings {
    /// The single identity every time entry belongs to.
    pub user_id: String,
    /// Offset of the user's calendar from UTC. Day boundaries and time-of-day edits use it.
    pub utc_offset_minutes: i32,
    pub tick_millis: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PomodoroSettings {
    pub task_minutes: u32,
    pub short_break_minutes: u32,
    pub long_break_minutes: u32,
    pub tasks_per_long_break: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            application: ApplicationSettings {
                host: "0.0.0.0".into(),
                port: 8080,
            },
            tracking: TrackingSettings {
                user_id: "user-fixed-0001".into(),
                utc_offset_minutes: 0,
                tick_millis: 1_000,
            },
            pomodoro: PomodoroSettings {
                task_minutes: 25,
                short_break_minutes: 5,
                long_break_minutes: 15,
                tasks_per_long_break: 4,
            },
        }
    }
}

impl Settings {
    pub fn address(&self) -> String {
        format!("{}:{}", self.application.host, self.application.port)
    }

    pub fn calendar_offset(&self) -> FixedOffset {
        FixedOffset::east_opt(self.tracking.utc_offset_minutes.saturating_mul(60))
            .unwrap_or_else(|| Utc.fix())
    }

    pub fn tick_period(&self) -> Duration {
        Duration::from_millis(self.tracking.tick_millis)
    }

    pub fn durations(&self) -> PomodoroDurations {
        let minutes = |value: u32| TimeDelta::minutes(value.into());
        PomodoroDurations {
            task: minutes(self.pomodoro.task_minutes),
            short_break: minutes(self.pomodoro.short_break_minutes),
            long_break: minutes(self.pomodoro.long_break_minutes),
            tasks_per_long_break: self.pomodoro.tasks_per_long_break,
        }
    }

    fn validate(self) -> Result<Self, ConfigError> {
        let invalid = |message: &str| Err(ConfigError::Message(message.into()));
        if self.tracking.user_id.trim().is_empty() {
            return invalid("tracking.user_id must not be empty");
        }
        if self.tracking.utc_offset_minutes.unsigned_abs() >= 24 * 60 {
            return invalid("tracking.utc_offset_minutes must stay within one day");
        }
        if self.tracking.tick_millis == 0 {
            return invalid("tracking.tick_millis must be positive");
        }
        let pomodoro = &self.pomodoro;
        if [
            pomodoro.task_minutes,
            pomodoro.short_break_minutes,
            pomodoro.long_break_minutes,
            pomodoro.tasks_per_long_break,
        ]
        .contains(&0)
        {
            return invalid("pomodoro durations and tasks_per_long_break must be positive");
        }
        Ok(self)
    }
}

fn build_settings(environment: config::Environment) -> Result<Settings, ConfigError> {
    config::Config::builder()
        .add_source(config::Config::try_from(&Settings::default())?)
        .add_source(environment)
        .build()?
        .try_deserialize::<Settings>()?
        .validate()
}

fn environment() -> config::Environment {
    config::Environment::with_prefix("TIME_TRACKER")
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}

/// Defaults overlaid by `TIME_TRACKER_<SECTION>__<KEY>` environment variables.
pub fn read_config() -> Result<Settings, ConfigError> {
    build_settings(environment())
}
