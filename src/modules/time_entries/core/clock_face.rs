use chrono::TimeDelta;
use std::fmt;

/// Whole hours, minutes and seconds of a duration, as shown on a timer display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockFace {
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl From<TimeDelta> for ClockFace {
    fn from(value: TimeDelta) -> Self {
        let total = value.num_seconds().max(0);
        Self {
            hours: total / 3600,
            minutes: (total % 3600) / 60,
            seconds: total % 60,
        }
    }
}

impl fmt::Display for ClockFace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hours, self.minutes, self.seconds)
    }
}
