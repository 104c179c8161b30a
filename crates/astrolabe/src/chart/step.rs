//! Process date and time stepping for progressed charts.

use chrono::{Datelike, Duration, Months, NaiveDate, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum StepError {
    #[error("date out of range after applying {0:?}")]
    OutOfRange(Step),
    #[error("invalid date {year}-{month}-{day} {hour}:{minute}:{second}")]
    InvalidDate {
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
    },
}

/// Signed offset applied field by field: years, months, days, hours,
/// minutes, then seconds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Step {
    pub years: i32,
    pub months: i32,
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl Step {
    pub fn years(years: i32) -> Self {
        Self {
            years,
            ..Default::default()
        }
    }

    pub fn months(months: i32) -> Self {
        Self {
            months,
            ..Default::default()
        }
    }

    pub fn days(days: i64) -> Self {
        Self {
            days,
            ..Default::default()
        }
    }

    pub fn negate(self) -> Self {
        Self {
            years: -self.years,
            months: -self.months,
            days: -self.days,
            hours: -self.hours,
            minutes: -self.minutes,
            seconds: -self.seconds,
        }
    }
}

/// The date a progressed chart is evaluated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProcessDate(pub NaiveDateTime);

impl ProcessDate {
    pub fn new(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
    ) -> Result<Self, StepError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .and_then(|date| date.and_hms_opt(hour, minute, second))
            .map(ProcessDate)
            .ok_or(StepError::InvalidDate {
                year,
                month,
                day,
                hour,
                minute,
                second,
            })
    }

    /// Apply `step`. Month arithmetic clamps to the last day of the target
    /// month (Jan 31 + 1 month is Feb 28/29).
    pub fn step(self, step: Step) -> Result<Self, StepError> {
        let out_of_range = || StepError::OutOfRange(step);

        let mut date = self.0;
        let total_months = i64::from(step.years) * 12 + i64::from(step.months);
        date = add_months(date, total_months).ok_or_else(out_of_range)?;

        for offset in [
            Duration::try_days(step.days),
            Duration::try_hours(step.hours),
            Duration::try_minutes(step.minutes),
            Duration::try_seconds(step.seconds),
        ] {
            let offset = offset.ok_or_else(out_of_range)?;
            date = date.checked_add_signed(offset).ok_or_else(out_of_range)?;
        }

        Ok(ProcessDate(date))
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    pub fn minute(&self) -> u32 {
        self.0.minute()
    }

    pub fn second(&self) -> u32 {
        self.0.second()
    }
}

fn add_months(date: NaiveDateTime, months: i64) -> Option<NaiveDateTime> {
    let magnitude = Months::new(u32::try_from(months.unsigned_abs()).ok()?);
    if months >= 0 {
        date.checked_add_months(magnitude)
    } else {
        date.checked_sub_months(magnitude)
    }
}

impl fmt::Display for ProcessDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d %H:%M:%S"))
    }
}
