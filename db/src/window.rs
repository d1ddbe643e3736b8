//! Registration window gate.
//!
//! Computes whether submissions are currently admitted from the shared
//! `registration_config` row and a caller-supplied clock. Pure functions; the
//! API layer re-evaluates per request and clients poll at least once per
//! second to drive the countdown.

use crate::models::registration_config;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Effective admission state of the registration window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WindowStatus {
    Before,
    Open,
    Closed,
}

/// Computes the window status for `now`.
///
/// Manual override takes precedence over the time window; otherwise the
/// window is open for `open_time <= now < close_time`.
pub fn status(config: &registration_config::Model, now: DateTime<Utc>) -> WindowStatus {
    if config.manual_override {
        return if config.is_manually_open {
            WindowStatus::Open
        } else {
            WindowStatus::Closed
        };
    }

    if now < config.open_time {
        WindowStatus::Before
    } else if now >= config.close_time {
        WindowStatus::Closed
    } else {
        WindowStatus::Open
    }
}

/// Time remaining until `open_time`, decomposed into whole days, hours,
/// minutes and seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Countdown {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

/// Decomposes the delta to `open_time` for countdown display.
///
/// Recomputed from the two instants on every call rather than decremented,
/// so repeated calls cannot accumulate drift. `None` once the target has
/// passed.
pub fn countdown(open_time: DateTime<Utc>, now: DateTime<Utc>) -> Option<Countdown> {
    let diff_ms = (open_time - now).num_milliseconds();
    if diff_ms <= 0 {
        return None;
    }

    let total_secs = diff_ms / 1000;
    Some(Countdown {
        days: total_secs / 86_400,
        hours: (total_secs / 3_600) % 24,
        minutes: (total_secs / 60) % 60,
        seconds: total_secs % 60,
    })
}
