//! Device ticket guard.
//!
//! After a successful booking the client persists a `DeviceTicket` in local
//! storage so the device remembers it already booked. This is advisory, not a
//! security boundary: clearing storage or switching browsers defeats it, and
//! that is an accepted tradeoff. The only remote signal is the global
//! `last_reset` timestamp, which invalidates every ticket issued before an
//! administrative reset.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The record a client persists after a successful booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceTicket {
    pub booking_id: i64,
    /// Display fields; optional on the wire so a verification request can
    /// carry just the id and issue time.
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub slot_ids: Vec<String>,
    /// Local creation time, epoch milliseconds.
    pub issued_at: i64,
}

/// Result of asking the store for the last reset timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetCheck {
    /// The store answered; `None` means no reset has ever happened.
    Known(Option<DateTime<Utc>>),
    /// The store could not be reached.
    Unavailable,
}

/// What the client should do with its stored ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    /// Ticket stands; suppress the selection flow and show it.
    Keep,
    /// Ticket predates the last reset; purge it and show the selection flow.
    Discard,
}

/// Decides whether a stored ticket survives the last administrative reset.
///
/// Fails open: when the reset check is unavailable the locally cached ticket
/// is trusted rather than blocking the user.
pub fn disposition(ticket: &DeviceTicket, check: ResetCheck) -> Disposition {
    match check {
        ResetCheck::Known(Some(last_reset)) => {
            if last_reset.timestamp_millis() > ticket.issued_at {
                Disposition::Discard
            } else {
                Disposition::Keep
            }
        }
        ResetCheck::Known(None) => Disposition::Keep,
        ResetCheck::Unavailable => Disposition::Keep,
    }
}
