use std::collections::HashMap;

use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue::Set;
use sea_orm::{QueryOrder, TransactionError, TransactionTrait};
use thiserror::Error;

use super::{booking_slot, session_slot};
use crate::selection::{Category, Selection};

pub const STATUS_CONFIRMED: &str = "confirmed";
/// Reserved for administrative use; there is no attendee-facing cancellation.
pub const STATUS_CANCELLED: &str = "cancelled";

/// A confirmed reservation. Created exactly once by a successful submit
/// transaction and never mutated in the attendee-facing flow.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, serde::Serialize)]
#[sea_orm(table_name = "bookings")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Anonymous session identity of the submitter.
    pub user_id: String,
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub student_id: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::booking_slot::Entity")]
    Slots,
}

impl Related<super::booking_slot::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Slots.def()
    }
    fn via() -> Option<RelationDef> {
        None
    }
}

impl ActiveModelBehavior for ActiveModel {}

pub type Booking = Model;

/// Reserve order is C, D, A, B, matching `Selection::slot_ids`.
fn reserve_rank(category: &str) -> u8 {
    match Category::parse(category) {
        Some(Category::C) => 0,
        Some(Category::D) => 1,
        Some(Category::A) => 2,
        Some(Category::B) => 3,
        None => u8::MAX,
    }
}

/// Attendee details captured at submission time.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct UserDetails {
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub student_id: Option<String>,
}

/// Failure modes of the submit transaction. Every one is scoped to a single
/// submission attempt; nothing here is fatal to the process.
#[derive(Debug, Error)]
pub enum BookingError {
    /// Defensive; unreachable when the selection validity gate is enforced.
    #[error("No sessions selected")]
    NoSessionsSelected,
    /// Referenced slot id does not exist; the client's slot list is stale.
    #[error("Session slot {0} not found")]
    SlotNotFound(String),
    /// Capacity exhausted, discovered on the fresh read inside the
    /// transaction. The expected race outcome, not a bug.
    #[error("Session \"{title}\" ({id}) is fully booked, please choose another")]
    SlotFull { id: String, title: String },
    #[error(transparent)]
    Db(#[from] DbErr),
}

impl Model {
    /// Atomically reserves every slot in `selection` and records the booking.
    ///
    /// Inside a single transaction each target slot is re-read fresh, checked
    /// against its capacity, and incremented; one booking row plus one join
    /// row per slot commit together with the increments or not at all. A
    /// concurrent loser of the last seat observes `SlotFull` on its own
    /// fresh read.
    pub async fn submit(
        db: &DatabaseConnection,
        selection: &Selection,
        details: &UserDetails,
        user_id: &str,
    ) -> Result<Model, BookingError> {
        let slot_ids = selection.slot_ids();
        if slot_ids.is_empty() {
            return Err(BookingError::NoSessionsSelected);
        }

        let details = details.clone();
        let user_id = user_id.to_string();

        let result = db
            .transaction::<_, Model, BookingError>(move |txn| {
                Box::pin(async move {
                    // Fresh reads; never trust client-cached counts.
                    let mut slots = Vec::with_capacity(slot_ids.len());
                    for slot_id in &slot_ids {
                        let slot = session_slot::Entity::find_by_id(slot_id.clone())
                            .one(txn)
                            .await?
                            .ok_or_else(|| BookingError::SlotNotFound(slot_id.clone()))?;

                        if slot.booked >= slot.capacity {
                            return Err(BookingError::SlotFull {
                                id: slot.id,
                                title: slot.title,
                            });
                        }
                        slots.push(slot);
                    }

                    for slot in slots {
                        let booked = slot.booked + 1;
                        let mut active: session_slot::ActiveModel = slot.into();
                        active.booked = Set(booked);
                        active.update(txn).await?;
                    }

                    let booking = ActiveModel {
                        user_id: Set(user_id),
                        name: Set(details.name),
                        phone: Set(details.phone),
                        email: Set(details.email),
                        student_id: Set(details.student_id),
                        status: Set(STATUS_CONFIRMED.to_string()),
                        created_at: Set(Utc::now()),
                        ..Default::default()
                    }
                    .insert(txn)
                    .await?;

                    for slot_id in &slot_ids {
                        booking_slot::ActiveModel {
                            booking_id: Set(booking.id),
                            slot_id: Set(slot_id.clone()),
                        }
                        .insert(txn)
                        .await?;
                    }

                    Ok(booking)
                })
            })
            .await;

        match result {
            Ok(booking) => Ok(booking),
            Err(TransactionError::Connection(e)) => Err(BookingError::Db(e)),
            Err(TransactionError::Transaction(e)) => Err(e),
        }
    }

    /// All bookings newest first, each with its reserved slot ids. Feeds the
    /// admin dashboard and export consumers.
    pub async fn all_with_slots(
        db: &DatabaseConnection,
    ) -> Result<Vec<(Model, Vec<String>)>, DbErr> {
        let bookings = Entity::find()
            .order_by_desc(Column::CreatedAt)
            .all(db)
            .await?;

        let mut by_booking: HashMap<i64, Vec<(u8, String)>> = HashMap::new();
        for (row, slot) in booking_slot::Entity::find()
            .find_also_related(session_slot::Entity)
            .all(db)
            .await?
        {
            let rank = slot
                .map(|s| reserve_rank(&s.category))
                .unwrap_or(u8::MAX);
            by_booking
                .entry(row.booking_id)
                .or_default()
                .push((rank, row.slot_id));
        }

        Ok(bookings
            .into_iter()
            .map(|b| {
                let mut slots = by_booking.remove(&b.id).unwrap_or_default();
                slots.sort();
                (b, slots.into_iter().map(|(_, id)| id).collect())
            })
            .collect())
    }

    /// Reserved slot ids in reserve order.
    pub async fn slot_ids(&self, db: &DatabaseConnection) -> Result<Vec<String>, DbErr> {
        let mut rows: Vec<(u8, String)> = booking_slot::Entity::find()
            .filter(booking_slot::Column::BookingId.eq(self.id))
            .find_also_related(session_slot::Entity)
            .all(db)
            .await?
            .into_iter()
            .map(|(row, slot)| {
                let rank = slot
                    .map(|s| reserve_rank(&s.category))
                    .unwrap_or(u8::MAX);
                (rank, row.slot_id)
            })
            .collect();
        rows.sort();
        Ok(rows.into_iter().map(|(_, id)| id).collect())
    }
}
