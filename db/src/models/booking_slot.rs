use sea_orm::entity::prelude::*;

/// Join row recording one reserved slot of a booking. A booking has one or
/// two of these, inserted in the same transaction as the capacity increments.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, serde::Serialize)]
#[sea_orm(table_name = "booking_slots")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub booking_id: i64,
    #[sea_orm(primary_key, auto_increment = false)]
    pub slot_id: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::booking::Entity",
        from = "Column::BookingId",
        to = "super::booking::Column::Id"
    )]
    Booking,
    #[sea_orm(
        belongs_to = "super::session_slot::Entity",
        from = "Column::SlotId",
        to = "super::session_slot::Column::Id"
    )]
    Slot,
}

impl Related<super::booking::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Booking.def()
    }
    fn via() -> Option<RelationDef> {
        None
    }
}

impl Related<super::session_slot::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Slot.def()
    }
    fn via() -> Option<RelationDef> {
        None
    }
}

impl ActiveModelBehavior for ActiveModel {}
