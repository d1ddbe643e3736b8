use crate::selection::Category;
use sea_orm::entity::prelude::*;
use sea_orm::QueryOrder;

/// A bookable unit of the event. `booked` is mutated only inside the booking
/// transaction; everything else is fixed at seed time.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, serde::Serialize)]
#[sea_orm(table_name = "session_slots")]
pub struct Model {
    /// Stable identifier that also encodes floor and category, e.g. "2F_A".
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub category: String,
    pub title: String,
    pub description: String,
    pub location: String,
    pub start_time: String,
    pub end_time: String,
    pub capacity: i32,
    pub booked: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::booking_slot::Entity")]
    BookingSlots,
}

impl Related<super::booking_slot::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BookingSlots.def()
    }
    fn via() -> Option<RelationDef> {
        None
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Full slot list ordered by id, the snapshot clients render.
    pub async fn find_all_ordered(db: &DatabaseConnection) -> Result<Vec<Model>, DbErr> {
        Entity::find().order_by_asc(Column::Id).all(db).await
    }

    pub fn category(&self) -> Option<Category> {
        Category::parse(&self.category)
    }

    pub fn remaining(&self) -> i32 {
        self.capacity - self.booked
    }
}
