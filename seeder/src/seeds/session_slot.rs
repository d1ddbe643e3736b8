use sea_orm::{DatabaseConnection, DbErr, EntityTrait, PaginatorTrait};
use std::pin::Pin;

use crate::seed::Seeder;
use db::models::session_slot;
use db::seeders::seed_slots;

pub struct SessionSlotSeeder;

impl Seeder for SessionSlotSeeder {
    fn seed<'a>(
        &'a self,
        db: &'a DatabaseConnection,
    ) -> Pin<Box<dyn Future<Output = Result<(), DbErr>> + Send + 'a>> {
        Box::pin(async move {
            // The catalog is fixed; never double-insert on a populated database.
            let existing = session_slot::Entity::find().count(db).await?;
            if existing > 0 {
                return Ok(());
            }
            seed_slots(db).await
        })
    }
}
