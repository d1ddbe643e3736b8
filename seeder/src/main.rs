use sea_orm_migration::MigratorTrait;

use crate::seed::{Seeder, run_seeder};
use crate::seeds::{registration_config::RegistrationConfigSeeder, session_slot::SessionSlotSeeder};

mod seed;
mod seeds;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    let db = db::connect().await;

    migration::Migrator::up(&db, None)
        .await
        .expect("Migration failed");

    for (seeder, name) in [
        (
            Box::new(SessionSlotSeeder) as Box<dyn Seeder + Send + Sync>,
            "SessionSlot",
        ),
        (Box::new(RegistrationConfigSeeder), "RegistrationConfig"),
    ] {
        run_seeder(&*seeder, name, &db).await;
    }
}
