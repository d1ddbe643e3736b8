use sea_orm_migration::prelude::*;

use crate::migrations;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(migrations::m202601050001_create_session_slots::Migration),
            Box::new(migrations::m202601050002_create_bookings::Migration),
            Box::new(migrations::m202601050003_create_registration_config::Migration),
            Box::new(migrations::m202601050004_create_admin_logs::Migration),
        ]
    }
}
