use sea_orm::{DatabaseConnection, DbErr};
use std::pin::Pin;

use crate::seed::Seeder;
use db::seeders::ensure_default_config;

pub struct RegistrationConfigSeeder;

impl Seeder for RegistrationConfigSeeder {
    fn seed<'a>(
        &'a self,
        db: &'a DatabaseConnection,
    ) -> Pin<Box<dyn Future<Output = Result<(), DbErr>> + Send + 'a>> {
        Box::pin(async move {
            ensure_default_config(db).await?;
            Ok(())
        })
    }
}
