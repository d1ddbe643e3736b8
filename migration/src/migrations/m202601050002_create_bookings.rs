use sea_orm_migration::prelude::*;

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m202601050002_create_bookings"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // bookings
        manager
            .create_table(
                Table::create()
                    .table(Alias::new("bookings"))
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Alias::new("id"))
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Alias::new("user_id")).string().not_null())
                    .col(ColumnDef::new(Alias::new("name")).string().not_null())
                    .col(ColumnDef::new(Alias::new("phone")).string().not_null())
                    .col(ColumnDef::new(Alias::new("email")).string().null())
                    .col(ColumnDef::new(Alias::new("student_id")).string().null())
                    .col(
                        ColumnDef::new(Alias::new("status"))
                            .string()
                            .not_null()
                            .default("confirmed"),
                    )
                    .col(
                        ColumnDef::new(Alias::new("created_at"))
                            .timestamp()
                            .not_null()
                            .default(Expr::cust("CURRENT_TIMESTAMP")),
                    )
                    .to_owned(),
            )
            .await?;

        // booking_slots: one row per reserved slot
        manager
            .create_table(
                Table::create()
                    .table(Alias::new("booking_slots"))
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Alias::new("booking_id"))
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Alias::new("slot_id")).string().not_null())
                    .primary_key(
                        Index::create()
                            .col(Alias::new("booking_id"))
                            .col(Alias::new("slot_id")),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_booking_slots_booking")
                            .from(Alias::new("booking_slots"), Alias::new("booking_id"))
                            .to(Alias::new("bookings"), Alias::new("id"))
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Alias::new("booking_slots")).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Alias::new("bookings")).to_owned())
            .await
    }
}
