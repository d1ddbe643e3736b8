use chrono::{DateTime, TimeZone, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue::Set;

/// Row id of the single shared config row.
pub const CONFIG_ROW_ID: i32 = 1;

/// Process-wide admission-control state, shared by all clients. A single row
/// (id = 1) holds the registration window, the manual override, and the
/// timestamp of the last administrative reset.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, serde::Serialize)]
#[sea_orm(table_name = "registration_config")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i32,
    pub open_time: DateTime<Utc>,
    pub close_time: DateTime<Utc>,
    /// When true, the time fields are ignored in favor of `is_manually_open`.
    pub manual_override: bool,
    pub is_manually_open: bool,
    /// Stamped by the administrative reset; invalidates device tickets issued
    /// before it.
    pub last_reset: Option<DateTime<Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Partial update of the window settings; absent fields are left untouched.
#[derive(Clone, Debug, Default, serde::Deserialize)]
pub struct WindowUpdate {
    pub open_time: Option<DateTime<Utc>>,
    pub close_time: Option<DateTime<Utc>>,
    pub manual_override: Option<bool>,
    pub is_manually_open: Option<bool>,
}

impl Model {
    /// The window shipped with the event: open 2026-02-06 08:00 and close
    /// 2026-02-07 00:00 Taiwan time, stored as UTC.
    pub fn default_open_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 2, 6, 0, 0, 0).unwrap()
    }

    pub fn default_close_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 2, 6, 16, 0, 0).unwrap()
    }

    /// Returns the shared config row, inserting the defaults if absent.
    pub async fn get_or_default<C: ConnectionTrait>(conn: &C) -> Result<Model, DbErr> {
        if let Some(existing) = Entity::find_by_id(CONFIG_ROW_ID).one(conn).await? {
            return Ok(existing);
        }

        ActiveModel {
            id: Set(CONFIG_ROW_ID),
            open_time: Set(Self::default_open_time()),
            close_time: Set(Self::default_close_time()),
            manual_override: Set(false),
            is_manually_open: Set(false),
            last_reset: Set(None),
        }
        .insert(conn)
        .await
    }

    /// Applies a partial window update and returns the resulting row.
    pub async fn update_window<C: ConnectionTrait>(
        conn: &C,
        update: WindowUpdate,
    ) -> Result<Model, DbErr> {
        let current = Self::get_or_default(conn).await?;
        let mut active: ActiveModel = current.into();

        if let Some(open_time) = update.open_time {
            active.open_time = Set(open_time);
        }
        if let Some(close_time) = update.close_time {
            active.close_time = Set(close_time);
        }
        if let Some(manual_override) = update.manual_override {
            active.manual_override = Set(manual_override);
        }
        if let Some(is_manually_open) = update.is_manually_open {
            active.is_manually_open = Set(is_manually_open);
        }

        active.update(conn).await
    }

    /// Stamps `last_reset`, invalidating every device ticket issued before
    /// `now`. Runs inside the reset transaction.
    pub async fn mark_reset<C: ConnectionTrait>(
        conn: &C,
        now: DateTime<Utc>,
    ) -> Result<Model, DbErr> {
        let current = Self::get_or_default(conn).await?;
        let mut active: ActiveModel = current.into();
        active.last_reset = Set(Some(now));
        active.update(conn).await
    }

    pub async fn last_reset<C: ConnectionTrait>(conn: &C) -> Result<Option<DateTime<Utc>>, DbErr> {
        Ok(Self::get_or_default(conn).await?.last_reset)
    }
}
