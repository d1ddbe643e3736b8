use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue::Set;
use sea_orm::{QueryOrder, QuerySelect};

/// Audit trail of administrative actions.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, serde::Serialize)]
#[sea_orm(table_name = "admin_logs")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub action: String,
    pub status: String,
    pub details: String,
    pub user_agent: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

pub mod actions {
    pub const LOGIN: &str = "LOGIN";
    pub const LOGIN_FAILURE: &str = "LOGIN_FAILURE";
    pub const SEED_DATA: &str = "SEED_DATA";
    pub const REGISTRATION_CONTROL: &str = "REGISTRATION_CONTROL";
    pub const EXPORT: &str = "EXPORT";
    pub const VIEW_DASHBOARD: &str = "VIEW_DASHBOARD";
}

pub const STATUS_SUCCESS: &str = "SUCCESS";
pub const STATUS_FAILURE: &str = "FAILURE";

impl Model {
    /// Records an admin action. Logging must never fail the action itself,
    /// so errors are reported through tracing and swallowed.
    pub async fn record(
        db: &DatabaseConnection,
        action: &str,
        status: &str,
        details: &str,
        user_agent: Option<&str>,
    ) {
        let result = ActiveModel {
            action: Set(action.to_string()),
            status: Set(status.to_string()),
            details: Set(details.to_string()),
            user_agent: Set(user_agent.map(str::to_string)),
            created_at: Set(Utc::now()),
            ..Default::default()
        }
        .insert(db)
        .await;

        if let Err(e) = result {
            tracing::warn!(error = %e, action, "Failed to record admin log");
        }
    }

    /// Most recent log entries, newest first.
    pub async fn recent(db: &DatabaseConnection, limit: u64) -> Result<Vec<Model>, DbErr> {
        Entity::find()
            .order_by_desc(Column::CreatedAt)
            .limit(limit)
            .all(db)
            .await
    }
}
