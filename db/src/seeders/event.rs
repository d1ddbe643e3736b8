//! Seed data and the administrative reset.
//!
//! The slot set is fixed for the event; a reset wipes every booking and slot,
//! recreates the slots with `booked = 0`, and stamps `last_reset` so devices
//! holding a ticket from before the reset unlock themselves.

use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::{
    ConnectionTrait, DatabaseConnection, DbErr, EntityTrait, TransactionError, TransactionTrait,
};

use crate::models::{booking, booking_slot, registration_config, session_slot};

fn slot(
    id: &str,
    category: &str,
    location: &str,
    title: &str,
    description: &str,
    capacity: i32,
    duration: &str,
) -> session_slot::ActiveModel {
    session_slot::ActiveModel {
        id: Set(id.to_string()),
        category: Set(category.to_string()),
        title: Set(title.to_string()),
        description: Set(description.to_string()),
        location: Set(location.to_string()),
        start_time: Set(duration.to_string()),
        end_time: Set(String::new()),
        capacity: Set(capacity),
        booked: Set(0),
    }
}

/// The fixed slot set for the 2026 event.
pub fn event_slots() -> Vec<session_slot::ActiveModel> {
    vec![
        // A sessions
        slot(
            "2F_A",
            "A",
            "二樓",
            "躍動潛能：音樂與生命的對話",
            "登上舞台親自執棒，指揮天谷樂團演奏。民眾實際體驗指揮流程，近距離感受音樂。",
            50,
            "20分鐘",
        ),
        slot(
            "3F_A",
            "A",
            "三樓",
            "正向教養攤位 (4攤)",
            "參與正向教養情境模擬，四種體驗活動，練習溫和堅定對話。透過實際操作，掌握尊重與合作的教養技巧。",
            180,
            "20分鐘",
        ),
        slot(
            "5F_A",
            "A",
            "五樓",
            "創價 OPEN SPACE：無劇本思維冒險",
            "透過互動參與實踐創價理念，探索人本教育新模式。在活動中將價值創造轉化為具體行動。",
            120,
            "20分鐘",
        ),
        // B sessions
        slot(
            "2F_B",
            "B",
            "二樓",
            "躍動潛能：音樂與生命的對話",
            "登上舞台親自執棒，指揮天谷樂團演奏。民眾實際體驗指揮流程，近距離感受音樂。",
            50,
            "20分鐘",
        ),
        slot(
            "3F_B",
            "B",
            "三樓",
            "專業課程攤位 (4攤)",
            "進入創價教育專業課堂，表演藝術、音樂、資訊、永續桌遊，實踐人本教學策略。親自操作教育方案，提升現場引導與溝通能力。",
            180,
            "20分鐘",
        ),
        slot(
            "5F_B",
            "B",
            "五樓",
            "創價 OPEN SPACE：無劇本思維冒險",
            "透過互動參與實踐創價理念，探索人本教育新模式。在活動中將價值創造轉化為具體行動。",
            120,
            "20分鐘",
        ),
        // C session
        slot(
            "6F_C",
            "C",
            "六樓會三",
            "《優雅接住，情緒的浪》",
            "解析學生爆發情緒特徵，學習三階段緩降策略。透過 SEL 社會情緒學習實務，建立穩定校園支持環境。",
            60,
            "40分鐘",
        ),
        // D session
        slot(
            "6F_D",
            "D",
            "六樓會四",
            "《從餐桌到生命的美利善》",
            "探討畜牧業現況與食材選擇，破除飲食迷思。引導建立負責任的生命態度，將永續教育落實於生活。",
            60,
            "40分鐘",
        ),
    ]
}

/// Inserts the fixed slot set. The table must be empty.
pub async fn seed_slots<C: ConnectionTrait>(conn: &C) -> Result<(), DbErr> {
    session_slot::Entity::insert_many(event_slots())
        .exec(conn)
        .await?;
    Ok(())
}

/// Ensures the shared registration config row exists.
pub async fn ensure_default_config(
    db: &DatabaseConnection,
) -> Result<registration_config::Model, DbErr> {
    registration_config::Model::get_or_default(db).await
}

/// Administrative reset: delete all bookings and slots, recreate the slot
/// set, and stamp `last_reset`. Runs as one transaction. Not coordinated
/// against in-flight submissions; treat as an exclusive maintenance
/// operation.
pub async fn reset_event(db: &DatabaseConnection) -> Result<DateTime<Utc>, DbErr> {
    let result = db
        .transaction::<_, DateTime<Utc>, DbErr>(|txn| {
            Box::pin(async move {
                booking_slot::Entity::delete_many().exec(txn).await?;
                booking::Entity::delete_many().exec(txn).await?;
                session_slot::Entity::delete_many().exec(txn).await?;

                seed_slots(txn).await?;

                let now = Utc::now();
                registration_config::Model::mark_reset(txn, now).await?;
                Ok(now)
            })
        })
        .await;

    match result {
        Ok(now) => Ok(now),
        Err(TransactionError::Connection(e)) | Err(TransactionError::Transaction(e)) => Err(e),
    }
}
