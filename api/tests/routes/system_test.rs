#[cfg(test)]
mod tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode, header::AUTHORIZATION, header::CONTENT_TYPE},
    };
    use sea_orm::{EntityTrait, PaginatorTrait};
    use serde_json::json;
    use serial_test::serial;
    use tower::ServiceExt;

    use crate::helpers::{admin_token, body_json, make_test_app, user_token};

    async fn submit_c_booking(app: &Router, sub: &str) {
        let body = json!({
            "name": "Amy",
            "phone": "0912345678",
            "selection": { "selected_c": "6F_C" },
        });
        let req = Request::builder()
            .method("POST")
            .uri("/api/bookings")
            .header(AUTHORIZATION, format!("Bearer {}", user_token(sub)))
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        assert_eq!(
            app.clone().oneshot(req).await.unwrap().status(),
            StatusCode::CREATED
        );
    }

    #[tokio::test]
    #[serial]
    async fn last_reset_is_null_before_any_reset() {
        let (app, _db) = make_test_app().await;

        let req = Request::builder()
            .method("GET")
            .uri("/api/system/last-reset")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert!(json["data"]["last_reset"].is_null());
    }

    #[tokio::test]
    #[serial]
    async fn reset_is_admin_only() {
        let (app, _db) = make_test_app().await;

        let req = Request::builder()
            .method("POST")
            .uri("/api/system/reset")
            .header(AUTHORIZATION, format!("Bearer {}", user_token("u1")))
            .body(Body::empty())
            .unwrap();
        assert_eq!(
            app.oneshot(req).await.unwrap().status(),
            StatusCode::FORBIDDEN
        );
    }

    #[tokio::test]
    #[serial]
    async fn reset_wipes_bookings_and_stamps_the_marker() {
        let (app, db) = make_test_app().await;

        submit_c_booking(&app, "u1").await;
        assert_eq!(
            db::models::booking::Entity::find().count(&db).await.unwrap(),
            1
        );

        let req = Request::builder()
            .method("POST")
            .uri("/api/system/reset")
            .header(AUTHORIZATION, format!("Bearer {}", admin_token()))
            .body(Body::empty())
            .unwrap();
        let response = app.clone().oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        let stamped = json["data"]["last_reset"].as_i64().unwrap();
        assert!(stamped > 0);

        // Bookings gone, catalog restored untouched.
        assert_eq!(
            db::models::booking::Entity::find().count(&db).await.unwrap(),
            0
        );
        let slots = db::models::session_slot::Model::find_all_ordered(&db)
            .await
            .unwrap();
        assert_eq!(slots.len(), 8);
        assert!(slots.iter().all(|s| s.booked == 0));

        // The public marker now reports the same instant.
        let req = Request::builder()
            .method("GET")
            .uri("/api/system/last-reset")
            .body(Body::empty())
            .unwrap();
        let json = body_json(app.oneshot(req).await.unwrap()).await;
        assert_eq!(json["data"]["last_reset"].as_i64().unwrap(), stamped);

        let logs = db::models::admin_log::Model::recent(&db, 10).await.unwrap();
        assert!(
            logs.iter()
                .any(|l| l.action == db::models::admin_log::actions::SEED_DATA)
        );
    }
}
