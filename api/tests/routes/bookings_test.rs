#[cfg(test)]
mod tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode, header::AUTHORIZATION, header::CONTENT_TYPE},
    };
    use sea_orm::{DatabaseConnection, EntityTrait};
    use serde_json::{Value, json};
    use serial_test::serial;
    use tower::ServiceExt;

    use crate::helpers::{admin_token, body_json, make_test_app, user_token};

    fn submit_request(token: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/bookings")
            .header(AUTHORIZATION, format!("Bearer {token}"))
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn valid_body(selection: Value) -> Value {
        json!({
            "name": "Amy",
            "phone": "0912345678",
            "selection": selection,
        })
    }

    async fn booked(db: &DatabaseConnection, id: &str) -> i32 {
        db::models::session_slot::Entity::find_by_id(id.to_string())
            .one(db)
            .await
            .unwrap()
            .unwrap()
            .booked
    }

    #[tokio::test]
    #[serial]
    async fn submission_requires_a_session_token() {
        let (app, _db) = make_test_app().await;

        let req = Request::builder()
            .method("POST")
            .uri("/api/bookings")
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(
                valid_body(json!({ "selected_c": "6F_C" })).to_string(),
            ))
            .unwrap();

        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    #[serial]
    async fn single_c_session_books_and_increments_the_slot() {
        let (app, db) = make_test_app().await;

        let req = submit_request(&user_token("u1"), valid_body(json!({ "selected_c": "6F_C" })));
        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let json = body_json(response).await;
        assert_eq!(json["success"], true);
        assert_eq!(json["data"]["slots"], json!(["6F_C"]));
        assert!(json["data"]["id"].as_i64().unwrap() > 0);

        assert_eq!(booked(&db, "6F_C").await, 1);
    }

    #[tokio::test]
    #[serial]
    async fn a_and_b_pair_books_both_slots() {
        let (app, db) = make_test_app().await;

        let req = submit_request(
            &user_token("u1"),
            valid_body(json!({ "selected_a": "3F_A", "selected_b": "5F_B" })),
        );
        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        assert_eq!(booked(&db, "3F_A").await, 1);
        assert_eq!(booked(&db, "5F_B").await, 1);
    }

    #[tokio::test]
    #[serial]
    async fn lone_a_session_is_not_a_valid_combination() {
        let (app, db) = make_test_app().await;

        let req = submit_request(&user_token("u1"), valid_body(json!({ "selected_a": "2F_A" })));
        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        // Nothing was reserved.
        assert_eq!(booked(&db, "2F_A").await, 0);
    }

    #[tokio::test]
    #[serial]
    async fn malformed_phone_fails_validation() {
        let (app, _db) = make_test_app().await;

        let body = json!({
            "name": "Amy",
            "phone": "12345",
            "selection": { "selected_c": "6F_C" },
        });
        let req = submit_request(&user_token("u1"), body);
        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = body_json(response).await;
        assert!(json["message"].as_str().unwrap().contains("Phone"));
    }

    #[tokio::test]
    #[serial]
    async fn unknown_slot_id_maps_to_not_found() {
        let (app, _db) = make_test_app().await;

        let req = submit_request(&user_token("u1"), valid_body(json!({ "selected_c": "9F_C" })));
        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    #[serial]
    async fn full_slot_maps_to_conflict_and_names_the_session() {
        let (app, db) = make_test_app().await;

        // Shrink 6F_C to a single seat.
        let mut slot: db::models::session_slot::ActiveModel =
            db::models::session_slot::Entity::find_by_id("6F_C".to_string())
                .one(&db)
                .await
                .unwrap()
                .unwrap()
                .into();
        slot.capacity = sea_orm::ActiveValue::Set(1);
        sea_orm::ActiveModelTrait::update(slot, &db).await.unwrap();

        let first = submit_request(&user_token("u1"), valid_body(json!({ "selected_c": "6F_C" })));
        assert_eq!(
            app.clone().oneshot(first).await.unwrap().status(),
            StatusCode::CREATED
        );

        let second = submit_request(&user_token("u2"), valid_body(json!({ "selected_c": "6F_C" })));
        let response = app.oneshot(second).await.unwrap();
        assert_eq!(response.status(), StatusCode::CONFLICT);

        let json = body_json(response).await;
        let message = json["message"].as_str().unwrap();
        assert!(message.contains("6F_C"), "message was: {message}");
        assert!(message.contains("fully booked"), "message was: {message}");

        assert_eq!(booked(&db, "6F_C").await, 1);
    }

    #[tokio::test]
    #[serial]
    async fn concurrent_submissions_respect_capacity() {
        let (app, db) = make_test_app().await;

        let mut slot: db::models::session_slot::ActiveModel =
            db::models::session_slot::Entity::find_by_id("6F_D".to_string())
                .one(&db)
                .await
                .unwrap()
                .unwrap()
                .into();
        slot.capacity = sea_orm::ActiveValue::Set(2);
        sea_orm::ActiveModelTrait::update(slot, &db).await.unwrap();

        let mut handles = Vec::new();
        for i in 0..5 {
            let app: Router = app.clone();
            let token = user_token(&format!("u{i}"));
            handles.push(tokio::spawn(async move {
                let req = submit_request(&token, valid_body(json!({ "selected_d": "6F_D" })));
                app.oneshot(req).await.unwrap().status()
            }));
        }

        let mut created = 0;
        let mut conflict = 0;
        for handle in handles {
            match handle.await.unwrap() {
                StatusCode::CREATED => created += 1,
                StatusCode::CONFLICT => conflict += 1,
                other => panic!("unexpected status: {other}"),
            }
        }

        assert_eq!(created, 2);
        assert_eq!(conflict, 3);
        assert_eq!(booked(&db, "6F_D").await, 2);
    }

    #[tokio::test]
    #[serial]
    async fn export_is_admin_only() {
        let (app, _db) = make_test_app().await;

        let no_token = Request::builder()
            .method("GET")
            .uri("/api/bookings")
            .body(Body::empty())
            .unwrap();
        assert_eq!(
            app.clone().oneshot(no_token).await.unwrap().status(),
            StatusCode::UNAUTHORIZED
        );

        let attendee = Request::builder()
            .method("GET")
            .uri("/api/bookings")
            .header(AUTHORIZATION, format!("Bearer {}", user_token("u1")))
            .body(Body::empty())
            .unwrap();
        assert_eq!(
            app.oneshot(attendee).await.unwrap().status(),
            StatusCode::FORBIDDEN
        );
    }

    #[tokio::test]
    #[serial]
    async fn export_lists_bookings_with_their_slots() {
        let (app, _db) = make_test_app().await;

        let submit = submit_request(
            &user_token("u1"),
            valid_body(json!({ "selected_a": "2F_A", "selected_b": "2F_B" })),
        );
        assert_eq!(
            app.clone().oneshot(submit).await.unwrap().status(),
            StatusCode::CREATED
        );

        let export = Request::builder()
            .method("GET")
            .uri("/api/bookings")
            .header(AUTHORIZATION, format!("Bearer {}", admin_token()))
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(export).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        let rows = json["data"].as_array().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["name"], "Amy");
        assert_eq!(rows[0]["status"], "confirmed");
        let slots: Vec<&str> = rows[0]["slots"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap())
            .collect();
        assert!(slots.contains(&"2F_A") && slots.contains(&"2F_B"));
    }
}
