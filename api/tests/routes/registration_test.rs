#[cfg(test)]
mod tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode, header::AUTHORIZATION, header::CONTENT_TYPE},
    };
    use chrono::{Duration, Utc};
    use serde_json::{Value, json};
    use serial_test::serial;
    use tower::ServiceExt;

    use crate::helpers::{admin_token, body_json, make_test_app, user_token};

    async fn put_window(app: &Router, token: &str, body: Value) -> StatusCode {
        let req = Request::builder()
            .method("PUT")
            .uri("/api/registration/window")
            .header(AUTHORIZATION, format!("Bearer {token}"))
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        app.clone().oneshot(req).await.unwrap().status()
    }

    async fn get_status(app: &Router) -> Value {
        let req = Request::builder()
            .method("GET")
            .uri("/api/registration/status")
            .body(Body::empty())
            .unwrap();
        let response = app.clone().oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        body_json(response).await
    }

    #[tokio::test]
    #[serial]
    async fn window_in_the_future_reports_before_with_countdown() {
        let (app, _db) = make_test_app().await;

        let open = Utc::now() + Duration::days(2) + Duration::hours(1);
        let close = open + Duration::hours(16);
        let status = put_window(
            &app,
            &admin_token(),
            json!({ "open_time": open.to_rfc3339(), "close_time": close.to_rfc3339() }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let json = get_status(&app).await;
        assert_eq!(json["data"]["status"], "before");

        let countdown = &json["data"]["countdown"];
        assert_eq!(countdown["days"], 2);
        assert!(countdown["hours"].as_i64().unwrap() <= 1);
    }

    #[tokio::test]
    #[serial]
    async fn open_window_reports_open_without_countdown() {
        let (app, _db) = make_test_app().await;

        let open = Utc::now() - Duration::hours(1);
        let close = Utc::now() + Duration::hours(1);
        put_window(
            &app,
            &admin_token(),
            json!({ "open_time": open.to_rfc3339(), "close_time": close.to_rfc3339() }),
        )
        .await;

        let json = get_status(&app).await;
        assert_eq!(json["data"]["status"], "open");
        assert!(json["data"]["countdown"].is_null());
    }

    #[tokio::test]
    #[serial]
    async fn past_window_reports_closed() {
        let (app, _db) = make_test_app().await;

        let open = Utc::now() - Duration::hours(2);
        let close = Utc::now() - Duration::hours(1);
        put_window(
            &app,
            &admin_token(),
            json!({ "open_time": open.to_rfc3339(), "close_time": close.to_rfc3339() }),
        )
        .await;

        let json = get_status(&app).await;
        assert_eq!(json["data"]["status"], "closed");
        assert!(json["data"]["countdown"].is_null());
    }

    #[tokio::test]
    #[serial]
    async fn manual_override_beats_the_clock() {
        let (app, _db) = make_test_app().await;

        // Window far in the past, but manually forced open.
        let open = Utc::now() - Duration::days(30);
        let close = Utc::now() - Duration::days(29);
        put_window(
            &app,
            &admin_token(),
            json!({
                "open_time": open.to_rfc3339(),
                "close_time": close.to_rfc3339(),
                "manual_override": true,
                "is_manually_open": true,
            }),
        )
        .await;

        let json = get_status(&app).await;
        assert_eq!(json["data"]["status"], "open");
        assert_eq!(json["data"]["manual_override"], true);

        // Flip the switch off; still overridden, now closed.
        put_window(&app, &admin_token(), json!({ "is_manually_open": false })).await;

        let json = get_status(&app).await;
        assert_eq!(json["data"]["status"], "closed");
    }

    #[tokio::test]
    #[serial]
    async fn window_control_is_admin_only() {
        let (app, _db) = make_test_app().await;

        let req = Request::builder()
            .method("PUT")
            .uri("/api/registration/window")
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(json!({ "manual_override": true }).to_string()))
            .unwrap();
        assert_eq!(
            app.clone().oneshot(req).await.unwrap().status(),
            StatusCode::UNAUTHORIZED
        );

        let status = put_window(&app, &user_token("u1"), json!({ "manual_override": true })).await;
        assert_eq!(status, StatusCode::FORBIDDEN);

        // The attendee's attempt changed nothing.
        let json = get_status(&app).await;
        assert_eq!(json["data"]["manual_override"], false);
    }

    #[tokio::test]
    #[serial]
    async fn window_change_is_audited() {
        let (app, db) = make_test_app().await;

        put_window(&app, &admin_token(), json!({ "manual_override": true })).await;

        let logs = db::models::admin_log::Model::recent(&db, 10).await.unwrap();
        assert!(
            logs.iter()
                .any(|l| l.action == db::models::admin_log::actions::REGISTRATION_CONTROL)
        );
    }
}
