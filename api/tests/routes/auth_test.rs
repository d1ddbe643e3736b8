#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{Request, StatusCode, header::CONTENT_TYPE},
    };
    use serial_test::serial;
    use tower::ServiceExt;

    use crate::helpers::app::TEST_ADMIN_PASSWORD;
    use crate::helpers::{body_json, make_test_app};

    #[tokio::test]
    #[serial]
    async fn anonymous_session_is_minted() {
        let (app, _db) = make_test_app().await;

        let req = Request::builder()
            .method("POST")
            .uri("/api/auth/session")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let json = body_json(response).await;
        assert_eq!(json["success"], true);
        assert!(!json["data"]["user_id"].as_str().unwrap().is_empty());
        assert!(!json["data"]["token"].as_str().unwrap().is_empty());
        assert!(!json["data"]["expires_at"].as_str().unwrap().is_empty());
    }

    #[tokio::test]
    #[serial]
    async fn two_sessions_get_distinct_identities() {
        let (app, _db) = make_test_app().await;

        let mut ids = Vec::new();
        for _ in 0..2 {
            let req = Request::builder()
                .method("POST")
                .uri("/api/auth/session")
                .body(Body::empty())
                .unwrap();
            let response = app.clone().oneshot(req).await.unwrap();
            let json = body_json(response).await;
            ids.push(json["data"]["user_id"].as_str().unwrap().to_string());
        }
        assert_ne!(ids[0], ids[1]);
    }

    #[tokio::test]
    #[serial]
    async fn admin_login_with_correct_password_returns_token() {
        let (app, _db) = make_test_app().await;

        let body = serde_json::json!({ "password": TEST_ADMIN_PASSWORD });
        let req = Request::builder()
            .method("POST")
            .uri("/api/auth/admin")
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();

        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["success"], true);
        assert!(!json["data"]["token"].as_str().unwrap().is_empty());
    }

    #[tokio::test]
    #[serial]
    async fn admin_login_with_wrong_password_is_rejected_and_audited() {
        let (app, db) = make_test_app().await;

        let body = serde_json::json!({ "password": "nope" });
        let req = Request::builder()
            .method("POST")
            .uri("/api/auth/admin")
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();

        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let json = body_json(response).await;
        assert_eq!(json["success"], false);

        let logs = db::models::admin_log::Model::recent(&db, 10).await.unwrap();
        assert!(
            logs.iter()
                .any(|l| l.action == db::models::admin_log::actions::LOGIN_FAILURE)
        );
    }
}
