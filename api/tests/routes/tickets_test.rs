#[cfg(test)]
mod tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode, header::AUTHORIZATION, header::CONTENT_TYPE},
    };
    use chrono::Utc;
    use serde_json::{Value, json};
    use serial_test::serial;
    use tower::ServiceExt;

    use crate::helpers::{admin_token, body_json, make_test_app};

    fn ticket(issued_at: i64) -> Value {
        json!({
            "booking_id": 1,
            "name": "Amy",
            "phone": "0912345678",
            "slot_ids": ["6F_C"],
            "issued_at": issued_at,
        })
    }

    async fn verify(app: &Router, ticket: Value) -> Value {
        let req = Request::builder()
            .method("POST")
            .uri("/api/tickets/verify")
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(ticket.to_string()))
            .unwrap();
        let response = app.clone().oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        body_json(response).await
    }

    #[tokio::test]
    #[serial]
    async fn ticket_is_valid_when_no_reset_has_happened() {
        let (app, _db) = make_test_app().await;

        let json = verify(&app, ticket(0)).await;
        assert_eq!(json["data"]["valid"], true);
    }

    #[tokio::test]
    #[serial]
    async fn reset_invalidates_older_tickets_but_not_newer_ones() {
        let (app, _db) = make_test_app().await;

        let before_reset = Utc::now().timestamp_millis();

        let req = Request::builder()
            .method("POST")
            .uri("/api/system/reset")
            .header(AUTHORIZATION, format!("Bearer {}", admin_token()))
            .body(Body::empty())
            .unwrap();
        let response = app.clone().oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let stamped = body_json(response).await["data"]["last_reset"]
            .as_i64()
            .unwrap();

        let json = verify(&app, ticket(before_reset - 1)).await;
        assert_eq!(json["data"]["valid"], false);

        // A ticket issued after the reset stands.
        let json = verify(&app, ticket(stamped + 1)).await;
        assert_eq!(json["data"]["valid"], true);
    }
}
