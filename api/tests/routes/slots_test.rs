#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use serial_test::serial;
    use tower::ServiceExt;

    use crate::helpers::{body_json, make_test_app};

    #[tokio::test]
    #[serial]
    async fn lists_the_seeded_catalog_with_remaining_counts() {
        let (app, _db) = make_test_app().await;

        let req = Request::builder()
            .method("GET")
            .uri("/api/slots")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["success"], true);

        let slots = json["data"].as_array().unwrap();
        assert_eq!(slots.len(), 8);

        // Ordered by id, all untouched.
        assert_eq!(slots[0]["id"], "2F_A");
        for slot in slots {
            assert_eq!(slot["booked"], 0);
            assert_eq!(slot["remaining"], slot["capacity"]);
        }

        let first = &slots[0];
        assert_eq!(first["category"], "A");
        assert_eq!(first["capacity"], 50);
    }
}
