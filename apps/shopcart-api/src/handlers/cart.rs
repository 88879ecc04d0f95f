//! # Cart Handlers
//!
//! HTTP handlers for cart manipulation.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Lifecycle                                       │
//! │                                                                         │
//! │  ┌──────────┐   POST /api/cart/add   ┌──────────┐                       │
//! │  │  Empty   │───────────────────────►│ In Cart  │◄──┐                   │
//! │  │  Cart    │                        │          │───┘ POST /add         │
//! │  └──────────┘                        └──────────┘                       │
//! │       ▲  │                                │  │                          │
//! │       │  │ GET /total, POST /checkout     │  │ GET /total → 200         │
//! │       │  └──────► 404, no body            │  │                          │
//! │       │                                   │  │                          │
//! │       └───────────────────────────────────┘  │                          │
//! │              POST /api/cart/checkout → 200   │                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use shopcart_core::{LineItem, ADD_SUCCESS_MESSAGE, CHECKOUT_SUCCESS_MESSAGE};
use tracing::debug;

use crate::error::ApiError;
use crate::state::AppState;

/// Adds a line item to the cart.
///
/// ## Behavior
/// - Valid item: appended, 201 with the confirmation message
/// - Missing/empty name or unreadable body: 400 with the rejection message,
///   cart unchanged
/// - Same name twice: two separate entries
pub async fn add_to_cart(
    State(state): State<AppState>,
    payload: Result<Json<LineItem>, JsonRejection>,
) -> Result<(StatusCode, &'static str), ApiError> {
    let Json(item) = payload?;
    debug!(name = %item.name, quantity = item.quantity, "add_to_cart request");

    state.cart.add_to_cart(item)?;
    Ok((StatusCode::CREATED, ADD_SUCCESS_MESSAGE))
}

/// Returns the cart total as a JSON number.
///
/// 404 with no body when the cart is empty.
pub async fn get_total_price(State(state): State<AppState>) -> Result<Json<f64>, ApiError> {
    debug!("get_total_price request");
    let total = state.cart.total_price()?;
    Ok(Json(total))
}

/// Empties the cart.
///
/// 404 with no body when the cart is already empty.
pub async fn checkout(State(state): State<AppState>) -> Result<&'static str, ApiError> {
    debug!("checkout request");
    state.cart.checkout()?;
    Ok(CHECKOUT_SUCCESS_MESSAGE)
}

/// Lists the items currently in the cart.
pub async fn get_cart(State(state): State<AppState>) -> Json<Vec<LineItem>> {
    debug!("get_cart request");
    Json(state.cart.items())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::router;
    use axum::body::{Body, Bytes};
    use axum::http::Request;
    use http_body_util::BodyExt;
    use shopcart_core::{ValidationPolicy, INVALID_PAYLOAD_MESSAGE};
    use tower::ServiceExt;

    async fn send(state: &AppState, request: Request<Body>) -> (StatusCode, Bytes) {
        let response = router(state.clone()).oneshot(request).await.unwrap();
        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        (status, body)
    }

    fn add_request(json: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/cart/add")
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn post(uri: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    const PRODUCT1: &str = r#"{"name":"Product1","unitPrice":10.99,"quantity":2}"#;
    const PRODUCT2: &str = r#"{"name":"Product2","unitPrice":5.49,"quantity":3}"#;

    #[tokio::test]
    async fn test_add_to_cart_success() {
        let state = AppState::default();

        let (status, body) = send(&state, add_request(PRODUCT1)).await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body, ADD_SUCCESS_MESSAGE);
        assert_eq!(state.cart.items(), vec![LineItem::new("Product1", 10.99, 2)]);
    }

    #[tokio::test]
    async fn test_add_to_cart_invalid_request() {
        let state = AppState::default();

        for json in [
            r#"{"name":null,"unitPrice":10.99,"quantity":2}"#,
            r#"{"name":"","unitPrice":10.99,"quantity":2}"#,
            r#"{"unitPrice":10.99,"quantity":2}"#,
            r#"{"name":"Product1","quantity":2}"#,
            r#"{"name":"Product1","unitPrice":"cheap","quantity":2}"#,
            "not json",
        ] {
            let (status, body) = send(&state, add_request(json)).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "payload: {}", json);
            assert_eq!(body, INVALID_PAYLOAD_MESSAGE);
        }

        assert!(state.cart.is_empty());
    }

    #[tokio::test]
    async fn test_add_without_content_type_is_rejected() {
        let state = AppState::default();
        let request = Request::builder()
            .method("POST")
            .uri("/api/cart/add")
            .body(Body::from(PRODUCT1))
            .unwrap();

        let (status, body) = send(&state, request).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, INVALID_PAYLOAD_MESSAGE);
    }

    #[tokio::test]
    async fn test_get_total_price_success() {
        let state = AppState::default();
        send(&state, add_request(PRODUCT1)).await;
        send(&state, add_request(PRODUCT2)).await;

        let (status, body) = send(&state, get("/api/cart/total")).await;

        assert_eq!(status, StatusCode::OK);
        let total: f64 = serde_json::from_slice(&body).unwrap();
        assert!((total - (10.99 * 2.0 + 5.49 * 3.0)).abs() < 0.001);
    }

    #[tokio::test]
    async fn test_get_total_price_empty_cart() {
        let state = AppState::default();

        let (status, body) = send(&state, get("/api/cart/total")).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn test_checkout_success() {
        let state = AppState::default();
        send(&state, add_request(PRODUCT1)).await;
        send(&state, add_request(PRODUCT2)).await;

        let (status, body) = send(&state, post("/api/cart/checkout")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, CHECKOUT_SUCCESS_MESSAGE);
        assert!(state.cart.is_empty());

        let (status, body) = send(&state, get("/api/cart/total")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.is_empty());

        let (status, _) = send(&state, post("/api/cart/checkout")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_checkout_empty_cart() {
        let state = AppState::default();

        let (status, body) = send(&state, post("/api/cart/checkout")).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.is_empty());
        assert!(state.cart.is_empty());
    }

    #[tokio::test]
    async fn test_get_cart_lists_duplicates_in_order() {
        let state = AppState::default();
        send(&state, add_request(PRODUCT1)).await;
        send(&state, add_request(PRODUCT2)).await;
        send(&state, add_request(PRODUCT1)).await;

        let (status, body) = send(&state, get("/api/cart")).await;

        assert_eq!(status, StatusCode::OK);
        let items: Vec<LineItem> = serde_json::from_slice(&body).unwrap();
        let names: Vec<&str> = items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["Product1", "Product2", "Product1"]);
    }

    #[tokio::test]
    async fn test_total_stays_a_finite_number() {
        let state = AppState::default();

        let (status, body) = send(
            &state,
            add_request(r#"{"name":"A","unitPrice":1e308,"quantity":10}"#),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, INVALID_PAYLOAD_MESSAGE);

        let (status, _) = send(
            &state,
            add_request(r#"{"name":"B","unitPrice":1e308,"quantity":1}"#),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);

        let (status, _) = send(
            &state,
            add_request(r#"{"name":"C","unitPrice":1e308,"quantity":1}"#),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, body) = send(&state, get("/api/cart/total")).await;
        assert_eq!(status, StatusCode::OK);
        let total: f64 = serde_json::from_slice(&body).unwrap();
        assert!((total - 1e308).abs() / 1e308 < 1e-9);
    }

    #[tokio::test]
    async fn test_strict_policy_rejects_negative_price() {
        let state = AppState::new(ValidationPolicy::Strict);

        let (status, body) = send(
            &state,
            add_request(r#"{"name":"Product1","unitPrice":-1.0,"quantity":2}"#),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, INVALID_PAYLOAD_MESSAGE);
        assert!(state.cart.is_empty());
    }
}
