use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};

use crate::handler::AppModule;

mod booking;
mod car;
mod dealer;

pub use self::{booking::*, car::*, dealer::*};

/// `/health` plus every resource under `/api/v1`.
pub fn app(module: AppModule) -> Router {
    let api = Router::new().route_dealer().route_car().route_booking();

    Router::new()
        .route("/health", get(health))
        .nest("/api/v1", api)
        .with_state(module)
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "healthy" }))
}

#[cfg(test)]
mod test {
    use axum::body::Body;
    use axum::http::{header, Method, Request, StatusCode};
    use axum::Router;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::config::SeedDealer;
    use crate::handler::AppModule;

    async fn app() -> Router {
        let module = AppModule::new(Some(SeedDealer {
            name: "Oscar Mobility Main".to_string(),
            location: Some("Munich, Germany".to_string()),
        }))
        .await
        .unwrap();
        super::app(module)
    }

    async fn send(
        app: &Router,
        method: Method,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let request = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => request
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string())),
            None => request.body(Body::empty()),
        }
        .unwrap();

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }

    fn camry() -> Value {
        json!({
            "brand": "Toyota",
            "model": "Camry",
            "year": 2023,
            "color": "Blue",
            "daily_price": 35.0,
            "vin": "1HGBH41JXMN109186",
            "dealer_id": 1
        })
    }

    fn booking(start: &str, end: &str) -> Value {
        json!({
            "car_id": 1,
            "customer_name": "John Doe",
            "customer_email": "john.doe@example.com",
            "start_datetime": start,
            "end_datetime": end
        })
    }

    #[tokio::test]
    async fn health() {
        let app = app().await;
        let (status, body) = send(&app, Method::GET, "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "status": "healthy" }));
    }

    #[tokio::test]
    async fn booking_lifecycle() {
        let app = app().await;

        let (status, car) = send(&app, Method::POST, "/api/v1/cars", Some(camry())).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(car["id"], 1);
        assert_eq!(car["status"], "available");

        let (status, first) = send(
            &app,
            Method::POST,
            "/api/v1/bookings",
            Some(booking("2024-06-20T10:00:00Z", "2024-06-22T18:00:00Z")),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(first["id"], 1);
        assert_eq!(first["start_datetime"], "2024-06-20T10:00:00Z");

        let (status, conflict) = send(
            &app,
            Method::POST,
            "/api/v1/bookings",
            Some(booking("2024-06-21T00:00:00Z", "2024-06-23T00:00:00Z")),
        )
        .await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert!(conflict["detail"]
            .as_str()
            .is_some_and(|detail| detail.contains("already booked")));

        let (status, cars) = send(
            &app,
            Method::GET,
            "/api/v1/bookings/available-cars?start_datetime=2024-06-19T00:00:00Z&end_datetime=2024-06-20T10:00:00Z",
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(cars.as_array().map(Vec::len), Some(1));
        assert_eq!(cars[0]["id"], 1);

        let (status, cars) = send(
            &app,
            Method::GET,
            "/api/v1/bookings/available-cars?start_datetime=2024-06-21T00:00:00Z&end_datetime=2024-06-22T00:00:00Z",
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(cars, json!([]));

        let (status, body) = send(&app, Method::DELETE, "/api/v1/bookings/1", None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        assert_eq!(body, Value::Null);

        let (status, missing) = send(&app, Method::GET, "/api/v1/bookings/1", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(missing["detail"], "Booking with id 1 not found");
    }

    #[tokio::test]
    async fn missing_query_parameter_is_unprocessable() {
        let app = app().await;
        let (status, body) = send(
            &app,
            Method::GET,
            "/api/v1/bookings/available-cars?start_datetime=2024-06-19T00:00:00Z",
            None,
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body["detail"].is_string());
    }

    #[tokio::test]
    async fn malformed_requests_get_a_detail_body() {
        let app = app().await;

        let (status, body) = send(
            &app,
            Method::POST,
            "/api/v1/bookings",
            Some(json!({ "car_id": 1, "customer_name": "John Doe" })),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body["detail"].is_string());

        let (status, body) = send(&app, Method::GET, "/api/v1/cars/abc", None).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body["detail"].is_string());

        let (status, body) = send(
            &app,
            Method::POST,
            "/api/v1/bookings",
            Some(booking("2024-06-20T10:00:00", "2024-06-22T18:00:00")),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body["detail"].is_string());
    }

    #[tokio::test]
    async fn dealer_with_cars_is_kept() {
        let app = app().await;
        let (status, dealer) = send(
            &app,
            Method::POST,
            "/api/v1/dealers",
            Some(json!({ "name": "Oscar Mobility North" })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(dealer["id"], 2);

        let (status, _) = send(&app, Method::POST, "/api/v1/cars", Some(camry())).await;
        assert_eq!(status, StatusCode::CREATED);

        let (status, body) = send(&app, Method::DELETE, "/api/v1/dealers/1", None).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert!(body["detail"].is_string());

        let (status, _) = send(&app, Method::DELETE, "/api/v1/dealers/2", None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
    }
}
