use crate::controller::Exhaust;
use application::transfer::BookingDto;
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use time::OffsetDateTime;

#[derive(Debug, Serialize)]
pub struct BookingResponse {
    id: i64,
    car_id: i64,
    customer_name: String,
    customer_email: String,
    #[serde(with = "time::serde::rfc3339")]
    start_datetime: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    end_datetime: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    created_at: OffsetDateTime,
}

impl From<BookingDto> for BookingResponse {
    fn from(value: BookingDto) -> Self {
        Self {
            id: value.id,
            car_id: value.car_id,
            customer_name: value.customer_name,
            customer_email: value.customer_email,
            start_datetime: value.start_datetime,
            end_datetime: value.end_datetime,
            created_at: value.created_at,
        }
    }
}

pub struct Presenter;

impl Exhaust<BookingDto> for Presenter {
    type To = Json<BookingResponse>;
    fn emit(&self, input: BookingDto) -> Self::To {
        Json(BookingResponse::from(input))
    }
}

impl Exhaust<Vec<BookingDto>> for Presenter {
    type To = Json<Vec<BookingResponse>>;
    fn emit(&self, input: Vec<BookingDto>) -> Self::To {
        Json(input.into_iter().map(BookingResponse::from).collect())
    }
}

impl Exhaust<()> for Presenter {
    type To = StatusCode;
    fn emit(&self, _: ()) -> Self::To {
        StatusCode::NO_CONTENT
    }
}

pub struct CreatedPresenter;

impl Exhaust<BookingDto> for CreatedPresenter {
    type To = (StatusCode, Json<BookingResponse>);
    fn emit(&self, input: BookingDto) -> Self::To {
        (StatusCode::CREATED, Json(BookingResponse::from(input)))
    }
}
