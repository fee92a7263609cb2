use crate::controller::Exhaust;
use application::transfer::CarDto;
use axum::http::StatusCode;
use axum::Json;
use kernel::prelude::entity::CarStatus;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct CarResponse {
    id: i64,
    brand: String,
    model: String,
    year: i32,
    color: String,
    daily_price: f64,
    vin: String,
    status: CarStatus,
    dealer_id: i64,
}

impl From<CarDto> for CarResponse {
    fn from(value: CarDto) -> Self {
        Self {
            id: value.id,
            brand: value.brand,
            model: value.model,
            year: value.year,
            color: value.color,
            daily_price: value.daily_price,
            vin: value.vin,
            status: value.status,
            dealer_id: value.dealer_id,
        }
    }
}

pub struct Presenter;

impl Exhaust<CarDto> for Presenter {
    type To = Json<CarResponse>;
    fn emit(&self, input: CarDto) -> Self::To {
        Json(CarResponse::from(input))
    }
}

impl Exhaust<Vec<CarDto>> for Presenter {
    type To = Json<Vec<CarResponse>>;
    fn emit(&self, input: Vec<CarDto>) -> Self::To {
        Json(input.into_iter().map(CarResponse::from).collect())
    }
}

impl Exhaust<()> for Presenter {
    type To = StatusCode;
    fn emit(&self, _: ()) -> Self::To {
        StatusCode::NO_CONTENT
    }
}

pub struct CreatedPresenter;

impl Exhaust<CarDto> for CreatedPresenter {
    type To = (StatusCode, Json<CarResponse>);
    fn emit(&self, input: CarDto) -> Self::To {
        (StatusCode::CREATED, Json(CarResponse::from(input)))
    }
}
