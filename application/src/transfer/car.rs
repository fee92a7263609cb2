use kernel::prelude::entity::{Car, CarStatus, DestructCar};

#[derive(Debug, Clone, PartialEq)]
pub struct CarDto {
    pub id: i64,
    pub brand: String,
    pub model: String,
    pub year: i32,
    pub color: String,
    pub daily_price: f64,
    pub vin: String,
    pub status: CarStatus,
    pub dealer_id: i64,
}

impl From<Car> for CarDto {
    fn from(value: Car) -> Self {
        let DestructCar {
            id,
            brand,
            model,
            year,
            color,
            daily_price,
            vin,
            status,
            dealer_id,
        } = value.into_destruct();
        Self {
            id: id.into(),
            brand: brand.into(),
            model: model.into(),
            year: year.into(),
            color: color.into(),
            daily_price: daily_price.into(),
            vin: vin.into(),
            status,
            dealer_id: dealer_id.into(),
        }
    }
}

#[derive(Debug)]
pub struct GetCarDto {
    pub id: i64,
}

#[derive(Debug)]
pub struct CreateCarDto {
    pub brand: String,
    pub model: String,
    pub year: i32,
    pub color: String,
    pub daily_price: f64,
    pub vin: String,
    pub status: CarStatus,
    pub dealer_id: i64,
}

#[derive(Debug, Default)]
pub struct UpdateCarDto {
    pub id: i64,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub year: Option<i32>,
    pub color: Option<String>,
    pub daily_price: Option<f64>,
    pub vin: Option<String>,
    pub status: Option<CarStatus>,
    pub dealer_id: Option<i64>,
}

#[derive(Debug)]
pub struct DeleteCarDto {
    pub id: i64,
}
