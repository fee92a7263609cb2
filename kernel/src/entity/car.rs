mod brand;
mod color;
mod id;
mod model;
mod price;
mod status;
mod vin;
mod year;

pub use self::{brand::*, color::*, id::*, model::*, price::*, status::*, vin::*, year::*};
use crate::entity::DealerId;
use destructure::{Destructure, Mutation};
use vodca::References;

#[derive(Debug, Clone, PartialEq, References, Destructure, Mutation)]
pub struct Car {
    id: CarId,
    brand: CarBrand,
    model: CarModel,
    year: CarYear,
    color: CarColor,
    daily_price: DailyPrice,
    vin: Vin,
    status: CarStatus,
    dealer_id: DealerId,
}

impl Car {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: CarId,
        brand: CarBrand,
        model: CarModel,
        year: CarYear,
        color: CarColor,
        daily_price: DailyPrice,
        vin: Vin,
        status: CarStatus,
        dealer_id: DealerId,
    ) -> Self {
        Self {
            id,
            brand,
            model,
            year,
            color,
            daily_price,
            vin,
            status,
            dealer_id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, References, Destructure)]
pub struct CarDraft {
    brand: CarBrand,
    model: CarModel,
    year: CarYear,
    color: CarColor,
    daily_price: DailyPrice,
    vin: Vin,
    status: CarStatus,
    dealer_id: DealerId,
}

impl CarDraft {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        brand: CarBrand,
        model: CarModel,
        year: CarYear,
        color: CarColor,
        daily_price: DailyPrice,
        vin: Vin,
        status: CarStatus,
        dealer_id: DealerId,
    ) -> Self {
        Self {
            brand,
            model,
            year,
            color,
            daily_price,
            vin,
            status,
            dealer_id,
        }
    }

    pub fn into_car(self, id: CarId) -> Car {
        let DestructCarDraft {
            brand,
            model,
            year,
            color,
            daily_price,
            vin,
            status,
            dealer_id,
        } = self.into_destruct();
        Car::new(
            id,
            brand,
            model,
            year,
            color,
            daily_price,
            vin,
            status,
            dealer_id,
        )
    }
}
