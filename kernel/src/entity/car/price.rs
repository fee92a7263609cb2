use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

/// Rental price per day, in the dealership's currency.
#[derive(Debug, Clone, Copy, PartialEq, Fromln, AsRefln, Serialize, Deserialize)]
pub struct DailyPrice(f64);

impl DailyPrice {
    pub fn new(price: impl Into<f64>) -> Self {
        Self(price.into())
    }
}
