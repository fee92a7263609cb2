use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Fromln, AsRefln, Serialize, Deserialize)]
pub struct CarBrand(String);

impl CarBrand {
    pub fn new(brand: impl Into<String>) -> Self {
        Self(brand.into())
    }
}
