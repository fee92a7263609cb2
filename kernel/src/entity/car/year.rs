use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Copy, Eq, PartialEq, Fromln, AsRefln, Serialize, Deserialize)]
pub struct CarYear(i32);

impl CarYear {
    pub fn new(year: impl Into<i32>) -> Self {
        Self(year.into())
    }
}
