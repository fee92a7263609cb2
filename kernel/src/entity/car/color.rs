use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Fromln, AsRefln, Serialize, Deserialize)]
pub struct CarColor(String);

impl CarColor {
    pub fn new(color: impl Into<String>) -> Self {
        Self(color.into())
    }
}
