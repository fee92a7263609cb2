use serde::{Deserialize, Serialize};
use std::fmt::Display;
use vodca::{AsRefln, Fromln};

/// Vehicle identification number. Compared case-sensitively.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Fromln, AsRefln, Serialize, Deserialize)]
pub struct Vin(String);

impl Vin {
    pub fn new(vin: impl Into<String>) -> Self {
        Self(vin.into())
    }
}

impl Display for Vin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
