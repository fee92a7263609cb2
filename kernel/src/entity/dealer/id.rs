use serde::{Deserialize, Serialize};
use std::fmt::Display;
use vodca::{AsRefln, Fromln};

#[derive(
    Debug, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize, Fromln, AsRefln,
)]
pub struct DealerId(i64);

impl DealerId {
    pub fn new(id: impl Into<i64>) -> Self {
        Self(id.into())
    }
}

impl Display for DealerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
