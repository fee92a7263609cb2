use serde::{Deserialize, Serialize};
use std::fmt::Display;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CarStatus {
    #[default]
    Available,
    Maintenance,
}

impl CarStatus {
    pub fn is_available(&self) -> bool {
        matches!(self, CarStatus::Available)
    }
}

impl Display for CarStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CarStatus::Available => write!(f, "available"),
            CarStatus::Maintenance => write!(f, "maintenance"),
        }
    }
}
