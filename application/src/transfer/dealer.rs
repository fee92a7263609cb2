use kernel::prelude::entity::{DestructDealer, Dealer};

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct DealerDto {
    pub id: i64,
    pub name: String,
    pub location: Option<String>,
}

impl From<Dealer> for DealerDto {
    fn from(value: Dealer) -> Self {
        let DestructDealer { id, name, location } = value.into_destruct();
        Self {
            id: id.into(),
            name: name.into(),
            location: location.map(Into::into),
        }
    }
}

#[derive(Debug)]
pub struct GetDealerDto {
    pub id: i64,
}

#[derive(Debug)]
pub struct CreateDealerDto {
    pub name: String,
    pub location: Option<String>,
}

#[derive(Debug)]
pub struct UpdateDealerDto {
    pub id: i64,
    pub name: Option<String>,
    pub location: Option<String>,
}

#[derive(Debug)]
pub struct DeleteDealerDto {
    pub id: i64,
}
