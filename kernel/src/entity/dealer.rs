mod id;
mod location;
mod name;

pub use self::{id::*, location::*, name::*};
use destructure::{Destructure, Mutation};
use vodca::References;

#[derive(Debug, Clone, Eq, PartialEq, References, Destructure, Mutation)]
pub struct Dealer {
    id: DealerId,
    name: DealerName,
    location: Option<DealerLocation>,
}

impl Dealer {
    pub fn new(id: DealerId, name: DealerName, location: Option<DealerLocation>) -> Self {
        Self { id, name, location }
    }
}

/// A dealer that has not been stored yet and therefore has no id.
#[derive(Debug, Clone, Eq, PartialEq, References, Destructure)]
pub struct DealerDraft {
    name: DealerName,
    location: Option<DealerLocation>,
}

impl DealerDraft {
    pub fn new(name: DealerName, location: Option<DealerLocation>) -> Self {
        Self { name, location }
    }

    pub fn into_dealer(self, id: DealerId) -> Dealer {
        let DestructDealerDraft { name, location } = self.into_destruct();
        Dealer::new(id, name, location)
    }
}
