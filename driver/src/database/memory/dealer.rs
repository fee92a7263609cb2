use error_stack::Report;

use kernel::interface::query::DealerQuery;
use kernel::interface::update::DealerModifier;
use kernel::prelude::entity::{Dealer, DealerDraft, DealerId};
use kernel::{EntityRef, KernelError};

use super::table::Record;
use super::InMemoryTransaction;

pub struct InMemoryDealerRepository;

impl Record for Dealer {
    type Draft = DealerDraft;

    fn key(&self) -> i64 {
        *self.id().as_ref()
    }

    fn assemble(key: i64, draft: Self::Draft) -> Self {
        draft.into_dealer(DealerId::new(key))
    }
}

#[async_trait::async_trait]
impl DealerQuery for InMemoryDealerRepository {
    type Transaction = InMemoryTransaction;

    async fn find_by_id(
        &self,
        con: &mut InMemoryTransaction,
        id: &DealerId,
    ) -> error_stack::Result<Option<Dealer>, KernelError> {
        Ok(con.tables().dealers.get(*id.as_ref()))
    }

    async fn find_all(
        &self,
        con: &mut InMemoryTransaction,
    ) -> error_stack::Result<Vec<Dealer>, KernelError> {
        Ok(con.tables().dealers.list())
    }
}

#[async_trait::async_trait]
impl DealerModifier for InMemoryDealerRepository {
    type Transaction = InMemoryTransaction;

    async fn create(
        &self,
        con: &mut InMemoryTransaction,
        dealer: DealerDraft,
    ) -> error_stack::Result<Dealer, KernelError> {
        let dealer = con.dealers_mut().insert(dealer);
        tracing::debug!(id = %dealer.id(), "dealer stored");
        Ok(dealer)
    }

    async fn update(
        &self,
        con: &mut InMemoryTransaction,
        dealer: &Dealer,
    ) -> error_stack::Result<(), KernelError> {
        con.dealers_mut()
            .update(dealer.key(), |row| *row = dealer.clone())
            .map(|_| ())
            .ok_or_else(|| Report::new(KernelError::NotFound(EntityRef::Dealer(*dealer.id()))))
    }

    async fn delete(
        &self,
        con: &mut InMemoryTransaction,
        dealer_id: &DealerId,
    ) -> error_stack::Result<(), KernelError> {
        con.dealers_mut()
            .remove(*dealer_id.as_ref())
            .ok_or_else(|| Report::new(KernelError::NotFound(EntityRef::Dealer(*dealer_id))))?;
        tracing::debug!(id = %dealer_id, "dealer removed");
        Ok(())
    }
}
