use crate::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use crate::entity::{Dealer, DealerDraft, DealerId};
use crate::KernelError;

#[async_trait::async_trait]
pub trait DealerModifier: 'static + Sync + Send {
    type Transaction: Transaction;
    async fn create(
        &self,
        con: &mut Self::Transaction,
        dealer: DealerDraft,
    ) -> error_stack::Result<Dealer, KernelError>;
    async fn update(
        &self,
        con: &mut Self::Transaction,
        dealer: &Dealer,
    ) -> error_stack::Result<(), KernelError>;
    async fn delete(
        &self,
        con: &mut Self::Transaction,
        dealer_id: &DealerId,
    ) -> error_stack::Result<(), KernelError>;
}

pub trait DependOnDealerModifier: 'static + Sync + Send + DependOnDatabaseConnection {
    type DealerModifier: DealerModifier<
        Transaction = <Self::DatabaseConnection as DatabaseConnection>::Transaction,
    >;
    fn dealer_modifier(&self) -> &Self::DealerModifier;
}
