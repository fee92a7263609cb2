use crate::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use crate::entity::{Dealer, DealerId};
use crate::KernelError;

#[async_trait::async_trait]
pub trait DealerQuery: 'static + Sync + Send {
    type Transaction: Transaction;
    async fn find_by_id(
        &self,
        con: &mut Self::Transaction,
        id: &DealerId,
    ) -> error_stack::Result<Option<Dealer>, KernelError>;
    async fn find_all(
        &self,
        con: &mut Self::Transaction,
    ) -> error_stack::Result<Vec<Dealer>, KernelError>;
}

pub trait DependOnDealerQuery: 'static + Sync + Send + DependOnDatabaseConnection {
    type DealerQuery: DealerQuery<
        Transaction = <Self::DatabaseConnection as DatabaseConnection>::Transaction,
    >;
    fn dealer_query(&self) -> &Self::DealerQuery;
}
