use crate::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use crate::entity::{Car, CarId, DealerId, Vin};
use crate::KernelError;

#[async_trait::async_trait]
pub trait CarQuery: 'static + Sync + Send {
    type Transaction: Transaction;
    async fn find_by_id(
        &self,
        con: &mut Self::Transaction,
        id: &CarId,
    ) -> error_stack::Result<Option<Car>, KernelError>;
    /// All cars in ascending id order.
    async fn find_all(&self, con: &mut Self::Transaction)
        -> error_stack::Result<Vec<Car>, KernelError>;
    async fn find_by_vin(
        &self,
        con: &mut Self::Transaction,
        vin: &Vin,
    ) -> error_stack::Result<Option<Car>, KernelError>;
    async fn find_by_dealer_id(
        &self,
        con: &mut Self::Transaction,
        dealer_id: &DealerId,
    ) -> error_stack::Result<Vec<Car>, KernelError>;
}

pub trait DependOnCarQuery: 'static + Sync + Send + DependOnDatabaseConnection {
    type CarQuery: CarQuery<
        Transaction = <Self::DatabaseConnection as DatabaseConnection>::Transaction,
    >;
    fn car_query(&self) -> &Self::CarQuery;
}
