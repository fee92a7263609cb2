use crate::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use crate::entity::{Booking, BookingId, CarId};
use crate::KernelError;

#[async_trait::async_trait]
pub trait BookingQuery: 'static + Sync + Send {
    type Transaction: Transaction;
    async fn find_by_id(
        &self,
        con: &mut Self::Transaction,
        id: &BookingId,
    ) -> error_stack::Result<Option<Booking>, KernelError>;
    async fn find_all(
        &self,
        con: &mut Self::Transaction,
    ) -> error_stack::Result<Vec<Booking>, KernelError>;
    /// Bookings of one car in insertion order.
    async fn find_by_car_id(
        &self,
        con: &mut Self::Transaction,
        car_id: &CarId,
    ) -> error_stack::Result<Vec<Booking>, KernelError>;
}

pub trait DependOnBookingQuery: 'static + Sync + Send + DependOnDatabaseConnection {
    type BookingQuery: BookingQuery<
        Transaction = <Self::DatabaseConnection as DatabaseConnection>::Transaction,
    >;
    fn booking_query(&self) -> &Self::BookingQuery;
}
