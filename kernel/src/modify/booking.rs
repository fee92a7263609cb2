use crate::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use crate::entity::{Booking, BookingDraft, BookingId};
use crate::KernelError;

#[async_trait::async_trait]
pub trait BookingModifier: 'static + Sync + Send {
    type Transaction: Transaction;
    async fn create(
        &self,
        con: &mut Self::Transaction,
        booking: BookingDraft,
    ) -> error_stack::Result<Booking, KernelError>;
    async fn delete(
        &self,
        con: &mut Self::Transaction,
        booking_id: &BookingId,
    ) -> error_stack::Result<(), KernelError>;
}

pub trait DependOnBookingModifier: 'static + Sync + Send + DependOnDatabaseConnection {
    type BookingModifier: BookingModifier<
        Transaction = <Self::DatabaseConnection as DatabaseConnection>::Transaction,
    >;
    fn booking_modifier(&self) -> &Self::BookingModifier;
}
