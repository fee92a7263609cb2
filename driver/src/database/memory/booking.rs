use error_stack::Report;

use kernel::interface::query::BookingQuery;
use kernel::interface::update::BookingModifier;
use kernel::prelude::entity::{Booking, BookingDraft, BookingId, CarId};
use kernel::{EntityRef, KernelError};

use super::table::Record;
use super::InMemoryTransaction;

pub struct InMemoryBookingRepository;

impl Record for Booking {
    type Draft = BookingDraft;

    fn key(&self) -> i64 {
        *self.id().as_ref()
    }

    fn assemble(key: i64, draft: Self::Draft) -> Self {
        draft.into_booking(BookingId::new(key))
    }
}

#[async_trait::async_trait]
impl BookingQuery for InMemoryBookingRepository {
    type Transaction = InMemoryTransaction;

    async fn find_by_id(
        &self,
        con: &mut InMemoryTransaction,
        id: &BookingId,
    ) -> error_stack::Result<Option<Booking>, KernelError> {
        Ok(con.tables().bookings.get(*id.as_ref()))
    }

    async fn find_all(
        &self,
        con: &mut InMemoryTransaction,
    ) -> error_stack::Result<Vec<Booking>, KernelError> {
        Ok(con.tables().bookings.list())
    }

    // Linear scan; bookings are not indexed by car.
    async fn find_by_car_id(
        &self,
        con: &mut InMemoryTransaction,
        car_id: &CarId,
    ) -> error_stack::Result<Vec<Booking>, KernelError> {
        let bookings = con
            .tables()
            .bookings
            .scan()
            .filter(|booking| booking.car_id() == car_id)
            .cloned()
            .collect();
        Ok(bookings)
    }
}

#[async_trait::async_trait]
impl BookingModifier for InMemoryBookingRepository {
    type Transaction = InMemoryTransaction;

    async fn create(
        &self,
        con: &mut InMemoryTransaction,
        booking: BookingDraft,
    ) -> error_stack::Result<Booking, KernelError> {
        let booking = con.bookings_mut().insert(booking);
        tracing::debug!(id = %booking.id(), car_id = %booking.car_id(), "booking stored");
        Ok(booking)
    }

    async fn delete(
        &self,
        con: &mut InMemoryTransaction,
        booking_id: &BookingId,
    ) -> error_stack::Result<(), KernelError> {
        con.bookings_mut()
            .remove(*booking_id.as_ref())
            .ok_or_else(|| Report::new(KernelError::NotFound(EntityRef::Booking(*booking_id))))?;
        tracing::debug!(id = %booking_id, "booking removed");
        Ok(())
    }
}
