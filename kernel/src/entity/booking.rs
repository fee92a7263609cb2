mod customer_email;
mod customer_name;
mod id;
mod period;

pub use self::{customer_email::*, customer_name::*, id::*, period::*};
use crate::entity::{CarId, CreatedAt};
use destructure::Destructure;
use vodca::References;

/// A reservation of one car over a [`BookingPeriod`].
///
/// Bookings are immutable once stored; cancelling one deletes it.
#[derive(Debug, Clone, Eq, PartialEq, References, Destructure)]
pub struct Booking {
    id: BookingId,
    car_id: CarId,
    customer_name: CustomerName,
    customer_email: CustomerEmail,
    period: BookingPeriod,
    created_at: CreatedAt<Booking>,
}

impl Booking {
    pub fn new(
        id: BookingId,
        car_id: CarId,
        customer_name: CustomerName,
        customer_email: CustomerEmail,
        period: BookingPeriod,
        created_at: CreatedAt<Booking>,
    ) -> Self {
        Self {
            id,
            car_id,
            customer_name,
            customer_email,
            period,
            created_at,
        }
    }

    pub fn overlaps(&self, period: &BookingPeriod) -> bool {
        self.period.overlaps(period)
    }
}

#[derive(Debug, Clone, Eq, PartialEq, References, Destructure)]
pub struct BookingDraft {
    car_id: CarId,
    customer_name: CustomerName,
    customer_email: CustomerEmail,
    period: BookingPeriod,
    created_at: CreatedAt<Booking>,
}

impl BookingDraft {
    pub fn new(
        car_id: CarId,
        customer_name: CustomerName,
        customer_email: CustomerEmail,
        period: BookingPeriod,
        created_at: CreatedAt<Booking>,
    ) -> Self {
        Self {
            car_id,
            customer_name,
            customer_email,
            period,
            created_at,
        }
    }

    pub fn into_booking(self, id: BookingId) -> Booking {
        let DestructBookingDraft {
            car_id,
            customer_name,
            customer_email,
            period,
            created_at,
        } = self.into_destruct();
        Booking::new(
            id,
            car_id,
            customer_name,
            customer_email,
            period,
            created_at,
        )
    }
}
