use time::OffsetDateTime;

use kernel::prelude::entity::{Booking, DestructBooking};

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct BookingDto {
    pub id: i64,
    pub car_id: i64,
    pub customer_name: String,
    pub customer_email: String,
    pub start_datetime: OffsetDateTime,
    pub end_datetime: OffsetDateTime,
    pub created_at: OffsetDateTime,
}

impl From<Booking> for BookingDto {
    fn from(value: Booking) -> Self {
        let DestructBooking {
            id,
            car_id,
            customer_name,
            customer_email,
            period,
            created_at,
        } = value.into_destruct();
        Self {
            id: id.into(),
            car_id: car_id.into(),
            customer_name: customer_name.into(),
            customer_email: customer_email.into(),
            start_datetime: *period.start(),
            end_datetime: *period.end(),
            created_at: *created_at.as_ref(),
        }
    }
}

#[derive(Debug)]
pub struct GetBookingDto {
    pub id: i64,
}

/// Filters for listing bookings. With both bounds set the result holds the
/// bookings overlapping `[start_datetime, end_datetime)`; with one bound it
/// holds bookings starting at or after `start_datetime` or ending at or
/// before `end_datetime`.
#[derive(Debug, Default)]
pub struct GetBookingsDto {
    pub car_id: Option<i64>,
    pub start_datetime: Option<OffsetDateTime>,
    pub end_datetime: Option<OffsetDateTime>,
}

#[derive(Debug)]
pub struct CreateBookingDto {
    pub car_id: i64,
    pub customer_name: String,
    pub customer_email: String,
    pub start_datetime: OffsetDateTime,
    pub end_datetime: OffsetDateTime,
}

#[derive(Debug)]
pub struct DeleteBookingDto {
    pub id: i64,
}

#[derive(Debug)]
pub struct AvailableCarsDto {
    pub start_datetime: OffsetDateTime,
    pub end_datetime: OffsetDateTime,
}
