use std::fmt::Display;

use error_stack::Context;

use crate::entity::{BookingId, CarId, DealerId, Vin};

/// Identifies a single stored record in an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityRef {
    Dealer(DealerId),
    Car(CarId),
    Booking(BookingId),
}

impl Display for EntityRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityRef::Dealer(id) => write!(f, "Dealer with id {}", id),
            EntityRef::Car(id) => write!(f, "Car with id {}", id),
            EntityRef::Booking(id) => write!(f, "Booking with id {}", id),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KernelError {
    NotFound(EntityRef),
    InvalidReference(EntityRef),
    InvalidDateRange,
    BookingConflict { car_id: CarId, booking_id: BookingId },
    DuplicateVin(Vin),
    CarUnavailable(CarId),
    StillReferenced { target: EntityRef, count: usize },
    Validation(String),
    Internal,
}

impl Display for KernelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KernelError::NotFound(target) => write!(f, "{} not found", target),
            KernelError::InvalidReference(target) => {
                write!(f, "{} referenced by the request does not exist", target)
            }
            KernelError::InvalidDateRange => write!(f, "end_datetime must be after start_datetime"),
            KernelError::BookingConflict { car_id, booking_id } => write!(
                f,
                "Car with id {} is already booked for the selected time period (booking {})",
                car_id, booking_id
            ),
            KernelError::DuplicateVin(vin) => write!(f, "Car with VIN {} already exists", vin),
            KernelError::CarUnavailable(car_id) => {
                write!(f, "Car with id {} is not available (status: maintenance)", car_id)
            }
            KernelError::StillReferenced { target, count } => write!(
                f,
                "Cannot delete {}: it is still referenced by {} record(s)",
                target, count
            ),
            KernelError::Validation(reason) => write!(f, "{}", reason),
            KernelError::Internal => write!(f, "Internal kernel error"),
        }
    }
}

impl Context for KernelError {}
