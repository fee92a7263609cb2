use error_stack::Report;
use time::OffsetDateTime;

use kernel::interface::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use kernel::interface::query::{BookingQuery, CarQuery, DependOnBookingQuery, DependOnCarQuery};
use kernel::interface::update::{BookingModifier, DependOnBookingModifier};
use kernel::prelude::entity::{
    Booking, BookingDraft, BookingId, BookingPeriod, CarId, CreatedAt, CustomerEmail, CustomerName,
};
use kernel::{EntityRef, KernelError};

use crate::transfer::{
    AvailableCarsDto, BookingDto, CarDto, CreateBookingDto, DeleteBookingDto, GetBookingDto,
    GetBookingsDto,
};

/// First booking whose period overlaps `period`, if any.
fn find_conflict<'a>(bookings: &'a [Booking], period: &BookingPeriod) -> Option<&'a Booking> {
    bookings.iter().find(|booking| booking.overlaps(period))
}

enum Window {
    Overlapping(BookingPeriod),
    StartingFrom(OffsetDateTime),
    EndingBy(OffsetDateTime),
    Unbounded,
}

impl Window {
    fn new(
        start: Option<OffsetDateTime>,
        end: Option<OffsetDateTime>,
    ) -> error_stack::Result<Self, KernelError> {
        Ok(match (start, end) {
            (Some(start), Some(end)) => Window::Overlapping(BookingPeriod::new(start, end)?),
            (Some(start), None) => Window::StartingFrom(start),
            (None, Some(end)) => Window::EndingBy(end),
            (None, None) => Window::Unbounded,
        })
    }

    fn contains(&self, booking: &Booking) -> bool {
        match self {
            Window::Overlapping(period) => booking.overlaps(period),
            Window::StartingFrom(start) => booking.period().start() >= start,
            Window::EndingBy(end) => booking.period().end() <= end,
            Window::Unbounded => true,
        }
    }
}

#[async_trait::async_trait]
pub trait GetBookingService:
    'static + Sync + Send + DependOnDatabaseConnection + DependOnBookingQuery
{
    async fn get_booking(&self, dto: GetBookingDto) -> error_stack::Result<BookingDto, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let id = BookingId::new(dto.id);
        let booking = self
            .booking_query()
            .find_by_id(&mut connection, &id)
            .await?
            .ok_or_else(|| Report::new(KernelError::NotFound(EntityRef::Booking(id))))?;

        Ok(BookingDto::from(booking))
    }

    async fn get_bookings(
        &self,
        dto: GetBookingsDto,
    ) -> error_stack::Result<Vec<BookingDto>, KernelError> {
        let window = Window::new(dto.start_datetime, dto.end_datetime)?;
        let mut connection = self.database_connection().transact().await?;

        let bookings = match dto.car_id.map(CarId::new) {
            Some(car_id) => {
                self.booking_query()
                    .find_by_car_id(&mut connection, &car_id)
                    .await?
            }
            None => self.booking_query().find_all(&mut connection).await?,
        };

        Ok(bookings
            .into_iter()
            .filter(|booking| window.contains(booking))
            .map(BookingDto::from)
            .collect())
    }
}

impl<T> GetBookingService for T where T: DependOnDatabaseConnection + DependOnBookingQuery {}

#[async_trait::async_trait]
pub trait CreateBookingService:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection
    + DependOnCarQuery
    + DependOnBookingQuery
    + DependOnBookingModifier
{
    /// Reserves a car. The checks run in a fixed order: the period itself,
    /// then the car reference, then the car status, then overlap with the
    /// car's existing bookings.
    async fn create_booking(
        &self,
        dto: CreateBookingDto,
    ) -> error_stack::Result<BookingDto, KernelError> {
        let period = BookingPeriod::new(dto.start_datetime, dto.end_datetime)?;
        let mut connection = self.database_connection().transact().await?;

        let car_id = CarId::new(dto.car_id);
        let car = self
            .car_query()
            .find_by_id(&mut connection, &car_id)
            .await?
            .ok_or_else(|| Report::new(KernelError::InvalidReference(EntityRef::Car(car_id))))?;
        if !car.status().is_available() {
            return Err(Report::new(KernelError::CarUnavailable(car_id))
                .attach_printable(format!("car {} is in {}", car_id, car.status())));
        }

        let bookings = self
            .booking_query()
            .find_by_car_id(&mut connection, &car_id)
            .await?;
        if let Some(conflict) = find_conflict(&bookings, &period) {
            tracing::info!(
                car_id = %car_id,
                booking_id = %conflict.id(),
                "booking rejected by overlapping reservation"
            );
            return Err(Report::new(KernelError::BookingConflict {
                car_id,
                booking_id: *conflict.id(),
            }));
        }

        let draft = BookingDraft::new(
            car_id,
            CustomerName::new(dto.customer_name),
            CustomerEmail::new(dto.customer_email),
            period,
            CreatedAt::now(),
        );
        let booking = self
            .booking_modifier()
            .create(&mut connection, draft)
            .await?;
        connection.commit().await?;

        Ok(BookingDto::from(booking))
    }
}

impl<T> CreateBookingService for T where
    T: DependOnDatabaseConnection
        + DependOnCarQuery
        + DependOnBookingQuery
        + DependOnBookingModifier
{
}

#[async_trait::async_trait]
pub trait DeleteBookingService:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection
    + DependOnBookingQuery
    + DependOnBookingModifier
{
    async fn delete_booking(&self, dto: DeleteBookingDto) -> error_stack::Result<(), KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let id = BookingId::new(dto.id);
        if self
            .booking_query()
            .find_by_id(&mut connection, &id)
            .await?
            .is_none()
        {
            return Err(Report::new(KernelError::NotFound(EntityRef::Booking(id))));
        }

        self.booking_modifier()
            .delete(&mut connection, &id)
            .await?;
        connection.commit().await?;
        Ok(())
    }
}

impl<T> DeleteBookingService for T where
    T: DependOnDatabaseConnection + DependOnBookingQuery + DependOnBookingModifier
{
}

#[async_trait::async_trait]
pub trait AvailableCarService:
    'static + Sync + Send + DependOnDatabaseConnection + DependOnCarQuery + DependOnBookingQuery
{
    /// Cars, in store order, that could be booked for the whole window.
    async fn available_cars(
        &self,
        dto: AvailableCarsDto,
    ) -> error_stack::Result<Vec<CarDto>, KernelError> {
        let period = BookingPeriod::new(dto.start_datetime, dto.end_datetime)?;
        let mut connection = self.database_connection().transact().await?;

        let cars = self.car_query().find_all(&mut connection).await?;
        let mut available = Vec::with_capacity(cars.len());
        for car in cars {
            if !car.status().is_available() {
                continue;
            }
            let bookings = self
                .booking_query()
                .find_by_car_id(&mut connection, car.id())
                .await?;
            if find_conflict(&bookings, &period).is_none() {
                available.push(CarDto::from(car));
            }
        }

        Ok(available)
    }
}

impl<T> AvailableCarService for T where
    T: DependOnDatabaseConnection + DependOnCarQuery + DependOnBookingQuery
{
}
