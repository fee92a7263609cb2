use error_stack::Report;

use kernel::interface::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use kernel::interface::query::{
    BookingQuery, CarQuery, DealerQuery, DependOnBookingQuery, DependOnCarQuery,
    DependOnDealerQuery,
};
use kernel::interface::update::{CarModifier, DependOnCarModifier};
use kernel::prelude::entity::{
    CarBrand, CarColor, CarDraft, CarId, CarModel, CarYear, DailyPrice, DealerId, Vin,
};
use kernel::{EntityRef, KernelError};

use crate::transfer::{CarDto, CreateCarDto, DeleteCarDto, GetCarDto, UpdateCarDto};

#[async_trait::async_trait]
pub trait GetCarService: 'static + Sync + Send + DependOnDatabaseConnection + DependOnCarQuery {
    async fn get_car(&self, dto: GetCarDto) -> error_stack::Result<CarDto, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let id = CarId::new(dto.id);
        let car = self
            .car_query()
            .find_by_id(&mut connection, &id)
            .await?
            .ok_or_else(|| Report::new(KernelError::NotFound(EntityRef::Car(id))))?;

        Ok(CarDto::from(car))
    }

    async fn get_all_cars(&self) -> error_stack::Result<Vec<CarDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;
        let cars = self.car_query().find_all(&mut connection).await?;
        Ok(cars.into_iter().map(CarDto::from).collect())
    }
}

impl<T> GetCarService for T where T: DependOnDatabaseConnection + DependOnCarQuery {}

#[async_trait::async_trait]
pub trait CreateCarService:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection
    + DependOnDealerQuery
    + DependOnCarQuery
    + DependOnCarModifier
{
    async fn create_car(&self, dto: CreateCarDto) -> error_stack::Result<CarDto, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let dealer_id = DealerId::new(dto.dealer_id);
        if self
            .dealer_query()
            .find_by_id(&mut connection, &dealer_id)
            .await?
            .is_none()
        {
            return Err(Report::new(KernelError::InvalidReference(
                EntityRef::Dealer(dealer_id),
            )));
        }

        let vin = Vin::new(dto.vin);
        if let Some(existing) = self.car_query().find_by_vin(&mut connection, &vin).await? {
            tracing::info!(vin = %vin, existing = %existing.id(), "duplicate VIN rejected");
            return Err(Report::new(KernelError::DuplicateVin(vin))
                .attach_printable(format!("VIN is used by car {}", existing.id())));
        }

        let draft = CarDraft::new(
            CarBrand::new(dto.brand),
            CarModel::new(dto.model),
            CarYear::new(dto.year),
            CarColor::new(dto.color),
            DailyPrice::new(dto.daily_price),
            vin,
            dto.status,
            dealer_id,
        );
        let car = self.car_modifier().create(&mut connection, draft).await?;
        connection.commit().await?;

        Ok(CarDto::from(car))
    }
}

impl<T> CreateCarService for T where
    T: DependOnDatabaseConnection + DependOnDealerQuery + DependOnCarQuery + DependOnCarModifier
{
}

#[async_trait::async_trait]
pub trait UpdateCarService:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection
    + DependOnDealerQuery
    + DependOnCarQuery
    + DependOnCarModifier
{
    /// Replaces only the fields present in `dto`. A changed dealer must exist
    /// and a changed VIN must not belong to another car.
    async fn update_car(&self, dto: UpdateCarDto) -> error_stack::Result<CarDto, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let id = CarId::new(dto.id);
        let mut car = self
            .car_query()
            .find_by_id(&mut connection, &id)
            .await?
            .ok_or_else(|| Report::new(KernelError::NotFound(EntityRef::Car(id))))?;

        let dealer_id = dto.dealer_id.map(DealerId::new);
        if let Some(dealer_id) = dealer_id.filter(|dealer_id| dealer_id != car.dealer_id()) {
            if self
                .dealer_query()
                .find_by_id(&mut connection, &dealer_id)
                .await?
                .is_none()
            {
                return Err(Report::new(KernelError::InvalidReference(
                    EntityRef::Dealer(dealer_id),
                )));
            }
        }

        let vin = dto.vin.map(Vin::new);
        if let Some(vin) = vin.as_ref().filter(|vin| *vin != car.vin()) {
            if let Some(existing) = self.car_query().find_by_vin(&mut connection, vin).await? {
                tracing::info!(vin = %vin, existing = %existing.id(), "duplicate VIN rejected");
                return Err(Report::new(KernelError::DuplicateVin(vin.clone()))
                    .attach_printable(format!("VIN is used by car {}", existing.id())));
            }
        }

        car.substitute(|car| {
            if let Some(brand) = dto.brand {
                *car.brand = CarBrand::new(brand);
            }
            if let Some(model) = dto.model {
                *car.model = CarModel::new(model);
            }
            if let Some(year) = dto.year {
                *car.year = CarYear::new(year);
            }
            if let Some(color) = dto.color {
                *car.color = CarColor::new(color);
            }
            if let Some(daily_price) = dto.daily_price {
                *car.daily_price = DailyPrice::new(daily_price);
            }
            if let Some(vin) = vin {
                *car.vin = vin;
            }
            if let Some(status) = dto.status {
                *car.status = status;
            }
            if let Some(dealer_id) = dealer_id {
                *car.dealer_id = dealer_id;
            }
        });
        self.car_modifier().update(&mut connection, &car).await?;
        connection.commit().await?;

        Ok(CarDto::from(car))
    }
}

impl<T> UpdateCarService for T where
    T: DependOnDatabaseConnection + DependOnDealerQuery + DependOnCarQuery + DependOnCarModifier
{
}

#[async_trait::async_trait]
pub trait DeleteCarService:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection
    + DependOnCarQuery
    + DependOnCarModifier
    + DependOnBookingQuery
{
    /// Refuses to delete a car that still has bookings.
    async fn delete_car(&self, dto: DeleteCarDto) -> error_stack::Result<(), KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let id = CarId::new(dto.id);
        if self
            .car_query()
            .find_by_id(&mut connection, &id)
            .await?
            .is_none()
        {
            return Err(Report::new(KernelError::NotFound(EntityRef::Car(id))));
        }

        let bookings = self
            .booking_query()
            .find_by_car_id(&mut connection, &id)
            .await?;
        if !bookings.is_empty() {
            return Err(Report::new(KernelError::StillReferenced {
                target: EntityRef::Car(id),
                count: bookings.len(),
            }));
        }

        self.car_modifier().delete(&mut connection, &id).await?;
        connection.commit().await?;
        Ok(())
    }
}

impl<T> DeleteCarService for T where
    T: DependOnDatabaseConnection + DependOnCarQuery + DependOnCarModifier + DependOnBookingQuery
{
}

#[cfg(test)]
mod test {
    use driver::database::InMemoryDatabase;
    use kernel::prelude::entity::{CarId, CarStatus, DealerId, Vin};
    use kernel::{EntityRef, KernelError};
    use time::macros::datetime;

    use crate::service::{
        CreateBookingService, CreateCarService, CreateDealerService, DeleteCarService,
        GetCarService, UpdateCarService,
    };
    use crate::transfer::{
        CreateBookingDto, CreateCarDto, CreateDealerDto, DeleteCarDto, GetCarDto, UpdateCarDto,
    };

    const VIN: &str = "1HGBH41JXMN109186";
    const OTHER_VIN: &str = "5YJSA1E26HF000337";

    async fn seeded() -> error_stack::Result<InMemoryDatabase, KernelError> {
        let db = InMemoryDatabase::new();
        db.create_dealer(CreateDealerDto {
            name: "Oscar Mobility Main".to_string(),
            location: None,
        })
        .await?;
        Ok(db)
    }

    fn camry(vin: &str, dealer_id: i64) -> CreateCarDto {
        CreateCarDto {
            brand: "Toyota".to_string(),
            model: "Camry".to_string(),
            year: 2023,
            color: "Blue".to_string(),
            daily_price: 35.0,
            vin: vin.to_string(),
            status: CarStatus::Available,
            dealer_id,
        }
    }

    #[tokio::test]
    async fn create_and_get() -> error_stack::Result<(), KernelError> {
        let db = seeded().await?;
        let created = db.create_car(camry(VIN, 1)).await?;
        assert_eq!(created.id, 1);
        assert_eq!(created.vin, VIN);
        assert_eq!(created.status, CarStatus::Available);

        let found = db.get_car(GetCarDto { id: created.id }).await?;
        assert_eq!(found, created);
        assert_eq!(db.get_all_cars().await?, vec![created]);
        Ok(())
    }

    #[tokio::test]
    async fn unknown_dealer_is_an_invalid_reference() -> error_stack::Result<(), KernelError> {
        let db = seeded().await?;
        let error = db.create_car(camry(VIN, 42)).await.unwrap_err();
        assert_eq!(
            error.current_context(),
            &KernelError::InvalidReference(EntityRef::Dealer(DealerId::new(42)))
        );
        assert!(db.get_all_cars().await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn duplicate_vin_is_rejected() -> error_stack::Result<(), KernelError> {
        let db = seeded().await?;
        db.create_car(camry(VIN, 1)).await?;

        let mut other = camry(VIN, 1);
        other.brand = "Honda".to_string();
        other.color = "Red".to_string();
        let error = db.create_car(other).await.unwrap_err();
        assert_eq!(
            error.current_context(),
            &KernelError::DuplicateVin(Vin::new(VIN))
        );
        assert_eq!(db.get_all_cars().await?.len(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn update_replaces_given_fields_only() -> error_stack::Result<(), KernelError> {
        let db = seeded().await?;
        let car = db.create_car(camry(VIN, 1)).await?;

        let updated = db
            .update_car(UpdateCarDto {
                id: car.id,
                color: Some("Black".to_string()),
                status: Some(CarStatus::Maintenance),
                // unchanged VIN is not a collision with itself
                vin: Some(VIN.to_string()),
                ..Default::default()
            })
            .await?;
        assert_eq!(updated.color, "Black");
        assert_eq!(updated.status, CarStatus::Maintenance);
        assert_eq!(updated.brand, car.brand);
        assert_eq!(updated.vin, car.vin);
        Ok(())
    }

    #[tokio::test]
    async fn update_revalidates_dealer_and_vin() -> error_stack::Result<(), KernelError> {
        let db = seeded().await?;
        let car = db.create_car(camry(VIN, 1)).await?;
        db.create_car(camry(OTHER_VIN, 1)).await?;

        let error = db
            .update_car(UpdateCarDto {
                id: car.id,
                dealer_id: Some(9),
                ..Default::default()
            })
            .await
            .unwrap_err();
        assert_eq!(
            error.current_context(),
            &KernelError::InvalidReference(EntityRef::Dealer(DealerId::new(9)))
        );

        let error = db
            .update_car(UpdateCarDto {
                id: car.id,
                vin: Some(OTHER_VIN.to_string()),
                ..Default::default()
            })
            .await
            .unwrap_err();
        assert_eq!(
            error.current_context(),
            &KernelError::DuplicateVin(Vin::new(OTHER_VIN))
        );

        let unchanged = db.get_car(GetCarDto { id: car.id }).await?;
        assert_eq!(unchanged, car);
        Ok(())
    }

    #[tokio::test]
    async fn update_of_missing_car_is_not_found() -> error_stack::Result<(), KernelError> {
        let db = seeded().await?;
        let error = db
            .update_car(UpdateCarDto {
                id: 3,
                ..Default::default()
            })
            .await
            .unwrap_err();
        assert_eq!(
            error.current_context(),
            &KernelError::NotFound(EntityRef::Car(CarId::new(3)))
        );
        Ok(())
    }

    #[tokio::test]
    async fn booked_car_cannot_be_deleted() -> error_stack::Result<(), KernelError> {
        let db = seeded().await?;
        let car = db.create_car(camry(VIN, 1)).await?;
        db.create_booking(CreateBookingDto {
            car_id: car.id,
            customer_name: "John Doe".to_string(),
            customer_email: "john.doe@example.com".to_string(),
            start_datetime: datetime!(2024-01-15 10:00 UTC),
            end_datetime: datetime!(2024-01-20 14:00 UTC),
        })
        .await?;

        let error = db.delete_car(DeleteCarDto { id: car.id }).await.unwrap_err();
        assert_eq!(
            error.current_context(),
            &KernelError::StillReferenced {
                target: EntityRef::Car(CarId::new(car.id)),
                count: 1,
            }
        );
        Ok(())
    }

    #[tokio::test]
    async fn deleted_car_ids_are_not_reused() -> error_stack::Result<(), KernelError> {
        let db = seeded().await?;
        let car = db.create_car(camry(VIN, 1)).await?;
        db.delete_car(DeleteCarDto { id: car.id }).await?;

        let error = db.get_car(GetCarDto { id: car.id }).await.unwrap_err();
        assert_eq!(
            error.current_context(),
            &KernelError::NotFound(EntityRef::Car(CarId::new(car.id)))
        );

        // the VIN is free again, the id is not
        let again = db.create_car(camry(VIN, 1)).await?;
        assert_eq!(again.id, 2);
        Ok(())
    }
}
