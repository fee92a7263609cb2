use error_stack::Report;

use kernel::interface::query::CarQuery;
use kernel::interface::update::CarModifier;
use kernel::prelude::entity::{Car, CarDraft, CarId, DealerId, Vin};
use kernel::{EntityRef, KernelError};

use super::table::Record;
use super::InMemoryTransaction;

pub struct InMemoryCarRepository;

impl Record for Car {
    type Draft = CarDraft;

    fn key(&self) -> i64 {
        *self.id().as_ref()
    }

    fn assemble(key: i64, draft: Self::Draft) -> Self {
        draft.into_car(CarId::new(key))
    }
}

#[async_trait::async_trait]
impl CarQuery for InMemoryCarRepository {
    type Transaction = InMemoryTransaction;

    async fn find_by_id(
        &self,
        con: &mut InMemoryTransaction,
        id: &CarId,
    ) -> error_stack::Result<Option<Car>, KernelError> {
        Ok(con.tables().cars.get(*id.as_ref()))
    }

    async fn find_all(
        &self,
        con: &mut InMemoryTransaction,
    ) -> error_stack::Result<Vec<Car>, KernelError> {
        Ok(con.tables().cars.list())
    }

    async fn find_by_vin(
        &self,
        con: &mut InMemoryTransaction,
        vin: &Vin,
    ) -> error_stack::Result<Option<Car>, KernelError> {
        let found = con.tables().cars.scan().find(|car| car.vin() == vin).cloned();
        Ok(found)
    }

    async fn find_by_dealer_id(
        &self,
        con: &mut InMemoryTransaction,
        dealer_id: &DealerId,
    ) -> error_stack::Result<Vec<Car>, KernelError> {
        let cars = con
            .tables()
            .cars
            .scan()
            .filter(|car| car.dealer_id() == dealer_id)
            .cloned()
            .collect();
        Ok(cars)
    }
}

#[async_trait::async_trait]
impl CarModifier for InMemoryCarRepository {
    type Transaction = InMemoryTransaction;

    async fn create(
        &self,
        con: &mut InMemoryTransaction,
        car: CarDraft,
    ) -> error_stack::Result<Car, KernelError> {
        let car = con.cars_mut().insert(car);
        tracing::debug!(id = %car.id(), vin = %car.vin(), "car stored");
        Ok(car)
    }

    async fn update(
        &self,
        con: &mut InMemoryTransaction,
        car: &Car,
    ) -> error_stack::Result<(), KernelError> {
        con.cars_mut()
            .update(car.key(), |row| *row = car.clone())
            .map(|_| ())
            .ok_or_else(|| Report::new(KernelError::NotFound(EntityRef::Car(*car.id()))))
    }

    async fn delete(
        &self,
        con: &mut InMemoryTransaction,
        car_id: &CarId,
    ) -> error_stack::Result<(), KernelError> {
        con.cars_mut()
            .remove(*car_id.as_ref())
            .ok_or_else(|| Report::new(KernelError::NotFound(EntityRef::Car(*car_id))))?;
        tracing::debug!(id = %car_id, "car removed");
        Ok(())
    }
}
