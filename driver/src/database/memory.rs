use std::sync::Arc;

use tokio::sync::{Mutex, OwnedMutexGuard};

use kernel::interface::database::{DatabaseConnection, Transaction};
use kernel::interface::query::{DependOnBookingQuery, DependOnCarQuery, DependOnDealerQuery};
use kernel::interface::update::{
    DependOnBookingModifier, DependOnCarModifier, DependOnDealerModifier,
};
use kernel::prelude::entity::{Booking, Car, Dealer};
use kernel::KernelError;

use self::table::{Record, Table};
pub use self::{booking::*, car::*, dealer::*};

mod booking;
mod car;
mod dealer;
mod table;

#[derive(Debug, Default)]
struct Tables {
    dealers: Table<Dealer>,
    cars: Table<Car>,
    bookings: Table<Booking>,
}

/// Process-local database. Cloning shares the same tables.
///
/// A transaction holds the only lock on all tables until it is dropped, so
/// every use case runs serialized against the others.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDatabase {
    tables: Arc<Mutex<Tables>>,
}

impl InMemoryDatabase {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl DatabaseConnection for InMemoryDatabase {
    type Transaction = InMemoryTransaction;
    async fn transact(&self) -> error_stack::Result<Self::Transaction, KernelError> {
        let tables = Arc::clone(&self.tables).lock_owned().await;
        Ok(InMemoryTransaction {
            tables,
            snapshot: Snapshot::default(),
        })
    }
}

pub struct InMemoryTransaction {
    tables: OwnedMutexGuard<Tables>,
    snapshot: Snapshot,
}

/// Tables as they were before their first write in a transaction.
/// Untouched tables are not copied.
#[derive(Default)]
struct Snapshot {
    dealers: Option<Table<Dealer>>,
    cars: Option<Table<Car>>,
    bookings: Option<Table<Booking>>,
}

impl Snapshot {
    fn is_empty(&self) -> bool {
        self.dealers.is_none() && self.cars.is_none() && self.bookings.is_none()
    }
}

fn track<'a, R: Record>(
    saved: &mut Option<Table<R>>,
    table: &'a mut Table<R>,
) -> &'a mut Table<R> {
    if saved.is_none() {
        *saved = Some(table.clone());
    }
    table
}

impl InMemoryTransaction {
    fn tables(&self) -> &Tables {
        &self.tables
    }

    fn dealers_mut(&mut self) -> &mut Table<Dealer> {
        track(&mut self.snapshot.dealers, &mut self.tables.dealers)
    }

    fn cars_mut(&mut self) -> &mut Table<Car> {
        track(&mut self.snapshot.cars, &mut self.tables.cars)
    }

    fn bookings_mut(&mut self) -> &mut Table<Booking> {
        track(&mut self.snapshot.bookings, &mut self.tables.bookings)
    }

    fn restore(&mut self) -> bool {
        let snapshot = std::mem::take(&mut self.snapshot);
        if snapshot.is_empty() {
            return false;
        }
        if let Some(dealers) = snapshot.dealers {
            self.tables.dealers = dealers;
        }
        if let Some(cars) = snapshot.cars {
            self.tables.cars = cars;
        }
        if let Some(bookings) = snapshot.bookings {
            self.tables.bookings = bookings;
        }
        true
    }
}

#[async_trait::async_trait]
impl Transaction for InMemoryTransaction {
    async fn commit(mut self) -> error_stack::Result<(), KernelError> {
        self.snapshot = Snapshot::default();
        Ok(())
    }

    async fn roll_back(mut self) -> error_stack::Result<(), KernelError> {
        if self.restore() {
            tracing::debug!("in-memory transaction rolled back");
        }
        Ok(())
    }
}

impl Drop for InMemoryTransaction {
    fn drop(&mut self) {
        if self.restore() {
            tracing::debug!("uncommitted in-memory transaction discarded");
        }
    }
}

impl DependOnDealerQuery for InMemoryDatabase {
    type DealerQuery = InMemoryDealerRepository;
    fn dealer_query(&self) -> &Self::DealerQuery {
        &InMemoryDealerRepository
    }
}

impl DependOnDealerModifier for InMemoryDatabase {
    type DealerModifier = InMemoryDealerRepository;
    fn dealer_modifier(&self) -> &Self::DealerModifier {
        &InMemoryDealerRepository
    }
}

impl DependOnCarQuery for InMemoryDatabase {
    type CarQuery = InMemoryCarRepository;
    fn car_query(&self) -> &Self::CarQuery {
        &InMemoryCarRepository
    }
}

impl DependOnCarModifier for InMemoryDatabase {
    type CarModifier = InMemoryCarRepository;
    fn car_modifier(&self) -> &Self::CarModifier {
        &InMemoryCarRepository
    }
}

impl DependOnBookingQuery for InMemoryDatabase {
    type BookingQuery = InMemoryBookingRepository;
    fn booking_query(&self) -> &Self::BookingQuery {
        &InMemoryBookingRepository
    }
}

impl DependOnBookingModifier for InMemoryDatabase {
    type BookingModifier = InMemoryBookingRepository;
    fn booking_modifier(&self) -> &Self::BookingModifier {
        &InMemoryBookingRepository
    }
}

#[cfg(test)]
mod test {
    use kernel::interface::database::{DatabaseConnection, Transaction};
    use kernel::interface::query::{CarQuery, DealerQuery};
    use kernel::interface::update::{CarModifier, DealerModifier};
    use kernel::prelude::entity::{
        CarBrand, CarColor, CarDraft, CarModel, CarStatus, CarYear, DailyPrice, DealerDraft,
        DealerId, DealerName, Vin,
    };
    use kernel::KernelError;

    use crate::database::{InMemoryCarRepository, InMemoryDatabase, InMemoryDealerRepository};

    fn draft(name: &str) -> DealerDraft {
        DealerDraft::new(DealerName::new(name), None)
    }

    #[tokio::test]
    async fn committed_writes_are_visible() -> error_stack::Result<(), KernelError> {
        let db = InMemoryDatabase::new();
        let mut con = db.transact().await?;
        let dealer = InMemoryDealerRepository.create(&mut con, draft("main")).await?;
        con.commit().await?;

        let mut con = db.transact().await?;
        let found = InMemoryDealerRepository
            .find_by_id(&mut con, dealer.id())
            .await?;
        assert_eq!(found, Some(dealer));
        Ok(())
    }

    #[tokio::test]
    async fn dropped_transaction_discards_writes() -> error_stack::Result<(), KernelError> {
        let db = InMemoryDatabase::new();
        {
            let mut con = db.transact().await?;
            InMemoryDealerRepository.create(&mut con, draft("ghost")).await?;
        }

        let mut con = db.transact().await?;
        assert!(InMemoryDealerRepository.find_all(&mut con).await?.is_empty());
        // the discarded key is handed out again since the sequence was restored too
        let dealer = InMemoryDealerRepository.create(&mut con, draft("real")).await?;
        assert_eq!(dealer.id(), &DealerId::new(1));
        Ok(())
    }

    #[tokio::test]
    async fn roll_back_restores_state() -> error_stack::Result<(), KernelError> {
        let db = InMemoryDatabase::new();
        let mut con = db.transact().await?;
        let dealer = InMemoryDealerRepository.create(&mut con, draft("main")).await?;
        con.commit().await?;

        let mut con = db.transact().await?;
        InMemoryDealerRepository.delete(&mut con, dealer.id()).await?;
        con.roll_back().await?;

        let mut con = db.transact().await?;
        let all = InMemoryDealerRepository.find_all(&mut con).await?;
        assert_eq!(all, vec![dealer]);
        Ok(())
    }

    #[tokio::test]
    async fn clones_share_tables() -> error_stack::Result<(), KernelError> {
        let db = InMemoryDatabase::new();
        let other = db.clone();
        let mut con = db.transact().await?;
        InMemoryDealerRepository.create(&mut con, draft("main")).await?;
        con.commit().await?;

        let mut con = other.transact().await?;
        assert_eq!(InMemoryDealerRepository.find_all(&mut con).await?.len(), 1);
        Ok(())
    }

    fn car_draft() -> CarDraft {
        CarDraft::new(
            CarBrand::new("Toyota"),
            CarModel::new("Camry"),
            CarYear::new(2023),
            CarColor::new("Blue"),
            DailyPrice::new(35.0),
            Vin::new("1HGBH41JXMN109186"),
            CarStatus::Available,
            DealerId::new(1),
        )
    }

    #[tokio::test]
    async fn only_written_tables_are_copied() -> error_stack::Result<(), KernelError> {
        let db = InMemoryDatabase::new();
        let mut con = db.transact().await?;
        assert!(con.snapshot.is_empty());

        InMemoryCarRepository.create(&mut con, car_draft()).await?;
        assert!(con.snapshot.cars.is_some());
        assert!(con.snapshot.dealers.is_none());
        assert!(con.snapshot.bookings.is_none());

        con.commit().await?;
        Ok(())
    }

    #[tokio::test]
    async fn dropped_transaction_restores_every_written_table(
    ) -> error_stack::Result<(), KernelError> {
        let db = InMemoryDatabase::new();
        {
            let mut con = db.transact().await?;
            InMemoryDealerRepository.create(&mut con, draft("main")).await?;
            InMemoryCarRepository.create(&mut con, car_draft()).await?;
        }

        let mut con = db.transact().await?;
        assert!(InMemoryDealerRepository.find_all(&mut con).await?.is_empty());
        assert!(InMemoryCarRepository.find_all(&mut con).await?.is_empty());
        Ok(())
    }
}
