use error_stack::Report;

use kernel::interface::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use kernel::interface::query::{CarQuery, DealerQuery, DependOnCarQuery, DependOnDealerQuery};
use kernel::interface::update::{DealerModifier, DependOnDealerModifier};
use kernel::prelude::entity::{DealerDraft, DealerId, DealerLocation, DealerName};
use kernel::{EntityRef, KernelError};

use crate::transfer::{CreateDealerDto, DealerDto, DeleteDealerDto, GetDealerDto, UpdateDealerDto};

#[async_trait::async_trait]
pub trait GetDealerService:
    'static + Sync + Send + DependOnDatabaseConnection + DependOnDealerQuery
{
    async fn get_dealer(&self, dto: GetDealerDto) -> error_stack::Result<DealerDto, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let id = DealerId::new(dto.id);
        let dealer = self
            .dealer_query()
            .find_by_id(&mut connection, &id)
            .await?
            .ok_or_else(|| Report::new(KernelError::NotFound(EntityRef::Dealer(id))))?;

        Ok(DealerDto::from(dealer))
    }

    async fn get_all_dealers(&self) -> error_stack::Result<Vec<DealerDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;
        let dealers = self.dealer_query().find_all(&mut connection).await?;
        Ok(dealers.into_iter().map(DealerDto::from).collect())
    }
}

impl<T> GetDealerService for T where T: DependOnDatabaseConnection + DependOnDealerQuery {}

#[async_trait::async_trait]
pub trait CreateDealerService:
    'static + Sync + Send + DependOnDatabaseConnection + DependOnDealerModifier
{
    async fn create_dealer(
        &self,
        dto: CreateDealerDto,
    ) -> error_stack::Result<DealerDto, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let draft = DealerDraft::new(
            DealerName::new(dto.name),
            dto.location.map(DealerLocation::new),
        );
        let dealer = self
            .dealer_modifier()
            .create(&mut connection, draft)
            .await?;
        connection.commit().await?;

        Ok(DealerDto::from(dealer))
    }
}

impl<T> CreateDealerService for T where T: DependOnDatabaseConnection + DependOnDealerModifier {}

#[async_trait::async_trait]
pub trait UpdateDealerService:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection
    + DependOnDealerQuery
    + DependOnDealerModifier
{
    async fn update_dealer(
        &self,
        dto: UpdateDealerDto,
    ) -> error_stack::Result<DealerDto, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let id = DealerId::new(dto.id);
        let mut dealer = self
            .dealer_query()
            .find_by_id(&mut connection, &id)
            .await?
            .ok_or_else(|| Report::new(KernelError::NotFound(EntityRef::Dealer(id))))?;

        dealer.substitute(|dealer| {
            if let Some(name) = dto.name {
                *dealer.name = DealerName::new(name);
            }
            if let Some(location) = dto.location {
                *dealer.location = Some(DealerLocation::new(location));
            }
        });
        self.dealer_modifier()
            .update(&mut connection, &dealer)
            .await?;
        connection.commit().await?;

        Ok(DealerDto::from(dealer))
    }
}

impl<T> UpdateDealerService for T where
    T: DependOnDatabaseConnection + DependOnDealerQuery + DependOnDealerModifier
{
}

#[async_trait::async_trait]
pub trait DeleteDealerService:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection
    + DependOnDealerQuery
    + DependOnDealerModifier
    + DependOnCarQuery
{
    /// Refuses to delete a dealer while any car still points at it.
    async fn delete_dealer(&self, dto: DeleteDealerDto) -> error_stack::Result<(), KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let id = DealerId::new(dto.id);
        if self
            .dealer_query()
            .find_by_id(&mut connection, &id)
            .await?
            .is_none()
        {
            return Err(Report::new(KernelError::NotFound(EntityRef::Dealer(id))));
        }

        let cars = self
            .car_query()
            .find_by_dealer_id(&mut connection, &id)
            .await?;
        if !cars.is_empty() {
            return Err(Report::new(KernelError::StillReferenced {
                target: EntityRef::Dealer(id),
                count: cars.len(),
            }));
        }

        self.dealer_modifier().delete(&mut connection, &id).await?;
        connection.commit().await?;
        Ok(())
    }
}

impl<T> DeleteDealerService for T where
    T: DependOnDatabaseConnection + DependOnDealerQuery + DependOnDealerModifier + DependOnCarQuery
{
}
