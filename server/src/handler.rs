use application::service::{CreateDealerService, GetDealerService};
use application::transfer::CreateDealerDto;
use driver::database::InMemoryDatabase;
use kernel::KernelError;
use std::ops::Deref;
use std::sync::Arc;
use vodca::References;

use crate::config::SeedDealer;

#[derive(Clone)]
pub struct AppModule(Arc<Handler>);

impl AppModule {
    pub async fn new(seed: Option<SeedDealer>) -> error_stack::Result<Self, KernelError> {
        Ok(Self(Arc::new(Handler::init(seed).await?)))
    }
}

impl Deref for AppModule {
    type Target = Handler;
    fn deref(&self) -> &Self::Target {
        Deref::deref(&self.0)
    }
}

#[derive(References)]
pub struct Handler {
    database: InMemoryDatabase,
}

impl Handler {
    pub async fn init(seed: Option<SeedDealer>) -> error_stack::Result<Self, KernelError> {
        let database = InMemoryDatabase::new();

        if let Some(seed) = seed {
            if database.get_all_dealers().await?.is_empty() {
                let dealer = database
                    .create_dealer(CreateDealerDto {
                        name: seed.name,
                        location: seed.location,
                    })
                    .await?;
                tracing::info!(id = dealer.id, name = %dealer.name, "seeded dealer");
            }
        }

        Ok(Self { database })
    }
}

#[cfg(test)]
mod test {
    use application::service::GetDealerService;
    use kernel::KernelError;

    use crate::config::SeedDealer;
    use crate::handler::AppModule;

    #[tokio::test]
    async fn seeds_one_dealer() -> error_stack::Result<(), KernelError> {
        let module = AppModule::new(Some(SeedDealer {
            name: "Oscar Mobility Main".to_string(),
            location: Some("Munich, Germany".to_string()),
        }))
        .await?;
        let dealers = module.database().get_all_dealers().await?;
        assert_eq!(dealers.len(), 1);
        assert_eq!(dealers[0].id, 1);
        assert_eq!(dealers[0].name, "Oscar Mobility Main");

        let empty = AppModule::new(None).await?;
        assert!(empty.database().get_all_dealers().await?.is_empty());
        Ok(())
    }
}
