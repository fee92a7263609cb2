use crate::controller::Controller;
use crate::error::ErrorStatus;
use crate::handler::AppModule;
use application::service::{
    CreateDealerService, DeleteDealerService, GetDealerService, UpdateDealerService,
};
use application::transfer::{DeleteDealerDto, GetDealerDto};
use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use axum_extra::extract::WithRejection;

mod request;
mod response;

pub use self::request::{
    CreateRequest as CreateDealerRequest, Transformer as DealerTransformer,
    UpdateRequest as UpdateDealerRequest,
};
pub use self::response::{CreatedPresenter as CreatedDealerPresenter, Presenter as DealerPresenter};

pub trait DealerRouter {
    fn route_dealer(self) -> Self;
}

impl DealerRouter for Router<AppModule> {
    fn route_dealer(self) -> Self {
        self.route(
            "/dealers",
            get(|State(module): State<AppModule>| async move {
                Controller::new((), DealerPresenter)
                    .bypass(|| async move { module.database().get_all_dealers().await })
                    .await
                    .map_err(ErrorStatus::from)
            })
            .post(
                |State(module): State<AppModule>,
                 WithRejection(Json(req), _): WithRejection<Json<CreateDealerRequest>, ErrorStatus>| async move {
                    let transformed = Controller::new(DealerTransformer, CreatedDealerPresenter)
                        .try_intake(req)
                        .map_err(ErrorStatus::from)?;
                    transformed
                        .handle(|dto| async move { module.database().create_dealer(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/dealers/:id",
            get(
                |State(module): State<AppModule>,
                 WithRejection(Path(id), _): WithRejection<Path<i64>, ErrorStatus>| async move {
                    Controller::new(DealerTransformer, DealerPresenter)
                        .intake(GetDealerDto { id })
                        .handle(|dto| async move { module.database().get_dealer(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            )
            .put(
                |State(module): State<AppModule>,
                 WithRejection(Path(id), _): WithRejection<Path<i64>, ErrorStatus>,
                 WithRejection(Json(req), _): WithRejection<Json<UpdateDealerRequest>, ErrorStatus>| async move {
                    let transformed = Controller::new(DealerTransformer, DealerPresenter)
                        .try_intake((id, req))
                        .map_err(ErrorStatus::from)?;
                    transformed
                        .handle(|dto| async move { module.database().update_dealer(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            )
            .delete(
                |State(module): State<AppModule>,
                 WithRejection(Path(id), _): WithRejection<Path<i64>, ErrorStatus>| async move {
                    Controller::new(DealerTransformer, DealerPresenter)
                        .intake(DeleteDealerDto { id })
                        .handle(|dto| async move { module.database().delete_dealer(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
    }
}
