use crate::controller::Controller;
use crate::error::ErrorStatus;
use crate::handler::AppModule;
use application::service::{CreateCarService, DeleteCarService, GetCarService, UpdateCarService};
use application::transfer::{DeleteCarDto, GetCarDto};
use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use axum_extra::extract::WithRejection;

mod request;
mod response;

pub use self::request::{
    CreateRequest as CreateCarRequest, Transformer as CarTransformer,
    UpdateRequest as UpdateCarRequest,
};
pub use self::response::{CreatedPresenter as CreatedCarPresenter, Presenter as CarPresenter};

pub trait CarRouter {
    fn route_car(self) -> Self;
}

impl CarRouter for Router<AppModule> {
    fn route_car(self) -> Self {
        self.route(
            "/cars",
            get(|State(module): State<AppModule>| async move {
                Controller::new((), CarPresenter)
                    .bypass(|| async move { module.database().get_all_cars().await })
                    .await
                    .map_err(ErrorStatus::from)
            })
            .post(
                |State(module): State<AppModule>,
                 WithRejection(Json(req), _): WithRejection<Json<CreateCarRequest>, ErrorStatus>| async move {
                    let transformed = Controller::new(CarTransformer, CreatedCarPresenter)
                        .try_intake(req)
                        .map_err(ErrorStatus::from)?;
                    transformed
                        .handle(|dto| async move { module.database().create_car(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/cars/:id",
            get(
                |State(module): State<AppModule>,
                 WithRejection(Path(id), _): WithRejection<Path<i64>, ErrorStatus>| async move {
                    Controller::new(CarTransformer, CarPresenter)
                        .intake(GetCarDto { id })
                        .handle(|dto| async move { module.database().get_car(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            )
            .put(
                |State(module): State<AppModule>,
                 WithRejection(Path(id), _): WithRejection<Path<i64>, ErrorStatus>,
                 WithRejection(Json(req), _): WithRejection<Json<UpdateCarRequest>, ErrorStatus>| async move {
                    let transformed = Controller::new(CarTransformer, CarPresenter)
                        .try_intake((id, req))
                        .map_err(ErrorStatus::from)?;
                    transformed
                        .handle(|dto| async move { module.database().update_car(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            )
            .delete(
                |State(module): State<AppModule>,
                 WithRejection(Path(id), _): WithRejection<Path<i64>, ErrorStatus>| async move {
                    Controller::new(CarTransformer, CarPresenter)
                        .intake(DeleteCarDto { id })
                        .handle(|dto| async move { module.database().delete_car(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
    }
}
