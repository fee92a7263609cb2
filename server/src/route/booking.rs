use crate::controller::Controller;
use crate::error::ErrorStatus;
use crate::handler::AppModule;
use crate::route::CarPresenter;
use application::service::{
    AvailableCarService, CreateBookingService, DeleteBookingService, GetBookingService,
};
use application::transfer::{DeleteBookingDto, GetBookingDto};
use axum::extract::{Path, Query, State};
use axum::routing::get;
use axum::{Json, Router};
use axum_extra::extract::WithRejection;

mod request;
mod response;

pub use self::request::{
    AvailableCarsRequest, CreateRequest as CreateBookingRequest,
    GetAllRequest as GetAllBookingRequest, Transformer as BookingTransformer,
};
pub use self::response::{
    CreatedPresenter as CreatedBookingPresenter, Presenter as BookingPresenter,
};

pub trait BookingRouter {
    fn route_booking(self) -> Self;
}

impl BookingRouter for Router<AppModule> {
    fn route_booking(self) -> Self {
        self.route(
            "/bookings",
            get(
                |State(module): State<AppModule>,
                 WithRejection(Query(req), _): WithRejection<Query<GetAllBookingRequest>, ErrorStatus>| async move {
                    let transformed = Controller::new(BookingTransformer, BookingPresenter)
                        .try_intake(req)
                        .map_err(ErrorStatus::from)?;
                    transformed
                        .handle(|dto| async move { module.database().get_bookings(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            )
            .post(
                |State(module): State<AppModule>,
                 WithRejection(Json(req), _): WithRejection<Json<CreateBookingRequest>, ErrorStatus>| async move {
                    let transformed = Controller::new(BookingTransformer, CreatedBookingPresenter)
                        .try_intake(req)
                        .map_err(ErrorStatus::from)?;
                    transformed
                        .handle(|dto| async move { module.database().create_booking(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/bookings/available-cars",
            get(
                |State(module): State<AppModule>,
                 WithRejection(Query(req), _): WithRejection<Query<AvailableCarsRequest>, ErrorStatus>| async move {
                    let transformed = Controller::new(BookingTransformer, CarPresenter)
                        .try_intake(req)
                        .map_err(ErrorStatus::from)?;
                    transformed
                        .handle(|dto| async move { module.database().available_cars(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/bookings/:id",
            get(
                |State(module): State<AppModule>,
                 WithRejection(Path(id), _): WithRejection<Path<i64>, ErrorStatus>| async move {
                    Controller::new(BookingTransformer, BookingPresenter)
                        .intake(GetBookingDto { id })
                        .handle(|dto| async move { module.database().get_booking(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            )
            .delete(
                |State(module): State<AppModule>,
                 WithRejection(Path(id), _): WithRejection<Path<i64>, ErrorStatus>| async move {
                    Controller::new(BookingTransformer, BookingPresenter)
                        .intake(DeleteBookingDto { id })
                        .handle(|dto| async move { module.database().delete_booking(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
    }
}
