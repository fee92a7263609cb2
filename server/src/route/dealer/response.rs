use crate::controller::Exhaust;
use application::transfer::DealerDto;
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct DealerResponse {
    id: i64,
    name: String,
    location: Option<String>,
}

impl From<DealerDto> for DealerResponse {
    fn from(value: DealerDto) -> Self {
        Self {
            id: value.id,
            name: value.name,
            location: value.location,
        }
    }
}

pub struct Presenter;

impl Exhaust<DealerDto> for Presenter {
    type To = Json<DealerResponse>;
    fn emit(&self, input: DealerDto) -> Self::To {
        Json(DealerResponse::from(input))
    }
}

impl Exhaust<Vec<DealerDto>> for Presenter {
    type To = Json<Vec<DealerResponse>>;
    fn emit(&self, input: Vec<DealerDto>) -> Self::To {
        Json(input.into_iter().map(DealerResponse::from).collect())
    }
}

impl Exhaust<()> for Presenter {
    type To = StatusCode;
    fn emit(&self, _: ()) -> Self::To {
        StatusCode::NO_CONTENT
    }
}

pub struct CreatedPresenter;

impl Exhaust<DealerDto> for CreatedPresenter {
    type To = (StatusCode, Json<DealerResponse>);
    fn emit(&self, input: DealerDto) -> Self::To {
        (StatusCode::CREATED, Json(DealerResponse::from(input)))
    }
}
