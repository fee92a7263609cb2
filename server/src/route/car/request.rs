use crate::controller::{Intake, TryIntake};
use crate::validation;
use application::transfer::{CreateCarDto, DeleteCarDto, GetCarDto, UpdateCarDto};
use kernel::prelude::entity::CarStatus;
use kernel::KernelError;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateRequest {
    brand: String,
    model: String,
    year: i32,
    color: String,
    daily_price: f64,
    vin: String,
    #[serde(default)]
    status: CarStatus,
    dealer_id: i64,
}

#[derive(Debug, Deserialize)]
pub struct UpdateRequest {
    brand: Option<String>,
    model: Option<String>,
    year: Option<i32>,
    color: Option<String>,
    daily_price: Option<f64>,
    vin: Option<String>,
    status: Option<CarStatus>,
    dealer_id: Option<i64>,
}

pub struct Transformer;

impl TryIntake<CreateRequest> for Transformer {
    type To = CreateCarDto;
    type Error = error_stack::Report<KernelError>;
    fn emit(&self, input: CreateRequest) -> Result<Self::To, Self::Error> {
        Ok(CreateCarDto {
            brand: validation::non_empty("brand", input.brand)?,
            model: validation::non_empty("model", input.model)?,
            year: validation::year(input.year)?,
            color: validation::non_empty("color", input.color)?,
            daily_price: validation::daily_price(input.daily_price)?,
            vin: validation::vin(input.vin)?,
            status: input.status,
            dealer_id: input.dealer_id,
        })
    }
}

impl TryIntake<(i64, UpdateRequest)> for Transformer {
    type To = UpdateCarDto;
    type Error = error_stack::Report<KernelError>;
    fn emit(&self, input: (i64, UpdateRequest)) -> Result<Self::To, Self::Error> {
        let (id, input) = input;
        Ok(UpdateCarDto {
            id,
            brand: input
                .brand
                .map(|brand| validation::non_empty("brand", brand))
                .transpose()?,
            model: input
                .model
                .map(|model| validation::non_empty("model", model))
                .transpose()?,
            year: input.year.map(validation::year).transpose()?,
            color: input
                .color
                .map(|color| validation::non_empty("color", color))
                .transpose()?,
            daily_price: input.daily_price.map(validation::daily_price).transpose()?,
            vin: input.vin.map(validation::vin).transpose()?,
            status: input.status,
            dealer_id: input.dealer_id,
        })
    }
}

impl Intake<GetCarDto> for Transformer {
    type To = GetCarDto;
    fn emit(&self, input: GetCarDto) -> Self::To {
        input
    }
}

impl Intake<DeleteCarDto> for Transformer {
    type To = DeleteCarDto;
    fn emit(&self, input: DeleteCarDto) -> Self::To {
        input
    }
}

#[cfg(test)]
mod test {
    use crate::controller::TryIntake;
    use crate::route::car::request::{CreateRequest, Transformer, UpdateRequest};
    use kernel::prelude::entity::CarStatus;
    use kernel::KernelError;

    fn create(body: serde_json::Value) -> CreateRequest {
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn status_defaults_to_available() {
        let dto = Transformer
            .emit(create(serde_json::json!({
                "brand": "Toyota",
                "model": "Camry",
                "year": 2023,
                "color": "Blue",
                "daily_price": 35.0,
                "vin": "1HGBH41JXMN109186",
                "dealer_id": 1
            })))
            .unwrap();
        assert_eq!(dto.status, CarStatus::Available);
        assert_eq!(dto.vin, "1HGBH41JXMN109186");
    }

    #[test]
    fn rejects_short_vin() {
        let error = Transformer
            .emit(create(serde_json::json!({
                "brand": "Toyota",
                "model": "Camry",
                "year": 2023,
                "color": "Blue",
                "daily_price": 35.0,
                "vin": "SHORT",
                "status": "maintenance",
                "dealer_id": 1
            })))
            .unwrap_err();
        assert!(matches!(
            error.current_context(),
            KernelError::Validation(_)
        ));
    }

    #[test]
    fn update_checks_only_present_fields() {
        let update: UpdateRequest =
            serde_json::from_value(serde_json::json!({ "daily_price": 40.5 })).unwrap();
        let dto = Transformer.emit((3, update)).unwrap();
        assert_eq!(dto.id, 3);
        assert_eq!(dto.daily_price, Some(40.5));
        assert!(dto.vin.is_none());

        let update: UpdateRequest =
            serde_json::from_value(serde_json::json!({ "year": 1800 })).unwrap();
        assert!(Transformer.emit((3, update)).is_err());
    }
}
