use crate::controller::{Intake, TryIntake};
use crate::validation;
use application::transfer::{
    AvailableCarsDto, CreateBookingDto, DeleteBookingDto, GetBookingDto, GetBookingsDto,
};
use kernel::KernelError;
use serde::Deserialize;

// Datetimes stay strings until validated so a missing offset is reported
// as a validation failure rather than a generic body rejection.
#[derive(Debug, Deserialize)]
pub struct CreateRequest {
    car_id: i64,
    customer_name: String,
    customer_email: String,
    start_datetime: String,
    end_datetime: String,
}

#[derive(Debug, Deserialize)]
pub struct GetAllRequest {
    car_id: Option<i64>,
    start_datetime: Option<String>,
    end_datetime: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct AvailableCarsRequest {
    start_datetime: String,
    end_datetime: String,
}

pub struct Transformer;

impl TryIntake<CreateRequest> for Transformer {
    type To = CreateBookingDto;
    type Error = error_stack::Report<KernelError>;
    fn emit(&self, input: CreateRequest) -> Result<Self::To, Self::Error> {
        Ok(CreateBookingDto {
            car_id: input.car_id,
            customer_name: validation::non_empty("customer_name", input.customer_name)?,
            customer_email: validation::email(input.customer_email)?,
            start_datetime: validation::datetime("start_datetime", &input.start_datetime)?,
            end_datetime: validation::datetime("end_datetime", &input.end_datetime)?,
        })
    }
}

impl TryIntake<GetAllRequest> for Transformer {
    type To = GetBookingsDto;
    type Error = error_stack::Report<KernelError>;
    fn emit(&self, input: GetAllRequest) -> Result<Self::To, Self::Error> {
        Ok(GetBookingsDto {
            car_id: input.car_id,
            start_datetime: input
                .start_datetime
                .map(|start| validation::datetime("start_datetime", &start))
                .transpose()?,
            end_datetime: input
                .end_datetime
                .map(|end| validation::datetime("end_datetime", &end))
                .transpose()?,
        })
    }
}

impl TryIntake<AvailableCarsRequest> for Transformer {
    type To = AvailableCarsDto;
    type Error = error_stack::Report<KernelError>;
    fn emit(&self, input: AvailableCarsRequest) -> Result<Self::To, Self::Error> {
        Ok(AvailableCarsDto {
            start_datetime: validation::datetime("start_datetime", &input.start_datetime)?,
            end_datetime: validation::datetime("end_datetime", &input.end_datetime)?,
        })
    }
}

impl Intake<GetBookingDto> for Transformer {
    type To = GetBookingDto;
    fn emit(&self, input: GetBookingDto) -> Self::To {
        input
    }
}

impl Intake<DeleteBookingDto> for Transformer {
    type To = DeleteBookingDto;
    fn emit(&self, input: DeleteBookingDto) -> Self::To {
        input
    }
}
