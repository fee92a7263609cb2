use crate::controller::{Intake, TryIntake};
use crate::validation;
use application::transfer::{CreateDealerDto, DeleteDealerDto, GetDealerDto, UpdateDealerDto};
use kernel::KernelError;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateRequest {
    name: String,
    location: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateRequest {
    name: Option<String>,
    location: Option<String>,
}

pub struct Transformer;

impl TryIntake<CreateRequest> for Transformer {
    type To = CreateDealerDto;
    type Error = error_stack::Report<KernelError>;
    fn emit(&self, input: CreateRequest) -> Result<Self::To, Self::Error> {
        Ok(CreateDealerDto {
            name: validation::non_empty("name", input.name)?,
            location: input.location,
        })
    }
}

impl TryIntake<(i64, UpdateRequest)> for Transformer {
    type To = UpdateDealerDto;
    type Error = error_stack::Report<KernelError>;
    fn emit(&self, input: (i64, UpdateRequest)) -> Result<Self::To, Self::Error> {
        let (id, input) = input;
        Ok(UpdateDealerDto {
            id,
            name: input
                .name
                .map(|name| validation::non_empty("name", name))
                .transpose()?,
            location: input.location,
        })
    }
}

impl Intake<GetDealerDto> for Transformer {
    type To = GetDealerDto;
    fn emit(&self, input: GetDealerDto) -> Self::To {
        input
    }
}

impl Intake<DeleteDealerDto> for Transformer {
    type To = DeleteDealerDto;
    fn emit(&self, input: DeleteDealerDto) -> Self::To {
        input
    }
}
