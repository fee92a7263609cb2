use error_stack::Report;
use time::{OffsetDateTime, UtcOffset};
use vodca::References;

use crate::KernelError;

/// Half-open reservation window `[start, end)`, stored in UTC.
///
/// `start` is inclusive and `end` exclusive, so a booking ending at the exact
/// instant another one starts does not overlap it.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, References)]
pub struct BookingPeriod {
    start: OffsetDateTime,
    end: OffsetDateTime,
}

impl BookingPeriod {
    pub fn new(
        start: impl Into<OffsetDateTime>,
        end: impl Into<OffsetDateTime>,
    ) -> error_stack::Result<Self, KernelError> {
        let start = start.into().to_offset(UtcOffset::UTC);
        let end = end.into().to_offset(UtcOffset::UTC);
        if start >= end {
            return Err(Report::new(KernelError::InvalidDateRange)
                .attach_printable(format!("start {} is not before end {}", start, end)));
        }
        Ok(Self { start, end })
    }

    pub fn overlaps(&self, other: &BookingPeriod) -> bool {
        other.start < self.end && self.start < other.end
    }
}
