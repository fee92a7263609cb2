use std::marker::PhantomData;

use time::OffsetDateTime;

/// Creation instant of an entity of kind `T`. Set once, never modified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedAt<T>(OffsetDateTime, PhantomData<T>);

impl<T> CreatedAt<T> {
    pub fn new(time: impl Into<OffsetDateTime>) -> Self {
        Self(time.into(), PhantomData)
    }

    pub fn now() -> Self {
        Self::new(OffsetDateTime::now_utc())
    }
}

impl<T> AsRef<OffsetDateTime> for CreatedAt<T> {
    fn as_ref(&self) -> &OffsetDateTime {
        &self.0
    }
}

#[cfg(test)]
mod test {
    use time::macros::datetime;
    use time::UtcOffset;

    use crate::entity::{Booking, CreatedAt};

    #[test]
    fn booking_timestamps_clone_by_value() {
        let created = CreatedAt::<Booking>::new(datetime!(2024-06-20 10:00 UTC));
        let copy = created.clone();
        assert_eq!(copy, created);
        assert_eq!(copy.as_ref(), &datetime!(2024-06-20 10:00 UTC));
    }

    #[test]
    fn now_is_utc() {
        let created = CreatedAt::<Booking>::now();
        assert_eq!(created.as_ref().offset(), UtcOffset::UTC);
    }
}
