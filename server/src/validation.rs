//! Field checks applied to request bodies before they reach the services.
//! Every failure is a [`KernelError::Validation`].

use error_stack::{Report, ResultExt};
use kernel::KernelError;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

pub const VIN_LENGTH: usize = 17;

fn invalid(reason: String) -> Report<KernelError> {
    Report::new(KernelError::Validation(reason))
}

pub fn non_empty(field: &str, value: String) -> error_stack::Result<String, KernelError> {
    if value.trim().is_empty() {
        return Err(invalid(format!("{} must not be empty", field)));
    }
    Ok(value)
}

/// Model years from 1901 up to next year.
pub fn year(value: i32) -> error_stack::Result<i32, KernelError> {
    let latest = OffsetDateTime::now_utc().year() + 1;
    if !(1901..=latest).contains(&value) {
        return Err(invalid(format!(
            "year must be between 1901 and {}, got {}",
            latest, value
        )));
    }
    Ok(value)
}

pub fn daily_price(value: f64) -> error_stack::Result<f64, KernelError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(invalid(format!("daily_price must be positive, got {}", value)));
    }
    Ok(value)
}

pub fn vin(value: String) -> error_stack::Result<String, KernelError> {
    let length = value.chars().count();
    if length != VIN_LENGTH {
        return Err(invalid(format!(
            "vin must be exactly {} characters, got {}",
            VIN_LENGTH, length
        )));
    }
    Ok(value)
}

/// Accepts `local@domain.tld`. Nothing more elaborate is attempted.
pub fn email(value: String) -> error_stack::Result<String, KernelError> {
    let valid = match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && !value.chars().any(char::is_whitespace)
                && domain
                    .rsplit_once('.')
                    .map(|(host, tld)| !host.is_empty() && !tld.is_empty())
                    .unwrap_or(false)
        }
        None => false,
    };
    if !valid {
        return Err(invalid(format!("{} is not a valid email address", value)));
    }
    Ok(value)
}

/// Parses an RFC 3339 timestamp. Timestamps without a UTC offset are rejected.
pub fn datetime(field: &str, value: &str) -> error_stack::Result<OffsetDateTime, KernelError> {
    OffsetDateTime::parse(value, &Rfc3339)
        .change_context_lazy(|| {
            KernelError::Validation(format!(
                "{} must be an RFC 3339 timestamp with offset, got `{}`",
                field, value
            ))
        })
}

#[cfg(test)]
mod test {
    use kernel::KernelError;
    use time::macros::datetime;

    use crate::validation;

    fn is_validation<T>(result: error_stack::Result<T, KernelError>) -> bool {
        matches!(
            result.map_err(|e| e.current_context().clone()),
            Err(KernelError::Validation(_))
        )
    }

    #[test]
    fn datetimes_need_an_offset() {
        assert_eq!(
            validation::datetime("start_datetime", "2024-06-20T10:00:00Z").unwrap(),
            datetime!(2024-06-20 10:00 UTC)
        );
        assert_eq!(
            validation::datetime("start_datetime", "2024-06-20T12:00:00+02:00").unwrap(),
            datetime!(2024-06-20 12:00 +02:00)
        );
        assert!(is_validation(validation::datetime(
            "start_datetime",
            "2024-06-20T10:00:00"
        )));
        assert!(is_validation(validation::datetime(
            "start_datetime",
            "next tuesday"
        )));
    }

    #[test]
    fn vin_length_is_exact() {
        assert!(validation::vin("1HGBH41JXMN109186".to_string()).is_ok());
        assert!(is_validation(validation::vin("1HGBH41JXMN10918".to_string())));
        assert!(is_validation(validation::vin("1HGBH41JXMN1091860".to_string())));
    }

    #[test]
    fn email_shape() {
        assert!(validation::email("john.doe@example.com".to_string()).is_ok());
        assert!(is_validation(validation::email("john.doe".to_string())));
        assert!(is_validation(validation::email("@example.com".to_string())));
        assert!(is_validation(validation::email("john@localhost".to_string())));
        assert!(is_validation(validation::email("john@@example.com".to_string())));
    }

    #[test]
    fn numbers_and_strings() {
        assert!(validation::year(2023).is_ok());
        assert!(is_validation(validation::year(1900)));
        assert!(is_validation(validation::year(3000)));
        assert!(validation::daily_price(35.0).is_ok());
        assert!(is_validation(validation::daily_price(0.0)));
        assert!(is_validation(validation::daily_price(-1.5)));
        assert!(is_validation(validation::non_empty("brand", "  ".to_string())));
    }
}
