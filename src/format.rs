use crate::error::{Error, Result};

/// Renders a non-negative integer in decimal. Zero renders as "0"; negative
/// input is rejected rather than silently misrendered.
pub fn format_int(value: i64) -> Result<String> {
    if value < 0 {
        return Err(Error::InvalidArgument(format!(
            "cannot format negative value {value}"
        )));
    }
    Ok(value.to_string())
}

/// Renders an elapsed time as "<secs>.<hh> seconds", with hundredths below
/// 10 zero-padded to two digits.
pub fn format_time(seconds: u64, hundredths: u64) -> String {
    format!("{seconds}.{hundredths:02} seconds")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_int_zero() {
        assert_eq!(format_int(0).unwrap(), "0");
    }

    #[test]
    fn test_format_int_round_trip() {
        for v in [1, 7, 10, 42, 99, 100, 12345, 1_000_000_000, i64::MAX] {
            let rendered = format_int(v).unwrap();
            assert_eq!(rendered.parse::<i64>().unwrap(), v);
        }
    }

    #[test]
    fn test_format_int_no_leading_zeros() {
        assert_eq!(format_int(1002).unwrap(), "1002");
        assert_eq!(format_int(50).unwrap(), "50");
    }

    #[test]
    fn test_format_int_negative_is_invalid() {
        let err = format_int(-1).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
    }

    #[test]
    fn test_format_time_pads_hundredths() {
        assert_eq!(format_time(6, 0), "6.00 seconds");
        assert_eq!(format_time(3, 7), "3.07 seconds");
    }

    #[test]
    fn test_format_time_two_digit_hundredths() {
        assert_eq!(format_time(12, 34), "12.34 seconds");
        assert_eq!(format_time(0, 99), "0.99 seconds");
    }
}
