use crate::error::AppError;

/// Text token <-> typed value conversion for one record field.
///
/// The aggregation engine only ever talks to fields through this trait, so
/// instantiating it with a new field type is a matter of adding an impl here.
pub trait FieldConvert: Sized {
    /// Name used in conversion error messages.
    const TYPE_NAME: &'static str;

    /// Parse a raw token. Fails when the token is not a valid lexical
    /// representation of the type (empty, garbage, out of range).
    fn parse_field(token: &str) -> Result<Self, AppError>;

    /// Canonical text rendering. Total for any representable value;
    /// integers round-trip exactly, floats may lose textual precision.
    fn format_field(&self) -> String;
}

impl FieldConvert for String {
    const TYPE_NAME: &'static str = "string";

    fn parse_field(token: &str) -> Result<Self, AppError> {
        Ok(token.to_string())
    }

    fn format_field(&self) -> String {
        self.clone()
    }
}

macro_rules! numeric_field_convert {
    ($($ty:ty),* $(,)?) => {$(
        impl FieldConvert for $ty {
            const TYPE_NAME: &'static str = stringify!($ty);

            fn parse_field(token: &str) -> Result<Self, AppError> {
                token.trim().parse().map_err(|_| AppError::Convert {
                    token: token.to_string(),
                    target: Self::TYPE_NAME,
                })
            }

            fn format_field(&self) -> String {
                self.to_string()
            }
        }
    )*};
}

numeric_field_convert!(i32, i64, u32, u64, f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_round_trip() {
        for v in [0i64, 1, -1, 42, i64::MAX, i64::MIN] {
            let token = v.format_field();
            assert_eq!(i64::parse_field(&token).unwrap(), v);
        }
        for v in [0i32, 1005, -7, i32::MAX] {
            assert_eq!(i32::parse_field(&v.format_field()).unwrap(), v);
        }
    }

    #[test]
    fn string_is_identity() {
        assert_eq!(String::parse_field("AAPL").unwrap(), "AAPL");
        assert_eq!("AAPL".to_string().format_field(), "AAPL");
    }

    #[test]
    fn float_parses_at_full_width() {
        let v = f64::parse_field("50.125").unwrap();
        assert!((v - 50.125).abs() < f64::EPSILON);
        let back = f64::parse_field(&v.format_field()).unwrap();
        assert!((back - v).abs() < 1e-9);
    }

    #[test]
    fn numeric_tokens_may_carry_whitespace() {
        assert_eq!(i32::parse_field(" 10 ").unwrap(), 10);
    }

    #[test]
    fn rejects_invalid_tokens() {
        assert!(i32::parse_field("").is_err());
        assert!(i32::parse_field("abc").is_err());
        assert!(i32::parse_field("12.5").is_err());
        assert!(u64::parse_field("-1").is_err());
        // out of range for the target width
        assert!(i32::parse_field("3000000000").is_err());
        assert!(f64::parse_field("1.2.3").is_err());
    }

    #[test]
    fn convert_error_names_token_and_type() {
        let err = i32::parse_field("oops").unwrap_err();
        assert_eq!(err.to_string(), "cannot convert 'oops' to i32");
    }
}
