use crate::utils::error::{GreeterError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(GreeterError::invalid_argument(
            field_name,
            value,
            "Value cannot be empty or whitespace-only",
        ));
    }
    Ok(())
}

pub fn validate_min<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
) -> Result<()> {
    if value < min {
        return Err(GreeterError::invalid_argument(
            field_name,
            value,
            format!("Value must be at least {}", min),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("name", "Alice").is_ok());
        assert!(validate_non_empty_string("name", "").is_err());
        assert!(validate_non_empty_string("name", "   ").is_err());
    }

    #[test]
    fn test_validate_min() {
        assert!(validate_min("age", 0i64, 0).is_ok());
        assert!(validate_min("age", 42i64, 0).is_ok());

        match validate_min("age", -1i64, 0) {
            Err(GreeterError::InvalidArgument { field, value, .. }) => {
                assert_eq!(field, "age");
                assert_eq!(value, "-1");
            }
            other => panic!("expected InvalidArgument, got {:?}", other),
        }
    }
}
