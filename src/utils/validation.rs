use crate::utils::error::{EngineError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(EngineError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    // NaN 不會落在任何範圍內
    if !(value >= min && value <= max) {
        return Err(EngineError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

pub fn validate_unit_interval(field_name: &str, value: f64) -> Result<()> {
    validate_range(field_name, value, 0.0, 1.0)
}

pub fn validate_positive(field_name: &str, value: f64) -> Result<()> {
    if !(value > 0.0) {
        return Err(EngineError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value must be greater than zero".to_string(),
        });
    }
    Ok(())
}

pub fn validate_sums_to_one(field_name: &str, values: &[f64]) -> Result<()> {
    let sum: f64 = values.iter().sum();
    if (sum - 1.0).abs() > 1e-6 {
        return Err(EngineError::ConfigValidationError {
            field: field_name.to_string(),
            message: format!("Values must sum to 1.0 (got {:.6})", sum),
        });
    }
    Ok(())
}

pub fn validate_not_greater(
    field_name: &str,
    lower: f64,
    upper: f64,
    upper_name: &str,
) -> Result<()> {
    if lower > upper {
        return Err(EngineError::ConfigValidationError {
            field: field_name.to_string(),
            message: format!("{} must not exceed {} ({})", lower, upper_name, upper),
        });
    }
    Ok(())
}

pub fn validate_strictly_descending(field_name: &str, values: &[f64]) -> Result<()> {
    if values.windows(2).any(|pair| pair[0] <= pair[1]) {
        return Err(EngineError::ConfigValidationError {
            field: field_name.to_string(),
            message: format!("Cut points must be strictly descending: {:?}", values),
        });
    }
    Ok(())
}
