use serde::{Deserialize, Serialize};

use crate::config::ServingBounds;

/// Outcome of a serving-size check. Invalid input is reported here, never as an `Err`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServingValidation {
    pub is_valid: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ServingValidation {
    fn valid() -> Self {
        Self { is_valid: true, error: None }
    }

    fn invalid(message: String) -> Self {
        Self { is_valid: false, error: Some(message) }
    }
}

pub fn validate_serving_size(value: f64, min: f64, max: f64) -> ServingValidation {
    if !value.is_finite() {
        return ServingValidation::invalid("Serving size is not a valid number".to_string());
    }
    if value < min {
        return ServingValidation::invalid(format!("Minimum serving size is {}", min));
    }
    if value > max {
        return ServingValidation::invalid(format!("Maximum serving size is {}", max));
    }
    ServingValidation::valid()
}

pub fn validate_serving_size_default(value: f64) -> ServingValidation {
    let bounds = ServingBounds::default();
    validate_serving_size(value, bounds.min, bounds.max)
}
