pub mod suggestions;
pub mod validator;

pub use suggestions::get_serving_suggestions;
pub use validator::{validate_serving_size, validate_serving_size_default, ServingValidation};
