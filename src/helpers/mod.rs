pub(crate) mod json;
pub mod validator;

pub use json::*;
pub use validator::{require_fields, ValidationError};
