pub mod field_normalizer;
pub mod record_validator;

pub use field_normalizer::*;
pub use record_validator::*;
