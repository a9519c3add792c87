#[cfg(test)]
pub(crate) use generator::corrupt_record;
pub use generator::generate;
pub use schema::{DatasetSchema, OptionalField};
pub use validator::{Validation, validate_file};

mod generator;
mod prompt;
mod schema;
mod validator;
