pub mod address_validator;
pub mod string_utils;

pub use address_validator::AddressValidator;
