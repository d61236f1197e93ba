//! Contact form state: fields, validation, submission

mod contact;
mod field;
mod validation;

pub use contact::*;
pub use field::*;
pub use validation::*;
