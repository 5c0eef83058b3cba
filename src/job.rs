mod assemble;
mod descriptor;
mod error;
mod validate;

#[cfg(test)]
mod tests;

pub use assemble::assemble;
pub use descriptor::JobDescriptor;
pub use error::{InvalidField, Result, ValidationError};
