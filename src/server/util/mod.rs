//! Small helpers shared by the domain models and controllers.

pub mod extract;
pub mod parse;
pub mod validate;
