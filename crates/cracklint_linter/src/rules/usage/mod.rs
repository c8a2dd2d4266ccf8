//! Usage rules (IfReturnTrue, ...)

mod if_return_true;

pub use if_return_true::{IfReturnTrue, IfReturnTrueViolation, analyze};
