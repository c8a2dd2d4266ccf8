//! Diagnostic records reported by lint rules.
//!
//! This crate is derived from [ruff_diagnostics](https://github.com/astral-sh/ruff)
//! by Astral Software Inc., licensed under MIT.

pub use diagnostic::{Diagnostic, DiagnosticKind, Violation};
pub use severity::{ParseSeverityError, Severity};

mod diagnostic;
mod severity;
