//! Newtypes for byte offsets and ranges into source text.
//!
//! This crate is derived from [ruff_text_size](https://github.com/astral-sh/ruff)
//! by Astral Software Inc., licensed under MIT.
//!
//! Offsets are `u32` byte offsets into UTF-8 text. Syntax tree nodes and
//! diagnostics carry a [`TextRange`]; line/column conversion lives in
//! `cracklint_source_file`.

mod range;
#[cfg(feature = "serde")]
mod serde_impls;
mod size;
mod traits;

pub use crate::{range::TextRange, size::TextSize, traits::Ranged};

#[cfg(target_pointer_width = "16")]
compile_error!("text-size assumes usize >= u32 and does not work on 16-bit targets");
