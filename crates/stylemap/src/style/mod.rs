//! Typed interpretation of raw property values.
//!
//! The parser keeps every value as the literal text it was written with.
//! This module turns such text into a [`Style`] for properties that have an
//! interpreter registered in a [`StyleTable`]; other properties fail with
//! [`Error::UnknownStyle`](crate::Error::UnknownStyle).

mod interpret;
mod table;
mod value;

pub use interpret::{parse_color, parse_keyword, parse_length, parse_number};
pub use table::{Interpreter, StyleTable, css_style};
pub use value::{Color, Length, Style};
