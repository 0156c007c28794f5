//! Turning label text read from the page into numbers.

pub mod label;
pub mod number;

pub use number::{extract_integer, parse_integer};
