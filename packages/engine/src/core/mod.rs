//! Core utilities shared by every layer.
//!
//! `utils` must stay first: its macros are `#[macro_export]`ed and used
//! throughout the crate.

#[macro_use]
pub mod utils;
