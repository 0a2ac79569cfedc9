//! Validation utilities for the text format and for operand shapes
//!
//! This module contains pure functions with no I/O dependencies.

pub mod bounds;
pub mod parsing;

pub use bounds::{validate_entries_in_bounds, validate_inner_dimensions, validate_same_shape};
pub use parsing::{parse_entry, parse_index, parse_value};
