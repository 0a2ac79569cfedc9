//! Text format for sparse matrices
//!
//! ```text
//! rows=<integer>
//! cols=<integer>
//! (<row>, <col>, <value>)
//! ...
//! ```
//!
//! The same layout is read by [`parse_str`] and written by [`write_matrix`].

pub mod constants;
pub mod line;
pub mod reader;
pub mod writer;

pub use line::Line;
pub use reader::{parse_str, LoadOptions};
pub use writer::write_matrix;
