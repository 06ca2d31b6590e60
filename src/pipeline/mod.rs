//! Pipeline module - fetch, decode, transform and write a base

pub mod decode;
pub mod fetch;
pub mod pretty;
pub mod transform;
pub mod writer;

pub use decode::*;
pub use fetch::*;
pub use pretty::print_jsonc;
pub use transform::*;
pub use writer::*;
