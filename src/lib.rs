//! A write-only PDF serialization library: an in-memory object set in, a byte-exact file out.

pub mod base;
pub mod codecs;
pub mod writer;

mod utils;

pub use base::*;
