//! Album catalog: the read-only model built once at startup.
//!
//! `catalog::load` reads the line-oriented catalog file; `catalog::parse`
//! does the same for text already in memory.

mod load;
mod model;

pub use load::{load, parse};
pub use model::*;
