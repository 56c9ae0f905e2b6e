//! Application module: the browse state driven by input and the frame tick.
//!
//! `App` lives in `app::model`; pointer dispatch lives in `app::input`.

mod input;
mod model;

pub use model::*;
