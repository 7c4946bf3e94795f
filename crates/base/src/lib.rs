//! Rendering primitives shared by the `showk` crates: `pretty` document helpers and iterator
//! display adapters.

pub mod display_iter;
pub mod pretty;
