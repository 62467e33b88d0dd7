//! Flattening of nested patient records into denormalized export rows.

mod flatten;

pub use flatten::{FlatRows, flatten};
