//! Plane geometry values: normalized angles and 2D vectors.
//!
//! Purpose
//! - `Angle` keeps radians and degrees side by side, always in `[0, full turn)`.
//! - `Vector` keeps polar (norm, orientation) and Cartesian (x, y) forms in
//!   agreement, whichever one it was built from.
//!
//! Model
//! - Both types are `Copy` and never change after construction; arithmetic
//!   returns fresh values.
//! - Cartesian input resolves its orientation by sign classification of the
//!   components (quadrant table in `vector::orientation_of`), not `atan2`.
//!
//! Code cross-refs: `Angle`, `Vector`, `VectorInit`, `util::{is_positive_or_zero, parallelogram_area}`

mod angle;
pub mod cfg;
pub mod util;
mod vector;

pub use angle::{Angle, AngleUnit};
pub use vector::{LinearCombination, Orientation, Vector, VectorInit, VectorOptions};
