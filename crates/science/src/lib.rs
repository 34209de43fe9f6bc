//! Plane angles and 2D vectors.
//!
//! Two immutable value types live here:
//! - `Angle`: a plane angle normalized to `[0, full turn)`, readable in
//!   degrees or radians.
//! - `Vector`: a planar vector built from polar or Cartesian input, with
//!   the missing representation derived once at construction.
//!
//! Every fallible operation returns `science::Result<T>`; the only error
//! kind is `ScienceError::InvalidArgument`.

pub mod error;
pub mod plane;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::{Result, ScienceError};
pub use nalgebra::Vector2 as Vec2;
pub use plane::{
    Angle, AngleUnit, LinearCombination, Orientation, Vector, VectorInit, VectorOptions,
};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::error::{Result, ScienceError};
    pub use crate::plane::{
        Angle, AngleUnit, LinearCombination, Orientation, Vector, VectorInit, VectorOptions,
    };
    pub use nalgebra::Vector2 as Vec2;
}
