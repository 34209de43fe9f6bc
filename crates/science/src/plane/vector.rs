//! 2D vector with cached polar and Cartesian forms.
//!
//! - `VectorInit`: polar `(norm, orientation)` or Cartesian `(x, y)` input.
//! - `VectorOptions`: loose option set for runtime boundaries; polar wins
//!   when both key pairs are present.
//! - `Vector`: immutable value; arithmetic goes back through Cartesian
//!   construction.

use std::fmt;

use nalgebra::Vector2;

use super::angle::{Angle, AngleUnit};
use super::util::{is_negative_or_zero, is_positive_or_zero, parallelogram_area};
use crate::error::{Result, ScienceError};

/// Orientation of a polar vector: an `Angle`, or a bare number in radians.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Orientation {
    Angle(Angle),
    Radians(f64),
}

impl Orientation {
    fn resolve(self) -> Result<Angle> {
        match self {
            Orientation::Angle(a) => Ok(a),
            Orientation::Radians(r) => Angle::from_radians(r),
        }
    }
}

impl From<Angle> for Orientation {
    fn from(a: Angle) -> Self {
        Orientation::Angle(a)
    }
}

impl From<f64> for Orientation {
    fn from(r: f64) -> Self {
        Orientation::Radians(r)
    }
}

/// Construction input for `Vector`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum VectorInit {
    Polar { norm: f64, orientation: Orientation },
    Cartesian { x: f64, y: f64 },
}

/// Optional construction keys, resolved into a `VectorInit`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct VectorOptions {
    pub norm: Option<f64>,
    pub orientation: Option<Orientation>,
    pub x: Option<f64>,
    pub y: Option<f64>,
}

impl VectorOptions {
    /// Polar keys are checked first, then Cartesian.
    pub fn resolve(self) -> Result<VectorInit> {
        match (self.norm, self.orientation, self.x, self.y) {
            (Some(norm), Some(orientation), _, _) => Ok(VectorInit::Polar { norm, orientation }),
            (_, _, Some(x), Some(y)) => Ok(VectorInit::Cartesian { x, y }),
            _ => Err(ScienceError::invalid(format!(
                "options should contain norm and orientation or x and y (got [{}])",
                self.present_keys().join(", ")
            ))),
        }
    }

    fn present_keys(&self) -> Vec<&'static str> {
        let mut keys = Vec::with_capacity(4);
        if self.norm.is_some() {
            keys.push("norm");
        }
        if self.orientation.is_some() {
            keys.push("orientation");
        }
        if self.x.is_some() {
            keys.push("x");
        }
        if self.y.is_some() {
            keys.push("y");
        }
        keys
    }
}

impl From<VectorInit> for VectorOptions {
    fn from(init: VectorInit) -> Self {
        match init {
            VectorInit::Polar { norm, orientation } => Self {
                norm: Some(norm),
                orientation: Some(orientation),
                ..Self::default()
            },
            VectorInit::Cartesian { x, y } => Self {
                x: Some(x),
                y: Some(y),
                ..Self::default()
            },
        }
    }
}

/// Coefficients of `w = k1 * u + k2 * v`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearCombination {
    pub k1: f64,
    pub k2: f64,
}

/// Planar vector.
///
/// Invariants:
/// - `norm >= 0`, finite.
/// - `x = norm cos θ`, `y = norm sin θ`, `norm = sqrt(x² + y²)` up to rounding,
///   with `θ = orientation.radians()`.
/// - Never the zero vector when built from components (orientation undefined).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vector {
    norm: f64,
    orientation: Angle,
    components: Vector2<f64>,
}

impl Vector {
    pub fn new(init: VectorInit) -> Result<Self> {
        match init {
            VectorInit::Polar { norm, orientation } => {
                Self::from_norm_and_orientation(norm, orientation.resolve()?)
            }
            VectorInit::Cartesian { x, y } => Self::from_components(x, y),
        }
    }

    pub fn from_options(options: VectorOptions) -> Result<Self> {
        Self::new(options.resolve()?)
    }

    /// Polar shorthand; a bare `f64` orientation is taken as radians.
    pub fn polar(norm: f64, orientation: impl Into<Orientation>) -> Result<Self> {
        Self::new(VectorInit::Polar {
            norm,
            orientation: orientation.into(),
        })
    }

    pub fn cartesian(x: f64, y: f64) -> Result<Self> {
        Self::new(VectorInit::Cartesian { x, y })
    }

    fn from_norm_and_orientation(norm: f64, orientation: Angle) -> Result<Self> {
        if !norm.is_finite() || norm < 0.0 {
            return Err(ScienceError::invalid(format!(
                "norm must be finite and non-negative (got {norm})"
            )));
        }
        let theta = orientation.radians();
        Ok(Self {
            norm,
            orientation,
            components: Vector2::new(norm * theta.cos(), norm * theta.sin()),
        })
    }

    fn from_components(x: f64, y: f64) -> Result<Self> {
        if !x.is_finite() || !y.is_finite() {
            return Err(ScienceError::invalid(format!(
                "components must be finite (got x = {x}, y = {y})"
            )));
        }
        let orientation = orientation_of(x, y)?;
        let norm = norm_of(x, y);
        if !norm.is_finite() {
            return Err(ScienceError::invalid(format!(
                "norm overflows for components x = {x}, y = {y}"
            )));
        }
        Ok(Self {
            norm,
            orientation,
            components: Vector2::new(x, y),
        })
    }

    #[inline]
    pub fn norm(&self) -> f64 {
        self.norm
    }

    #[inline]
    pub fn orientation(&self) -> Angle {
        self.orientation
    }

    #[inline]
    pub fn components(&self) -> Vector2<f64> {
        self.components
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.components.x
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.components.y
    }

    /// Component-wise sum, rebuilt from Cartesian form.
    #[allow(clippy::should_implement_trait)]
    pub fn add(&self, other: &Vector) -> Result<Vector> {
        let c = self.components + other.components;
        Self::from_components(c.x, c.y)
    }

    /// Component-wise difference, rebuilt from Cartesian form.
    #[allow(clippy::should_implement_trait)]
    pub fn sub(&self, other: &Vector) -> Result<Vector> {
        let c = self.components - other.components;
        Self::from_components(c.x, c.y)
    }

    /// Unary plus: the vector itself.
    #[inline]
    pub fn pos(&self) -> Vector {
        *self
    }

    /// Scalar multiple `k * self`. Fails for `k == 0` (zero vector).
    pub fn scale(&self, k: f64) -> Result<Vector> {
        let c = self.components * k;
        Self::from_components(c.x, c.y)
    }

    /// Scalar product.
    #[inline]
    pub fn dot(&self, other: &Vector) -> f64 {
        self.components.dot(&other.components)
    }

    /// Solve `self = k1 * u + k2 * v` in closed form.
    ///
    /// Errors: `u`, `v` collinear, or `u.x == 0`.
    pub fn linear_combination(&self, u: &Vector, v: &Vector) -> Result<LinearCombination> {
        // -u.y*v.x + u.x*v.y
        let det = parallelogram_area(u.components, v.components);
        if det == 0.0 {
            return Err(ScienceError::invalid(
                "u and v are collinear; no unique linear combination",
            ));
        }
        if u.x() == 0.0 {
            return Err(ScienceError::invalid(
                "u.x is zero; k1 cannot be solved from the x row",
            ));
        }
        let k2 = parallelogram_area(u.components, self.components) / det;
        let k1 = (self.x() - v.x() * k2) / u.x();
        if !k1.is_finite() || !k2.is_finite() {
            return Err(ScienceError::invalid(format!(
                "linear combination overflowed (k1 = {k1}, k2 = {k2})"
            )));
        }
        Ok(LinearCombination { k1, k2 })
    }

    /// One labeled line per field, orientation in `angle_unit`.
    pub fn as_string(&self, angle_unit: AngleUnit) -> String {
        format!(
            "Vector :\n- x = {}\n- y = {}\n- norm = {}\n- orientation = {}\n",
            self.x(),
            self.y(),
            self.norm,
            self.orientation.as_string(angle_unit)
        )
    }
}

/// Opposite vector: same norm, orientation turned by 180°.
impl std::ops::Neg for Vector {
    type Output = Vector;
    fn neg(self) -> Self::Output {
        Vector {
            norm: self.norm,
            orientation: Angle::normalized(
                self.orientation.degrees() + 180.0,
                AngleUnit::Degrees,
            ),
            components: -self.components,
        }
    }
}

/// Orientation in degrees.
impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_string(AngleUnit::Degrees))
    }
}

/// `sqrt(x² + y²)`, falling back to `hypot` when the squares leave the
/// normal range.
#[inline]
fn norm_of(x: f64, y: f64) -> f64 {
    let sq = x * x + y * y;
    if sq.is_finite() && sq >= f64::MIN_POSITIVE {
        sq.sqrt()
    } else {
        x.hypot(y)
    }
}

/// Orientation from component signs. Axis directions are exact; inside a
/// quadrant the acute angle `atan(|y|/|x|)` is folded into place.
fn orientation_of(x: f64, y: f64) -> Result<Angle> {
    if x == 0.0 && y == 0.0 {
        return Err(ScienceError::invalid(
            "zero vector has undefined orientation",
        ));
    }
    let acute = |opp: f64, adj: f64| Angle::from_radians((opp / adj).atan()).map(|a| a.degrees());
    let degrees = if is_positive_or_zero(x) && y == 0.0 {
        0.0
    } else if x == 0.0 && is_positive_or_zero(y) {
        90.0
    } else if is_negative_or_zero(x) && y == 0.0 {
        180.0
    } else if x == 0.0 && is_negative_or_zero(y) {
        270.0
    } else if is_positive_or_zero(x) && is_positive_or_zero(y) {
        acute(y, x)?
    } else if is_negative_or_zero(x) && is_positive_or_zero(y) {
        180.0 - acute(y, x.abs())?
    } else if is_negative_or_zero(x) && is_negative_or_zero(y) {
        180.0 + acute(y.abs(), x.abs())?
    } else {
        360.0 - acute(y.abs(), x)?
    };
    Angle::from_degrees(degrees)
}
