//! Plane angle normalized to `[0, full turn)`.
//!
//! - `AngleUnit`: degrees or radians, parsed from `degrees|deg|radians|rad`.
//! - `Angle`: stores both units; the constructing unit is normalized, the
//!   other is derived by proportion.

use std::fmt;
use std::str::FromStr;

use super::cfg::{FULL_TURN_DEG, FULL_TURN_RAD, MAX_LOOP_TURNS};
use crate::error::{Result, ScienceError};

const UNIT_TAGS: &str = "unit should be degrees, deg, radians or rad";

/// Unit of a plane angle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AngleUnit {
    Degrees,
    #[default]
    Radians,
}

impl AngleUnit {
    /// Angle of a full circle in this unit.
    #[inline]
    pub fn full_turn(self) -> f64 {
        match self {
            AngleUnit::Degrees => FULL_TURN_DEG,
            AngleUnit::Radians => FULL_TURN_RAD,
        }
    }
}

impl FromStr for AngleUnit {
    type Err = ScienceError;

    fn from_str(tag: &str) -> Result<Self> {
        match tag {
            "degrees" | "deg" => Ok(AngleUnit::Degrees),
            "radians" | "rad" => Ok(AngleUnit::Radians),
            other => Err(ScienceError::invalid(format!("{} (got {:?})", UNIT_TAGS, other))),
        }
    }
}

impl fmt::Display for AngleUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AngleUnit::Degrees => f.write_str("degrees"),
            AngleUnit::Radians => f.write_str("radians"),
        }
    }
}

/// Plane angle, immutable once built.
///
/// Invariants:
/// - `0 <= radians < 2π` and `0 <= degrees < 360`.
/// - `degrees == 360 * radians / 2π` up to rounding of the derived unit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Angle {
    radians: f64,
    degrees: f64,
}

impl Angle {
    /// Normalize `value` (given in `unit`) and derive the other unit.
    ///
    /// Errors: non-finite `value`.
    pub fn new(value: f64, unit: AngleUnit) -> Result<Self> {
        if !value.is_finite() {
            return Err(ScienceError::invalid(format!(
                "angle must be finite (got {value})"
            )));
        }
        Ok(Self::normalized(value, unit))
    }

    /// Infallible core of `new`; `value` must be finite.
    pub(crate) fn normalized(value: f64, unit: AngleUnit) -> Self {
        debug_assert!(value.is_finite());
        match unit {
            AngleUnit::Degrees => {
                let degrees = normalize(value, FULL_TURN_DEG);
                Self {
                    radians: convert(degrees, FULL_TURN_DEG, FULL_TURN_RAD),
                    degrees,
                }
            }
            AngleUnit::Radians => {
                let radians = normalize(value, FULL_TURN_RAD);
                Self {
                    radians,
                    degrees: convert(radians, FULL_TURN_RAD, FULL_TURN_DEG),
                }
            }
        }
    }

    /// Like `new`, with the unit given as a tag (`degrees|deg|radians|rad`).
    pub fn with_unit_tag(value: f64, tag: &str) -> Result<Self> {
        Self::new(value, tag.parse()?)
    }

    #[inline]
    pub fn from_degrees(value: f64) -> Result<Self> {
        Self::new(value, AngleUnit::Degrees)
    }

    #[inline]
    pub fn from_radians(value: f64) -> Result<Self> {
        Self::new(value, AngleUnit::Radians)
    }

    #[inline]
    pub fn radians(&self) -> f64 {
        self.radians
    }

    #[inline]
    pub fn degrees(&self) -> f64 {
        self.degrees
    }

    /// Short alias of `radians`.
    #[inline]
    pub fn rad(&self) -> f64 {
        self.radians
    }

    /// Short alias of `degrees`.
    #[inline]
    pub fn deg(&self) -> f64 {
        self.degrees
    }

    /// Value in the requested unit.
    #[inline]
    pub fn value(&self, unit: AngleUnit) -> f64 {
        match unit {
            AngleUnit::Degrees => self.degrees,
            AngleUnit::Radians => self.radians,
        }
    }

    pub fn value_for_tag(&self, tag: &str) -> Result<f64> {
        Ok(self.value(tag.parse()?))
    }

    /// `"<degrees>°"` or `"<radians> rad"`, shortest round-trip decimal.
    pub fn as_string(&self, unit: AngleUnit) -> String {
        match unit {
            AngleUnit::Degrees => format!("{}°", self.degrees),
            AngleUnit::Radians => format!("{} rad", self.radians),
        }
    }

    pub fn string_for_tag(&self, tag: &str) -> Result<String> {
        Ok(self.as_string(tag.parse()?))
    }
}

/// Radians by default.
impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_string(AngleUnit::Radians))
    }
}

/// Bring `angle` into `[0, full_turn)`: add turns while `<= 0`, then
/// subtract turns while `>= full_turn`. Exact zero goes up one turn and
/// straight back down.
fn normalize(mut angle: f64, full_turn: f64) -> f64 {
    if angle.abs() > full_turn * MAX_LOOP_TURNS {
        angle %= full_turn;
    }
    while angle <= 0.0 {
        angle += full_turn;
    }
    while angle >= full_turn {
        angle -= full_turn;
    }
    angle
}

/// `to_full * value / from_full`, kept strictly below `to_full`.
#[inline]
fn convert(value: f64, from_full: f64, to_full: f64) -> f64 {
    let out = to_full * value / from_full;
    if out >= to_full {
        // largest float below the full turn
        f64::from_bits(to_full.to_bits() - 1)
    } else {
        out
    }
}
