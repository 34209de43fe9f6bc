//! Numeric constants for plane geometry (internal defaults).
//!
//! Policy
//! - Fixed constants, no runtime knobs. Callers that need a different
//!   tolerance compare against their own.

use std::f64::consts::TAU;

/// One full turn in degrees.
pub const FULL_TURN_DEG: f64 = 360.0;
/// One full turn in radians.
pub const FULL_TURN_RAD: f64 = TAU;
/// Inputs beyond this many turns are reduced with `%` before the add/subtract
/// loops; past ~2^53 units a single step no longer changes the value.
pub const MAX_LOOP_TURNS: f64 = 1e6;
