// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Unevaluated-sum double-precision arithmetic.
//!
//! `DoubleDouble` stores a value as a non-overlapping expansion `hi + lo`
//! (`|lo| <= 0.5 ulp(hi)`), giving roughly 32 decimal digits of working
//! precision out of a pair of `f64`s. This is the precision floor the
//! Julian-date and Earth-rotation arithmetic in this crate is built on: a
//! bare `f64` Julian Date already spends most of its mantissa on the ~2.45
//! million whole days since the epoch, leaving only microsecond-level
//! resolution for the fractional part.
//!
//! References:
//! * Shewchuk, "Adaptive Precision Floating-Point Arithmetic and Fast Robust
//!   Geometric Predicates" (1997) — `TwoSum`/`FastTwoSum` (Theorems 6, 7).
//! * Hida, Li & Bailey, "Quad-Double Arithmetic" (2000) — `Split`, `TwoProd`
//!   (Algorithms 5, 6), division (§3.5).
//! * Muller et al., "Handbook of Floating-Point Arithmetic" (2009) —
//!   Algorithms 14.3 (double-double + double-double) and 14.4
//!   (double-double * double-double).

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// A non-overlapping `(hi, lo)` expansion representing `hi + lo`.
#[derive(Clone, Copy, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DoubleDouble {
    hi: f64,
    lo: f64,
}

/// [Shewchuk1997] Theorem 7: exact sum of two doubles as a non-overlapping pair.
#[inline]
fn two_sum(a: f64, b: f64) -> (f64, f64) {
    let x = a + b;
    let b_virtual = x - a;
    let a_virtual = x - b_virtual;
    let b_roundoff = b - b_virtual;
    let a_roundoff = a - a_virtual;
    (x, a_roundoff + b_roundoff)
}

/// [Shewchuk1997] Theorem 6: exact sum assuming `|a| >= |b|`.
#[inline]
fn fast_two_sum(a: f64, b: f64) -> (f64, f64) {
    let x = a + b;
    let b_virtual = x - a;
    (x, b - b_virtual)
}

/// [QD2000] Algorithm 5: split a 53-bit double into two 26-bit halves.
#[inline]
fn split(a: f64) -> (f64, f64) {
    let c = 134_217_729.0 * a; // 2^27 + 1
    let a_big = c - a;
    let hi = c - a_big;
    let lo = a - hi;
    (hi, lo)
}

/// [QD2000] Algorithm 6: exact product of two doubles as a non-overlapping pair.
#[inline]
fn two_prod(a: f64, b: f64) -> (f64, f64) {
    let p = a * b;
    let (a_hi, a_lo) = split(a);
    let (b_hi, b_lo) = split(b);
    let e = ((a_hi * b_hi - p) + a_hi * b_lo + a_lo * b_hi) + a_lo * b_lo;
    (p, e)
}

/// [Shewchuk1997] Theorem 10: double-double plus double.
fn dd_add_f64((ex, ey): (f64, f64), b: f64) -> (f64, f64) {
    let (q1x, q1y) = two_sum(b, ey);
    let (q2x, q2y) = two_sum(q1x, ex);
    (q2x, q2y + q1y)
}

/// [FPHandbook2009] Algorithm 14.3: double-double plus double-double.
fn dd_add((ax, ay): (f64, f64), (bx, by): (f64, f64)) -> (f64, f64) {
    let (sx, sy) = two_sum(ax, bx);
    let (tx, ty) = two_sum(ay, by);
    let c = sy + ty;
    let (vx, vy) = fast_two_sum(sx, c);
    let w = tx + vy;
    fast_two_sum(vx, w)
}

/// [FPHandbook2009] Algorithm 14.4: double-double times double.
fn dd_mul_f64((ax, ay): (f64, f64), b: f64) -> (f64, f64) {
    let (px, py) = two_prod(ax, b);
    let pl = py + ay * b;
    fast_two_sum(px, pl)
}

/// [FPHandbook2009] Algorithm 14.4: double-double times double-double.
fn dd_mul((ax, ay): (f64, f64), (bx, by): (f64, f64)) -> (f64, f64) {
    let (px, mut py) = two_prod(ax, bx);
    py += ax * by;
    py += ay * bx;
    fast_two_sum(px, py)
}

/// [QD2000] §3.5: two iterated correction steps.
fn dd_div_f64(a: (f64, f64), b: f64) -> (f64, f64) {
    let q0 = a.0 / b;
    let mut r = dd_add(a, dd_mul_f64((q0, 0.0), -b));
    let q1 = r.0 / b;
    r = dd_add(r, dd_mul_f64((q1, 0.0), -b));
    let q2 = r.0 / b;
    let result = fast_two_sum(q0, q1);
    dd_add(result, (q2, 0.0))
}

fn dd_div(a: (f64, f64), b: (f64, f64)) -> (f64, f64) {
    let neg_b = (-b.0, -b.1);
    let q0 = a.0 / b.0;
    let mut r = dd_add(a, dd_mul((q0, 0.0), neg_b));
    let q1 = r.0 / b.0;
    r = dd_add(r, dd_mul((q1, 0.0), neg_b));
    let q2 = r.0 / b.0;
    let result = fast_two_sum(q0, q1);
    dd_add(result, (q2, 0.0))
}

impl DoubleDouble {
    /// Construct a double-double whose (unevaluated) value is `a + b`.
    pub fn new(a: f64, b: f64) -> Self {
        let (hi, lo) = two_sum(a, b);
        Self { hi, lo }
    }

    pub fn hi(self) -> f64 {
        self.hi
    }

    pub fn lo(self) -> f64 {
        self.lo
    }

    /// Lossy cast back to a single `f64`.
    pub fn to_f64(self) -> f64 {
        self.hi + self.lo
    }

    pub fn abs(self) -> Self {
        if self < Self::from(0.0) {
            -self
        } else {
            self
        }
    }

    /// Integer part of the value, itself a `DoubleDouble`.
    pub fn trunc(self) -> Self {
        let a = self.hi.trunc();
        let remainder = (self.hi - a) + self.lo;
        Self::new(a, remainder.trunc())
    }

    pub fn fract(self) -> Self {
        self - self.trunc()
    }
}

impl From<f64> for DoubleDouble {
    fn from(value: f64) -> Self {
        Self { hi: value, lo: 0.0 }
    }
}

impl From<(f64, f64)> for DoubleDouble {
    fn from((a, b): (f64, f64)) -> Self {
        Self::new(a, b)
    }
}

impl From<DoubleDouble> for f64 {
    fn from(value: DoubleDouble) -> Self {
        value.to_f64()
    }
}

impl Neg for DoubleDouble {
    type Output = Self;
    fn neg(self) -> Self {
        Self {
            hi: -self.hi,
            lo: -self.lo,
        }
    }
}

impl AddAssign<f64> for DoubleDouble {
    fn add_assign(&mut self, rhs: f64) {
        (self.hi, self.lo) = dd_add_f64((self.hi, self.lo), rhs);
    }
}

impl AddAssign<DoubleDouble> for DoubleDouble {
    fn add_assign(&mut self, rhs: DoubleDouble) {
        (self.hi, self.lo) = dd_add((self.hi, self.lo), (rhs.hi, rhs.lo));
    }
}

impl SubAssign<f64> for DoubleDouble {
    fn sub_assign(&mut self, rhs: f64) {
        *self += -rhs;
    }
}

impl SubAssign<DoubleDouble> for DoubleDouble {
    fn sub_assign(&mut self, rhs: DoubleDouble) {
        *self += -rhs;
    }
}

impl MulAssign<f64> for DoubleDouble {
    fn mul_assign(&mut self, rhs: f64) {
        (self.hi, self.lo) = dd_mul_f64((self.hi, self.lo), rhs);
    }
}

impl MulAssign<DoubleDouble> for DoubleDouble {
    fn mul_assign(&mut self, rhs: DoubleDouble) {
        (self.hi, self.lo) = dd_mul((self.hi, self.lo), (rhs.hi, rhs.lo));
    }
}

impl DivAssign<f64> for DoubleDouble {
    fn div_assign(&mut self, rhs: f64) {
        (self.hi, self.lo) = dd_div_f64((self.hi, self.lo), rhs);
    }
}

impl DivAssign<DoubleDouble> for DoubleDouble {
    fn div_assign(&mut self, rhs: DoubleDouble) {
        (self.hi, self.lo) = dd_div((self.hi, self.lo), (rhs.hi, rhs.lo));
    }
}

macro_rules! impl_binop {
    ($trait:ident, $method:ident, $op:tt) => {
        impl $trait<f64> for DoubleDouble {
            type Output = DoubleDouble;
            fn $method(self, rhs: f64) -> DoubleDouble {
                let mut result = self;
                result $op rhs;
                result
            }
        }
        impl $trait<DoubleDouble> for f64 {
            type Output = DoubleDouble;
            fn $method(self, rhs: DoubleDouble) -> DoubleDouble {
                let mut result = DoubleDouble::from(self);
                result $op rhs;
                result
            }
        }
        impl $trait<DoubleDouble> for DoubleDouble {
            type Output = DoubleDouble;
            fn $method(self, rhs: DoubleDouble) -> DoubleDouble {
                let mut result = self;
                result $op rhs;
                result
            }
        }
    };
}

impl_binop!(Add, add, +=);
impl_binop!(Sub, sub, -=);
impl_binop!(Mul, mul, *=);
impl_binop!(Div, div, /=);

impl PartialEq for DoubleDouble {
    fn eq(&self, other: &Self) -> bool {
        self.hi == other.hi && self.lo == other.lo
    }
}

impl PartialOrd for DoubleDouble {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        // Valid only under the non-overlapping-expansion invariant, which
        // every operation above restores via a final FastTwoSum/TwoSum.
        Some(
            self.hi
                .partial_cmp(&other.hi)?
                .then(self.lo.partial_cmp(&other.lo)?),
        )
    }
}

impl fmt::Display for DoubleDouble {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const MAX_DECIMAL_DIGITS: u32 = 14;

        let integer = self.trunc().to_f64() as i64;
        write!(f, "{integer}.")?;

        let fractional = (*self - integer as f64).abs();
        let mut multiplier = 10i64.pow(MAX_DECIMAL_DIGITS);
        let mut current = (fractional.to_f64() * multiplier as f64 + 0.5) as i64;

        for _ in 0..MAX_DECIMAL_DIGITS {
            multiplier /= 10;
            let digit = current / multiplier;
            write!(f, "{digit}")?;
            current %= multiplier;
            if current == 0 {
                break;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn round_trip_sum_is_exact() {
        let a = DoubleDouble::from(1.0);
        let b = DoubleDouble::from(1e-20);
        let sum = a + b;
        assert!(sum.to_f64() == 1.0); // swallowed at f64 precision
        assert!(sum.hi() == 1.0);
        assert!(sum.lo() > 0.0); // but retained in the low limb
    }

    #[test]
    fn division_is_approximate_inverse_of_multiplication() {
        let a = DoubleDouble::new(2_451_545.0, 0.123_456_789);
        let b = DoubleDouble::from(86_400.0);
        let round_trip = (a * b) / b;
        assert_relative_eq!(round_trip.to_f64(), a.to_f64(), epsilon = 1e-9);
    }

    #[test]
    fn ordering_is_lexicographic_on_hi_then_lo() {
        let a = DoubleDouble::new(1.0, -1e-20);
        let b = DoubleDouble::new(1.0, 1e-20);
        assert!(a < b);
    }

    #[test]
    fn trunc_drops_fractional_part() {
        let x = DoubleDouble::new(10.0, 0.75);
        assert_eq!(x.trunc().to_f64(), 10.0);
    }

    #[test]
    fn display_matches_fixed_point_expectation() {
        let x = DoubleDouble::from(1.5);
        assert_eq!(format!("{x}"), "1.5");
    }
}
