// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! A duration between two instants, carried at [`DoubleDouble`] precision.
//! (spec.md §3 "TimeDifference")

use std::ops::{Add, AddAssign, Neg, Sub};

use crate::constants::ERFA_DAYSEC;
use crate::double_double::DoubleDouble;

/// A signed elapsed time, stored internally as a number of days.
///
/// Unlike [`crate::time::Time`], a `TimeDifference` carries no scale: it is
/// the thing you add to a `Time`'s Julian Date directly (spec.md §3 "operates
/// on `jd` directly; does not change scale").
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimeDifference {
    days: DoubleDouble,
}

impl TimeDifference {
    pub fn from_days(days: f64) -> Self {
        Self { days: DoubleDouble::from(days) }
    }

    pub fn from_seconds(seconds: f64) -> Self {
        Self { days: DoubleDouble::from(seconds) / DoubleDouble::from(ERFA_DAYSEC) }
    }

    pub fn in_days(self) -> f64 {
        self.days.to_f64()
    }

    pub fn in_seconds(self) -> f64 {
        (self.days * ERFA_DAYSEC).to_f64()
    }

    pub(crate) fn as_double_double(self) -> DoubleDouble {
        self.days
    }
}

impl Add for TimeDifference {
    type Output = TimeDifference;
    fn add(self, rhs: TimeDifference) -> TimeDifference {
        TimeDifference { days: self.days + rhs.days }
    }
}

impl Sub for TimeDifference {
    type Output = TimeDifference;
    fn sub(self, rhs: TimeDifference) -> TimeDifference {
        TimeDifference { days: self.days - rhs.days }
    }
}

impl Neg for TimeDifference {
    type Output = TimeDifference;
    fn neg(self) -> TimeDifference {
        TimeDifference { days: -self.days }
    }
}

impl AddAssign for TimeDifference {
    fn add_assign(&mut self, rhs: TimeDifference) {
        self.days += rhs.days;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn seconds_and_days_agree() {
        let a = TimeDifference::from_seconds(86_400.0);
        let b = TimeDifference::from_days(1.0);
        assert_relative_eq!(a.in_days(), b.in_days(), epsilon = 1e-15);
    }

    #[test]
    fn negation_flips_sign() {
        let a = TimeDifference::from_days(2.5);
        assert_relative_eq!((-a).in_days(), -2.5, epsilon = 1e-15);
    }
}
