// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! `Time = (scale, JD-as-DoubleDouble)`, and the scale conversions that are
//! all routed through TAI (spec.md §3, §4.5).

use std::ops::{Add, AddAssign, Sub, SubAssign};

use crate::constants::{ERFA_DJM0, ERFA_TTMTAI};
use crate::double_double::DoubleDouble;
use crate::earth::{
    get_earth_polar_motion_in_utc_scale, get_tai_minus_utc_seconds_in_tai_scale, get_tai_minus_utc_seconds_in_utc_scale,
    get_ut1_minus_utc_seconds_in_utc_scale,
};
use crate::numeric::Vec2;
use crate::time::difference::TimeDifference;
use crate::time::format::TimeFormat;
use crate::time::scale::TimeScale;

const SECONDS_PER_DAY: f64 = 86_400.0;

/// A time instant: a Julian Date in a specific [`TimeScale`].
///
/// Constructed from any [`TimeFormat`] via [`Time::from_format`]; immutable
/// afterwards except for `+= TimeDifference`, which shifts the underlying
/// Julian Date without changing scale (spec.md §3).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Time {
    scale: TimeScale,
    jd: DoubleDouble,
}

impl Time {
    pub fn new(scale: TimeScale, jd: DoubleDouble) -> Self {
        Self { scale, jd }
    }

    /// Construct a `Time` in the given scale from any [`TimeFormat`].
    pub fn from_format(scale: TimeScale, format: &impl TimeFormat) -> Self {
        Self { scale, jd: format.to_jd() }
    }

    pub fn scale(self) -> TimeScale {
        self.scale
    }

    pub fn jd(self) -> DoubleDouble {
        self.jd
    }

    /// The Julian Date split as `(hi, lo)`, the representation every
    /// free-function Earth-rotation routine in this crate (`era2000`,
    /// `cip_xy`, ...) expects as its two-part JD argument pair.
    pub fn jd_pair(self) -> (f64, f64) {
        (self.jd.hi(), self.jd.lo())
    }

    pub fn mjd(self) -> DoubleDouble {
        self.jd - DoubleDouble::from(ERFA_DJM0)
    }

    /// Convert to another time scale, routing through TAI (spec.md §4.5).
    /// A same-scale request is a cheap identity clone.
    pub fn to_scale(self, target: TimeScale) -> Time {
        if self.scale == target {
            return self;
        }
        let tai_jd = self.to_tai_jd();
        Time { scale: target, jd: from_tai_jd(tai_jd, target) }
    }

    fn to_tai_jd(self) -> DoubleDouble {
        match self.scale {
            TimeScale::Tai => self.jd,
            TimeScale::Tt => self.jd - DoubleDouble::from(ERFA_TTMTAI / SECONDS_PER_DAY),
            TimeScale::Utc => {
                let mjd_utc = (self.jd - DoubleDouble::from(ERFA_DJM0)).to_f64();
                let offset = get_tai_minus_utc_seconds_in_utc_scale(mjd_utc);
                self.jd + DoubleDouble::from(offset / SECONDS_PER_DAY)
            }
            TimeScale::Ut1 => {
                // Three-step fixed point (spec.md §4.5): a single step
                // misclassifies the leap-second day, since UT1-UTC is
                // looked up at an estimated UTC that hasn't converged yet.
                let mut utc_jd = self.jd;
                for _ in 0..2 {
                    let mjd_utc_guess = (utc_jd - DoubleDouble::from(ERFA_DJM0)).to_f64();
                    let delta = get_ut1_minus_utc_seconds_in_utc_scale(mjd_utc_guess);
                    utc_jd = self.jd - DoubleDouble::from(delta / SECONDS_PER_DAY);
                }
                let mjd_utc = (utc_jd - DoubleDouble::from(ERFA_DJM0)).to_f64();
                let delta = get_ut1_minus_utc_seconds_in_utc_scale(mjd_utc);
                utc_jd = self.jd - DoubleDouble::from(delta / SECONDS_PER_DAY);

                let mjd_utc_final = (utc_jd - DoubleDouble::from(ERFA_DJM0)).to_f64();
                let offset = get_tai_minus_utc_seconds_in_utc_scale(mjd_utc_final);
                utc_jd + DoubleDouble::from(offset / SECONDS_PER_DAY)
            }
        }
    }

    /// Polar motion `(xp, yp)` radians for this instant, looked up in UTC
    /// MJD regardless of this `Time`'s own scale (spec.md §4.9 "Edge/
    /// numerical notes").
    pub fn polar_motion(self) -> Vec2 {
        let utc = self.to_scale(TimeScale::Utc);
        get_earth_polar_motion_in_utc_scale(utc.mjd().to_f64())
    }
}

fn from_tai_jd(tai_jd: DoubleDouble, target: TimeScale) -> DoubleDouble {
    match target {
        TimeScale::Tai => tai_jd,
        TimeScale::Tt => tai_jd + DoubleDouble::from(ERFA_TTMTAI / SECONDS_PER_DAY),
        TimeScale::Utc => {
            let mjd_tai = (tai_jd - DoubleDouble::from(ERFA_DJM0)).to_f64();
            let offset = get_tai_minus_utc_seconds_in_tai_scale(mjd_tai);
            tai_jd - DoubleDouble::from(offset / SECONDS_PER_DAY)
        }
        TimeScale::Ut1 => {
            let mjd_tai = (tai_jd - DoubleDouble::from(ERFA_DJM0)).to_f64();
            let tai_minus_utc = get_tai_minus_utc_seconds_in_tai_scale(mjd_tai);
            let utc_jd = tai_jd - DoubleDouble::from(tai_minus_utc / SECONDS_PER_DAY);
            let mjd_utc = (utc_jd - DoubleDouble::from(ERFA_DJM0)).to_f64();
            let ut1_minus_utc = get_ut1_minus_utc_seconds_in_utc_scale(mjd_utc);
            tai_jd + DoubleDouble::from((ut1_minus_utc - tai_minus_utc) / SECONDS_PER_DAY)
        }
    }
}

impl Add<TimeDifference> for Time {
    type Output = Time;
    fn add(self, rhs: TimeDifference) -> Time {
        Time { scale: self.scale, jd: self.jd + rhs.as_double_double() }
    }
}

impl AddAssign<TimeDifference> for Time {
    fn add_assign(&mut self, rhs: TimeDifference) {
        self.jd += rhs.as_double_double();
    }
}

impl Sub<TimeDifference> for Time {
    type Output = Time;
    fn sub(self, rhs: TimeDifference) -> Time {
        Time { scale: self.scale, jd: self.jd - rhs.as_double_double() }
    }
}

impl SubAssign<TimeDifference> for Time {
    fn sub_assign(&mut self, rhs: TimeDifference) {
        self.jd -= rhs.as_double_double();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::format::JulianDate;
    use approx::assert_relative_eq;

    #[test]
    fn same_scale_conversion_is_identity() {
        let t = Time::from_format(TimeScale::Tai, &JulianDate::new(2451545.0, 0.25));
        let t2 = t.to_scale(TimeScale::Tai);
        assert_eq!(t, t2);
    }

    #[test]
    fn tt_tai_offset_is_exact() {
        let tai = Time::from_format(TimeScale::Tai, &JulianDate::new(2451545.0, 0.0));
        let tt = tai.to_scale(TimeScale::Tt);
        assert_relative_eq!((tt.jd() - tai.jd()).to_f64() * 86_400.0, 32.184, epsilon = 1e-9);
    }

    #[test]
    fn round_trip_through_utc_and_back_to_tai_is_lossless() {
        let tai = Time::from_format(TimeScale::Tai, &JulianDate::new(2451545.0, 0.314159));
        let round_tripped = tai.to_scale(TimeScale::Utc).to_scale(TimeScale::Tai);
        assert_relative_eq!(tai.jd().to_f64(), round_tripped.jd().to_f64(), epsilon = 1e-12);
    }

    #[test]
    fn time_difference_shifts_jd_without_changing_scale() {
        let t = Time::from_format(TimeScale::Utc, &JulianDate::new(2451545.0, 0.0));
        let shifted = t + TimeDifference::from_days(1.5);
        assert_eq!(shifted.scale(), TimeScale::Utc);
        assert_relative_eq!(shifted.jd().to_f64(), 2451546.5, epsilon = 1e-9);
    }
}
