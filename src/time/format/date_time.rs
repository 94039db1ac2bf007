// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Proleptic Gregorian calendar date and time, converted to and from a
//! Julian Date via the Meeus Chapter 7 algorithm (spec.md §4.6).

use chrono::{Datelike, NaiveDate};

use crate::double_double::DoubleDouble;
use crate::time::format::TimeFormat;

const SECONDS_PER_DAY: f64 = 86_400.0;
const MICROS_PER_SECOND: f64 = 1_000_000.0;

/// A calendar date and time of day, resolved to the microsecond.
///
/// `microsecond` is always in `0..1_000_000`; `from_jd` carries a rounded
/// `1_000_000` into the next second (and, rarely, the next day) rather than
/// ever returning it as-is (spec.md §4.6 "Microsecond rounding is
/// round-half-to-even, with a 1-second carry when 10^6 µs rounds up").
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DateTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
    pub microsecond: u32,
}

impl DateTime {
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32, microsecond: u32) -> Self {
        Self { year, month, day, hour, minute, second, microsecond }
    }
}

impl TimeFormat for DateTime {
    /// Meeus Ch. 7: the calendar date maps to a Julian Day Number at noon;
    /// the time of day is carried separately (in a [`DoubleDouble`]) so that
    /// the sub-second part never loses precision to the large JD magnitude.
    fn to_jd(&self) -> DoubleDouble {
        let (y, m) = if self.month <= 2 { (self.year - 1, self.month + 12) } else { (self.year, self.month) };

        let a = (y as f64 / 100.0).floor();
        let b = if is_gregorian(self.year, self.month, self.day) { 2.0 - a + (a / 4.0).floor() } else { 0.0 };

        let jd_at_midnight = (365.25 * (y as f64 + 4716.0)).floor()
            + (30.6001 * (m as f64 + 1.0)).floor()
            + self.day as f64
            + b
            - 1524.5;

        let seconds_of_day = self.hour as f64 * 3600.0
            + self.minute as f64 * 60.0
            + self.second as f64
            + self.microsecond as f64 / MICROS_PER_SECOND;

        DoubleDouble::from(jd_at_midnight) + DoubleDouble::from(seconds_of_day) / DoubleDouble::from(SECONDS_PER_DAY)
    }

    /// The Meeus Ch. 7 inversion (Z/F/A/B/C/D/E), with the time-of-day
    /// extracted in double-double arithmetic and rounded to the nearest
    /// microsecond, round-half-to-even.
    fn from_jd(jd: DoubleDouble) -> Self {
        let shifted = jd + DoubleDouble::from(0.5);
        let z = shifted.trunc();
        let f = shifted.fract();

        let a = if z.to_f64() < 2_299_161.0 {
            z
        } else {
            let alpha = ((z.to_f64() - 1_867_216.25) / 36_524.25).floor();
            z + DoubleDouble::from(1.0 + alpha - (alpha / 4.0).floor())
        };

        let b = a + DoubleDouble::from(1524.0);
        let c = ((b.to_f64() - 122.1) / 365.25).floor();
        let d = (365.25 * c).floor();
        let e = ((b.to_f64() - d) / 30.6001).floor();

        let day_with_fraction = b - DoubleDouble::from(d) - DoubleDouble::from((30.6001 * e).floor()) + f;

        let month = if e < 14.0 { e - 1.0 } else { e - 13.0 };
        let year = if month > 2.0 { c - 4716.0 } else { c - 4715.0 };

        let day = day_with_fraction.trunc().to_f64();
        let day_fraction = day_with_fraction.fract();

        let total_micros = (day_fraction * DoubleDouble::from(SECONDS_PER_DAY * MICROS_PER_SECOND)).to_f64();
        let mut micros_rounded = round_half_to_even(total_micros) as i64;

        let mut carry_days = 0i64;
        if micros_rounded >= (SECONDS_PER_DAY * MICROS_PER_SECOND) as i64 {
            micros_rounded -= (SECONDS_PER_DAY * MICROS_PER_SECOND) as i64;
            carry_days = 1;
        }

        let microsecond = (micros_rounded % 1_000_000) as u32;
        let total_seconds = micros_rounded / 1_000_000;
        let second = (total_seconds % 60) as u32;
        let minute = ((total_seconds / 60) % 60) as u32;
        let hour = (total_seconds / 3600) as u32;

        let (year, month, day) = if carry_days > 0 {
            let date = NaiveDate::from_ymd_opt(year as i32, month as u32, day as u32)
                .expect("Meeus inversion always yields a valid calendar date")
                .succ_opt()
                .expect("carrying past the proleptic Gregorian range is not a realistic input");
            (date.year(), date.month(), date.day())
        } else {
            (year as i32, month as u32, day as u32)
        };

        DateTime { year, month, day, hour, minute, second, microsecond }
    }
}

/// Round-half-to-even ("banker's rounding"), matching IEEE 754's default
/// rounding so repeated conversions don't drift.
fn round_half_to_even(x: f64) -> f64 {
    let floor = x.floor();
    let diff = x - floor;
    if diff < 0.5 {
        floor
    } else if diff > 0.5 {
        floor + 1.0
    } else if (floor as i64) % 2 == 0 {
        floor
    } else {
        floor + 1.0
    }
}

/// The Gregorian reform took effect 1582-10-15; dates before that are
/// treated as Julian calendar dates per Meeus Ch. 7.
fn is_gregorian(year: i32, month: u32, day: u32) -> bool {
    (year, month, day) >= (1582, 10, 15)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn j2000_epoch() {
        let dt = DateTime::new(2000, 1, 1, 12, 0, 0, 0);
        assert_relative_eq!(dt.to_jd().to_f64(), 2_451_545.0, epsilon = 1e-9);
    }

    #[test]
    fn round_trips_through_jd() {
        let dt = DateTime::new(2023, 6, 15, 18, 30, 45, 123_456);
        let jd = dt.to_jd();
        let back = DateTime::from_jd(jd);
        assert_eq!(back, dt);
    }

    #[test]
    fn midnight_boundary_round_trips() {
        let dt = DateTime::new(2023, 12, 31, 23, 59, 59, 999_999);
        let back = DateTime::from_jd(dt.to_jd());
        assert_eq!(back, dt);
    }

    #[test]
    fn meeus_worked_example_1957_10_4_19h() {
        // Meeus Ch. 7, example 7.a.
        let dt = DateTime::new(1957, 10, 4, 19, 26, 24, 0);
        assert_relative_eq!(dt.to_jd().to_f64(), 2_436_116.31, epsilon = 1e-5);
    }
}
