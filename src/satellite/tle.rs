// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The Two-Line Element fields this crate consumes.
//!
//! This crate does not parse TLE text (spec.md §6 "TLE input (excluded
//! parser)"): a caller hands over an already-populated `Tle`, and every
//! field here is read verbatim as documented by Spacetrack Report #3. Units
//! and angle conventions match the TLE text format itself (degrees,
//! revolutions/day) rather than this crate's radians/meters boundary
//! convention (spec.md §6); [`crate::satellite::sgp4`] converts on init.

use crate::time::{Time, TimeDifference, TimeScale};
use crate::time::format::DateTime;

/// Security classification marking carried by line 1 column 8.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Classification {
    Unclassified,
    Classified,
    Secret,
}

/// A single satellite's orbital elements, as delivered by a TLE.
///
/// Grounded on `dtaralla-tardis/src/tle.rs`'s field layout, generalized to a
/// plain data struct with no parser attached (spec.md §3 "TLE fields").
#[derive(Clone, Debug, PartialEq)]
pub struct Tle {
    pub catalog_number: u32,
    pub classification: Classification,
    pub international_designator: String,

    /// The epoch, resolved to a UTC instant. Construct with
    /// [`Tle::epoch_from_year_and_day`] if you only have the raw two-digit
    /// year and decimal day fields from the TLE text.
    pub epoch: Time,

    /// First derivative of mean motion, in revolutions/day^2.
    pub mean_motion_dot: f64,
    /// Second derivative of mean motion, in revolutions/day^3.
    pub mean_motion_dot_dot: f64,
    /// Drag term, in inverse Earth radii.
    pub b_star: f64,

    pub ephemeris_type: u8,
    pub element_set_number: u32,

    pub inclination_deg: f64,
    pub raan_deg: f64,
    pub eccentricity: f64,
    pub argument_of_perigee_deg: f64,
    pub mean_anomaly_deg: f64,
    /// Mean motion, in revolutions/day.
    pub mean_motion_rev_per_day: f64,
    pub revolution_number_at_epoch: u32,
}

impl Tle {
    /// Resolve a TLE epoch given as `(two_digit_year, decimal_day)` — column
    /// layout of line 1 fields 19-20 and 21-32 — into a UTC [`Time`].
    ///
    /// Years `57..=99` are 1900s, `00..=56` are 2000s (Spacetrack Report #3's
    /// own rollover convention, chosen so element sets from Sputnik-era
    /// catalog numbers still resolve correctly).
    pub fn epoch_from_year_and_day(two_digit_year: u32, decimal_day: f64) -> Time {
        let year = if two_digit_year < 57 { 2000 + two_digit_year as i32 } else { 1900 + two_digit_year as i32 };
        let jan0 = Time::from_format(TimeScale::Utc, &DateTime::new(year, 1, 0, 0, 0, 0, 0));
        jan0 + TimeDifference::from_days(decimal_day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::format::{JulianDate, TimeFormat};
    use approx::assert_relative_eq;

    #[test]
    fn epoch_rollover_matches_spacetrack_convention() {
        let epoch_old = Tle::epoch_from_year_and_day(57, 1.0);
        let epoch_new = Tle::epoch_from_year_and_day(0, 1.0);
        assert!(JulianDate::from_jd(epoch_old.jd()).jd1 < JulianDate::from_jd(epoch_new.jd()).jd1);
    }

    #[test]
    fn decimal_day_one_is_january_first() {
        let epoch = Tle::epoch_from_year_and_day(24, 1.5);
        let dt = DateTime::from_jd(epoch.jd());
        assert_eq!(dt.year, 2024);
        assert_eq!(dt.month, 1);
        assert_eq!(dt.day, 1);
        assert_relative_eq!(dt.hour as f64, 12.0, epsilon = 1.0);
    }
}
