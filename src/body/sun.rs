// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Approximate Sun position, the USNO formula (spec.md §4.13 "Sun").
//!
//! Grounded on `original_source/body/internal/sun.cc`: the same low-
//! precision algorithm (good to roughly 60 arcsec) documented there,
//! treating the result as TETE and rotating to GCRF with this crate's own
//! [`crate::earth::precession_nutation::pn_matrix_06a`] rather than
//! Astropy's equivalent.

use crate::constants::{ERFA_DAU, ERFA_DJ00};
use crate::coordinate::{cartesian, Gcrf};
use crate::earth::precession_nutation::pn_matrix_06a;
use crate::time::format::{JulianDate, TimeFormat};
use crate::time::{Time, TimeScale};

/// Approximate Sun position in GCRF (spec.md §4.13). Accurate to roughly
/// 60 arcsec in right ascension/declination and 11 km in distance over
/// 1800-2200, per the USNO note this is ported from.
pub fn get_approximate_sun_coordinate(time: Time) -> Gcrf {
    let jd_tt = time.to_scale(TimeScale::Tt).jd();
    let jd = JulianDate::from_jd(jd_tt);
    let d = (jd.jd1 - ERFA_DJ00) + jd.jd2;

    let g = (357.529 + 0.98560028 * d).to_radians();
    let q_deg = 280.459 + 0.98564736 * d;

    let l = (q_deg + 1.915 * g.sin() + 0.020 * (2.0 * g).sin()).to_radians();
    let r_au = 1.00014 - 0.01671 * g.cos() - 0.00014 * (2.0 * g).cos();

    let epsilon = (23.439 - 0.00000036 * d).to_radians();

    let right_ascension = (epsilon.cos() * l.sin()).atan2(l.cos());
    let declination = (epsilon.sin() * l.sin()).asin();

    let tete = cartesian::spherical_to_cartesian(right_ascension, declination) * (r_au * ERFA_DAU);

    let rbpn = pn_matrix_06a(jd.jd1, jd.jd2);
    let position = rbpn.transpose() * tete;

    Gcrf { time, position, velocity: None }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::format::JulianDate as Jd;
    use approx::assert_relative_eq;

    #[test]
    fn distance_is_about_one_astronomical_unit() {
        let time = Time::from_format(TimeScale::Tt, &Jd::new(2451545.0, 0.0));
        let sun = get_approximate_sun_coordinate(time);
        let distance_au = sun.position.norm() / ERFA_DAU;
        assert_relative_eq!(distance_au, 1.0, epsilon = 0.02);
    }

    #[test]
    fn position_is_finite() {
        let time = Time::from_format(TimeScale::Tt, &Jd::new(2460000.0, 0.25));
        let sun = get_approximate_sun_coordinate(time);
        assert!(sun.position.x.is_finite());
        assert!(sun.position.y.is_finite());
        assert!(sun.position.z.is_finite());
    }
}
