// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Earth rotation angle, sidereal time and the TIO locator.
//!
//! Grounded on the teacher crate's `earth::earth_rotation_angle_00` and
//! `time::{gst06a, gst06, gmst06}` (`eraEra00`/`eraGst06a`/`eraGst06`/
//! `eraGmst06`); `gmst82` is added in the same idiom for the TEME↔PEF leg
//! (spec.md §4.9), which the IAU-2006 teacher crate never needed.

use crate::constants::*;
use crate::misc::norm_angle;

/// Earth rotation angle (IAU 2000 model), radians in `[0, 2pi)`. (`eraEra00`)
///
/// `dj1`, `dj2` together form UT1 as a two-part Julian Date; the split
/// matters because the algorithm isolates the fractional day to avoid
/// catastrophic cancellation on modern dates (spec.md §4.8).
pub fn era2000(dj1: f64, dj2: f64) -> f64 {
    let (d1, d2) = if dj1 < dj2 { (dj1, dj2) } else { (dj2, dj1) };
    let t = d1 + (d2 - ERFA_DJ00);
    let f = d1 % 1.0 + d2 % 1.0;
    norm_angle(ERFA_D2PI * (f + 0.779_057_273_264_0 + 0.002_737_811_911_354_48 * t))
}

/// TIO locator s′ (radians), the tiny longitude correction between the ITRF
/// meridian and the TIO, driven by polar motion drift. (spec.md §4.8)
pub fn s_prime(jd_tt1: f64, jd_tt2: f64) -> f64 {
    let t = ((jd_tt1 - ERFA_DJ00) + jd_tt2) / ERFA_DJC;
    -47.0e-6 * t * ERFA_DAS2R
}

/// Greenwich mean sidereal time, IAU 1982 model, as used by the SGP4/TEME
/// transform chain (spec.md §4.9's `TEME->PEF = ROT3(gmst82(ut1))`).
///
/// Reference: Vallado, "Fundamentals of Astrodynamics and Applications",
/// Eq. 3-45.
pub fn gmst82(jd_ut1_1: f64, jd_ut1_2: f64) -> f64 {
    let tu = (jd_ut1_1 - ERFA_DJ00) + jd_ut1_2;
    let t = tu / ERFA_DJC;

    #[rustfmt::skip]
    let gmst_seconds = 24_110.548_41
        + 8_640_184.812_866 * t
        + 0.093_104 * t * t
        - 6.2e-6 * t * t * t;

    let frac_day = jd_ut1_1.rem_euclid(1.0) + jd_ut1_2.rem_euclid(1.0);
    let turns = gmst_seconds / ERFA_DAYSEC + frac_day * 1.002_737_909_350_795;
    norm_angle(turns * ERFA_D2PI)
}

/// Greenwich mean sidereal time (consistent with IAU 2006 precession). (`eraGmst06`)
pub fn gmst06(uta: f64, utb: f64, tta: f64, ttb: f64) -> f64 {
    let t = ((tta - ERFA_DJ00) + ttb) / ERFA_DJC;

    #[rustfmt::skip]
    let gmst = norm_angle(era2000(uta, utb) +
                  (    0.014506     +
                  (  4612.156534    +
                  (     1.3915817   +
                  (    -0.00000044  +
                  (    -0.000029956 +
                  (    -0.0000000368 )
          * t) * t) * t) * t) * t) * ERFA_DAS2R);

    gmst
}

/// Greenwich apparent sidereal time given the NPB matrix. (`eraGst06`)
pub fn gst06(uta: f64, utb: f64, tta: f64, ttb: f64, rnpb: crate::numeric::Mat3) -> f64 {
    let (x, y) = super::precession_nutation::bpn_to_xy(rnpb);
    let s = super::cip::cio_locator_s(tta, ttb, x, y);
    let era = era2000(uta, utb);
    let eo = super::precession_nutation::eors(rnpb, s);
    norm_angle(era - eo)
}

/// Greenwich apparent sidereal time (IAU 2006/2000A). (`eraGst06a`)
pub fn gst06a(uta: f64, utb: f64, tta: f64, ttb: f64) -> f64 {
    let rnpb = super::precession_nutation::pn_matrix_06a(tta, ttb);
    gst06(uta, utb, tta, ttb, rnpb)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn era2000_is_in_range() {
        let e = era2000(2451545.0, 0.5);
        assert!((0.0..ERFA_D2PI).contains(&e));
    }

    #[test]
    fn gmst82_matches_gmst06_within_a_few_arcseconds_near_j2000() {
        let gmst_82 = gmst82(2451545.0, 0.0);
        let gmst_06 = gmst06(2451545.0, 0.0, 2451545.0, 0.000742);
        // The two models differ by the IAU1982 vs IAU2006 precession rate;
        // near J2000 they should agree to within a few arcseconds.
        assert_relative_eq!(gmst_82, gmst_06, epsilon = 5.0 * ERFA_DAS2R);
    }
}
