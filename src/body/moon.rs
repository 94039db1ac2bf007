// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The Moon's position, Meeus 1998 chapter 47 series (spec.md §4.13).
//!
//! No teacher source exists for this (the pack's ERFA-derived crate never
//! ported `eraMoon98`'s term tables); grounded instead on
//! `original_source/body/internal/moon.cc`, which documents the same series
//! and the deliberate Simon 1994 / Meeus 1998 hybrid for the mean longitude
//! `L'` ERFA itself uses.

use crate::constants::ERFA_DJ00;
use crate::coordinate::{cartesian, Gcrf};
use crate::earth::precession_nutation::precession_angles_fw06;
use crate::numeric::Mat3;
use crate::time::format::{JulianDate, TimeFormat};
use crate::time::{Time, TimeScale};

const DAYS_PER_JULIAN_CENTURY: f64 = 36525.0;

fn reduce_degrees(degrees: f64) -> f64 {
    degrees.rem_euclid(360.0)
}

/// Multipliers `(D, M, M', F)` and coefficients for one row of Table 47.A
/// (longitude/distance) or 47.B (latitude).
struct Term {
    d: f64,
    m: f64,
    m_prime: f64,
    f: f64,
    sin_coeff: f64,
    cos_coeff: f64,
}

/// Table 47.A: series corrections to Σl (degrees, pre-divided by 1e6) and Σr
/// (meters). [Meeus1998] page 339.
#[rustfmt::skip]
const TABLE_SIGMA_LR: [Term; 60] = [
    Term { d: 0.0, m: 0.0, m_prime: 1.0, f: 0.0, sin_coeff: 6.288774, cos_coeff: -20905355.0 },
    Term { d: 2.0, m: 0.0, m_prime: -1.0, f: 0.0, sin_coeff: 1.274027, cos_coeff: -3699111.0 },
    Term { d: 2.0, m: 0.0, m_prime: 0.0, f: 0.0, sin_coeff: 0.658314, cos_coeff: -2955968.0 },
    Term { d: 0.0, m: 0.0, m_prime: 2.0, f: 0.0, sin_coeff: 0.213618, cos_coeff: -569925.0 },
    Term { d: 0.0, m: 1.0, m_prime: 0.0, f: 0.0, sin_coeff: -0.185116, cos_coeff: 48888.0 },
    Term { d: 0.0, m: 0.0, m_prime: 0.0, f: 2.0, sin_coeff: -0.114332, cos_coeff: -3149.0 },
    Term { d: 2.0, m: 0.0, m_prime: -2.0, f: 0.0, sin_coeff: 0.058793, cos_coeff: 246158.0 },
    Term { d: 2.0, m: -1.0, m_prime: -1.0, f: 0.0, sin_coeff: 0.057066, cos_coeff: -152138.0 },
    Term { d: 2.0, m: 0.0, m_prime: 1.0, f: 0.0, sin_coeff: 0.053322, cos_coeff: -170733.0 },
    Term { d: 2.0, m: -1.0, m_prime: 0.0, f: 0.0, sin_coeff: 0.045758, cos_coeff: -204586.0 },
    Term { d: 0.0, m: 1.0, m_prime: -1.0, f: 0.0, sin_coeff: -0.040923, cos_coeff: -129620.0 },
    Term { d: 1.0, m: 0.0, m_prime: 0.0, f: 0.0, sin_coeff: -0.034720, cos_coeff: 108743.0 },
    Term { d: 0.0, m: 1.0, m_prime: 1.0, f: 0.0, sin_coeff: -0.030383, cos_coeff: 104755.0 },
    Term { d: 2.0, m: 0.0, m_prime: 0.0, f: -2.0, sin_coeff: 0.015327, cos_coeff: 10321.0 },
    Term { d: 0.0, m: 0.0, m_prime: 1.0, f: 2.0, sin_coeff: -0.012528, cos_coeff: 0.0 },
    Term { d: 0.0, m: 0.0, m_prime: 1.0, f: -2.0, sin_coeff: 0.010980, cos_coeff: 79661.0 },
    Term { d: 4.0, m: 0.0, m_prime: -1.0, f: 0.0, sin_coeff: 0.010675, cos_coeff: -34782.0 },
    Term { d: 0.0, m: 0.0, m_prime: 3.0, f: 0.0, sin_coeff: 0.010034, cos_coeff: -23210.0 },
    Term { d: 4.0, m: 0.0, m_prime: -2.0, f: 0.0, sin_coeff: 0.008548, cos_coeff: -21636.0 },
    Term { d: 2.0, m: 1.0, m_prime: -1.0, f: 0.0, sin_coeff: -0.007888, cos_coeff: 24208.0 },
    Term { d: 2.0, m: 1.0, m_prime: 0.0, f: 0.0, sin_coeff: -0.006766, cos_coeff: 30824.0 },
    Term { d: 1.0, m: 0.0, m_prime: -1.0, f: 0.0, sin_coeff: -0.005163, cos_coeff: -8379.0 },
    Term { d: 1.0, m: 1.0, m_prime: 0.0, f: 0.0, sin_coeff: 0.004987, cos_coeff: -16675.0 },
    Term { d: 2.0, m: -1.0, m_prime: 1.0, f: 0.0, sin_coeff: 0.004036, cos_coeff: -12831.0 },
    Term { d: 2.0, m: 0.0, m_prime: 2.0, f: 0.0, sin_coeff: 0.003994, cos_coeff: -10445.0 },
    Term { d: 4.0, m: 0.0, m_prime: 0.0, f: 0.0, sin_coeff: 0.003861, cos_coeff: -11650.0 },
    Term { d: 2.0, m: 0.0, m_prime: -3.0, f: 0.0, sin_coeff: 0.003665, cos_coeff: 14403.0 },
    Term { d: 0.0, m: 1.0, m_prime: -2.0, f: 0.0, sin_coeff: -0.002689, cos_coeff: -7003.0 },
    Term { d: 2.0, m: 0.0, m_prime: -1.0, f: 2.0, sin_coeff: -0.002602, cos_coeff: 0.0 },
    Term { d: 2.0, m: -1.0, m_prime: -2.0, f: 0.0, sin_coeff: 0.002390, cos_coeff: 10056.0 },
    Term { d: 1.0, m: 0.0, m_prime: 1.0, f: 0.0, sin_coeff: -0.002348, cos_coeff: 6322.0 },
    Term { d: 2.0, m: -2.0, m_prime: 0.0, f: 0.0, sin_coeff: 0.002236, cos_coeff: -9884.0 },
    Term { d: 0.0, m: 1.0, m_prime: 2.0, f: 0.0, sin_coeff: -0.002120, cos_coeff: 5751.0 },
    Term { d: 0.0, m: 2.0, m_prime: 0.0, f: 0.0, sin_coeff: -0.002069, cos_coeff: 0.0 },
    Term { d: 2.0, m: -2.0, m_prime: -1.0, f: 0.0, sin_coeff: 0.002048, cos_coeff: -4950.0 },
    Term { d: 2.0, m: 0.0, m_prime: 1.0, f: -2.0, sin_coeff: -0.001773, cos_coeff: 4130.0 },
    Term { d: 2.0, m: 0.0, m_prime: 0.0, f: 2.0, sin_coeff: -0.001595, cos_coeff: 0.0 },
    Term { d: 4.0, m: -1.0, m_prime: -1.0, f: 0.0, sin_coeff: 0.001215, cos_coeff: -3958.0 },
    Term { d: 0.0, m: 0.0, m_prime: 2.0, f: 2.0, sin_coeff: -0.001110, cos_coeff: 0.0 },
    Term { d: 3.0, m: 0.0, m_prime: -1.0, f: 0.0, sin_coeff: -0.000892, cos_coeff: 3258.0 },
    Term { d: 2.0, m: 1.0, m_prime: 1.0, f: 0.0, sin_coeff: -0.000810, cos_coeff: 2616.0 },
    Term { d: 4.0, m: -1.0, m_prime: -2.0, f: 0.0, sin_coeff: 0.000759, cos_coeff: -1897.0 },
    Term { d: 0.0, m: 2.0, m_prime: -1.0, f: 0.0, sin_coeff: -0.000713, cos_coeff: -2117.0 },
    Term { d: 2.0, m: 2.0, m_prime: -1.0, f: 0.0, sin_coeff: -0.000700, cos_coeff: 2354.0 },
    Term { d: 2.0, m: 1.0, m_prime: -2.0, f: 0.0, sin_coeff: 0.000691, cos_coeff: 0.0 },
    Term { d: 2.0, m: -1.0, m_prime: 0.0, f: -2.0, sin_coeff: 0.000596, cos_coeff: 0.0 },
    Term { d: 4.0, m: 0.0, m_prime: 1.0, f: 0.0, sin_coeff: 0.000549, cos_coeff: -1423.0 },
    Term { d: 0.0, m: 0.0, m_prime: 4.0, f: 0.0, sin_coeff: 0.000537, cos_coeff: -1117.0 },
    Term { d: 4.0, m: -1.0, m_prime: 0.0, f: 0.0, sin_coeff: 0.000520, cos_coeff: -1571.0 },
    Term { d: 1.0, m: 0.0, m_prime: -2.0, f: 0.0, sin_coeff: -0.000487, cos_coeff: -1739.0 },
    Term { d: 2.0, m: 1.0, m_prime: 0.0, f: -2.0, sin_coeff: -0.000399, cos_coeff: 0.0 },
    Term { d: 0.0, m: 0.0, m_prime: 2.0, f: -2.0, sin_coeff: -0.000381, cos_coeff: -4421.0 },
    Term { d: 1.0, m: 1.0, m_prime: 1.0, f: 0.0, sin_coeff: 0.000351, cos_coeff: 0.0 },
    Term { d: 3.0, m: 0.0, m_prime: -2.0, f: 0.0, sin_coeff: -0.000340, cos_coeff: 0.0 },
    Term { d: 4.0, m: 0.0, m_prime: -3.0, f: 0.0, sin_coeff: 0.000330, cos_coeff: 0.0 },
    Term { d: 2.0, m: -1.0, m_prime: 2.0, f: 0.0, sin_coeff: 0.000327, cos_coeff: 0.0 },
    Term { d: 0.0, m: 2.0, m_prime: 1.0, f: 0.0, sin_coeff: -0.000323, cos_coeff: 1165.0 },
    Term { d: 1.0, m: 1.0, m_prime: -1.0, f: 0.0, sin_coeff: 0.000299, cos_coeff: 0.0 },
    Term { d: 2.0, m: 0.0, m_prime: 3.0, f: 0.0, sin_coeff: 0.000294, cos_coeff: 0.0 },
    Term { d: 2.0, m: 0.0, m_prime: -1.0, f: -2.0, sin_coeff: 0.0, cos_coeff: 8752.0 },
];

/// Table 47.B: series corrections to Σb (degrees, pre-divided by 1e6).
/// [Meeus1998] page 341. `cos_coeff` is unused here, reusing [`Term`].
#[rustfmt::skip]
const TABLE_SIGMA_B: [Term; 60] = [
    Term { d: 0.0, m: 0.0, m_prime: 0.0, f: 1.0, sin_coeff: 5.128122, cos_coeff: 0.0 },
    Term { d: 0.0, m: 0.0, m_prime: 1.0, f: 1.0, sin_coeff: 0.280602, cos_coeff: 0.0 },
    Term { d: 0.0, m: 0.0, m_prime: 1.0, f: -1.0, sin_coeff: 0.277693, cos_coeff: 0.0 },
    Term { d: 2.0, m: 0.0, m_prime: 0.0, f: -1.0, sin_coeff: 0.173237, cos_coeff: 0.0 },
    Term { d: 2.0, m: 0.0, m_prime: -1.0, f: 1.0, sin_coeff: 0.055413, cos_coeff: 0.0 },
    Term { d: 2.0, m: 0.0, m_prime: -1.0, f: -1.0, sin_coeff: 0.046271, cos_coeff: 0.0 },
    Term { d: 2.0, m: 0.0, m_prime: 0.0, f: 1.0, sin_coeff: 0.032573, cos_coeff: 0.0 },
    Term { d: 0.0, m: 0.0, m_prime: 2.0, f: 1.0, sin_coeff: 0.017198, cos_coeff: 0.0 },
    Term { d: 2.0, m: 0.0, m_prime: 1.0, f: -1.0, sin_coeff: 0.009266, cos_coeff: 0.0 },
    Term { d: 0.0, m: 0.0, m_prime: 2.0, f: -1.0, sin_coeff: 0.008822, cos_coeff: 0.0 },
    Term { d: 2.0, m: -1.0, m_prime: 0.0, f: -1.0, sin_coeff: 0.008216, cos_coeff: 0.0 },
    Term { d: 2.0, m: 0.0, m_prime: -2.0, f: -1.0, sin_coeff: 0.004324, cos_coeff: 0.0 },
    Term { d: 2.0, m: 0.0, m_prime: 1.0, f: 1.0, sin_coeff: 0.004200, cos_coeff: 0.0 },
    Term { d: 2.0, m: 1.0, m_prime: 0.0, f: -1.0, sin_coeff: -0.003359, cos_coeff: 0.0 },
    Term { d: 2.0, m: -1.0, m_prime: -1.0, f: 1.0, sin_coeff: 0.002463, cos_coeff: 0.0 },
    Term { d: 2.0, m: -1.0, m_prime: 0.0, f: 1.0, sin_coeff: 0.002211, cos_coeff: 0.0 },
    Term { d: 2.0, m: -1.0, m_prime: -1.0, f: -1.0, sin_coeff: 0.002065, cos_coeff: 0.0 },
    Term { d: 0.0, m: 1.0, m_prime: -1.0, f: -1.0, sin_coeff: -0.001870, cos_coeff: 0.0 },
    Term { d: 4.0, m: 0.0, m_prime: -1.0, f: -1.0, sin_coeff: 0.001828, cos_coeff: 0.0 },
    Term { d: 0.0, m: 1.0, m_prime: 0.0, f: 1.0, sin_coeff: -0.001794, cos_coeff: 0.0 },
    Term { d: 0.0, m: 0.0, m_prime: 0.0, f: 3.0, sin_coeff: -0.001749, cos_coeff: 0.0 },
    Term { d: 0.0, m: 1.0, m_prime: -1.0, f: 1.0, sin_coeff: -0.001565, cos_coeff: 0.0 },
    Term { d: 1.0, m: 0.0, m_prime: 0.0, f: 1.0, sin_coeff: -0.001491, cos_coeff: 0.0 },
    Term { d: 0.0, m: 1.0, m_prime: 1.0, f: 1.0, sin_coeff: -0.001475, cos_coeff: 0.0 },
    Term { d: 0.0, m: 1.0, m_prime: 1.0, f: -1.0, sin_coeff: -0.001410, cos_coeff: 0.0 },
    Term { d: 0.0, m: 1.0, m_prime: 0.0, f: -1.0, sin_coeff: -0.001344, cos_coeff: 0.0 },
    Term { d: 1.0, m: 0.0, m_prime: 0.0, f: -1.0, sin_coeff: -0.001335, cos_coeff: 0.0 },
    Term { d: 0.0, m: 0.0, m_prime: 3.0, f: 1.0, sin_coeff: 0.001107, cos_coeff: 0.0 },
    Term { d: 4.0, m: 0.0, m_prime: 0.0, f: -1.0, sin_coeff: 0.001021, cos_coeff: 0.0 },
    Term { d: 4.0, m: 0.0, m_prime: -1.0, f: 1.0, sin_coeff: 0.000833, cos_coeff: 0.0 },
    Term { d: 0.0, m: 0.0, m_prime: 1.0, f: -3.0, sin_coeff: 0.000777, cos_coeff: 0.0 },
    Term { d: 4.0, m: 0.0, m_prime: -2.0, f: 1.0, sin_coeff: 0.000671, cos_coeff: 0.0 },
    Term { d: 2.0, m: 0.0, m_prime: 0.0, f: -3.0, sin_coeff: 0.000607, cos_coeff: 0.0 },
    Term { d: 2.0, m: 0.0, m_prime: 2.0, f: -1.0, sin_coeff: 0.000596, cos_coeff: 0.0 },
    Term { d: 2.0, m: -1.0, m_prime: 1.0, f: -1.0, sin_coeff: 0.000491, cos_coeff: 0.0 },
    Term { d: 2.0, m: 0.0, m_prime: -2.0, f: 1.0, sin_coeff: -0.000451, cos_coeff: 0.0 },
    Term { d: 0.0, m: 0.0, m_prime: 3.0, f: -1.0, sin_coeff: 0.000439, cos_coeff: 0.0 },
    Term { d: 2.0, m: 0.0, m_prime: 2.0, f: 1.0, sin_coeff: 0.000422, cos_coeff: 0.0 },
    Term { d: 2.0, m: 0.0, m_prime: -3.0, f: -1.0, sin_coeff: 0.000421, cos_coeff: 0.0 },
    Term { d: 2.0, m: 1.0, m_prime: -1.0, f: 1.0, sin_coeff: -0.000366, cos_coeff: 0.0 },
    Term { d: 2.0, m: 1.0, m_prime: 0.0, f: 1.0, sin_coeff: -0.000351, cos_coeff: 0.0 },
    Term { d: 4.0, m: 0.0, m_prime: 0.0, f: 1.0, sin_coeff: 0.000331, cos_coeff: 0.0 },
    Term { d: 2.0, m: -1.0, m_prime: 1.0, f: 1.0, sin_coeff: 0.000315, cos_coeff: 0.0 },
    Term { d: 2.0, m: -2.0, m_prime: 0.0, f: -1.0, sin_coeff: 0.000302, cos_coeff: 0.0 },
    Term { d: 0.0, m: 0.0, m_prime: 1.0, f: 3.0, sin_coeff: -0.000283, cos_coeff: 0.0 },
    Term { d: 2.0, m: 1.0, m_prime: 1.0, f: -1.0, sin_coeff: -0.000229, cos_coeff: 0.0 },
    Term { d: 1.0, m: 1.0, m_prime: 0.0, f: -1.0, sin_coeff: 0.000223, cos_coeff: 0.0 },
    Term { d: 1.0, m: 1.0, m_prime: 0.0, f: 1.0, sin_coeff: 0.000223, cos_coeff: 0.0 },
    Term { d: 0.0, m: 1.0, m_prime: -2.0, f: -1.0, sin_coeff: -0.000220, cos_coeff: 0.0 },
    Term { d: 2.0, m: 1.0, m_prime: -1.0, f: -1.0, sin_coeff: -0.000220, cos_coeff: 0.0 },
    Term { d: 1.0, m: 0.0, m_prime: 1.0, f: 1.0, sin_coeff: -0.000185, cos_coeff: 0.0 },
    Term { d: 2.0, m: -1.0, m_prime: -2.0, f: -1.0, sin_coeff: 0.000181, cos_coeff: 0.0 },
    Term { d: 0.0, m: 1.0, m_prime: 2.0, f: 1.0, sin_coeff: -0.000177, cos_coeff: 0.0 },
    Term { d: 4.0, m: 0.0, m_prime: -2.0, f: -1.0, sin_coeff: 0.000176, cos_coeff: 0.0 },
    Term { d: 4.0, m: -1.0, m_prime: -1.0, f: -1.0, sin_coeff: 0.000166, cos_coeff: 0.0 },
    Term { d: 1.0, m: 0.0, m_prime: 1.0, f: -1.0, sin_coeff: -0.000164, cos_coeff: 0.0 },
    Term { d: 4.0, m: 0.0, m_prime: 1.0, f: -1.0, sin_coeff: 0.000132, cos_coeff: 0.0 },
    Term { d: 1.0, m: 0.0, m_prime: -1.0, f: -1.0, sin_coeff: -0.000119, cos_coeff: 0.0 },
    Term { d: 4.0, m: -1.0, m_prime: 0.0, f: -1.0, sin_coeff: 0.000115, cos_coeff: 0.0 },
    Term { d: 2.0, m: -2.0, m_prime: 0.0, f: 1.0, sin_coeff: 0.000107, cos_coeff: 0.0 },
];

/// Geocentric position of the Moon, mean ecliptic of date (spec.md §4.13
/// "Moon").
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MeeusMoonCoordinate {
    /// Ecliptic longitude, radians.
    pub lambda: f64,
    /// Ecliptic latitude, radians.
    pub beta: f64,
    /// Distance from Earth's center, meters.
    pub delta: f64,
}

/// Eccentricity correction applied to terms whose argument carries `M` or
/// `2M` (Meeus ch.47 page 338): the Earth orbit's eccentricity is itself
/// slowly decreasing, so these terms need a first-order correction.
fn eccentricity_correction(m: f64, e: f64, e2: f64) -> f64 {
    if m == 1.0 || m == -1.0 {
        e
    } else if m == 2.0 || m == -2.0 {
        e2
    } else {
        1.0
    }
}

/// Moon position via the Meeus chapter 47 series, in mean ecliptic
/// coordinates of date (spec.md §4.13).
///
/// The leading coefficient of `L'` (218.31665436) comes from Simon 1994
/// rather than the 218.3164477 in Meeus's own text; this is deliberate and
/// matches ERFA's `eraMoon98`, which blends the two sources the same way.
pub fn get_meeus_moon_coordinate(time: Time) -> MeeusMoonCoordinate {
    let jd_tt = time.to_scale(TimeScale::Tt).jd();
    let jd = JulianDate::from_jd(jd_tt);
    let t = ((jd.jd1 - ERFA_DJ00) + jd.jd2) / DAYS_PER_JULIAN_CENTURY;

    let l_prime = reduce_degrees(
        218.31665436 + t * (481267.88123421 + t * (-0.0015786 + t * (1.0 / 538841.0 + t * (-1.0 / 65194000.0)))),
    )
    .to_radians();
    let d = reduce_degrees(297.8501921 + t * (445267.1114034 + t * (-0.0018819 + t * (1.0 / 545868.0 + t * (-1.0 / 113065000.0)))))
        .to_radians();
    let m = reduce_degrees(357.5291092 + t * (35999.0502909 + t * (-0.0001536 + t * (1.0 / 24490000.0)))).to_radians();
    let m_prime = reduce_degrees(
        134.9633964 + t * (477198.8675055 + t * (0.0087414 + t * (1.0 / 69699.0 + t * (-1.0 / 14712000.0)))),
    )
    .to_radians();
    let f = reduce_degrees(93.2720950 + t * (483202.0175233 + t * (-0.0036539 + t * (1.0 / 3526000.0 + t * (1.0 / 863310000.0)))))
        .to_radians();

    let a1 = (119.75 + 131.849 * t).to_radians();
    let a2 = (53.09 + 479264.290 * t).to_radians();
    let a3 = (313.45 + 481266.484 * t).to_radians();

    let e = 1.0 + t * (-0.002516 + t * -0.0000074);
    let e2 = e * e;

    let add_sigma_l = 0.003958 * a1.sin() + 0.001962 * (l_prime - f).sin() + 0.000318 * a2.sin();
    let add_sigma_b = -0.002235 * l_prime.sin() + 0.000382 * a3.sin() + 0.000175 * (a1 - f).sin()
        + 0.000175 * (a1 + f).sin()
        + 0.000127 * (l_prime - m_prime).sin()
        - 0.000115 * (l_prime + m_prime).sin();

    let mut sigma_l = add_sigma_l;
    let mut sigma_r = 0.0_f64;
    for term in TABLE_SIGMA_LR.iter() {
        let argument = term.d * d + term.m * m + term.m_prime * m_prime + term.f * f;
        let correction = eccentricity_correction(term.m, e, e2);
        sigma_l += term.sin_coeff * correction * argument.sin();
        sigma_r += term.cos_coeff * correction * argument.cos();
    }

    let mut sigma_b = add_sigma_b;
    for term in TABLE_SIGMA_B.iter() {
        let argument = term.d * d + term.m * m + term.m_prime * m_prime + term.f * f;
        let correction = eccentricity_correction(term.m, e, e2);
        sigma_b += term.sin_coeff * correction * argument.sin();
    }

    let lambda = l_prime + sigma_l.to_radians();
    let beta = sigma_b.to_radians();
    let delta = 385_000_560.0 + sigma_r;

    MeeusMoonCoordinate { lambda, beta, delta }
}

/// Moon position in GCRF, rotated out of the mean-ecliptic-of-date frame via
/// the Fukushima-Williams angles (Vallado eq. 3-74).
pub fn get_moon_coordinate(time: Time) -> Gcrf {
    let meeus = get_meeus_moon_coordinate(time);
    let r = cartesian::spherical_to_cartesian(meeus.lambda, meeus.beta) * meeus.delta;

    let jd_tt = time.to_scale(TimeScale::Tt).jd();
    let jd = JulianDate::from_jd(jd_tt);
    let (gamma, phi, psi, _epsa) = precession_angles_fw06(jd.jd1, jd.jd2);

    let mean_ecliptic_to_gcrs = Mat3::rot3(-gamma) * Mat3::rot1(-phi) * Mat3::rot3(psi);
    let r_gcrf = mean_ecliptic_to_gcrs * r;

    Gcrf { time, position: r_gcrf, velocity: None }
}

/// Sun-Moon-Earth phase angle, radians in `[0, pi]` (spec.md §4.13a, Meeus
/// ch.48 eq. 48.2): 0 at new moon, pi at full moon.
pub fn phase_angle(time: Time) -> f64 {
    let sun = super::sun::get_approximate_sun_coordinate(time);
    let moon = get_moon_coordinate(time);

    let earth_to_sun = sun.position;
    let earth_to_moon = moon.position;

    let cos_elongation = earth_to_moon.dot(earth_to_sun) / (earth_to_moon.norm() * earth_to_sun.norm());
    let elongation = cos_elongation.clamp(-1.0, 1.0).acos();

    // Meeus 48.3: tan(i) = R sin(elongation) / (Delta - R cos(elongation))
    let r = earth_to_sun.norm();
    let delta = earth_to_moon.norm();
    (r * elongation.sin()).atan2(delta - r * elongation.cos())
}

/// Fraction of the Moon's disk illuminated, `[0, 1]` (spec.md §4.13a, Meeus
/// ch.48 eq. 48.1).
pub fn illuminated_fraction(time: Time) -> f64 {
    (1.0 + phase_angle(time).cos()) / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::format::JulianDate as Jd;
    use crate::time::TimeScale;
    use approx::assert_relative_eq;

    #[test]
    fn meeus_worked_example_1992_04_12() {
        // [Meeus1998] page 342, worked example, epoch split the way ERFA's
        // own `t2000` test fixture does it. The reference longitude is
        // quoted as an angle equivalent to 133.172479872 degrees mod 360.
        let time = Time::from_format(TimeScale::Tt, &Jd::new(2448725.0, -0.49932657407));
        let meeus = get_meeus_moon_coordinate(time);
        let lambda_deg = reduce_degrees(meeus.lambda.to_degrees());
        assert_relative_eq!(lambda_deg, reduce_degrees(133.172479872), epsilon = 1e-6);
        assert_relative_eq!(meeus.beta.to_degrees(), -3.229779729, epsilon = 1e-6);
        assert_relative_eq!(meeus.delta, 368409011.41, epsilon = 1.0);
    }

    #[test]
    fn illuminated_fraction_is_in_unit_range() {
        let time = Time::from_format(TimeScale::Tt, &Jd::new(2451545.0, 0.0));
        let fraction = illuminated_fraction(time);
        assert!((0.0..=1.0).contains(&fraction));
    }
}
