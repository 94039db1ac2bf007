// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The Celestial Intermediate Pole's X,Y coordinates and the CIO locator s.
//!
//! `cio_locator_s` is ported verbatim, term-for-term, from the teacher
//! crate's `time::S06` (`eraS06`) — the full IERS table 5.2d series (terms
//! of order t^0 through t^4), not a truncated subset.

use crate::constants::*;
use crate::earth::precession_nutation;
use crate::fundamental_argument::*;

/// `cip_xy(jd_tt) -> (x, y)` (spec.md §4.7): the Celestial Intermediate
/// Pole's X,Y coordinates, radians, IAU 2006/2000A. Realized as
/// [`precession_nutation::bpn_to_xy`] of the bias-precession-nutation
/// matrix [`precession_nutation::pn_matrix_06a`] (`eraBpn2xy`+`eraPnm06a`),
/// the same chain the teacher's `gst06a` uses to get `x,y` ahead of the CIO
/// locator — rather than a second, independently truncated X,Y series that
/// would disagree with it in the last few digits.
pub fn cip_xy(date1: f64, date2: f64) -> (f64, f64) {
    let rnpb = precession_nutation::pn_matrix_06a(date1, date2);
    precession_nutation::bpn_to_xy(rnpb)
}

/// The CIO locator s, positioning the Celestial Intermediate Origin on the
/// equator of the Celestial Intermediate Pole, given the CIP's X,Y
/// coordinates. Compatible with IAU 2006/2000A precession-nutation.
/// (`eraS06`)
///
/// `date1`, `date2` together form TT as a two-part Julian Date, and `x`,`y`
/// must be consistent with that date (Note 3 below).
///
/// The series is for s+XY/2, not s directly — more compact than a direct
/// series for s would be (Note 3).
///
/// # References
///
/// * Capitaine, N., Wallace, P.T. & Chapront, J., 2003, Astron. Astrophys.
///   432, 355
/// * McCarthy, D.D., Petit, G. (eds.) 2004, IERS Conventions (2003), IERS
///   Technical Note No. 32, BKG
#[allow(non_snake_case)]
pub fn cio_locator_s(date1: f64, date2: f64, x: f64, y: f64) -> f64 {
    let t = (date1 - ERFA_DJ00 + date2) / ERFA_DJC;

    let fa: [f64; 8] = [
        l03(t),
        lp03(t),
        f03(t),
        d03(t),
        om03(t),
        ve03(t),
        e03(t),
        pa03(t),
    ];

    let mut w0 = SP[0];
    let mut w1 = SP[1];
    let mut w2 = SP[2];
    let mut w3 = SP[3];
    let mut w4 = SP[4];
    let w5 = SP[5];

    for term in S0.iter().rev() {
        let a = argument(&term.nfa, &fa);
        w0 += term.s * a.sin() + term.c * a.cos();
    }
    for term in S1.iter().rev() {
        let a = argument(&term.nfa, &fa);
        w1 += term.s * a.sin() + term.c * a.cos();
    }
    for term in S2.iter().rev() {
        let a = argument(&term.nfa, &fa);
        w2 += term.s * a.sin() + term.c * a.cos();
    }
    for term in S3.iter().rev() {
        let a = argument(&term.nfa, &fa);
        w3 += term.s * a.sin() + term.c * a.cos();
    }
    for term in S4.iter().rev() {
        let a = argument(&term.nfa, &fa);
        w4 += term.s * a.sin() + term.c * a.cos();
    }

    (w0 + (w1 + (w2 + (w3 + (w4 + w5 * t) * t) * t) * t) * t) * ERFA_DAS2R - x * y / 2.0
}

fn argument(nfa: &[i32; 8], fa: &[f64; 8]) -> f64 {
    nfa.iter().copied().zip(fa.iter().copied()).fold(0.0, |acc, (n, f)| acc + f64::from(n) * f)
}

/// Polynomial coefficients for s+XY/2, arcsec, orders t^0..t^5.
const SP: [f64; 6] = [94.00e-6, 3808.65e-6, -122.68e-6, -72574.11e-6, 27.98e-6, 15.62e-6];

/// A term of the s+XY/2 Poisson series: argument multipliers for
/// l,l',F,D,Om,LVe,LE,pA, plus sine and cosine coefficients (arcsec).
struct Term {
    nfa: [i32; 8],
    s: f64,
    c: f64,
}

/* Terms of order t^0 */
const S0: [Term; 33] = [
    Term { nfa: [0, 0, 0, 0, 1, 0, 0, 0], s: -2640.73e-6, c: 0.39e-6 },
    Term { nfa: [0, 0, 0, 0, 2, 0, 0, 0], s: -63.53e-6, c: 0.02e-6 },
    Term { nfa: [0, 0, 2, -2, 3, 0, 0, 0], s: -11.75e-6, c: -0.01e-6 },
    Term { nfa: [0, 0, 2, -2, 1, 0, 0, 0], s: -11.21e-6, c: -0.01e-6 },
    Term { nfa: [0, 0, 2, -2, 2, 0, 0, 0], s: 4.57e-6, c: 0.00e-6 },
    Term { nfa: [0, 0, 2, 0, 3, 0, 0, 0], s: -2.02e-6, c: 0.00e-6 },
    Term { nfa: [0, 0, 2, 0, 1, 0, 0, 0], s: -1.98e-6, c: 0.00e-6 },
    Term { nfa: [0, 0, 0, 0, 3, 0, 0, 0], s: 1.72e-6, c: 0.00e-6 },
    Term { nfa: [0, 1, 0, 0, 1, 0, 0, 0], s: 1.41e-6, c: 0.01e-6 },
    Term { nfa: [0, 1, 0, 0, -1, 0, 0, 0], s: 1.26e-6, c: 0.01e-6 },
    Term { nfa: [1, 0, 0, 0, -1, 0, 0, 0], s: 0.63e-6, c: 0.00e-6 },
    Term { nfa: [1, 0, 0, 0, 1, 0, 0, 0], s: 0.63e-6, c: 0.00e-6 },
    Term { nfa: [0, 1, 2, -2, 3, 0, 0, 0], s: -0.46e-6, c: 0.00e-6 },
    Term { nfa: [0, 1, 2, -2, 1, 0, 0, 0], s: -0.45e-6, c: 0.00e-6 },
    Term { nfa: [0, 0, 4, -4, 4, 0, 0, 0], s: -0.36e-6, c: 0.00e-6 },
    Term { nfa: [0, 0, 1, -1, 1, -8, 12, 0], s: 0.24e-6, c: 0.12e-6 },
    Term { nfa: [0, 0, 2, 0, 0, 0, 0, 0], s: -0.32e-6, c: 0.00e-6 },
    Term { nfa: [0, 0, 2, 0, 2, 0, 0, 0], s: -0.28e-6, c: 0.00e-6 },
    Term { nfa: [1, 0, 2, 0, 3, 0, 0, 0], s: -0.27e-6, c: 0.00e-6 },
    Term { nfa: [1, 0, 2, 0, 1, 0, 0, 0], s: -0.26e-6, c: 0.00e-6 },
    Term { nfa: [0, 0, 2, -2, 0, 0, 0, 0], s: 0.21e-6, c: 0.00e-6 },
    Term { nfa: [0, 1, -2, 2, -3, 0, 0, 0], s: -0.19e-6, c: 0.00e-6 },
    Term { nfa: [0, 1, -2, 2, -1, 0, 0, 0], s: -0.18e-6, c: 0.00e-6 },
    Term { nfa: [0, 0, 0, 0, 0, 8, -13, -1], s: 0.10e-6, c: -0.05e-6 },
    Term { nfa: [0, 0, 0, 2, 0, 0, 0, 0], s: -0.15e-6, c: 0.00e-6 },
    Term { nfa: [2, 0, -2, 0, -1, 0, 0, 0], s: 0.14e-6, c: 0.00e-6 },
    Term { nfa: [0, 1, 2, -2, 2, 0, 0, 0], s: 0.14e-6, c: 0.00e-6 },
    Term { nfa: [1, 0, 0, -2, 1, 0, 0, 0], s: -0.14e-6, c: 0.00e-6 },
    Term { nfa: [1, 0, 0, -2, -1, 0, 0, 0], s: -0.14e-6, c: 0.00e-6 },
    Term { nfa: [0, 0, 4, -2, 4, 0, 0, 0], s: -0.13e-6, c: 0.00e-6 },
    Term { nfa: [0, 0, 2, -2, 4, 0, 0, 0], s: 0.11e-6, c: 0.00e-6 },
    Term { nfa: [1, 0, -2, 0, -3, 0, 0, 0], s: -0.11e-6, c: 0.00e-6 },
    Term { nfa: [1, 0, -2, 0, -1, 0, 0, 0], s: -0.11e-6, c: 0.00e-6 },
];

/* Terms of order t^1 */
const S1: [Term; 3] = [
    Term { nfa: [0, 0, 0, 0, 2, 0, 0, 0], s: -0.07e-6, c: 3.57e-6 },
    Term { nfa: [0, 0, 0, 0, 1, 0, 0, 0], s: 1.73e-6, c: -0.03e-6 },
    Term { nfa: [0, 0, 2, -2, 3, 0, 0, 0], s: 0.00e-6, c: 0.48e-6 },
];

/* Terms of order t^2 */
const S2: [Term; 25] = [
    Term { nfa: [0, 0, 0, 0, 1, 0, 0, 0], s: 743.52e-6, c: -0.17e-6 },
    Term { nfa: [0, 0, 2, -2, 2, 0, 0, 0], s: 56.91e-6, c: 0.06e-6 },
    Term { nfa: [0, 0, 2, 0, 2, 0, 0, 0], s: 9.84e-6, c: -0.01e-6 },
    Term { nfa: [0, 0, 0, 0, 2, 0, 0, 0], s: -8.85e-6, c: 0.01e-6 },
    Term { nfa: [0, 1, 0, 0, 0, 0, 0, 0], s: -6.38e-6, c: -0.05e-6 },
    Term { nfa: [1, 0, 0, 0, 0, 0, 0, 0], s: -3.07e-6, c: 0.00e-6 },
    Term { nfa: [0, 1, 2, -2, 2, 0, 0, 0], s: 2.23e-6, c: 0.00e-6 },
    Term { nfa: [0, 0, 2, 0, 1, 0, 0, 0], s: 1.67e-6, c: 0.00e-6 },
    Term { nfa: [1, 0, 2, 0, 2, 0, 0, 0], s: 1.30e-6, c: 0.00e-6 },
    Term { nfa: [0, 1, -2, 2, -2, 0, 0, 0], s: 0.93e-6, c: 0.00e-6 },
    Term { nfa: [1, 0, 0, -2, 0, 0, 0, 0], s: 0.68e-6, c: 0.00e-6 },
    Term { nfa: [0, 0, 2, -2, 1, 0, 0, 0], s: -0.55e-6, c: 0.00e-6 },
    Term { nfa: [1, 0, -2, 0, -2, 0, 0, 0], s: 0.53e-6, c: 0.00e-6 },
    Term { nfa: [0, 0, 0, 2, 0, 0, 0, 0], s: -0.27e-6, c: 0.00e-6 },
    Term { nfa: [1, 0, 0, 0, 1, 0, 0, 0], s: -0.27e-6, c: 0.00e-6 },
    Term { nfa: [1, 0, -2, -2, -2, 0, 0, 0], s: -0.26e-6, c: 0.00e-6 },
    Term { nfa: [1, 0, 0, 0, -1, 0, 0, 0], s: -0.25e-6, c: 0.00e-6 },
    Term { nfa: [1, 0, 2, 0, 1, 0, 0, 0], s: 0.22e-6, c: 0.00e-6 },
    Term { nfa: [2, 0, 0, -2, 0, 0, 0, 0], s: -0.21e-6, c: 0.00e-6 },
    Term { nfa: [2, 0, -2, 0, -1, 0, 0, 0], s: 0.20e-6, c: 0.00e-6 },
    Term { nfa: [0, 0, 2, 2, 2, 0, 0, 0], s: 0.17e-6, c: 0.00e-6 },
    Term { nfa: [2, 0, 2, 0, 2, 0, 0, 0], s: 0.13e-6, c: 0.00e-6 },
    Term { nfa: [2, 0, 0, 0, 0, 0, 0, 0], s: -0.13e-6, c: 0.00e-6 },
    Term { nfa: [1, 0, 2, -2, 2, 0, 0, 0], s: -0.12e-6, c: 0.00e-6 },
    Term { nfa: [0, 0, 2, 0, 0, 0, 0, 0], s: -0.11e-6, c: 0.00e-6 },
];

/* Terms of order t^3 */
const S3: [Term; 4] = [
    Term { nfa: [0, 0, 0, 0, 1, 0, 0, 0], s: 0.30e-6, c: -23.42e-6 },
    Term { nfa: [0, 0, 2, -2, 2, 0, 0, 0], s: -0.03e-6, c: -1.46e-6 },
    Term { nfa: [0, 0, 2, 0, 2, 0, 0, 0], s: -0.01e-6, c: -0.25e-6 },
    Term { nfa: [0, 0, 0, 0, 2, 0, 0, 0], s: 0.00e-6, c: 0.23e-6 },
];

/* Terms of order t^4 */
const S4: [Term; 1] = [Term { nfa: [0, 0, 0, 0, 1, 0, 0, 0], s: -0.26e-6, c: -0.01e-6 }];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn s_is_sub_arcsecond_near_j2000() {
        let (x, y) = cip_xy(ERFA_DJ00, 0.0);
        let s = cio_locator_s(ERFA_DJ00, 0.0, x, y);
        assert!(s.abs() < 0.1 * ERFA_DAS2R);
    }

    #[test]
    fn cip_xy_are_small_near_the_pole() {
        let (x, y) = cip_xy(ERFA_DJ00, 36525.0 * 0.1);
        assert!(x.abs() < 0.01);
        assert!(y.abs() < 0.01);
    }
}
