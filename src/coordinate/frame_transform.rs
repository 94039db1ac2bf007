// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The celestial-to-terrestrial transformation pipeline: GCRF <-> CIRS <->
//! TIRS <-> ITRF (IAU 2006/2000A, CIO-based) and TEME <-> PEF <-> ITRF (the
//! SGP4-native chain), with the omega x r velocity correction for frames
//! that rotate relative to each other (spec.md §4.9).
//!
//! No teacher source exists for this chain (the pack's ERFA-derived crate
//! never assembled a full sidereal/CIO pipeline into a single matrix);
//! grounded instead on Vallado, "Fundamentals of Astrodynamics and
//! Applications", sec. 3.7 (IAU-2006/2000, CIO based) and p.220 (TEME/PEF),
//! built from this crate's own [`crate::earth::rotation`] and
//! [`crate::earth::precession_nutation`] primitives in the same idiom.

use crate::constants::EARTH_ANGULAR_VELOCITY;
use crate::earth::{cip, rotation};
use crate::numeric::{Mat3, Vec3};

/// Earth's angular velocity vector expressed in the rotating frame (z-axis
/// only; polar motion's effect on the rotation vector is second-order and
/// omitted, matching Vallado's treatment).
fn earth_omega() -> Vec3 {
    Vec3::new(0.0, 0.0, EARTH_ANGULAR_VELOCITY)
}

/// Rotate a position/velocity pair by a time-varying matrix built from a
/// single angle `theta` with rate `theta_dot`, applying the omega x r
/// velocity correction for the frame's own rotation.
fn rotate_with_rate(r: Mat3, r_in: Vec3, v_in: Vec3, omega: Vec3) -> (Vec3, Vec3) {
    let r_out = r * r_in;
    let v_out = r * v_in - omega.cross(r_out);
    (r_out, v_out)
}

/// `TEME -> PEF = ROT3(gmst82(ut1))`.
pub fn teme_to_pef(r_teme: Vec3, v_teme: Vec3, jd_ut1_1: f64, jd_ut1_2: f64) -> (Vec3, Vec3) {
    let gmst = rotation::gmst82(jd_ut1_1, jd_ut1_2);
    let rot = Mat3::rot3(gmst);
    rotate_with_rate(rot, r_teme, v_teme, earth_omega())
}

/// `PEF -> ITRF = ROT1(-y_p) . ROT2(-x_p)`, polar motion in radians.
pub fn pef_to_itrf(r_pef: Vec3, v_pef: Vec3, xp: f64, yp: f64) -> (Vec3, Vec3) {
    let rot = Mat3::rot1(-yp) * Mat3::rot2(-xp);
    (rot * r_pef, rot * v_pef)
}

/// `TEME -> ITRF = PEF->ITRF . TEME->PEF`.
pub fn teme_to_itrf(r_teme: Vec3, v_teme: Vec3, jd_ut1_1: f64, jd_ut1_2: f64, xp: f64, yp: f64) -> (Vec3, Vec3) {
    let (r_pef, v_pef) = teme_to_pef(r_teme, v_teme, jd_ut1_1, jd_ut1_2);
    pef_to_itrf(r_pef, v_pef, xp, yp)
}

/// `ITRF -> TEME`, the inverse of [`teme_to_itrf`] (each leg's rotation
/// matrix is orthonormal, so its inverse is its transpose).
pub fn itrf_to_teme(r_itrf: Vec3, v_itrf: Vec3, jd_ut1_1: f64, jd_ut1_2: f64, xp: f64, yp: f64) -> (Vec3, Vec3) {
    let polar = Mat3::rot1(-yp) * Mat3::rot2(-xp);
    let r_pef = polar.transpose() * r_itrf;
    let v_pef = polar.transpose() * v_itrf;

    let gmst = rotation::gmst82(jd_ut1_1, jd_ut1_2);
    let rot = Mat3::rot3(gmst);
    let r_teme = rot.transpose() * r_pef;
    let v_teme = rot.transpose() * (v_pef + earth_omega().cross(r_pef));
    (r_teme, v_teme)
}

/// `Q = celestial_to_cirs_matrix(x, y, s)`: GCRS -> CIRS, built from the CIP
/// unit vector `(x, y)` and the CIO locator `s`. (Vallado eq. 3-65 / `eraC2ixys`)
pub fn celestial_to_cirs_matrix(x: f64, y: f64, s: f64) -> Mat3 {
    let r2 = x * x + y * y;
    let e = if r2 > 0.0 { y.atan2(x) } else { 0.0 };
    let d = (r2 / (1.0 - r2)).sqrt().atan();
    Mat3::rot3(-e - s) * Mat3::rot2(d) * Mat3::rot3(e)
}

/// The full GCRS -> ITRF bias-precession-nutation-rotation-polar-motion
/// matrix for a TT/UT1 pair, decomposed as `Q`,`R`,`W` per spec.md §4.9.
struct Pipeline {
    celestial_to_cirs: Mat3,
    era: f64,
    polar_motion: Mat3,
}

fn build_pipeline(jd_tt1: f64, jd_tt2: f64, jd_ut1_1: f64, jd_ut1_2: f64, xp: f64, yp: f64) -> Pipeline {
    let (x, y) = cip::cip_xy(jd_tt1, jd_tt2);
    let s = cip::cio_locator_s(jd_tt1, jd_tt2, x, y);
    let celestial_to_cirs = celestial_to_cirs_matrix(x, y, s);

    let era = rotation::era2000(jd_ut1_1, jd_ut1_2);
    let sp = rotation::s_prime(jd_tt1, jd_tt2);
    let polar_motion = Mat3::rot1(-yp) * Mat3::rot2(-xp) * Mat3::rot3(sp);

    Pipeline { celestial_to_cirs, era, polar_motion }
}

/// `GCRF -> ITRF` (IERS 2010 CIO method, Vallado p.220).
///
/// `jd_tt1, jd_tt2` is TT as a 2-part Julian Date; `jd_ut1_1, jd_ut1_2` is
/// UT1; `xp, yp` is polar motion in radians.
pub fn gcrf_to_itrf(
    r_gcrf: Vec3,
    v_gcrf: Vec3,
    jd_tt1: f64,
    jd_tt2: f64,
    jd_ut1_1: f64,
    jd_ut1_2: f64,
    xp: f64,
    yp: f64,
) -> (Vec3, Vec3) {
    let pipeline = build_pipeline(jd_tt1, jd_tt2, jd_ut1_1, jd_ut1_2, xp, yp);

    let r_cirs = pipeline.celestial_to_cirs * r_gcrf;
    let v_cirs = pipeline.celestial_to_cirs * v_gcrf;

    let era_rot = Mat3::rot3(pipeline.era);
    let (r_tirs, v_tirs) = rotate_with_rate(era_rot, r_cirs, v_cirs, earth_omega());

    (pipeline.polar_motion * r_tirs, pipeline.polar_motion * v_tirs)
}

/// `ITRF -> GCRF`, the inverse of [`gcrf_to_itrf`].
pub fn itrf_to_gcrf(
    r_itrf: Vec3,
    v_itrf: Vec3,
    jd_tt1: f64,
    jd_tt2: f64,
    jd_ut1_1: f64,
    jd_ut1_2: f64,
    xp: f64,
    yp: f64,
) -> (Vec3, Vec3) {
    let pipeline = build_pipeline(jd_tt1, jd_tt2, jd_ut1_1, jd_ut1_2, xp, yp);

    let r_tirs = pipeline.polar_motion.transpose() * r_itrf;
    let v_tirs = pipeline.polar_motion.transpose() * v_itrf;

    let era_rot = Mat3::rot3(pipeline.era);
    let r_cirs = era_rot.transpose() * r_tirs;
    let v_cirs = era_rot.transpose() * (v_tirs + earth_omega().cross(r_tirs));

    (pipeline.celestial_to_cirs.transpose() * r_cirs, pipeline.celestial_to_cirs.transpose() * v_cirs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn teme_itrf_round_trip() {
        let r = Vec3::new(6524.834e3, 6862.875e3, 6448.296e3);
        let v = Vec3::new(4.901327e3, 5.533756e3, -1.976341e3);
        let (r_itrf, v_itrf) = teme_to_itrf(r, v, 2453101.5, 0.0, 0.001, 0.002);
        let (r2, v2) = itrf_to_teme(r_itrf, v_itrf, 2453101.5, 0.0, 0.001, 0.002);
        assert_relative_eq!(r.x, r2.x, epsilon = 1e-6);
        assert_relative_eq!(r.y, r2.y, epsilon = 1e-6);
        assert_relative_eq!(r.z, r2.z, epsilon = 1e-6);
        assert_relative_eq!(v.x, v2.x, epsilon = 1e-9);
        assert_relative_eq!(v.y, v2.y, epsilon = 1e-9);
        assert_relative_eq!(v.z, v2.z, epsilon = 1e-9);
    }

    #[test]
    fn gcrf_itrf_round_trip() {
        let r = Vec3::new(-2801428.2, 5602703.3, -2645094.1);
        let v = Vec3::new(-5184.23, -137.71, 5215.98);
        let (r_itrf, v_itrf) = gcrf_to_itrf(r, v, 2451545.0, 0.5, 2451545.0, 0.499, 0.0001, 0.0002);
        let (r2, v2) = itrf_to_gcrf(r_itrf, v_itrf, 2451545.0, 0.5, 2451545.0, 0.499, 0.0001, 0.0002);
        assert_relative_eq!(r.x, r2.x, epsilon = 1e-3);
        assert_relative_eq!(r.y, r2.y, epsilon = 1e-3);
        assert_relative_eq!(r.z, r2.z, epsilon = 1e-3);
    }

    #[test]
    fn celestial_to_cirs_is_orthonormal() {
        let q = celestial_to_cirs_matrix(0.0001, 0.0002, 0.00001);
        let identity = q * q.transpose();
        for i in 0..3 {
            for j in 0..3 {
                let expect = if i == j { 1.0 } else { 0.0 };
                assert_relative_eq!(identity.element(i, j), expect, epsilon = 1e-12);
            }
        }
    }
}
