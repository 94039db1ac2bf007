// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Geocentric <-> geodetic conversions.
//!
//! Ported largely as-is from the teacher crate's
//! `transform::{geocentric_to_geodetic, geodetic_to_geocentric}`
//! (`eraGc2gd`/`eraGc2gde`, `eraGd2gc`/`eraGd2gce`) — the teacher's own
//! `geocentric_to_geodetic_inner` already implements Fukushima's (2006)
//! Halley's-method algorithm, so this module generalizes it from raw
//! `[f64; 3]`/`ErfaError` to [`Vec3`]/[`CoreError`] rather than replacing
//! the algorithm.

use crate::constants::ERFA_DPI;
use crate::ellipsoid::Ellipsoid;
use crate::error::CoreError;
use crate::numeric::Vec3;

/// Transform geocentric coordinates to geodetic using the specified
/// reference ellipsoid. (`eraGc2gd`)
///
/// Returns `(longitude, latitude, height)`; longitude and latitude are
/// radians (east/north positive), height is in the same units as `xyz`
/// (conventionally meters).
pub fn geocentric_to_geodetic(e: Ellipsoid, xyz: Vec3) -> (f64, f64, f64) {
    let (a, f) = e.get_params();
    geocentric_to_geodetic_inner(a, f, xyz).expect("ellipsoid parameters are always valid")
}

/// Transform geocentric coordinates to geodetic for a reference ellipsoid of
/// specified form. (`eraGc2gde`)
///
/// `a` is the equatorial radius and `f` the flattening (around 0.00335,
/// i.e. around 1/298, for the Earth). Returns `(longitude, latitude,
/// height)`.
///
/// # Errors
///
/// Returns an error if `a <= 0` or `f` is outside `[0, 1)`.
///
/// # Reference
///
/// Fukushima, T., "Transformation from Cartesian to geodetic coordinates
/// accelerated by Halley's method", J.Geodesy (2006) 79: 689-693
pub fn geocentric_to_geodetic_inner(a: f64, f: f64, xyz: Vec3) -> Result<(f64, f64, f64), CoreError> {
    if !(0.0..1.0).contains(&f) {
        return Err(CoreError::InvalidValue { function: "geocentric_to_geodetic_inner", value: "f" });
    }
    if a <= 0.0 {
        return Err(CoreError::InvalidValue { function: "geocentric_to_geodetic_inner", value: "a" });
    }

    let aeps2 = a * a * 1e-32;
    let e2 = (2.0 - f) * f;
    let e4t = e2 * e2 * 1.5;
    let ec2 = 1.0 - e2;
    let ec = ec2.sqrt();
    let b = a * ec;

    let x = xyz.x;
    let y = xyz.y;
    let z = xyz.z;

    let p2 = x * x + y * y;

    let elong = if p2 > 0.0 { y.atan2(x) } else { 0.0 };

    let absz = z.abs();

    let (mut phi, height) = if p2 > aeps2 {
        let p = p2.sqrt();

        let s0 = absz / a;
        let pn = p / a;
        let zc = ec * s0;

        let c0 = ec * pn;
        let c02 = c0 * c0;
        let c03 = c02 * c0;
        let s02 = s0 * s0;
        let s03 = s02 * s0;
        let a02 = c02 + s02;
        let a0 = a02.sqrt();
        let a03 = a02 * a0;
        let d0 = zc * a03 + e2 * s03;
        let f0 = pn * a03 - e2 * c03;

        let b0 = e4t * s02 * c02 * pn * (a0 - ec);
        let s1 = d0 * f0 - b0 * s0;
        let cc = ec * (f0 * f0 - b0 * c0);

        let phi = (s1 / cc).atan();
        let s12 = s1 * s1;
        let cc2 = cc * cc;
        let height = (p * cc + absz * s1 - a * (ec2 * s12 + cc2).sqrt()) / (s12 + cc2).sqrt();

        (phi, height)
    } else {
        (ERFA_DPI / 2.0, absz - b)
    };

    if z < 0.0 {
        phi *= -1.0;
    }

    Ok((elong, phi, height))
}

/// Transform geodetic coordinates to geocentric using the specified
/// reference ellipsoid. (`eraGd2gc`)
pub fn geodetic_to_geocentric(e: Ellipsoid, elong: f64, phi: f64, height: f64) -> Result<Vec3, CoreError> {
    let (a, f) = e.get_params();
    geodetic_to_geocentric_inner(a, f, elong, phi, height)
}

/// Transform geodetic coordinates to geocentric for a reference ellipsoid of
/// specified form. (`eraGd2gce`)
///
/// # Errors
///
/// Returns an error if the inputs are unrealistic enough to produce an
/// arithmetic exception (e.g. `f` making the ellipse degenerate).
///
/// # References
///
/// * Green, R.M., Spherical Astronomy, Cambridge University Press, (1985)
///   Section 4.5, p96.
/// * Explanatory Supplement to the Astronomical Almanac, P. Kenneth
///   Seidelmann (ed), University Science Books (1992), Section 4.22, p202.
pub fn geodetic_to_geocentric_inner(a: f64, f: f64, elong: f64, phi: f64, height: f64) -> Result<Vec3, CoreError> {
    let (sp, cp) = phi.sin_cos();
    let w = 1.0 - f;
    let w = w * w;
    let d = cp * cp + w * sp * sp;
    if d <= 0.0 {
        return Err(CoreError::Unrealistic { function: "geodetic_to_geocentric_inner" });
    }
    let ac = a / d.sqrt();
    let as_ = w * ac;

    let r = (ac + height) * cp;
    let (s_elong, c_elong) = elong.sin_cos();
    Ok(Vec3::new(r * c_elong, r * s_elong, (as_ + height) * sp))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn round_trips_through_wgs84() {
        let (elong, phi, height) = (0.5, 0.7, 1200.0);
        let xyz = geodetic_to_geocentric(Ellipsoid::WGS84, elong, phi, height).unwrap();
        let (elong2, phi2, height2) = geocentric_to_geodetic(Ellipsoid::WGS84, xyz);
        assert_relative_eq!(elong, elong2, epsilon = 1e-10);
        assert_relative_eq!(phi, phi2, epsilon = 1e-10);
        assert_relative_eq!(height, height2, epsilon = 1e-6);
    }

    #[test]
    fn rejects_flattening_outside_unit_interval() {
        let err = geocentric_to_geodetic_inner(6378137.0, 1.0, Vec3::new(1.0, 0.0, 0.0));
        assert!(err.is_err());
    }

    #[test]
    fn rejects_non_positive_equatorial_radius() {
        let err = geocentric_to_geodetic_inner(0.0, 0.003, Vec3::new(1.0, 0.0, 0.0));
        assert!(err.is_err());
    }
}
