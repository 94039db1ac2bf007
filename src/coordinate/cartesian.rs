// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Cartesian <-> spherical conversions. Ported from the teacher crate's
//! `transform::{cartesian_to_spherical, spherical_to_cartesian}` (`eraC2s`,
//! `eraS2c`), generalized from raw `[f64; 3]` to [`Vec3`].

use crate::numeric::Vec3;

/// P-vector to spherical coordinates. (`eraC2s`)
///
/// The vector `p` can have any magnitude; only its direction is used. At
/// either pole, zero longitude is returned.
pub fn cartesian_to_spherical(p: Vec3) -> (f64, f64) {
    let d2 = p.x * p.x + p.y * p.y;

    let theta = if d2 == 0.0 { 0.0 } else { p.y.atan2(p.x) };
    let phi = if p.z == 0.0 { 0.0 } else { p.z.atan2(d2.sqrt()) };

    (theta, phi)
}

/// Convert spherical coordinates to Cartesian direction cosines. (`eraS2c`)
pub fn spherical_to_cartesian(theta: f64, phi: f64) -> Vec3 {
    let (sp, cp) = phi.sin_cos();
    let (st, ct) = theta.sin_cos();
    Vec3::new(ct * cp, st * cp, sp)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn round_trips_through_spherical() {
        let (theta, phi) = (0.7, -0.3);
        let p = spherical_to_cartesian(theta, phi);
        let (theta2, phi2) = cartesian_to_spherical(p);
        assert_relative_eq!(theta, theta2, epsilon = 1e-12);
        assert_relative_eq!(phi, phi2, epsilon = 1e-12);
    }

    #[test]
    fn zero_vector_gives_zero_longitude() {
        let (theta, _) = cartesian_to_spherical(Vec3::new(0.0, 0.0, 1.0));
        assert_eq!(theta, 0.0);
    }
}
