// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Time-tagged coordinate frames, built as a thin value-type layer over the
//! free functions in [`cartesian`], [`geodetic`] and [`frame_transform`]
//! (spec.md §3 "Coordinate frames", §9 redesign note: "explicit conversion
//! trait/interface per pair plus a neutral value type").
//!
//! Every frame stores the [`Time`](crate::time::Time) it was observed at;
//! conversions look up polar motion and UT1/TT offsets from that time
//! directly rather than asking the caller to pass them separately.

pub mod cartesian;
pub mod frame_transform;
pub mod geodetic;

use crate::ellipsoid::Ellipsoid;
use crate::error::CoreError;
use crate::numeric::Vec3;
use crate::time::{Time, TimeScale};

/// Geocentric Celestial Reference Frame: ICRF-aligned, Earth-centered,
/// inertial.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Gcrf {
    pub time: Time,
    pub position: Vec3,
    pub velocity: Option<Vec3>,
}

/// International Terrestrial Reference Frame: Earth-fixed (WGS84-aligned).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Itrf {
    pub time: Time,
    pub position: Vec3,
    pub velocity: Option<Vec3>,
}

/// True Equator, Mean Equinox: SGP4's native output frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Teme {
    pub time: Time,
    pub position: Vec3,
    pub velocity: Option<Vec3>,
}

/// Geodetic latitude/longitude/height above a reference ellipsoid (WGS84 by
/// default). Not time-tagged: height above the ellipsoid doesn't depend on
/// Earth orientation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Geodetic {
    pub longitude: f64,
    pub latitude: f64,
    pub height: f64,
}

/// A point on the surface, with no height or time component.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Geographic {
    pub longitude: f64,
    pub latitude: f64,
}

/// Topocentric azimuth/elevation/range as seen from a site, observed at a
/// given instant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Horizontal {
    pub time: Time,
    pub azimuth: f64,
    pub elevation: f64,
    pub range: f64,
}

impl Gcrf {
    pub fn new(time: Time, position: Vec3, velocity: Option<Vec3>) -> Self {
        Self { time, position, velocity }
    }

    /// `GCRF <- ITRF` (spec.md §4.9 "GCRF->ITRF" inverted).
    pub fn from_itrf(itrf: &Itrf) -> Gcrf {
        let tt = itrf.time.to_scale(TimeScale::Tt);
        let ut1 = itrf.time.to_scale(TimeScale::Ut1);
        let pm = itrf.time.polar_motion();

        let (jd_tt1, jd_tt2) = tt.jd_pair();
        let (jd_ut1_1, jd_ut1_2) = ut1.jd_pair();

        let v_in = itrf.velocity.unwrap_or(Vec3::ZERO);
        let (position, velocity) =
            frame_transform::itrf_to_gcrf(itrf.position, v_in, jd_tt1, jd_tt2, jd_ut1_1, jd_ut1_2, pm.x, pm.y);

        Gcrf { time: itrf.time, position, velocity: itrf.velocity.map(|_| velocity) }
    }
}

impl Itrf {
    pub fn new(time: Time, position: Vec3, velocity: Option<Vec3>) -> Self {
        Self { time, position, velocity }
    }

    /// `ITRF <- GCRF` (spec.md §4.9 "GCRF->ITRF (IERS 2010 CIO method)").
    pub fn from_gcrf(gcrf: &Gcrf) -> Itrf {
        let tt = gcrf.time.to_scale(TimeScale::Tt);
        let ut1 = gcrf.time.to_scale(TimeScale::Ut1);
        let pm = gcrf.time.polar_motion();

        let (jd_tt1, jd_tt2) = tt.jd_pair();
        let (jd_ut1_1, jd_ut1_2) = ut1.jd_pair();

        let v_in = gcrf.velocity.unwrap_or(Vec3::ZERO);
        let (position, velocity) =
            frame_transform::gcrf_to_itrf(gcrf.position, v_in, jd_tt1, jd_tt2, jd_ut1_1, jd_ut1_2, pm.x, pm.y);

        Itrf { time: gcrf.time, position, velocity: gcrf.velocity.map(|_| velocity) }
    }

    /// `ITRF <- TEME` (spec.md §4.9 "TEME->ITRF"), the SGP4-native chain.
    pub fn from_teme(teme: &Teme) -> Itrf {
        let ut1 = teme.time.to_scale(TimeScale::Ut1);
        let pm = teme.time.polar_motion();
        let (jd_ut1_1, jd_ut1_2) = ut1.jd_pair();

        let v_in = teme.velocity.unwrap_or(Vec3::ZERO);
        let (position, velocity) =
            frame_transform::teme_to_itrf(teme.position, v_in, jd_ut1_1, jd_ut1_2, pm.x, pm.y);

        Itrf { time: teme.time, position, velocity: teme.velocity.map(|_| velocity) }
    }

    /// Geocentric -> geodetic on the given ellipsoid (spec.md §4.10).
    pub fn to_geodetic_on(&self, ellipsoid: Ellipsoid) -> Geodetic {
        let (longitude, latitude, height) = geodetic::geocentric_to_geodetic(ellipsoid, self.position);
        Geodetic { longitude, latitude, height }
    }

    /// Geocentric -> geodetic on WGS84, the default ellipsoid (spec.md §3).
    pub fn to_geodetic(&self) -> Geodetic {
        self.to_geodetic_on(Ellipsoid::default())
    }
}

impl Teme {
    pub fn new(time: Time, position: Vec3, velocity: Option<Vec3>) -> Self {
        Self { time, position, velocity }
    }

    /// `TEME <- ITRF`, the inverse of [`Itrf::from_teme`].
    pub fn from_itrf(itrf: &Itrf) -> Teme {
        let ut1 = itrf.time.to_scale(TimeScale::Ut1);
        let pm = itrf.time.polar_motion();
        let (jd_ut1_1, jd_ut1_2) = ut1.jd_pair();

        let v_in = itrf.velocity.unwrap_or(Vec3::ZERO);
        let (position, velocity) =
            frame_transform::itrf_to_teme(itrf.position, v_in, jd_ut1_1, jd_ut1_2, pm.x, pm.y);

        Teme { time: itrf.time, position, velocity: itrf.velocity.map(|_| velocity) }
    }

    pub fn to_itrf(&self) -> Itrf {
        Itrf::from_teme(self)
    }
}

impl Geodetic {
    pub fn new(longitude: f64, latitude: f64, height: f64) -> Self {
        Self { longitude, latitude, height }
    }

    /// Geodetic -> geocentric on the given ellipsoid, tagged with `time`
    /// (spec.md §4.10).
    pub fn to_itrf_on(&self, ellipsoid: Ellipsoid, time: Time) -> Result<Itrf, CoreError> {
        let position = geodetic::geodetic_to_geocentric(ellipsoid, self.longitude, self.latitude, self.height)?;
        Ok(Itrf { time, position, velocity: None })
    }

    /// Geodetic -> geocentric on WGS84, tagged with `time`.
    pub fn to_itrf(&self, time: Time) -> Result<Itrf, CoreError> {
        self.to_itrf_on(Ellipsoid::default(), time)
    }

    pub fn to_geographic(&self) -> Geographic {
        Geographic { longitude: self.longitude, latitude: self.latitude }
    }
}

impl Horizontal {
    /// Topocentric azimuth/elevation/range of `target` as seen from `site`,
    /// both in ITRF (Vallado ALG-27 RAZEL, spec.md §4.10).
    ///
    /// `site` must carry a height (its geodetic latitude is needed to build
    /// the SEZ rotation); the horizontal-range singularity at the zenith
    /// falls back to the radial component of the relative velocity, when
    /// one is available, to still report a signed azimuth.
    pub fn from_itrf(target: &Itrf, site: &Itrf) -> Horizontal {
        use crate::numeric::Mat3;
        use std::f64::consts::FRAC_PI_2;

        const HORIZONTAL_SINGULARITY_EPS: f64 = 1e-8;

        let site_geodetic = site.to_geodetic();
        let rho_ecef = target.position - site.position;
        let range = rho_ecef.norm();

        let rot = Mat3::rot2(FRAC_PI_2 - site_geodetic.latitude) * Mat3::rot3(site_geodetic.longitude);
        let rho_sez = rot * rho_ecef;

        let horizontal_range = (rho_sez.x * rho_sez.x + rho_sez.y * rho_sez.y).sqrt();

        let (azimuth, elevation) = if horizontal_range > HORIZONTAL_SINGULARITY_EPS {
            let elevation = (rho_sez.z / range).asin();
            let raw_azimuth = rho_sez.y.atan2(-rho_sez.x);
            let azimuth = if raw_azimuth < 0.0 { raw_azimuth + crate::constants::ERFA_D2PI } else { raw_azimuth };
            (azimuth, elevation)
        } else {
            let elevation = rho_sez.z.signum() * FRAC_PI_2;
            let azimuth = match (target.velocity, site.velocity) {
                (Some(tv), Some(sv)) => {
                    let v_sez = rot * (tv - sv);
                    let raw = v_sez.y.atan2(-v_sez.x);
                    if raw < 0.0 { raw + crate::constants::ERFA_D2PI } else { raw }
                }
                _ => 0.0,
            };
            (azimuth, elevation)
        };

        Horizontal { time: target.time, azimuth, elevation, range }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::double_double::DoubleDouble;
    use approx::assert_relative_eq;

    fn j2000_tt() -> Time {
        Time::new(TimeScale::Tt, DoubleDouble::new(2451545.0, 0.0))
    }

    #[test]
    fn gcrf_itrf_round_trip() {
        let gcrf = Gcrf::new(
            j2000_tt(),
            Vec3::new(-2801428.2, 5602703.3, -2645094.1),
            Some(Vec3::new(-5184.23, -137.71, 5215.98)),
        );
        let itrf = Itrf::from_gcrf(&gcrf);
        let back = Gcrf::from_itrf(&itrf);
        assert_relative_eq!(gcrf.position.x, back.position.x, epsilon = 1e-3);
        assert_relative_eq!(gcrf.position.y, back.position.y, epsilon = 1e-3);
        assert_relative_eq!(gcrf.position.z, back.position.z, epsilon = 1e-3);
    }

    #[test]
    fn teme_itrf_round_trip() {
        let teme = Teme::new(
            j2000_tt(),
            Vec3::new(6524.834e3, 6862.875e3, 6448.296e3),
            Some(Vec3::new(4.901327e3, 5.533756e3, -1.976341e3)),
        );
        let itrf = teme.to_itrf();
        let back = Teme::from_itrf(&itrf);
        assert_relative_eq!(teme.position.x, back.position.x, epsilon = 1e-3);
        assert_relative_eq!(teme.position.y, back.position.y, epsilon = 1e-3);
        assert_relative_eq!(teme.position.z, back.position.z, epsilon = 1e-3);
    }

    #[test]
    fn geodetic_itrf_round_trip() {
        let geodetic = Geodetic::new(0.5, 0.7, 1200.0);
        let itrf = geodetic.to_itrf(j2000_tt()).unwrap();
        let back = itrf.to_geodetic();
        assert_relative_eq!(geodetic.longitude, back.longitude, epsilon = 1e-10);
        assert_relative_eq!(geodetic.latitude, back.latitude, epsilon = 1e-10);
        assert_relative_eq!(geodetic.height, back.height, epsilon = 1e-6);
    }

    #[test]
    fn horizontal_overhead_target_is_straight_up() {
        let site_geodetic = Geodetic::new(0.0, 0.0, 0.0);
        let site = site_geodetic.to_itrf(j2000_tt()).unwrap();
        let target = Itrf::new(j2000_tt(), site.position * 2.0, None);
        let horizontal = Horizontal::from_itrf(&target, &site);
        assert_relative_eq!(horizontal.elevation, std::f64::consts::FRAC_PI_2, epsilon = 1e-6);
    }
}
