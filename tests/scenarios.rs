// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! End-to-end scenarios exercising whole call chains rather than a single
//! function, one per module-crossing behavior this crate promises.

use approx::assert_relative_eq;

use orbkit::body::get_meeus_moon_coordinate;
use orbkit::coordinate::{Gcrf, Geodetic, Itrf};
use orbkit::earth::get_tai_minus_utc_seconds_in_utc_scale;
use orbkit::numeric::Vec3;
use orbkit::satellite::{Classification, OrbitalState, PredictPassOptions, Tle};
use orbkit::time::format::{DateTime, JulianDate, TimeFormat};
use orbkit::time::{Time, TimeScale};
use orbkit::Ellipsoid;

fn reduce_degrees(degrees: f64) -> f64 {
    degrees.rem_euclid(360.0)
}

/// A UTC instant on a known leap-second day, carried through to TT, comes
/// out 65.184s later: the 33s TAI-UTC in effect since 2006-01-01, plus the
/// fixed 32.184s TT-TAI offset.
#[test]
fn utc_to_tt_accumulates_the_leap_second_and_tt_tai_offsets() {
    let utc = Time::from_format(TimeScale::Utc, &DateTime::new(2006, 1, 15, 21, 24, 37, 500_000));
    let tt = utc.to_scale(TimeScale::Tt);
    let back = DateTime::from_jd(tt.jd());

    assert_eq!(back.year, 2006);
    assert_eq!(back.month, 1);
    assert_eq!(back.day, 15);
    assert_eq!(back.hour, 21);
    assert_eq!(back.minute, 25);
    assert_eq!(back.second, 42);
    assert_eq!(back.microsecond, 684_000);
}

/// Meeus chapter 47, example 47.a: the Moon's ecliptic longitude, latitude
/// and distance at a specific TT instant.
#[test]
fn meeus_moon_worked_example() {
    let t = Time::from_format(TimeScale::Tt, &JulianDate::new(2448725.0, -0.49932657407));
    let coord = get_meeus_moon_coordinate(t);

    assert_relative_eq!(
        reduce_degrees(coord.lambda.to_degrees()),
        reduce_degrees(133.172479872),
        epsilon = 1e-6
    );
    assert_relative_eq!(coord.beta.to_degrees(), -3.229779729, epsilon = 1e-6);
    assert_relative_eq!(coord.delta, 368_409_011.41, epsilon = 1.0);
}

/// A GCRF state transformed down to ITRF and back recovers the original
/// position to sub-millimeter precision, at an epoch well away from J2000.
#[test]
fn itrf_gcrf_round_trip_away_from_j2000() {
    let time = Time::from_format(TimeScale::Utc, &DateTime::new(2022, 8, 10, 22, 0, 0, 0));
    let itrf = Itrf::new(
        time,
        Vec3::new(-2_801_428.2, 5_602_703.3, -2_645_094.1),
        Some(Vec3::new(-5184.23, -137.71, 5215.98)),
    );

    let gcrf = Gcrf::from_itrf(&itrf);
    let back = Itrf::from_gcrf(&gcrf);

    assert_relative_eq!(itrf.position.x, back.position.x, epsilon = 1e-3);
    assert_relative_eq!(itrf.position.y, back.position.y, epsilon = 1e-3);
    assert_relative_eq!(itrf.position.z, back.position.z, epsilon = 1e-3);

    // The GCRF position should sit at about the same geocentric radius as
    // the ITRF input, since the ITRF->GCRF step is a pure rotation.
    assert_relative_eq!(gcrf.position.norm(), itrf.position.norm(), epsilon = 1e-3);
}

/// A NOAA-15-like LEO TLE, propagated and searched for its next pass over
/// an equatorial site: the pass machinery finds an AOS strictly before its
/// LOS, with a max elevation above the requested minimum.
#[test]
fn predicts_a_leo_pass_above_an_equatorial_site() {
    let tle = Tle {
        catalog_number: 25338,
        classification: Classification::Unclassified,
        international_designator: "98030A".to_string(),
        epoch: Time::from_format(TimeScale::Utc, &JulianDate::new(2459936.0, 0.5)),
        mean_motion_dot: 0.00000012,
        mean_motion_dot_dot: 0.0,
        b_star: 0.0001,
        ephemeris_type: 0,
        element_set_number: 999,
        inclination_deg: 98.7,
        raan_deg: 30.0,
        eccentricity: 0.0011,
        argument_of_perigee_deg: 60.0,
        mean_anomaly_deg: 300.0,
        mean_motion_rev_per_day: 14.25,
        revolution_number_at_epoch: 12345,
    };
    let orbital_state = OrbitalState::init_from_tle(&tle, Ellipsoid::WGS72).unwrap();

    let site = Geodetic::new(5.0_f64.to_radians(), 50.0_f64.to_radians(), 0.0)
        .to_itrf_on(Ellipsoid::WGS84, tle.epoch)
        .unwrap();

    let options =
        PredictPassOptions { site_position: site, min_elevation: 20.0_f64.to_radians(), num_days_to_predict: 2.0 };
    let pass = orbkit::satellite::predict_next_pass(&options, &orbital_state, tle.epoch);

    assert!(!pass.is_never_visible);
    assert!(pass.aos.is_some());
    assert!(pass.los.is_some());
    let (aos, los) = (pass.aos.unwrap(), pass.los.unwrap());
    assert!(los.jd().to_f64() >= aos.jd().to_f64());
    assert!(pass.max_elevation >= options.min_elevation);
}

/// TAI-UTC on 1972-06-30, the day before the first whole leap second takes
/// effect, smears linearly from 10s to 11s across the UTC day.
#[test]
fn leap_second_day_smears_linearly() {
    assert_eq!(get_tai_minus_utc_seconds_in_utc_scale(41499.0), 11.0);
    assert_eq!(get_tai_minus_utc_seconds_in_utc_scale(41498.8), 10.8);
}

/// Geocentric -> geodetic on WGS84 recovers a known latitude/longitude/
/// height triple for a representative ground position.
#[test]
fn geocentric_to_geodetic_matches_a_known_position() {
    let time = Time::from_format(TimeScale::Utc, &DateTime::new(2022, 1, 1, 0, 0, 0, 0));
    let itrf = Itrf::new(time, Vec3::new(-2_801_428.2, 5_602_703.3, -2_645_094.1), None);
    let geodetic = itrf.to_geodetic();

    assert_relative_eq!(geodetic.longitude, 2.0344548660, epsilon = 1e-6);
    assert_relative_eq!(geodetic.latitude, -0.4018140250, epsilon = 1e-6);
    assert_relative_eq!(geodetic.height, 424_729.912, epsilon = 1e-2);
}
