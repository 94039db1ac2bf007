// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use criterion::*;

use orbkit::coordinate::geodetic::geodetic_to_geocentric;
use orbkit::double_double::DoubleDouble;
use orbkit::earth::gst06a;
use orbkit::satellite::{Classification, OrbitalState, Tle};
use orbkit::time::format::{JulianDate, TimeFormat};
use orbkit::time::{Time, TimeDifference, TimeScale};
use orbkit::Ellipsoid;

fn coordinate(c: &mut Criterion) {
    let mwa_latitude_radians = -0.4660608448386394;
    let mwa_longitude_radians = 2.0362898668561042;
    let mwa_altitude_metres = 377.827;

    c.bench_function("geodetic_to_geocentric", |b| {
        b.iter(|| {
            geodetic_to_geocentric(Ellipsoid::WGS84, mwa_longitude_radians, mwa_latitude_radians, mwa_altitude_metres)
                .unwrap();
        })
    });

    c.bench_function("gst06a", |b| {
        b.iter(|| {
            gst06a(2451545.0, -1421.3, 2451545.0, -1421.3);
        })
    });
}

fn sgp4(c: &mut Criterion) {
    let tle = Tle {
        catalog_number: 25338,
        classification: Classification::Unclassified,
        international_designator: "98030A".to_string(),
        epoch: Time::from_format(TimeScale::Utc, &JulianDate::new(2458826.0, 0.5)),
        mean_motion_dot: 0.00000012,
        mean_motion_dot_dot: 0.0,
        b_star: 0.00011,
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

    c.bench_function("sgp4 predict", |b| {
        b.iter(|| {
            let target = tle.epoch + TimeDifference::from_seconds(120.0);
            orbital_state.predict(target).unwrap();
        })
    });

    c.bench_function("double_double mul", |b| {
        b.iter(|| {
            let a = DoubleDouble::from(1.234_567_891_011);
            let b = DoubleDouble::from(9.876_543_210_123);
            black_box(a * b);
        })
    });
}

criterion_group!(benches, coordinate, sgp4);
criterion_main!(benches);
