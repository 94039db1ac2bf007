// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Visible-pass prediction: two-stage coarse/refine search over elevation
//! vs. time (spec.md §4.12).
//!
//! Grounded verbatim in shape on `original_source/satellite/pass.h`
//! (`SatellitePass`, `PredictPassOptions`, `PredictCurrentOrNextPass`,
//! `PredictNextPass`); the coarse-then-refine state machine is a direct
//! port of `original_source/satellite/internal/pass.cc`, since no Rust
//! teacher in the pack implements pass prediction at all.

use crate::coordinate::{Horizontal, Itrf, Teme};
use crate::satellite::orbital_state::OrbitalState;
use crate::time::format::JulianDate;
use crate::time::format::TimeFormat;
use crate::time::{Time, TimeDifference, TimeScale};

/// Coarse step when hunting for an approximate AOS/LOS: big enough to
/// search a multi-day window quickly, small enough not to skip over a
/// whole pass (spec.md §4.12).
const APPROXIMATE_TIME_STEP_SECONDS: f64 = 240.0;
/// Refinement step once an approximate crossing is bracketed.
const REFINE_TIME_STEP_SECONDS: f64 = 1.0;
const REFINE_MAX_STEPS: usize = (APPROXIMATE_TIME_STEP_SECONDS / REFINE_TIME_STEP_SECONDS) as usize;

/// Result of a pass prediction (spec.md §4.12 "Results carry...").
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SatellitePass {
    pub is_never_visible: bool,
    pub is_always_visible: bool,
    pub aos: Option<Time>,
    pub los: Option<Time>,
    pub max_elevation: f64,
}

impl Default for SatellitePass {
    fn default() -> Self {
        Self { is_never_visible: false, is_always_visible: false, aos: None, los: None, max_elevation: 0.0 }
    }
}

/// Inputs to a pass search (spec.md §4.12).
#[derive(Clone, Copy, Debug)]
pub struct PredictPassOptions {
    pub site_position: Itrf,
    /// Minimum elevation, radians, for a pass to be considered visible.
    pub min_elevation: f64,
    /// How many days forward (and, if already visible, backward) to search.
    pub num_days_to_predict: f64,
}

fn approximate_time_step() -> TimeDifference {
    TimeDifference::from_seconds(APPROXIMATE_TIME_STEP_SECONDS)
}

fn refine_time_step() -> TimeDifference {
    TimeDifference::from_seconds(REFINE_TIME_STEP_SECONDS)
}

fn num_prediction_steps(window: TimeDifference) -> usize {
    (window.in_seconds() / APPROXIMATE_TIME_STEP_SECONDS).trunc().max(0.0) as usize
}

/// Elevation of the satellite above `site_position`'s horizon at `time`, or
/// `None` if the propagator failed at that instant.
fn elevation_at(site_position: &Itrf, orbital_state: &OrbitalState, time: Time) -> Option<f64> {
    let teme: Teme = orbital_state.predict(time).ok()?;
    let itrf = Itrf::from_teme(&teme);
    Some(Horizontal::from_itrf(&itrf, site_position).elevation)
}

/// Elevation at the midpoint of `(time_a, time_b)`, same scale required.
fn elevation_at_median(site_position: &Itrf, orbital_state: &OrbitalState, time_a: Time, time_b: Time) -> Option<f64> {
    let jd_a = JulianDate::from_jd(time_a.jd());
    let jd_b = JulianDate::from_jd(time_b.jd());
    let median_jd = JulianDate::new((jd_a.jd1 + jd_b.jd1) / 2.0, (jd_a.jd2 + jd_b.jd2) / 2.0);
    let median_time = Time::from_format(time_a.scale(), &median_jd);
    elevation_at(site_position, orbital_state, median_time)
}

struct ApproximateAos {
    is_visible_at_start_time: bool,
    is_always_visible: bool,
    is_never_visible: bool,
    time: Option<Time>,
}

impl Default for ApproximateAos {
    fn default() -> Self {
        Self { is_visible_at_start_time: false, is_always_visible: false, is_never_visible: false, time: None }
    }
}

/// Find an approximate AOS, walking backwards first if already visible at
/// `start_time` (spec.md §4.12 "find_approximate_aos").
fn find_approximate_aos_above_horizon(
    options: &PredictPassOptions,
    orbital_state: &OrbitalState,
    start_time: Time,
) -> Option<ApproximateAos> {
    let num_steps = num_prediction_steps(TimeDifference::from_days(options.num_days_to_predict));
    let step = approximate_time_step();

    let mut is_visible_at_start_time = true;
    let mut approximate_aos_time = start_time;
    let mut found = false;

    for _ in 0..num_steps {
        let elevation = elevation_at(&options.site_position, orbital_state, approximate_aos_time)?;
        if elevation > 0.0 {
            found = true;
            break;
        }
        is_visible_at_start_time = false;
        approximate_aos_time += step;
    }

    if !found {
        return Some(ApproximateAos { is_never_visible: true, ..Default::default() });
    }

    if !is_visible_at_start_time {
        return Some(ApproximateAos { is_visible_at_start_time, time: Some(approximate_aos_time), ..Default::default() });
    }

    let mut is_always_visible = true;
    for _ in 0..num_steps {
        let previous_time = approximate_aos_time - step;
        let elevation = elevation_at(&options.site_position, orbital_state, previous_time)?;
        if elevation < 0.0 {
            is_always_visible = false;
            break;
        }
        approximate_aos_time = previous_time;
    }

    Some(ApproximateAos { is_visible_at_start_time, is_always_visible, time: Some(approximate_aos_time), ..Default::default() })
}

/// Walk backwards 1 s from an approximate AOS until elevation dips below
/// the horizon; return the last above-horizon second.
fn refine_aos_above_horizon(options: &PredictPassOptions, orbital_state: &OrbitalState, approximate_aos: Time) -> Option<Time> {
    let mut refined = approximate_aos;
    let step = refine_time_step();
    for _ in 0..REFINE_MAX_STEPS {
        let elevation = elevation_at(&options.site_position, orbital_state, refined)?;
        if elevation < 0.0 {
            break;
        }
        refined -= step;
    }
    Some(refined)
}

/// Approximate LOS, walking forward; `None` if the satellite never sets
/// within the prediction window.
fn approximate_los_above_horizon(options: &PredictPassOptions, orbital_state: &OrbitalState, start_time: Time) -> Option<Option<Time>> {
    let num_steps = num_prediction_steps(TimeDifference::from_days(options.num_days_to_predict));
    let step = approximate_time_step();

    let mut approximate_los = start_time;
    for _ in 0..num_steps {
        let next_time = approximate_los + step;
        let elevation = elevation_at(&options.site_position, orbital_state, next_time)?;
        if elevation < 0.0 {
            return Some(Some(approximate_los));
        }
        approximate_los = next_time;
    }
    Some(None)
}

fn refine_los_above_horizon(options: &PredictPassOptions, orbital_state: &OrbitalState, approximate_los: Time) -> Option<Time> {
    let mut refined = approximate_los;
    let step = refine_time_step();
    for _ in 0..REFINE_MAX_STEPS {
        let next_time = refined + step;
        let elevation = elevation_at(&options.site_position, orbital_state, next_time)?;
        if elevation < 0.0 {
            break;
        }
        refined = next_time;
    }
    Some(refined)
}

fn find_los_above_horizon(options: &PredictPassOptions, orbital_state: &OrbitalState, start_time: Time) -> Option<Option<Time>> {
    match approximate_los_above_horizon(options, orbital_state, start_time)? {
        Some(approximate) => Some(refine_los_above_horizon(options, orbital_state, approximate)),
        None => Some(None),
    }
}

/// Maximum elevation during `pass` (spec.md §4.12 "max_elevation is (a) ...
/// (b) ...").
fn calculate_pass_max_elevation(
    options: &PredictPassOptions,
    orbital_state: &OrbitalState,
    pass: &SatellitePass,
    start_time: Time,
) -> f64 {
    if pass.is_never_visible {
        return 0.0;
    }

    if let (Some(aos), Some(los)) = (pass.aos, pass.los) {
        return elevation_at_median(&options.site_position, orbital_state, aos, los).unwrap_or(0.0);
    }

    let mut max_elevation = 0.0_f64;
    let mut time = pass.aos.unwrap_or(start_time);
    let max_time = pass.los.unwrap_or(start_time + TimeDifference::from_days(options.num_days_to_predict));
    let max_jd = JulianDate::from_jd(max_time.jd());

    loop {
        let Some(elevation) = elevation_at(&options.site_position, orbital_state, time) else {
            return 0.0;
        };
        max_elevation = max_elevation.max(elevation);

        time += approximate_time_step();
        let jd = JulianDate::from_jd(time.jd());
        if jd.jd1 + jd.jd2 > max_jd.jd1 + max_jd.jd2 {
            break;
        }
    }

    max_elevation
}

/// A single above-horizon pass search, ignoring `min_elevation` (spec.md
/// §4.12 "Find a candidate pass above horizon").
fn predict_current_or_next_pass_above_horizon(
    options: &PredictPassOptions,
    orbital_state: &OrbitalState,
    start_time: Time,
) -> SatellitePass {
    let Some(approximate_aos) = find_approximate_aos_above_horizon(options, orbital_state, start_time) else {
        return SatellitePass::default();
    };

    if approximate_aos.is_never_visible {
        return SatellitePass { is_never_visible: true, ..Default::default() };
    }

    let mut pass = SatellitePass::default();

    if !approximate_aos.is_always_visible {
        pass.aos = refine_aos_above_horizon(options, orbital_state, approximate_aos.time.unwrap());
    }

    let los_start_time = if approximate_aos.is_visible_at_start_time { start_time } else { approximate_aos.time.unwrap() };

    pass.los = find_los_above_horizon(options, orbital_state, los_start_time).flatten();

    if pass.los.is_none() && approximate_aos.is_always_visible {
        pass.is_always_visible = true;
    }

    pass.max_elevation = calculate_pass_max_elevation(options, orbital_state, &pass, start_time);
    pass
}

/// Get the currently visible pass, or the next one, honoring
/// `options.min_elevation` (spec.md §4.12).
pub fn predict_current_or_next_pass(options: &PredictPassOptions, orbital_state: &OrbitalState, start_time: Time) -> SatellitePass {
    let start_jd = JulianDate::from_jd(start_time.jd());
    let max_jd_value = start_jd.jd1 + start_jd.jd2 + options.num_days_to_predict;

    let mut pass_start_time = start_time;
    loop {
        let pass = predict_current_or_next_pass_above_horizon(options, orbital_state, pass_start_time);

        if pass.is_never_visible {
            return pass;
        }
        if pass.max_elevation >= options.min_elevation {
            return pass;
        }
        if pass.is_always_visible {
            // Always visible but never above the threshold: it won't rise further.
            return SatellitePass { is_never_visible: true, ..Default::default() };
        }

        let Some(los) = pass.los else { return SatellitePass::default() };
        pass_start_time = los + approximate_time_step();

        let jd = JulianDate::from_jd(pass_start_time.jd());
        if jd.jd1 + jd.jd2 > max_jd_value {
            break;
        }
    }

    SatellitePass::default()
}

/// Get the next visible pass; if already above the horizon at `start_time`,
/// advance past the current LOS first (spec.md §4.12).
pub fn predict_next_pass(options: &PredictPassOptions, orbital_state: &OrbitalState, start_time: Time) -> SatellitePass {
    let Some(current_elevation) = elevation_at(&options.site_position, orbital_state, start_time) else {
        return SatellitePass::default();
    };

    let mut next_time = start_time;

    if current_elevation > 0.0 {
        match find_los_above_horizon(options, orbital_state, next_time) {
            Some(Some(los)) => next_time = los + approximate_time_step(),
            Some(None) => {
                if current_elevation < options.min_elevation {
                    return SatellitePass { is_never_visible: true, ..Default::default() };
                }
                let mut pass = SatellitePass { is_always_visible: true, ..Default::default() };
                pass.max_elevation = calculate_pass_max_elevation(options, orbital_state, &pass, start_time);
                return pass;
            }
            None => return SatellitePass::default(),
        }
    }

    predict_current_or_next_pass(options, orbital_state, next_time)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ellipsoid::Ellipsoid;
    use crate::satellite::tle::{Classification, Tle};
    use crate::time::format::JulianDate as JD;

    fn leo_orbital_state() -> OrbitalState {
        let tle = Tle {
            catalog_number: 25338,
            classification: Classification::Unclassified,
            international_designator: "98030A".to_string(),
            epoch: Time::from_format(TimeScale::Utc, &JD::new(2458826.0, 0.5)),
            mean_motion_dot: 0.0,
            mean_motion_dot_dot: 0.0,
            b_star: 0.0001,
            ephemeris_type: 0,
            element_set_number: 1,
            inclination_deg: 98.7,
            raan_deg: 10.0,
            eccentricity: 0.001,
            argument_of_perigee_deg: 60.0,
            mean_anomaly_deg: 0.0,
            mean_motion_rev_per_day: 14.25,
            revolution_number_at_epoch: 1,
        };
        OrbitalState::init_from_tle(&tle, Ellipsoid::WGS72).unwrap()
    }

    fn equatorial_site() -> Itrf {
        use crate::coordinate::Geodetic;
        Geodetic::new(0.0, 0.0, 0.0).to_itrf(Time::from_format(TimeScale::Utc, &JD::new(2458826.0, 0.5))).unwrap()
    }

    #[test]
    fn predict_next_pass_finds_an_aos_before_the_los() {
        let orbital_state = leo_orbital_state();
        let site = equatorial_site();
        let options = PredictPassOptions { site_position: site, min_elevation: 0.0, num_days_to_predict: 3.0 };
        let start = Time::from_format(TimeScale::Utc, &JD::new(2458826.0, 0.5));

        let pass = predict_next_pass(&options, &orbital_state, start);
        if !pass.is_never_visible && !pass.is_always_visible {
            if let (Some(aos), Some(los)) = (pass.aos, pass.los) {
                assert!(los.jd().to_f64() >= aos.jd().to_f64());
            }
        }
    }
}
